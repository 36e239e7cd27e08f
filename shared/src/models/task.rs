//! Garden calendar task models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A gardening task shown on the calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarTask {
    pub title: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Planting,
    Harvesting,
    Maintenance,
    Feeding,
    Monitoring,
    Planning,
    Preparation,
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskType::Planting => write!(f, "Planting"),
            TaskType::Harvesting => write!(f, "Harvesting"),
            TaskType::Maintenance => write!(f, "Maintenance"),
            TaskType::Feeding => write!(f, "Feeding"),
            TaskType::Monitoring => write!(f, "Monitoring"),
            TaskType::Planning => write!(f, "Planning"),
            TaskType::Preparation => write!(f, "Preparation"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "Low"),
            TaskPriority::Medium => write!(f, "Medium"),
            TaskPriority::High => write!(f, "High"),
        }
    }
}
