//! Pest and disease alert models

use serde::{Deserialize, Serialize};

/// Alert severity.
///
/// Older tables used a Small/Medium/High scale; "small" is read as `Low`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "small", alias = "Small", alias = "Low")]
    Low,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "High")]
    High,
    #[serde(alias = "Critical")]
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

/// A pest or disease alert for a zone band and season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PestAlert {
    pub pest: String,
    pub severity: Severity,
    pub affected_crops: Vec<String>,
    /// Description and symptoms
    pub description: String,
    pub organic_remedies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_remedies: Option<Vec<String>>,
    pub prevention: Vec<String>,
    /// Regionally escalated pest
    #[serde(default)]
    pub priority: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
}

impl PestAlert {
    pub fn affects(&self, crop: &str) -> bool {
        self.affected_crops
            .iter()
            .any(|c| c.eq_ignore_ascii_case(crop.trim()))
    }
}
