//! Calendar task service

use chrono::Month;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use shared::{
    month_from_index, planting_tasks, tasks_for_month, validate_month_index, CalendarTask,
    PlantCatalog,
};

#[derive(Clone)]
pub struct CalendarService {
    catalog: Arc<PlantCatalog>,
}

impl CalendarService {
    pub fn new(catalog: Arc<PlantCatalog>) -> Self {
        Self { catalog }
    }

    /// Canonical tasks for a zero-based month index
    pub fn tasks(&self, month_index: u32) -> AppResult<Vec<CalendarTask>> {
        Ok(tasks_for_month(Self::month(month_index)?))
    }

    /// Generated planting tasks for a zero-based month index
    pub fn planting(&self, month_index: u32) -> AppResult<Vec<CalendarTask>> {
        let month = Self::month(month_index)?;
        let tasks = planting_tasks(&self.catalog, month);
        tracing::debug!("Generated {} planting tasks for {:?}", tasks.len(), month);
        Ok(tasks)
    }

    fn month(month_index: u32) -> AppResult<Month> {
        validate_month_index(month_index).map_err(|msg| AppError::validation("month", msg))?;
        month_from_index(month_index)
            .ok_or_else(|| AppError::Internal(format!("No month for index {}", month_index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CalendarService {
        CalendarService::new(Arc::new(PlantCatalog::builtin().unwrap()))
    }

    #[test]
    fn test_tasks() {
        let tasks = service().tasks(1).unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title, "Start indoor seeds");
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(matches!(service().tasks(12), Err(AppError::Validation { .. })));
        assert!(matches!(service().planting(40), Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_planting() {
        let tasks = service().planting(9).unwrap();
        assert!(tasks.iter().any(|t| t.title == "Plant Garlic"));
    }
}
