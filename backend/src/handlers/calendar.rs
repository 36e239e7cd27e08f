//! HTTP handlers for calendar endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::services::CalendarService;
use crate::AppState;
use shared::CalendarTask;

/// Canonical tasks for a zero-based month (0 = January)
pub async fn get_month_tasks(
    State(state): State<AppState>,
    Path(month): Path<u32>,
) -> AppResult<Json<Vec<CalendarTask>>> {
    let service = CalendarService::new(state.catalog);
    let tasks = service.tasks(month)?;
    Ok(Json(tasks))
}

/// Planting tasks generated from the catalog for a zero-based month
pub async fn get_planting_tasks(
    State(state): State<AppState>,
    Path(month): Path<u32>,
) -> AppResult<Json<Vec<CalendarTask>>> {
    let service = CalendarService::new(state.catalog);
    let tasks = service.planting(month)?;
    Ok(Json(tasks))
}
