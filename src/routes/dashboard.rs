use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::extractor::Caller;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub pending_tasks: i64,
    pub completion_rate: f64,
    pub employee_count: i64,
}

pub async fn summary(
    caller: Caller,
    State(state): State<SharedState>,
) -> Result<Json<DashboardSummary>, AppError> {
    caller.require_admin()?;

    let total_tasks = db::tasks::count_all(&state.pool).await?;
    let completed_tasks = db::tasks::count_completed(&state.pool).await?;
    // Pending means anything that is not completed, not just "pending".
    let pending_tasks = total_tasks - completed_tasks;
    let employee_count = db::employees::count_all(&state.pool).await?;

    let completion_rate = if total_tasks > 0 {
        let rate = completed_tasks as f64 / total_tasks as f64 * 100.0;
        (rate * 100.0).round() / 100.0
    } else {
        0.0
    };

    Ok(Json(DashboardSummary {
        total_tasks,
        completed_tasks,
        pending_tasks,
        completion_rate,
        employee_count,
    }))
}
