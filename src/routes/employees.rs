use axum::extract::State;
use axum::Json;

use crate::auth::extractor::Caller;
use crate::db;
use crate::error::AppError;
use crate::models::Employee;
use crate::state::SharedState;

pub async fn list(
    caller: Caller,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Employee>>, AppError> {
    caller.require_admin()?;

    let employees = db::employees::list_all(&state.pool).await?;
    Ok(Json(employees))
}
