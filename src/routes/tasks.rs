use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::auth::extractor::Caller;
use crate::db;
use crate::db::tasks::TaskFilter;
use crate::error::AppError;
use crate::models::TaskWithOwner;
use crate::routes::lenient_json;
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListTasksQuery {
    pub status: Option<String>,
    pub employee_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub employee_id: Option<i64>,
    pub due_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    pub status: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub employee_id: Option<Option<i64>>,
    pub due_date: Option<String>,
}

/// Keeps an explicit `"employee_id": null` (`Some(None)`) distinguishable
/// from the field being absent (`None`).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

pub async fn list(
    caller: Caller,
    State(state): State<SharedState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskWithOwner>>, AppError> {
    let mut filter = TaskFilter {
        status: query.status.filter(|s| !s.is_empty()),
        employee_id: query.employee_id.as_deref().and_then(|s| s.parse().ok()),
    };

    // Non-admins only ever see their own tasks, whatever filter they asked for.
    if !caller.is_admin() {
        filter.employee_id = Some(caller.id());
    }

    let tasks = db::tasks::list(&state.pool, &filter).await?;
    Ok(Json(tasks))
}

pub async fn create(
    caller: Caller,
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<(StatusCode, Json<TaskWithOwner>), AppError> {
    let req: CreateTaskRequest = lenient_json(&body);

    let title = req.title.unwrap_or_default();
    if title.is_empty() {
        return Err(AppError::BadRequest("Title is required.".to_string()));
    }

    let status = req.status.unwrap_or_else(|| "pending".to_string());
    let due_date = req.due_date.as_deref().and_then(parse_date);

    let employee_id = if caller.is_admin() {
        if let Some(id) = req.employee_id {
            if !db::employees::exists(&state.pool, id).await? {
                return Err(AppError::NotFound("Employee not found.".to_string()));
            }
        }
        req.employee_id
    } else {
        // Non-admins always own what they create.
        Some(caller.id())
    };

    let task = db::tasks::create(
        &state.pool,
        &title,
        req.description.as_deref(),
        &status,
        employee_id,
        due_date,
    )
    .await?;

    let task = db::tasks::find_with_owner(&state.pool, task.id)
        .await?
        .ok_or_else(|| AppError::Internal("Created task missing".to_string()))?;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update(
    caller: Caller,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<TaskWithOwner>, AppError> {
    let mut task = db::tasks::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found.".to_string()))?;

    if !caller.is_admin() && task.employee_id != Some(caller.id()) {
        return Err(AppError::Forbidden("Forbidden".to_string()));
    }

    let req: UpdateTaskRequest = lenient_json(&body);

    // Reassignment is admin-only; a non-admin's employee_id is silently
    // ignored. Explicit null unassigns.
    if caller.is_admin() {
        if let Some(new_owner) = req.employee_id {
            if let Some(target) = new_owner {
                if !db::employees::exists(&state.pool, target).await? {
                    return Err(AppError::NotFound("Employee not found.".to_string()));
                }
            }
            task.employee_id = new_owner;
        }
    }

    if let Some(status) = req.status.filter(|s| !s.is_empty()) {
        task.status = status;
    }
    // An explicit empty string is a real value for description.
    if let Some(description) = req.description {
        task.description = Some(description);
    }
    // An unparsable due_date leaves the stored value untouched.
    if let Some(due_date) = req.due_date.as_deref().and_then(parse_date) {
        task.due_date = Some(due_date);
    }

    let task = db::tasks::update(&state.pool, &task).await?;
    let task = db::tasks::find_with_owner(&state.pool, task.id)
        .await?
        .ok_or_else(|| AppError::Internal("Updated task missing".to_string()))?;

    Ok(Json(task))
}

/// Parse an ISO calendar date, also accepting the date part of a full
/// datetime. Unparsable input counts as absent.
fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .or_else(|| value.parse::<NaiveDateTime>().map(|dt| dt.date()).ok())
}
