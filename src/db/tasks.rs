use chrono::{NaiveDate, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{Task, TaskWithOwner};

const SELECT_WITH_OWNER: &str = "SELECT t.*, \
     e.id AS owner_id, e.name AS owner_name, e.title AS owner_title, \
     e.email AS owner_email, e.role AS owner_role, e.password_hash AS owner_password_hash \
     FROM tasks t LEFT JOIN employees e ON e.id = t.employee_id";

#[derive(Debug, Default)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub employee_id: Option<i64>,
}

pub async fn list(pool: &SqlitePool, filter: &TaskFilter) -> Result<Vec<TaskWithOwner>, sqlx::Error> {
    let mut query = QueryBuilder::<Sqlite>::new(SELECT_WITH_OWNER);
    query.push(" WHERE 1 = 1");

    if let Some(status) = &filter.status {
        query.push(" AND t.status = ").push_bind(status.clone());
    }
    if let Some(employee_id) = filter.employee_id {
        query.push(" AND t.employee_id = ").push_bind(employee_id);
    }

    query.push(" ORDER BY t.created_at DESC, t.id DESC");

    query.build_query_as::<TaskWithOwner>().fetch_all(pool).await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_with_owner(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<TaskWithOwner>, sqlx::Error> {
    sqlx::query_as::<_, TaskWithOwner>(&format!("{SELECT_WITH_OWNER} WHERE t.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &SqlitePool,
    title: &str,
    description: Option<&str>,
    status: &str,
    employee_id: Option<i64>,
    due_date: Option<NaiveDate>,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (title, description, status, employee_id, due_date, created_at)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(title)
    .bind(description)
    .bind(status)
    .bind(employee_id)
    .bind(due_date)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Persist the mutable fields of a task. `created_at` is set once at insert
/// and never written again.
pub async fn update(pool: &SqlitePool, task: &Task) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "UPDATE tasks SET title = $2, description = $3, status = $4, employee_id = $5, due_date = $6
         WHERE id = $1 RETURNING *",
    )
    .bind(task.id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(&task.status)
    .bind(task.employee_id)
    .bind(task.due_date)
    .fetch_one(pool)
    .await
}

pub async fn count_all(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn count_completed(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE status = 'completed'")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
