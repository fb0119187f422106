use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::models::Employee;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub employee_id: Option<i64>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// A task with its owning employee joined in, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithOwner {
    #[serde(flatten)]
    pub task: Task,
    pub employee: Option<Employee>,
}

impl<'r> FromRow<'r, SqliteRow> for TaskWithOwner {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let task = Task::from_row(row)?;
        let employee = match row.try_get::<Option<i64>, _>("owner_id")? {
            Some(id) => Some(Employee {
                id,
                name: row.try_get("owner_name")?,
                title: row.try_get("owner_title")?,
                email: row.try_get("owner_email")?,
                role: row.try_get("owner_role")?,
                password_hash: row.try_get("owner_password_hash")?,
            }),
            None => None,
        };
        Ok(TaskWithOwner { task, employee })
    }
}
