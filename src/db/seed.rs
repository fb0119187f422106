use sqlx::SqlitePool;

use crate::auth::password;
use crate::db;

/// Populate demo employees and tasks on first startup. A no-op whenever any
/// employee already exists, so repeated runs are safe.
pub async fn run(pool: &SqlitePool) -> Result<(), String> {
    let count = db::employees::count_all(pool)
        .await
        .map_err(|e| format!("Seed count failed: {e}"))?;
    if count > 0 {
        return Ok(());
    }

    let demo = [
        (
            "Avery Diaz",
            "Engineering Manager",
            "avery@example.com",
            "admin",
            "admin123",
        ),
        (
            "Morgan Lee",
            "Product Designer",
            "morgan@example.com",
            "employee",
            "design123",
        ),
        (
            "Riley Patel",
            "Backend Engineer",
            "riley@example.com",
            "employee",
            "build123",
        ),
    ];

    let mut ids = Vec::with_capacity(demo.len());
    for (name, title, email, role, pw) in demo {
        let pw_hash = password::hash(pw)?;
        let employee = db::employees::create(pool, name, title, email, role, &pw_hash)
            .await
            .map_err(|e| format!("Seed employee insert failed: {e}"))?;
        ids.push(employee.id);
    }

    let tasks = [
        (
            "Implement authentication",
            "Add login flow and secure the API endpoints.",
            "in_progress",
            ids[0],
        ),
        (
            "Refresh dashboard visuals",
            "Update the UI to match the new design system.",
            "pending",
            ids[1],
        ),
        (
            "Optimize task queries",
            "Reduce dashboard latency by improving the task queries.",
            "completed",
            ids[2],
        ),
    ];

    for (title, description, status, employee_id) in tasks {
        db::tasks::create(pool, title, Some(description), status, Some(employee_id), None)
            .await
            .map_err(|e| format!("Seed task insert failed: {e}"))?;
    }

    tracing::info!("Seeded {} demo employees", ids.len());
    Ok(())
}
