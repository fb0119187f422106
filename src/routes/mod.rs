pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod tasks;

use axum::body::Bytes;
use axum::routing::{get, post, put};
use axum::Router;
use serde::de::DeserializeOwned;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        // Employees
        .route("/employees", get(employees::list))
        // Tasks
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route("/tasks/{id}", put(tasks::update))
        // Dashboard
        .route("/api/dashboard", get(dashboard::summary))
}

/// Deserialize a JSON body, treating malformed or empty payloads as the
/// default value. Missing required fields then surface as field-level
/// validation errors rather than a parse failure.
pub(crate) fn lenient_json<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}
