use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::Caller;
use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::Employee;
use crate::routes::lenient_json;
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Employee,
}

pub async fn login(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, AppError> {
    let req: LoginRequest = lenient_json(&body);
    let email = req.email.unwrap_or_default().trim().to_lowercase();
    let password = req.password.unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required.".to_string(),
        ));
    }

    let Some(employee) = db::employees::find_by_email(&state.pool, &email).await? else {
        return Err(AppError::Unauthorized("Invalid credentials.".to_string()));
    };

    let valid =
        password::verify(&password, &employee.password_hash).map_err(AppError::Internal)?;
    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials.".to_string()));
    }

    let claims = Claims::new(employee.id, &employee.role, state.config.token_ttl_secs);
    let token = encode_token(&claims, &state.config.secret_key).map_err(AppError::Internal)?;

    Ok(Json(LoginResponse {
        token,
        user: employee,
    }))
}

pub async fn me(caller: Caller) -> Json<Employee> {
    Json(caller.employee)
}
