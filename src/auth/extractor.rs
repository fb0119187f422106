use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt;
use crate::db;
use crate::error::AppError;
use crate::models::Employee;
use crate::state::SharedState;

/// The employee identity resolved from a request's bearer token.
///
/// Resolution fails closed: a validly signed token whose employee no longer
/// exists in the store is rejected, and the role embedded in the token is
/// discarded in favor of the stored row.
#[derive(Debug, Clone)]
pub struct Caller {
    pub employee: Employee,
}

impl Caller {
    pub fn id(&self) -> i64 {
        self.employee.id
    }

    pub fn is_admin(&self) -> bool {
        self.employee.is_admin()
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Forbidden".to_string()))
        }
    }
}

impl FromRequestParts<SharedState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Unauthorized".to_string()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

        let claims = jwt::decode_token(token, &state.config.secret_key)
            .map_err(|_| AppError::Unauthorized("Unauthorized".to_string()))?;

        let employee = db::employees::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

        Ok(Caller { employee })
    }
}
