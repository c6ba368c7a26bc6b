use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::SharedState;

/// Identity resolved from a verified bearer token.
///
/// Taking `AuthUser` as a handler argument is what makes a route
/// authenticated; role checks happen afterwards through [`AuthUser::require_role`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

impl AuthUser {
    pub fn require_role(&self, allowed: &[&str]) -> Result<(), AppError> {
        if allowed.contains(&self.role.as_str()) {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "This action requires role: {}",
                allowed.join(" or ")
            )))
        }
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let claims = state
            .tokens
            .verify(token.trim())
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::roles::{EMPLOYEE, EMPLOYER};

    fn user(role: &str) -> AuthUser {
        AuthUser {
            user_id: Uuid::now_v7(),
            email: "someone@example.com".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn require_role_accepts_listed_role() {
        assert!(user(EMPLOYER).require_role(&[EMPLOYER]).is_ok());
        assert!(user(EMPLOYEE).require_role(&[EMPLOYER, EMPLOYEE]).is_ok());
    }

    #[test]
    fn require_role_rejects_other_roles() {
        let err = user(EMPLOYEE).require_role(&[EMPLOYER]).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let err = user("Employer").require_role(&[EMPLOYER]).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
