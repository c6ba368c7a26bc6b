use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::roles;
use crate::db;
use crate::error::{is_unique_violation, violated_foreign_key, AppError};
use crate::extract::JsonBody;
use crate::models::Application;
use crate::state::SharedState;

const ALREADY_APPLIED: &str = "You have already applied to this job";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub cover_letter: Option<String>,
}

pub async fn apply(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(job_id): Path<String>,
    JsonBody(req): JsonBody<ApplyRequest>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    auth.require_role(&[roles::EMPLOYEE])?;

    if db::jobs::find_by_id(&state.pool, &job_id).await?.is_none() {
        return Err(AppError::NotFound("Job not found".to_string()));
    }

    if db::applications::find(&state.pool, &job_id, auth.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(ALREADY_APPLIED.to_string()));
    }

    let application = db::applications::create(
        &state.pool,
        Uuid::now_v7(),
        &job_id,
        auth.user_id,
        req.cover_letter.as_deref(),
    )
    .await
    .map_err(apply_error)?;

    tracing::info!(
        application_id = %application.id,
        job_id = %application.job_id,
        user_id = %auth.user_id,
        "application submitted"
    );

    Ok((StatusCode::CREATED, Json(application)))
}

pub async fn list_mine(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Application>>, AppError> {
    auth.require_role(&[roles::EMPLOYEE])?;
    let applications = db::applications::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(applications))
}

fn apply_error(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        return AppError::Conflict(ALREADY_APPLIED.to_string());
    }
    match violated_foreign_key(&e) {
        Some("applications_job_fk") => return AppError::NotFound("Job not found".to_string()),
        Some("applications_user_fk") => return AppError::NotFound("User not found".to_string()),
        _ => {}
    }
    AppError::Database(e)
}
