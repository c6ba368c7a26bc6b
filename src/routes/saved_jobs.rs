use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::{is_unique_violation, violated_foreign_key, AppError};
use crate::extract::JsonBody;
use crate::models::{SavedJob, SavedJobWithJob};
use crate::state::SharedState;

const ALREADY_SAVED: &str = "Job already saved";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJob {
    #[serde(default)]
    pub job_id: String,
}

#[derive(Serialize)]
pub struct UnsaveResponse {
    pub deleted: bool,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<SavedJobWithJob>>, AppError> {
    let saved = db::saved_jobs::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(saved))
}

pub async fn save(
    auth: AuthUser,
    State(state): State<SharedState>,
    JsonBody(req): JsonBody<SaveJob>,
) -> Result<(StatusCode, Json<SavedJob>), AppError> {
    let job_id = req.job_id.trim();
    if job_id.is_empty() {
        return Err(AppError::BadRequest("jobId is required".to_string()));
    }

    if db::saved_jobs::find(&state.pool, auth.user_id, job_id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(ALREADY_SAVED.to_string()));
    }

    // A concurrent save can still win between the check and the insert;
    // the primary key on (user_id, job_id) catches it.
    let saved = db::saved_jobs::create(&state.pool, auth.user_id, job_id)
        .await
        .map_err(save_error)?;

    tracing::debug!(user_id = %auth.user_id, job_id = %saved.job_id, "job saved");

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Removing nothing is not an error; `deleted` reports what happened.
pub async fn unsave(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(job_id): Path<String>,
) -> Result<Json<UnsaveResponse>, AppError> {
    let deleted = db::saved_jobs::delete(&state.pool, auth.user_id, job_id.trim()).await?;
    Ok(Json(UnsaveResponse { deleted }))
}

fn save_error(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        return AppError::Conflict(ALREADY_SAVED.to_string());
    }
    match violated_foreign_key(&e) {
        Some("saved_jobs_job_fk") => return AppError::NotFound("Job not found".to_string()),
        // Account removed after the token was issued.
        Some("saved_jobs_user_fk") => return AppError::NotFound("User not found".to_string()),
        _ => {}
    }
    AppError::Database(e)
}
