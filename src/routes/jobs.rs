use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::roles;
use crate::db;
use crate::error::AppError;
use crate::extract::JsonBody;
use crate::models::Job;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    #[serde(default)]
    pub title: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Job>>, AppError> {
    let limit = params.limit.unwrap_or(50).clamp(1, 200);
    let offset = params.offset.unwrap_or(0).max(0);
    let jobs = db::jobs::list(&state.pool, limit, offset).await?;
    Ok(Json(jobs))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job = db::jobs::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    Ok(Json(job))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    JsonBody(req): JsonBody<CreateJob>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    auth.require_role(&[roles::EMPLOYER])?;

    let title = req.title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    let job = db::jobs::create(
        &state.pool,
        &Uuid::now_v7().to_string(),
        title,
        req.company_name.as_deref(),
        req.location.as_deref(),
        req.description.as_deref(),
        auth.user_id,
    )
    .await?;

    tracing::info!(job_id = %job.id, posted_by = %auth.user_id, "job posted");

    Ok((StatusCode::CREATED, Json(job)))
}
