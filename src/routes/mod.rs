pub mod applications;
pub mod auth;
pub mod jobs;
pub mod saved_jobs;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::me))
        // Saved jobs
        .route(
            "/api/v1/saved-jobs",
            get(saved_jobs::list).post(saved_jobs::save),
        )
        .route("/api/v1/saved-jobs/{job_id}", delete(saved_jobs::unsave))
        // Jobs
        .route("/api/v1/jobs", get(jobs::list).post(jobs::create))
        .route("/api/v1/jobs/{id}", get(jobs::get))
        .route(
            "/api/v1/jobs/{id}/applications",
            post(applications::apply),
        )
        // Applications
        .route("/api/v1/applications", get(applications::list_mine))
}
