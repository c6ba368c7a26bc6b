use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Job;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJob {
    pub user_id: Uuid,
    pub job_id: String,
    pub created_at: DateTime<Utc>,
}

/// A saved job joined with the posting it points at.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJobWithJob {
    pub user_id: Uuid,
    pub job_id: String,
    pub created_at: DateTime<Utc>,
    pub job: Job,
}

/// Flat row shape of the `saved_jobs JOIN jobs` query.
#[derive(Debug, sqlx::FromRow)]
pub struct SavedJobRow {
    pub user_id: Uuid,
    pub job_id: String,
    pub created_at: DateTime<Utc>,
    pub job_title: String,
    pub job_company_name: Option<String>,
    pub job_location: Option<String>,
    pub job_description: Option<String>,
    pub job_posted_by: Option<Uuid>,
    pub job_created_at: DateTime<Utc>,
}

impl From<SavedJobRow> for SavedJobWithJob {
    fn from(row: SavedJobRow) -> Self {
        Self {
            job: Job {
                id: row.job_id.clone(),
                title: row.job_title,
                company_name: row.job_company_name,
                location: row.job_location,
                description: row.job_description,
                posted_by: row.job_posted_by,
                created_at: row.job_created_at,
            },
            user_id: row.user_id,
            job_id: row.job_id,
            created_at: row.created_at,
        }
    }
}
