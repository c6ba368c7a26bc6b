use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub posted_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
