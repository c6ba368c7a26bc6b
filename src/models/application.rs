use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub job_id: String,
    pub user_id: Uuid,
    pub cover_letter: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
