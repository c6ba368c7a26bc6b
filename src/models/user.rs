use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Optional profile fields accepted at registration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileExtras {
    pub phone: Option<String>,
    pub company_name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}
