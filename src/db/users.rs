use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ProfileExtras, User};

pub struct NewUser<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub name: &'a str,
    pub role: &'a str,
    pub profile: &'a ProfileExtras,
}

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    user: NewUser<'_>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (id, email, password_hash, name, role, phone, company_name, skills)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
    )
    .bind(user.id)
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.name)
    .bind(user.role)
    .bind(user.profile.phone.as_deref())
    .bind(user.profile.company_name.as_deref())
    .bind(&user.profile.skills)
    .fetch_one(executor)
    .await
}

/// Exact, case-sensitive match.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
