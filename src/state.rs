use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::jwt::TokenKeys;
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub tokens: TokenKeys,
}
