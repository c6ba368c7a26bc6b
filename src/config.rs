use std::net::IpAddr;

/// Signing secret used when `JWT_SECRET` is unset. Development only.
pub const DEV_JWT_SECRET: &str = "hireboard-dev-secret-change-me";

/// Seven days.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_or("JWT_SECRET", DEV_JWT_SECRET);

        let token_ttl_secs: i64 = env_or("JWT_TTL_SECONDS", &DEFAULT_TOKEN_TTL_SECS.to_string())
            .parse()
            .map_err(|e| format!("Invalid JWT_TTL_SECONDS: {e}"))?;
        if token_ttl_secs <= 0 {
            return Err("JWT_TTL_SECONDS must be positive".to_string());
        }

        let host: IpAddr = env_or("HIREBOARD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HIREBOARD_HOST: {e}"))?;

        let port: u16 = env_or("HIREBOARD_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid HIREBOARD_PORT: {e}"))?;

        let max_body_size: usize = env_or("HIREBOARD_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid HIREBOARD_MAX_BODY_SIZE: {e}"))?;

        let cors_origins = parse_list(&env_or("HIREBOARD_CORS_ORIGINS", ""));

        let log_level = env_or("HIREBOARD_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            token_ttl_secs,
            host,
            port,
            max_body_size,
            cors_origins,
            log_level,
        })
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
