use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub token_ttl_secs: i64,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite:task_tracker.db");
        let secret_key = env_or("SECRET_KEY", "dev-change-me");

        let token_ttl_secs: i64 = env_or("TOKEN_TTL_SECONDS", "604800")
            .parse()
            .map_err(|e| format!("Invalid TOKEN_TTL_SECONDS: {e}"))?;

        let host: IpAddr = env_or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = env_or("PORT", "5001")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let log_level = env_or("LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            secret_key,
            token_ttl_secs,
            host,
            port,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
