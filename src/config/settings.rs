//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT, DEFAULT_DB_USER,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Insert sample employees on `serve` when the table is empty
    pub seed_on_start: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("seed_on_start", &self.seed_on_start)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is assembled from
    /// `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and `DB_PASSWORD`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| database_url_from_parts()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            seed_on_start: env::var("SEED_ON_START")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn database_url_from_parts() -> String {
    let var = |key: &str, default: &str| env::var(key).unwrap_or_else(|_| default.to_string());

    let port = env::var("DB_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_DB_PORT);

    build_database_url(
        &var("DB_USER", DEFAULT_DB_USER),
        &var("DB_PASSWORD", DEFAULT_DB_PASSWORD),
        &var("DB_HOST", DEFAULT_DB_HOST),
        port,
        &var("DB_NAME", DEFAULT_DB_NAME),
    )
}

/// Assemble a PostgreSQL connection URL.
pub fn build_database_url(user: &str, password: &str, host: &str, port: u16, name: &str) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
