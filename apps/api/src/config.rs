use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL profile store. Without it, profiles live in memory only.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Fixed seed for company sampling; entropy-seeded per request when unset.
    pub company_sample_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            company_sample_seed: optional_env("COMPANY_SAMPLE_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("COMPANY_SAMPLE_SEED must be an unsigned integer")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            company_sample_seed: None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
