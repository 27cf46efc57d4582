use anyhow::Context;
use serde::Deserialize;
use std::env;
use url::Url;

/// Server configuration loaded via environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server settings
    pub server_host: String,
    pub server_port: u16,

    // Public base URL used when minting media locators
    pub public_base_url: Url,

    // CORS settings
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let server_host =
            env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{server_port}/"));
        let public_base_url = Url::parse(&public_base_url)
            .context("PUBLIC_BASE_URL is not a valid URL")?;

        Ok(Self {
            server_host,
            server_port,
            public_base_url,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:3000,http://localhost:5173".to_string()
                })
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        })
    }
}
