use crate::error::AppError;
use std::env;

/// Region the HenrikDev API defaults to when none is given.
pub const DEFAULT_REGION: &str = "br";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("HENRIK_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "HENRIK_API_KEY not found in environment or .env file".to_string(),
            )
        })?;

        let region = env::var("VALO_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

        Ok(Config { api_key, region })
    }
}
