use std::env;

use guardpost_core::{AppError, AppResult};
use url::Url;

/// Environment-derived runtime configuration for the console.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the roster collaborator.
    pub api_url: Url,
}

impl ConsoleConfig {
    /// Loads configuration from the environment.
    pub fn load() -> AppResult<Self> {
        let raw =
            env::var("GUARDPOST_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_owned());
        let api_url = Url::parse(&raw).map_err(|error| {
            AppError::Validation(format!("invalid GUARDPOST_API_URL '{raw}': {error}"))
        })?;

        Ok(Self { api_url })
    }
}
