use std::env;
use std::fmt;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let url = env::var("ASPIRANTS_API_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        let default_image =
            env::var("ASPIRANTS_DEFAULT_IMAGE").unwrap_or_else(|_| "/pngegg.png".to_string());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            api: ApiConfig { url, default_image },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the remote roster endpoint and its presentation assets.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Endpoint answering `GET` with the JSON aspirant array.
    pub url: String,
    /// Placeholder asset path for aspirants without an image.
    pub default_image: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingApiUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiUrl => {
                write!(f, "ASPIRANTS_API_URL must be set to the roster endpoint")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
