use std::env;
use thiserror::Error;

/// Default base URL of the domain reseller API
pub const DEFAULT_RESELLER_API_BASE: &str = "https://reseller-api.ds.network";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    // Domain reseller settings
    pub reseller_api_key: String,
    pub reseller_id: String,
    pub reseller_api_base: String,
    // Stripe payment settings
    pub stripe_secret_key: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Skip loading .env in test mode to allow tests to control env vars
        if env::var("RELAY_TEST_MODE").is_err() {
            dotenvy::dotenv().ok();
        }

        // Required variables
        let reseller_api_key =
            env::var("API_KEY").map_err(|_| ConfigError::MissingVar("API_KEY".to_string()))?;

        let reseller_id = env::var("RESELLER_ID")
            .map_err(|_| ConfigError::MissingVar("RESELLER_ID".to_string()))?;

        // Optional variables with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .map(|v| {
                v.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                    var: "PORT".to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?
            .unwrap_or(8000);

        let reseller_api_base = env::var("RESELLER_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_RESELLER_API_BASE.to_string());

        // Stripe settings (optional for local development)
        let stripe_secret_key = env::var("STRIPE_SECRET_KEY").ok();

        Ok(Config {
            host,
            port,
            reseller_api_key,
            reseller_id,
            reseller_api_base,
            stripe_secret_key,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
