use std::env;

use crate::error::AppError;

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `EXPENSES_HOST` (default `0.0.0.0`) and `EXPENSES_PORT`
    /// (default `8000`).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("EXPENSES_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("EXPENSES_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("EXPENSES_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => 8000,
        };

        Ok(Self { host, port })
    }
}
