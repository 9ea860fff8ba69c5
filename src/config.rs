use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the deployed sheet web app (the Apps Script `/exec` endpoint).
    pub sheets_url: String,
    /// Shared secret gating the dashboard view.
    pub dashboard_secret: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let sheets_url =
            env::var("SHEETS_API_URL").map_err(|_| ConfigError::Missing("SHEETS_API_URL"))?;
        let dashboard_secret = env::var("DASHBOARD_PASSWORD")
            .map_err(|_| ConfigError::Missing("DASHBOARD_PASSWORD"))?;
        let port = parse_port(env::var("PORT").ok())?;

        Ok(Self {
            sheets_url,
            dashboard_secret,
            port,
        })
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw)),
        None => Ok(8080),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 8080);
    }

    #[test]
    fn port_parses_explicit_value() {
        assert_eq!(parse_port(Some("3000".into())).unwrap(), 3000);
    }

    #[test]
    fn port_rejects_garbage() {
        assert!(matches!(
            parse_port(Some("eighty".into())),
            Err(ConfigError::InvalidPort(_))
        ));
    }
}
