use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: resolve_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// An unset or empty PORT falls back to 8080.
fn resolve_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None | Some("") => Ok(8080),
        Some(value) => value
            .parse::<u16>()
            .context("PORT must be a valid port number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(resolve_port(None).unwrap(), 8080);
    }

    #[test]
    fn test_port_defaults_when_empty() {
        assert_eq!(
            resolve_port(Some("")).unwrap(),
            8080,
            "empty PORT must behave like an unset one"
        );
    }

    #[test]
    fn test_port_override() {
        assert_eq!(resolve_port(Some("9090")).unwrap(), 9090);
    }

    #[test]
    fn test_port_rejects_garbage() {
        assert!(resolve_port(Some("not-a-port")).is_err());
        assert!(resolve_port(Some("70000")).is_err(), "out of u16 range");
    }
}
