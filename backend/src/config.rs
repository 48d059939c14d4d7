//! Process configuration, read once at startup from the environment.
//!
//! A `.env` file in the working directory is loaded first if present; real
//! environment variables win over it. The remote service credential
//! (`API_KEY`) is mandatory: without it the server refuses to start.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

// Hand-written so the key never ends up in a log line.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("open_browser", &self.open_browser)
            .finish()
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} environment variable not set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value for {}: '{}'", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("API_KEY").ok_or(ConfigError::Missing("API_KEY"))?;

        let timeout_secs = match get("ANALYSIS_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "ANALYSIS_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let open_browser = match get("OPEN_BROWSER") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "OPEN_BROWSER",
                        value: raw,
                    })
                }
            },
            None => true,
        };

        Ok(Self {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        assert_eq!(config_from(&[]).unwrap_err(), ConfigError::Missing("API_KEY"));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        assert_eq!(
            config_from(&[("API_KEY", "   ")]).unwrap_err(),
            ConfigError::Missing("API_KEY")
        );
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("API_KEY", "k")]).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert!(config.open_browser);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("ANALYSIS_TIMEOUT_SECS", "15"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("OPEN_BROWSER", "off"),
        ])
        .unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert!(!config.open_browser);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("API_KEY", "k"), ("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("API_KEY", "k"), ("ANALYSIS_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Invalid {
                key: "ANALYSIS_TIMEOUT_SECS",
                ..
            })
        ));
        assert!(matches!(
            config_from(&[("API_KEY", "k"), ("OPEN_BROWSER", "maybe")]),
            Err(ConfigError::Invalid {
                key: "OPEN_BROWSER",
                ..
            })
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = config_from(&[("API_KEY", "super-secret")]).unwrap();
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
