//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Pre-populate the in-memory repository with sample entries
    pub seed_sample_data: bool,
    /// Optional JSON file replacing the built-in activity list
    pub activities_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: match env::var("PORT") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("PORT", raw))?,
                Err(_) => 8080,
            },
            seed_sample_data: match env::var("SEED_SAMPLE_DATA") {
                Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("SEED_SAMPLE_DATA", raw))?,
                Err(_) => false,
            },
            activities_path: env::var("ACTIVITIES_PATH")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Only test in the crate that touches the process environment.
        env::set_var("PORT", "9090");
        env::set_var("SEED_SAMPLE_DATA", "yes");
        env::set_var("ACTIVITIES_PATH", "data/activities.json");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 9090);
        assert!(config.seed_sample_data);
        assert_eq!(
            config.activities_path,
            Some(PathBuf::from("data/activities.json"))
        );

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PORT", _))
        ));

        env::remove_var("PORT");
        env::remove_var("SEED_SAMPLE_DATA");
        env::remove_var("ACTIVITIES_PATH");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8080);
        assert!(!config.seed_sample_data);
        assert_eq!(config.activities_path, None);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
