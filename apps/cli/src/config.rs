//! # Application Configuration
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILEQUOTE_*`)
//! 2. Defaults (this file)
//!
//! Quote pricing is not configured here: rates and grout settings travel
//! inside each job document.

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;
use tilequote_core::share::DEFAULT_COUNTRY_CODE;

/// Database file override.
pub const ENV_DB_PATH: &str = "TILEQUOTE_DB_PATH";
/// International prefix used when normalising phone numbers.
pub const ENV_COUNTRY_CODE: &str = "TILEQUOTE_COUNTRY_CODE";
/// Name appended to shared messages.
pub const ENV_TRADER_NAME: &str = "TILEQUOTE_TRADER_NAME";

const DB_FILE_NAME: &str = "tilequote.db";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Could not determine a data directory; set TILEQUOTE_DB_PATH")]
    NoDataDirectory,

    #[error("Could not create data directory {path}: {source}")]
    DataDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Explicit database path. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Phone prefix such as `+44`.
    /// Default: [`DEFAULT_COUNTRY_CODE`]
    pub country_code: String,

    /// Sign-off for shared messages.
    pub trader_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: None,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            trader_name: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = AppConfig::default();

        if let Some(path) = get(ENV_DB_PATH) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(code) = get(ENV_COUNTRY_CODE) {
            config.country_code = parse_country_code(&code)?;
        }

        config.trader_name = get(ENV_TRADER_NAME);

        Ok(config)
    }

    /// Resolves the database file, creating the platform data directory
    /// when no explicit path is set.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.tilequote.tilequote/tilequote.db`
    /// - **Windows**: `%APPDATA%\tilequote\tilequote\data\tilequote.db`
    /// - **Linux**: `~/.local/share/tilequote/tilequote.db`
    pub fn resolve_database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("com", "tilequote", "tilequote")
            .ok_or(ConfigError::NoDataDirectory)?;
        let data_dir = dirs.data_dir();

        std::fs::create_dir_all(data_dir).map_err(|source| ConfigError::DataDirectory {
            path: data_dir.to_path_buf(),
            source,
        })?;

        Ok(data_dir.join(DB_FILE_NAME))
    }
}

/// Accepts `+` followed by 1-4 digits, or bare digits (a `+` is added).
fn parse_country_code(raw: &str) -> Result<String, ConfigError> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidValue {
            key: ENV_COUNTRY_CODE,
            value: raw.to_string(),
            reason: "expected a prefix such as +44",
        });
    }
    Ok(format!("+{digits}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.country_code, "+44");
    }

    #[test]
    fn test_reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/tmp/jobs.db"),
            (ENV_COUNTRY_CODE, "353"),
            (ENV_TRADER_NAME, "  Dave's Tiling "),
        ]))
        .unwrap();

        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/jobs.db")));
        assert_eq!(config.country_code, "+353");
        assert_eq!(config.trader_name.as_deref(), Some("Dave's Tiling"));
        assert_eq!(
            config.resolve_database_path().unwrap(),
            PathBuf::from("/tmp/jobs.db")
        );
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[(ENV_TRADER_NAME, "   "), (ENV_COUNTRY_CODE, "")]))
                .unwrap();
        assert_eq!(config.trader_name, None);
        assert_eq!(config.country_code, "+44");
    }

    #[test]
    fn test_bad_country_code() {
        for bad in ["+", "uk", "+12345", "+4 4"] {
            let err = AppConfig::from_lookup(lookup(&[(ENV_COUNTRY_CODE, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }), "{bad}");
        }
    }
}
