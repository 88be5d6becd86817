//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use directories::ProjectDirs;
use pricetag_core::{Currency, ParserConfig, MAX_PRICE};
use std::env;
use std::path::PathBuf;

/// Database file name inside the platform data directory.
const DB_FILE_NAME: &str = "pricetag.db";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Explicit database path (`PRICETAG_DB_PATH`)
    pub db_path_override: Option<PathBuf>,

    /// Parser settings (`PRICETAG_DEFAULT_CURRENCY`, `PRICETAG_MAX_PRICE`)
    pub parser: ParserConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path_override = lookup("PRICETAG_DB_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let default_currency: Currency = match lookup("PRICETAG_DEFAULT_CURRENCY") {
            Some(code) => code
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("PRICETAG_DEFAULT_CURRENCY", &code))?,
            None => Currency::default(),
        };

        let max_price: f64 = match lookup("PRICETAG_MAX_PRICE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("PRICETAG_MAX_PRICE", &raw))?,
            None => MAX_PRICE,
        };

        let parser = ParserConfig::default()
            .default_currency(default_currency)
            .max_price(max_price);
        parser
            .validate()
            .map_err(|_| ConfigError::invalid("PRICETAG_MAX_PRICE", &max_price.to_string()))?;

        Ok(AppConfig {
            db_path_override,
            parser,
        })
    }

    /// Resolves the database file path.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.pricetag.pricetag/pricetag.db`
    /// - **Windows**: `%APPDATA%\pricetag\pricetag\data\pricetag.db`
    /// - **Linux**: `~/.local/share/pricetag/pricetag.db`
    ///
    /// The data directory is created when missing.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.db_path_override {
            return Ok(path.clone());
        }

        let proj_dirs =
            ProjectDirs::from("com", "pricetag", "pricetag").ok_or(ConfigError::NoDataDir)?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DB_FILE_NAME))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },

    #[error("Could not determine app data directory")]
    NoDataDir,

    #[error("Could not create data directory: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    fn invalid(var: &str, value: &str) -> Self {
        ConfigError::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert!(config.db_path_override.is_none());
        assert_eq!(config.parser.default_currency, Currency::Rub);
        assert_eq!(config.parser.max_price, MAX_PRICE);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PRICETAG_DB_PATH", "/tmp/prices.db"),
            ("PRICETAG_DEFAULT_CURRENCY", "kzt"),
            ("PRICETAG_MAX_PRICE", "50000"),
        ])
        .unwrap();

        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/prices.db"));
        assert_eq!(config.parser.default_currency, Currency::Kzt);
        assert_eq!(config.parser.max_price, 50_000.0);
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("PRICETAG_DEFAULT_CURRENCY", "GBP")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "PRICETAG_DEFAULT_CURRENCY"));

        assert!(load(&[("PRICETAG_MAX_PRICE", "lots")]).is_err());
        assert!(load(&[("PRICETAG_MAX_PRICE", "-5")]).is_err());
    }

    #[test]
    fn test_blank_db_path_is_ignored() {
        let config = load(&[("PRICETAG_DB_PATH", "  ")]).unwrap();
        assert!(config.db_path_override.is_none());
    }
}
