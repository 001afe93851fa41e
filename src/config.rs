//! Application configuration loaded from environment variables.
//!
//! Values may come from a `.env` file (loaded via `dotenvy` in `main.rs`);
//! command-line flags override them.
//!
//! ## Variables
//!
//! - `WALINK_STATE_DIR` - Directory holding the history file
//!   (default: `$XDG_STATE_HOME/wa-link`, i.e. `~/.local/state/wa-link`)
//! - `WALINK_COUNTRIES_FILE` - JSON country dataset replacing the built-in one
//! - `WALINK_DEFAULT_COUNTRY` - Initially selected country code (default: first in dataset)
//! - `WALINK_LOCALE` - Message language: `en` or `ar` (default: `en`)
//! - `WALINK_HISTORY_LIMIT` - Keep at most this many history entries (default: unbounded)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::messages::Locale;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for persisted state. `None` when it cannot be resolved, in
    /// which case history is kept in memory only.
    pub state_dir: Option<PathBuf>,
    pub countries_file: Option<PathBuf>,
    /// Country code selected at startup; `None` selects the first dataset entry.
    pub default_country: Option<String>,
    pub locale: Locale,
    /// Maximum history entries. `None` keeps everything.
    pub history_limit: Option<usize>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WALINK_LOCALE` or `WALINK_HISTORY_LIMIT` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let state_dir = Self::load_state_dir();

        let countries_file = env::var("WALINK_COUNTRIES_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let default_country = env::var("WALINK_DEFAULT_COUNTRY")
            .ok()
            .filter(|v| !v.is_empty());

        let locale = match env::var("WALINK_LOCALE") {
            Ok(v) if !v.is_empty() => v
                .parse::<Locale>()
                .map_err(|e| anyhow::anyhow!("Invalid WALINK_LOCALE: {e}"))?,
            _ => Locale::default(),
        };

        let history_limit = match env::var("WALINK_HISTORY_LIMIT") {
            Ok(v) if !v.is_empty() => {
                let limit: usize = v
                    .parse()
                    .with_context(|| format!("WALINK_HISTORY_LIMIT must be a number, got '{v}'"))?;
                Some(limit).filter(|&n| n > 0)
            }
            _ => None,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            state_dir,
            countries_file,
            default_country,
            locale,
            history_limit,
            log_level,
            log_format,
        })
    }

    /// Resolves the state directory.
    ///
    /// Priority:
    /// 1. `WALINK_STATE_DIR` environment variable
    /// 2. XDG state home with the `wa-link` prefix
    fn load_state_dir() -> Option<PathBuf> {
        if let Ok(dir) = env::var("WALINK_STATE_DIR")
            && !dir.is_empty()
        {
            return Some(PathBuf::from(dir));
        }

        let xdg_dirs = xdg::BaseDirectories::with_prefix("wa-link").ok()?;
        Some(xdg_dirs.get_state_home())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `default_country` is blank or contains whitespace
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref code) = self.default_country
            && (code.trim().is_empty() || code.chars().any(char::is_whitespace))
        {
            anyhow::bail!(
                "Default country must be a country code or dial code, got '{}'",
                code
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        match self.state_dir {
            Some(ref dir) => tracing::info!("  State dir: {}", dir.display()),
            None => tracing::info!("  State dir: none (history kept in memory)"),
        }
        match self.countries_file {
            Some(ref path) => tracing::info!("  Countries: {}", path.display()),
            None => tracing::info!("  Countries: built-in"),
        }
        tracing::info!("  Locale: {}", self.locale);
        match self.history_limit {
            Some(limit) => tracing::info!("  History limit: {}", limit),
            None => tracing::info!("  History limit: unbounded"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "WALINK_STATE_DIR",
        "WALINK_COUNTRIES_FILE",
        "WALINK_DEFAULT_COUNTRY",
        "WALINK_LOCALE",
        "WALINK_HISTORY_LIMIT",
        "LOG_FORMAT",
        "XDG_STATE_HOME",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn base_config() -> Config {
        Config {
            state_dir: Some(PathBuf::from("/tmp/wa-link")),
            countries_file: None,
            default_country: None,
            locale: Locale::En,
            history_limit: None,
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.default_country = Some("E G".to_string());
        assert!(config.validate().is_err());

        config.default_country = Some("eg".to_string());
        assert!(config.validate().is_ok());

        config.default_country = Some("+20".to_string());
        assert!(config.validate().is_ok());

        config.default_country = Some("EGY".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.history_limit, None);
        assert_eq!(config.default_country, None);
        assert!(config.countries_file.is_none());
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("WALINK_STATE_DIR", "/var/lib/wa-link");
            env::set_var("WALINK_COUNTRIES_FILE", "/etc/wa-link/countries.json");
            env::set_var("WALINK_DEFAULT_COUNTRY", "SA");
            env::set_var("WALINK_LOCALE", "ar");
            env::set_var("WALINK_HISTORY_LIMIT", "50");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.state_dir, Some(PathBuf::from("/var/lib/wa-link")));
        assert_eq!(
            config.countries_file,
            Some(PathBuf::from("/etc/wa-link/countries.json"))
        );
        assert_eq!(config.default_country.as_deref(), Some("SA"));
        assert_eq!(config.locale, Locale::Ar);
        assert_eq!(config.history_limit, Some(50));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_zero_history_limit_is_unbounded() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("WALINK_HISTORY_LIMIT", "0");
        }

        assert_eq!(Config::from_env().unwrap().history_limit, None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("WALINK_HISTORY_LIMIT", "many");
        }
        assert!(Config::from_env().is_err());

        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("WALINK_LOCALE", "fr");
        }
        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_state_dir_priority() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("WALINK_STATE_DIR", "/from/env");
        }

        assert_eq!(Config::load_state_dir(), Some(PathBuf::from("/from/env")));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_state_dir_defaults_to_xdg_state_home() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("XDG_STATE_HOME", "/tmp/xstate");
        }

        assert_eq!(
            Config::load_state_dir(),
            Some(PathBuf::from("/tmp/xstate/wa-link"))
        );

        clear_env();
    }
}
