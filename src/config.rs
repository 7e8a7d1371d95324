//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::facts::{FactQuery, DEFAULT_ORDER_BY, MAX_FACTS};
use crate::store::SupabaseConfig as ClientConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub supabase: SupabaseConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hosted database connection
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. "https://xyzcompany.supabase.co"
    #[serde(default)]
    pub url: String,

    /// Project API key
    #[serde(default)]
    pub key: String,

    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_table() -> String {
    "facts".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            table: default_table(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl SupabaseConfig {
    /// Settings for [`crate::store::SupabaseClient`]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            project_url: self.url.clone(),
            api_key: self.key.clone(),
            table: self.table.clone(),
            request_timeout_ms: self.request_timeout_secs.saturating_mul(1000),
        }
    }
}

/// How the feed is fetched
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default = "default_order_by")]
    pub order_by: String,

    #[serde(default)]
    pub ascending: bool,
}

fn default_limit() -> usize {
    MAX_FACTS
}

fn default_order_by() -> String {
    DEFAULT_ORDER_BY.to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            order_by: default_order_by(),
            ascending: false,
        }
    }
}

impl FeedConfig {
    /// Base query, limit clamped to 1..=1000
    pub fn query(&self) -> FactQuery {
        FactQuery::top(self.limit).order_by(self.order_by.clone(), self.ascending)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("til").join("config.toml")),
            Some(PathBuf::from("/etc/til/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Check the values the remote store needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supabase.url.trim().is_empty() {
            return Err(ConfigError::Missing("supabase.url (TIL_SUPABASE_URL)"));
        }
        if self.supabase.key.trim().is_empty() {
            return Err(ConfigError::Missing("supabase.key (TIL_SUPABASE_KEY)"));
        }
        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("TIL_SUPABASE_URL") {
            self.supabase.url = url;
        }
        if let Some(key) = var("TIL_SUPABASE_KEY") {
            self.supabase.key = key;
        }

        if let Some(limit) = var("TIL_FEED_LIMIT") {
            match limit.parse() {
                Ok(l) => self.feed.limit = l,
                Err(e) => tracing::warn!("Invalid TIL_FEED_LIMIT value {:?}: {}", limit, e),
            }
        }

        if let Some(level) = var("TIL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("TIL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Today I Learned Configuration
#
# Environment variables override these settings:
# - TIL_SUPABASE_URL
# - TIL_SUPABASE_KEY
# - TIL_FEED_LIMIT
# - TIL_LOG_LEVEL
# - TIL_LOG_FORMAT

[supabase]
# Project URL from the Supabase dashboard
url = ""

# Project API key (anon key)
key = ""

# Table holding the facts
table = "facts"

# Request timeout in seconds
request_timeout_secs = 30

[feed]
# Maximum number of facts to load (1-1000)
limit = 1000

# Column to order by
order_by = "votesInteresting"

# Sort ascending instead of descending
ascending = false

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.supabase.table, "facts");
        assert_eq!(config.feed.limit, 1000);
        assert_eq!(config.feed.order_by, "votesInteresting");
        assert!(!config.feed.ascending);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.feed.limit, 1000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[supabase]
url = "https://xyz.supabase.co"
key = "anon"

[feed]
limit = 20
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.supabase.url, "https://xyz.supabase.co");
        assert_eq!(config.supabase.request_timeout_secs, 30);
        assert_eq!(config.feed.limit, 20);
        assert!(config.validate().is_ok());

        let client = config.supabase.client_config();
        assert_eq!(client.request_timeout_ms, 30_000);
        assert_eq!(client.table, "facts");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[supabase\nurl = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TIL_SUPABASE_URL", "https://env.supabase.co"),
            ("TIL_SUPABASE_KEY", "env-key"),
            ("TIL_FEED_LIMIT", "not a number"),
            ("TIL_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.supabase.url, "https://env.supabase.co");
        assert_eq!(config.supabase.key, "env-key");
        assert_eq!(config.feed.limit, 1000);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_huge_timeout_saturates() {
        let supabase = SupabaseConfig {
            request_timeout_secs: u64::MAX,
            ..SupabaseConfig::default()
        };
        assert_eq!(supabase.client_config().request_timeout_ms, u64::MAX);
    }

    #[test]
    fn test_feed_query_clamped() {
        let feed = FeedConfig {
            limit: 50_000,
            ..FeedConfig::default()
        };
        assert_eq!(feed.query().limit, MAX_FACTS);
    }
}
