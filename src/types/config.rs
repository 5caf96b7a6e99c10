//! Configuration for Memora.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cache::CacheKind;
use crate::{MemoError, MemoResult};

/// Main configuration for Memora.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Cache strategy settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Available cache strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrategyName {
    /// Ordered map, never evicts.
    Unbounded,
    /// Fixed capacity, evicts the oldest insertion first.
    Bounded,
}

impl std::fmt::Display for StrategyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyName::Unbounded => write!(f, "unbounded"),
            StrategyName::Bounded => write!(f, "bounded"),
        }
    }
}

impl std::str::FromStr for StrategyName {
    type Err = MemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unbounded" | "map" => Ok(StrategyName::Unbounded),
            "bounded" | "lru" | "fifo" => Ok(StrategyName::Bounded),
            other => Err(MemoError::config(format!(
                "unknown cache strategy '{}' (expected 'unbounded' or 'bounded')",
                other
            ))),
        }
    }
}

/// Cache strategy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Strategy used by config-driven memoizers.
    #[serde(default = "default_strategy")]
    pub strategy: StrategyName,

    /// Maximum number of entries (only read by the bounded strategy).
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            capacity: default_cache_capacity(),
        }
    }
}

fn default_strategy() -> StrategyName {
    StrategyName::Unbounded
}

fn default_cache_capacity() -> usize {
    128
}

impl CacheConfig {
    /// Resolves the settings into a validated [`CacheKind`].
    ///
    /// A bounded strategy with `capacity = 0` is rejected.
    pub fn kind(&self) -> MemoResult<CacheKind> {
        match self.strategy {
            StrategyName::Unbounded => Ok(CacheKind::Unbounded),
            StrategyName::Bounded => CacheKind::bounded(self.capacity),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> MemoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> MemoResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            cache: CacheConfig::default(),
        }
    }

    /// Loads configuration from `path`, or uses default if the file does not exist.
    ///
    /// An existing file that cannot be read or parsed is an error, never a
    /// silent fallback.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> MemoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default_config());
        }
        Self::load(path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.cache.strategy, StrategyName::Unbounded);
        assert_eq!(config.cache.capacity, 128);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("memora.toml");

        let mut config = Config::default();
        config.cache.strategy = StrategyName::Bounded;
        config.cache.capacity = 4;
        config.save(&path).expect("Failed to save config");

        let loaded = Config::load(&path).expect("Failed to load config");
        assert_eq!(loaded.cache.strategy, StrategyName::Bounded);
        assert_eq!(loaded.cache.capacity, 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[cache]\nstrategy = \"bounded\"\n")
            .expect("Failed to parse partial config");
        assert_eq!(config.cache.strategy, StrategyName::Bounded);
        assert_eq!(config.cache.capacity, 128);
        assert_eq!(config.general.log_format, "text");
    }

    #[test]
    fn test_kind_rejects_zero_capacity() {
        let config = CacheConfig {
            strategy: StrategyName::Bounded,
            capacity: 0,
        };
        assert!(matches!(
            config.kind(),
            Err(MemoError::InvalidCacheCapacity(0))
        ));
    }

    #[test]
    fn test_kind_ignores_capacity_when_unbounded() {
        let config = CacheConfig {
            strategy: StrategyName::Unbounded,
            capacity: 0,
        };
        assert!(matches!(config.kind(), Ok(CacheKind::Unbounded)));
    }

    #[test]
    fn test_strategy_name_parsing() {
        assert_eq!("lru".parse::<StrategyName>().ok(), Some(StrategyName::Bounded));
        assert_eq!(
            " Unbounded ".parse::<StrategyName>().ok(),
            Some(StrategyName::Unbounded)
        );
        assert!("random".parse::<StrategyName>().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = Config::load_or_default(temp_dir.path().join("memora.toml"))
            .expect("Missing file should fall back to defaults");
        assert_eq!(config.cache.strategy, StrategyName::Unbounded);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("memora.toml");
        std::fs::write(&path, "[cache]\nstrategy = \"bounded\"\ncapacity = 2\n")
            .expect("Failed to write config");

        let config = Config::load_or_default(&path).expect("Failed to load config");
        assert_eq!(config.cache.strategy, StrategyName::Bounded);
        assert_eq!(config.cache.capacity, 2);
    }

    #[test]
    fn test_load_or_default_rejects_malformed_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("memora.toml");
        std::fs::write(&path, "[cache\nstrategy = ").expect("Failed to write config");

        // Arquivo existente e inválido não pode virar configuração padrão
        let result = Config::load_or_default(&path);
        assert!(matches!(result, Err(MemoError::TomlParse(_))));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = Config::load(temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(MemoError::Io(_))));
    }
}
