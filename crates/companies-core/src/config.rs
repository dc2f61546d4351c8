//! Configuration types.
//!
//! Configuration is read from `config.toml` in the companies config
//! directory. Every section is optional and falls back to the built-in
//! defaults, so a missing file is equivalent to an empty one.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::options::{
    ViewOptions, DEFAULT_INDUSTRIES, DEFAULT_LOCATIONS, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES,
};
use crate::sort::SortKey;

/// Runtime configuration read from config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Where records come from.
    #[serde(default)]
    pub source: SourceConfig,

    /// Facet option lists.
    #[serde(default)]
    pub facets: FacetConfig,

    /// Page size choices.
    #[serde(default)]
    pub paging: PagingConfig,
}

/// Record source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to a JSON array of records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// Upper bound for the one-time load, in milliseconds.
    #[serde(default = "default_load_timeout_ms")]
    pub load_timeout_ms: u64,
}

impl SourceConfig {
    /// Load timeout as a duration.
    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            load_timeout_ms: default_load_timeout_ms(),
        }
    }
}

fn default_load_timeout_ms() -> u64 {
    5_000
}

/// Facet option lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetConfig {
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,

    #[serde(default = "default_industries")]
    pub industries: Vec<String>,
}

impl Default for FacetConfig {
    fn default() -> Self {
        Self {
            locations: default_locations(),
            industries: default_industries(),
        }
    }
}

fn default_locations() -> Vec<String> {
    DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect()
}

fn default_industries() -> Vec<String> {
    DEFAULT_INDUSTRIES.iter().map(|s| s.to_string()).collect()
}

/// Page size configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_sizes: default_page_sizes(),
            default_page_size: default_page_size(),
        }
    }
}

fn default_page_sizes() -> Vec<usize> {
    DEFAULT_PAGE_SIZES.to_vec()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl DirectoryConfig {
    /// Load from the default location. A missing file yields defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_or_default(&path)
    }

    /// Load from `path`, or return defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load and validate from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {:?}", path);
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the paging invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paging = &self.paging;
        if paging.page_sizes.is_empty() {
            return Err(ConfigError::Parse("paging.page_sizes is empty".to_string()));
        }
        if paging.page_sizes.contains(&0) {
            return Err(ConfigError::Parse(
                "paging.page_sizes must be positive".to_string(),
            ));
        }
        if !paging.page_sizes.contains(&paging.default_page_size) {
            return Err(ConfigError::Parse(format!(
                "paging.default_page_size {} is not one of {:?}",
                paging.default_page_size, paging.page_sizes
            )));
        }
        Ok(())
    }

    /// Option lists for the presentation layer.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            locations: self.facets.locations.clone(),
            industries: self.facets.industries.clone(),
            sort_keys: SortKey::ALL.to_vec(),
            page_sizes: self.paging.page_sizes.clone(),
            default_page_size: self.paging.default_page_size,
        }
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("companies"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default() {
        let config = DirectoryConfig::from_toml("").unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.view_options(), ViewOptions::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = DirectoryConfig::from_toml(
            r#"
            [source]
            data_path = "/srv/companies.json"

            [paging]
            page_sizes = [5, 10]
            default_page_size = 10
            "#,
        )
        .unwrap();

        assert_eq!(
            config.source.data_path,
            Some(PathBuf::from("/srv/companies.json"))
        );
        assert_eq!(config.source.load_timeout(), Duration::from_secs(5));
        assert_eq!(config.facets, FacetConfig::default());
        assert_eq!(config.view_options().page_sizes, vec![5, 10]);
    }

    #[test]
    fn test_rejects_bad_paging() {
        let err = DirectoryConfig::from_toml("[paging]\npage_sizes = []\ndefault_page_size = 9")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = DirectoryConfig::from_toml("[paging]\npage_sizes = [0, 9]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = DirectoryConfig::from_toml("[paging]\ndefault_page_size = 7").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = DirectoryConfig::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[facets]\nlocations = [\"Oslo\"]").unwrap();

        let config = DirectoryConfig::load(file.path()).unwrap();
        assert_eq!(config.facets.locations, vec!["Oslo".to_string()]);
        assert_eq!(config.facets.industries.len(), 5);
    }
}
