//! Cleaner configuration
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. TOML file (`--config`, else `<config dir>/jmis-cleaner/config.toml` if present)
//! 3. Environment (`JMIS_DEFAULT_COUNTY`, `JMIS_PHONE_PREFIX`, `.env` honoured)
//! 4. Command-line flags

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cleaning::MapperOptions;
use crate::cleaning::ProgramDefaults;
use crate::cleaning::normalize::DEFAULT_PHONE_PREFIX;

pub const ENV_DEFAULT_COUNTY: &str = "JMIS_DEFAULT_COUNTY";
pub const ENV_PHONE_PREFIX: &str = "JMIS_PHONE_PREFIX";

const APP_DIR: &str = "jmis-cleaner";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// County used when an upload has no county column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_county: Option<String>,
    /// Calling code for phone numbers ("+254" or "254")
    pub phone_prefix: String,
    /// Program-wide constant columns
    pub defaults: ProgramDefaults,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            default_county: None,
            phone_prefix: DEFAULT_PHONE_PREFIX.to_string(),
            defaults: ProgramDefaults::default(),
        }
    }
}

impl CleanerConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from an explicit path, or the default location if it exists
    ///
    /// An explicit path must exist; a missing default file just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(p) => p,
                None => {
                    log::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Apply `JMIS_*` variables from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; blank values are ignored
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(county) = lookup(ENV_DEFAULT_COUNTY).filter(|v| !v.trim().is_empty()) {
            log::debug!("Default county from {}: {}", ENV_DEFAULT_COUNTY, county);
            self.default_county = Some(county);
        }
        if let Some(prefix) = lookup(ENV_PHONE_PREFIX).filter(|v| !v.trim().is_empty()) {
            log::debug!("Phone prefix from {}: {}", ENV_PHONE_PREFIX, prefix);
            self.phone_prefix = prefix.trim().to_string();
        }
    }

    /// Options for the record mapper
    pub fn mapper_options(&self) -> MapperOptions {
        MapperOptions {
            default_county: self
                .default_county
                .clone()
                .filter(|c| !c.trim().is_empty()),
            phone_prefix: self.phone_prefix.clone(),
            defaults: self.defaults.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CleanerConfig::default();
        assert_eq!(config.phone_prefix, "+254");
        assert_eq!(config.default_county, None);
        assert_eq!(config.defaults.training_partner, "KNCCI");
        assert_eq!(config.defaults.delivery_mode, "In Person");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CleanerConfig::from_toml_str(
            r#"
            default_county = "Nakuru"

            [defaults]
            training_partner = "Partner X"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_county.as_deref(), Some("Nakuru"));
        assert_eq!(config.phone_prefix, "+254");
        assert_eq!(config.defaults.training_partner, "Partner X");
        assert_eq!(config.defaults.business_segment, "Micro");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(CleanerConfig::from_toml_str("phone_prefix = [").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = CleanerConfig::default();
        config.default_county = Some("Kisumu".into());
        let text = config.to_toml_string().unwrap();
        assert_eq!(CleanerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_DEFAULT_COUNTY, "Mombasa"),
            (ENV_PHONE_PREFIX, " 254 "),
        ]);
        let mut config = CleanerConfig::default();
        config.apply_overrides_from(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.default_county.as_deref(), Some("Mombasa"));
        assert_eq!(config.phone_prefix, "254");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = CleanerConfig::default();
        config.apply_overrides_from(|_| Some("  ".to_string()));
        assert_eq!(config, CleanerConfig::default());
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(CleanerConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "phone_prefix = \"254\"\n").unwrap();

        let config = CleanerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.mapper_options().phone_prefix, "254");
    }
}
