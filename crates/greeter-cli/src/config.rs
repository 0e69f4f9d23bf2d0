//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it. The core's own
//! limits (name and message length) are compile-time constants and are not
//! configurable here.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI arguments (handled at the call-site, not here)
//! 2. Environment variables (`GREETER_DEFAULT_NAME`, `.env` honoured)
//! 3. Config file (`--config FILE`, or the platform default path)
//! 4. Built-in defaults (always present)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Environment variable overriding `defaults.name`.
pub const DEFAULT_NAME_ENV: &str = "GREETER_DEFAULT_NAME";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when the command line omits them.
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Who to greet when no name is given.
    pub name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            name: "World".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(std::env::var(DEFAULT_NAME_ENV).ok());
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn apply_env(&mut self, default_name: Option<String>) {
        if let Some(name) = default_name {
            self.defaults.name = name;
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.greeter.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "greeter", "greeter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".greeter.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_name_is_world() {
        assert_eq!(AppConfig::default().defaults.name, "World");
    }

    #[test]
    fn toml_overrides_default_name() {
        let cfg = AppConfig::from_toml("[defaults]\nname = \"Ada\"\n").unwrap();
        assert_eq!(cfg.defaults.name, "Ada");
    }

    #[test]
    fn empty_toml_keeps_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml("[defaults\nname = ").is_err());
    }

    #[test]
    fn env_overrides_file() {
        let mut cfg = AppConfig::from_toml("[defaults]\nname = \"Ada\"\n").unwrap();
        cfg.apply_env(Some("Grace".into()));
        assert_eq!(cfg.defaults.name, "Grace");

        cfg.apply_env(None);
        assert_eq!(cfg.defaults.name, "Grace");
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nname = \"Linus\"").unwrap();

        let cfg = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.defaults.name, "Linus");
    }

    #[test]
    fn load_rejects_missing_explicit_file() {
        let missing = PathBuf::from("/definitely/not/here/greeter.toml");
        let err = AppConfig::load(Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("cannot read config file"));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
