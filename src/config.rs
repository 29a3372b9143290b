//! Configuration from `.docmetarc.json`, with command-line overrides.
//!
//! Only `defaultGroup` is read: the group for endpoints whose method and
//! controller both lack a `@group` tag.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".docmetarc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Group for endpoints with no `@group` tag on the method or controller
    #[serde(default = "default_group")]
    pub default_group: String,
}

fn default_group() -> String {
    "general".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_group: default_group(),
        }
    }
}

impl Config {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a command-line or environment override.
    pub fn with_default_group(mut self, group: Option<&str>) -> Result<Self> {
        if let Some(group) = group {
            self.default_group = group.to_string();
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.default_group.trim().is_empty() {
            bail!("defaultGroup must not be empty");
        }
        Ok(())
    }
}

/// Load configuration from an explicit path, or from `.docmetarc.json` in
/// `dir` when present. Falls back to defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    let path: PathBuf = match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(Config::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = Config::from_json(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.default_group, "general");
    }

    #[test]
    fn reads_implicit_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "defaultGroup": "Endpoints" }"#,
        )
        .unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.default_group, "Endpoints");
    }

    #[test]
    fn missing_key_uses_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.default_group, "general");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");
        assert!(load_config(Some(path.as_path()), dir.path()).is_err());
    }

    #[test]
    fn empty_group_rejected() {
        assert!(Config::from_json(r#"{ "defaultGroup": "  " }"#).is_err());
        assert!(Config::default().with_default_group(Some("")).is_err());
    }

    #[test]
    fn override_wins() {
        let config = Config::from_json(r#"{ "defaultGroup": "File" }"#)
            .unwrap()
            .with_default_group(Some("Cli"))
            .unwrap();
        assert_eq!(config.default_group, "Cli");

        let config = Config::default().with_default_group(None).unwrap();
        assert_eq!(config.default_group, "general");
    }
}
