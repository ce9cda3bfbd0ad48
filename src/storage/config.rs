//! Configuration handling
//!
//! An optional `config.toml` in the platform config directory can pin
//! where tasks are stored; otherwise they live in the platform data
//! directory. An explicit `--file` flag beats both.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides where the task file lives
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Loads the global config, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Resolves the task file: explicit flag, then config, then default
    pub fn resolve_data_file(&self, flag: Option<PathBuf>) -> PathBuf {
        if let Some(path) = flag {
            return path;
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        ProjectDirs::from("", "", "docket")
            .map(|dirs| dirs.data_dir().join("tasks.jsonl"))
            .unwrap_or_else(|| PathBuf::from("tasks.jsonl"))
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "docket").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_config() {
        let config = Config {
            data_file: Some(PathBuf::from("/from/config.jsonl")),
        };

        let resolved = config.resolve_data_file(Some(PathBuf::from("/from/flag.jsonl")));
        assert_eq!(resolved, PathBuf::from("/from/flag.jsonl"));
    }

    #[test]
    fn config_beats_default() {
        let config = Config {
            data_file: Some(PathBuf::from("/from/config.jsonl")),
        };

        let resolved = config.resolve_data_file(None);
        assert_eq!(resolved, PathBuf::from("/from/config.jsonl"));
    }

    #[test]
    fn default_path_ends_with_store_file() {
        let resolved = Config::default().resolve_data_file(None);
        assert!(resolved.ends_with("tasks.jsonl"));
    }

    #[test]
    fn parses_data_file_override() {
        let config: Config = toml::from_str("data_file = \"/tmp/mine.jsonl\"").unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/mine.jsonl")));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.data_file.is_none());
    }
}
