use directories::BaseDirs;
use serde::Deserialize;
use std::{env, fs, path::Path, path::PathBuf, time::Duration};

use crate::error::ConfigError;

pub const DEFAULT_HISTORY_LIMIT: usize = 500;
pub const DEFAULT_FOCUS_DELAY_MS: u64 = 300;
pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileConfig {
    pub history_limit: Option<usize>,
    pub history_file: Option<PathBuf>,
    pub focus_delay_ms: Option<u64>,
    pub prompt: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// `None` keeps every entry.
    pub history_limit: Option<usize>,
    /// `None` uses the platform data dir.
    pub history_file: Option<PathBuf>,
    pub focus_delay: Duration,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            history_file: None,
            focus_delay: Duration::from_millis(DEFAULT_FOCUS_DELAY_MS),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Read `config.toml` (if present) and apply `CMDBAR_*` overrides.
    pub fn from_env_and_file() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) if path.exists() => Self::read_file(&path)?,
            _ => FileConfig::default(),
        };
        let mut cfg = Self::from_file_config(file);
        cfg.apply_env(
            env::var("CMDBAR_HISTORY_FILE").ok(),
            env::var("CMDBAR_HISTORY_LIMIT").ok(),
        )?;
        Ok(cfg)
    }

    pub fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file_config(file: FileConfig) -> Self {
        let mut cfg = Self::default();
        if let Some(limit) = file.history_limit {
            cfg.history_limit = limit_from(limit);
        }
        if let Some(p) = file.history_file {
            cfg.history_file = Some(p);
        }
        if let Some(ms) = file.focus_delay_ms {
            cfg.focus_delay = Duration::from_millis(ms);
        }
        if let Some(prompt) = file.prompt {
            cfg.prompt = prompt;
        }
        cfg
    }

    fn apply_env(
        &mut self,
        history_file: Option<String>,
        history_limit: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(p) = history_file.filter(|p| !p.trim().is_empty()) {
            self.history_file = Some(PathBuf::from(p));
        }
        if let Some(raw) = history_limit {
            let limit = raw.trim().parse::<usize>().map_err(|_| ConfigError::Env {
                name: "CMDBAR_HISTORY_LIMIT",
                value: raw.clone(),
            })?;
            self.history_limit = limit_from(limit);
        }
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        let p = if cfg!(target_os = "windows") {
            base.home_dir().join(".cmdbar").join("config.toml")
        } else {
            base.config_dir().join("cmdbar").join("config.toml")
        };
        Some(p)
    }
}

fn limit_from(n: usize) -> Option<usize> {
    if n == 0 {
        None
    } else {
        Some(n)
    }
}
