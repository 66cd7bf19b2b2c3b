//! YAML configuration file plus environment overrides.
//!
//! Precedence, lowest first: built-in defaults, config file, environment
//! (`EJP_DB_PATH`, `DB_NAME`, `EJP_LOG_LEVEL`,
//! `EJP_CACHE_INVALIDATION`), then `--db` on the command line.

use crate::core::cache::InvalidationPolicy;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".ejp-analytics";
const CONFIG_FILE: &str = "ejp-analytics.conf";
const DEFAULT_DB_NAME: &str = "ejp_db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub log_level: String,
    pub cache_invalidation: InvalidationPolicy,
    pub chart_width: usize,
}

/// The config file as written by hand: every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    database: Option<String>,
    log_level: Option<String>,
    cache_invalidation: Option<InvalidationPolicy>,
    chart_width: Option<usize>,
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_chart_width() -> usize {
    40
}

impl Config {
    fn with_dir(dir: &Path) -> Self {
        Self {
            database: dir
                .join(format!("{DEFAULT_DB_NAME}.sqlite"))
                .to_string_lossy()
                .to_string(),
            log_level: default_log_level(),
            cache_invalidation: InvalidationPolicy::default(),
            chart_width: default_chart_width(),
        }
    }

    /// `$EJP_CONFIG_DIR`, else `~/.ejp-analytics`.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("EJP_CONFIG_DIR")
            && !dir.trim().is_empty()
        {
            return expand_tilde(&dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Load configuration from file (or defaults) and apply environment overrides.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_dir(), |key| env::var(key).ok())
    }

    /// Same as [`Config::load`] with an explicit directory and variable lookup.
    pub fn load_from<F>(dir: &Path, var: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = dir.join(CONFIG_FILE);

        let mut cfg = Self::with_dir(dir);

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            let file: FileConfig = if content.trim().is_empty() {
                FileConfig::default()
            } else {
                serde_yaml::from_str(&content)
                    .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?
            };
            cfg.merge(file);
        }

        cfg.apply_env(dir, var);
        Ok(cfg)
    }

    fn merge(&mut self, file: FileConfig) {
        if let Some(database) = file.database {
            self.database = database;
        }
        if let Some(level) = file.log_level {
            self.log_level = level;
        }
        if let Some(policy) = file.cache_invalidation {
            self.cache_invalidation = policy;
        }
        if let Some(width) = file.chart_width {
            self.chart_width = width;
        }
    }

    /// Where a `--db` value points: absolute paths as given (after `~`
    /// expansion), relative ones inside the config directory.
    pub fn resolve_db_arg(dir: &Path, name: &str) -> String {
        let p = expand_tilde(name);
        let db_path = if p.is_absolute() { p } else { dir.join(p) };
        db_path.to_string_lossy().to_string()
    }

    fn apply_env<F>(&mut self, dir: &Path, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty("EJP_DB_PATH") {
            self.database = expand_tilde(&path).to_string_lossy().to_string();
        } else if let Some(name) = non_empty("DB_NAME") {
            self.database = dir
                .join(format!("{}.sqlite", name.trim()))
                .to_string_lossy()
                .to_string();
        }

        if let Some(level) = non_empty("EJP_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(raw) = non_empty("EJP_CACHE_INVALIDATION") {
            match InvalidationPolicy::parse(&raw) {
                Some(policy) => self.cache_invalidation = policy,
                // logging is not set up yet at this point
                None => warning(format!(
                    "Ignoring EJP_CACHE_INVALIDATION={raw} (expected per-type or all)"
                )),
            }
        }
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> String {
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the database path. In test mode the config file is left alone.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::load()?;

        if let Some(name) = custom_db {
            config.database = Self::resolve_db_arg(&dir, &name);
        }

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        let db_path = PathBuf::from(config.database_path());
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
