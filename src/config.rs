//! Runtime configuration.
//!
//! Sources, later ones winning:
//!   built-in defaults
//!   holiday-sync.toml in the working directory (or --config <file>)
//!   HOLIDAY_SYNC_* environment variables
//!   command-line flags
//!
//! The API key falls back to GOOGLE_API_KEY when no other source sets it.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use holiday_core::{HolidayError, HolidayResult};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "holiday-sync.toml";
const ENV_PREFIX: &str = "HOLIDAY_SYNC";
const API_KEY_ENV: &str = "GOOGLE_API_KEY";

pub const DEFAULT_CODE: &str = "id.indonesian";
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com";

fn default_code() -> String {
    DEFAULT_CODE.to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    /// Google holiday calendar locale, e.g. "id.indonesian" or "en.usa"
    #[serde(default = "default_code")]
    pub code: String,

    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// No timeout unless set
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_key: None,
            code: default_code(),
            public_dir: default_public_dir(),
            api_base: default_api_base(),
            timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load configuration. An explicit `path` must exist; the default file is
    /// optional.
    pub fn load(path: Option<&Path>) -> HolidayResult<Self> {
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config: AppConfig = Config::builder()
            .add_source(File::from(file).required(path.is_some()))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| HolidayError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HolidayError::Config(e.to_string()))?;

        if config.api_key.is_none() {
            config.api_key = std::env::var(API_KEY_ENV).ok();
        }

        Ok(config)
    }

    pub fn with_overrides(mut self, code: Option<String>, public_dir: Option<PathBuf>) -> Self {
        if let Some(code) = code {
            self.code = code;
        }
        if let Some(public_dir) = public_dir {
            self.public_dir = public_dir;
        }
        self
    }

    pub fn api_key(&self) -> HolidayResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(HolidayError::Config(format!(
                "No Google API key configured. Set {} or api_key in {}",
                API_KEY_ENV, DEFAULT_CONFIG_FILE
            ))),
        }
    }
}
