//! Application settings: an optional RON file plus environment overrides.
//!
//! The OMDb credential is never compiled in; it comes from `OMDB_API_KEY`
//! or the `api_key` field of the settings file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use watchlist_core::StarRating;
use watchlist_engine::OmdbSettings;

pub(crate) const CONFIG_ENV: &str = "WATCHLIST_CONFIG";
pub(crate) const API_KEY_ENV: &str = "OMDB_API_KEY";
const DEFAULT_CONFIG_FILENAME: &str = "watchlist.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("no OMDb API key; set OMDB_API_KEY or `api_key` in the settings file")]
    MissingApiKey,
}

/// Where the active settings came from, reported once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "settings file {path:?}"),
            ConfigSource::Defaults => f.write_str("built-in defaults (no settings file found)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: u64,
    pub log_file: PathBuf,
    pub log_level: String,
    pub star_rating: StarRatingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarRatingSettings {
    pub max: u8,
    pub color: String,
    pub size: u16,
    pub messages: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            max_body_bytes: 2 * 1024 * 1024,
            log_file: PathBuf::from("./watchlist.log"),
            log_level: "info".to_string(),
            star_rating: StarRatingSettings::default(),
        }
    }
}

impl Default for StarRatingSettings {
    fn default() -> Self {
        let widget = StarRating::default();
        Self {
            max: widget.max(),
            color: widget.color().to_string(),
            size: widget.size(),
            messages: Vec::new(),
        }
    }
}

impl Settings {
    /// Reads the process environment and the working directory.
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let api_key = std::env::var(API_KEY_ENV).ok();
        Self::resolve(explicit, Path::new("."), api_key)
    }

    /// An explicit path must exist; otherwise `<dir>/watchlist.ron` is used
    /// when present. A non-empty `api_key_override` replaces the file's key.
    pub fn resolve(
        explicit: Option<PathBuf>,
        dir: &Path,
        api_key_override: Option<String>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        let path = explicit.or_else(|| {
            Some(dir.join(DEFAULT_CONFIG_FILENAME)).filter(|candidate| candidate.is_file())
        });
        let (mut settings, source) = match path {
            Some(path) => (Self::from_file(&path)?, ConfigSource::File(path)),
            None => (Self::default(), ConfigSource::Defaults),
        };

        if let Some(key) = api_key_override.filter(|key| !key.trim().is_empty()) {
            settings.api_key = Some(key);
        }
        Ok((settings, source))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn omdb_settings(&self) -> Result<OmdbSettings, ConfigError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(OmdbSettings {
            base_url: self.base_url.clone(),
            api_key: api_key.to_string(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_body_bytes,
        })
    }

    pub fn star_rating(&self) -> StarRating {
        let cfg = &self.star_rating;
        StarRating::new(cfg.max, cfg.color.clone(), cfg.size).with_messages(cfg.messages.clone())
    }
}
