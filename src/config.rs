//! Application configuration file.
//!
//! A JSON document with every field optional; missing fields take the
//! defaults below. [`AppConfig::load_or_create`] writes the defaults out when
//! no file exists yet.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dictionary::{Direction, PhraseDictionary};
use crate::error::{Error, Result};
use crate::extractor::ContentExtractor;
use crate::options::Options;
use crate::sanitizer::DEFAULT_TRACKER_SIGNATURES;
use crate::sources::{default_sources, Source, AVERAGE_PRICES_URL};
use crate::translator::Translator;

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Settings for the CLI and the refresh daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Pages offered by `show` and `sources`.
    #[serde(default = "default_sources")]
    pub sources: Vec<Source>,

    /// Page fetched by the daily refresh.
    #[serde(default = "default_refresh_url")]
    pub refresh_url: String,

    /// Where the run/stop status is persisted.
    #[serde(default = "default_status_file")]
    pub status_file: PathBuf,

    /// Replacement phrase dictionary; the built-in one when unset.
    #[serde(default)]
    pub dictionary_file: Option<PathBuf>,

    #[serde(default = "default_tracker_signatures")]
    pub tracker_signatures: Vec<String>,

    /// UI locale; picks the default translation direction.
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_timeout_secs")]
    pub http_timeout_secs: u64,

    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_refresh_url() -> String {
    AVERAGE_PRICES_URL.to_string()
}

fn default_status_file() -> PathBuf {
    PathBuf::from("fuel-digest-status.json")
}

fn default_tracker_signatures() -> Vec<String> {
    DEFAULT_TRACKER_SIGNATURES.iter().map(ToString::to_string).collect()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            refresh_url: default_refresh_url(),
            status_file: default_status_file(),
            dictionary_file: None,
            tracker_signatures: default_tracker_signatures(),
            locale: default_locale(),
            http_timeout_secs: default_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, or write the defaults there when it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            log::info!("wrote default configuration to {}", path.display());
            return Ok(config);
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check source and refresh URLs and the timeout.
    pub fn validate(&self) -> Result<()> {
        for source in &self.sources {
            source.parsed_url()?;
        }
        Source::new("refresh", self.refresh_url.as_str()).parsed_url()?;
        if self.http_timeout_secs == 0 {
            return Err(Error::Config("httpTimeoutSecs must be positive".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Direction implied by the UI locale.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::for_locale(&self.locale)
    }

    /// Extraction options carrying this config's signatures and direction.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            direction: self.direction(),
            tracker_signatures: self.tracker_signatures.clone(),
            ..Options::default()
        }
    }

    /// Translator over the configured dictionary file, or the built-in one.
    pub fn translator(&self) -> Result<Arc<Translator>> {
        match &self.dictionary_file {
            Some(path) => Ok(Arc::new(Translator::new(&PhraseDictionary::from_path(path)?))),
            None => Ok(Translator::builtin()),
        }
    }

    /// Extractor wired with [`Self::translator`] and [`Self::options`].
    pub fn extractor(&self) -> Result<ContentExtractor> {
        Ok(ContentExtractor::new(self.translator()?, self.options()))
    }
}
