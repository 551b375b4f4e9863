//! Market pages offered for display.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// A named upstream page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Parse and check the URL; only http(s) with a host is accepted.
    pub fn parsed_url(&self) -> Result<Url> {
        let url = Url::parse(&self.url)
            .map_err(|e| Error::Config(format!("invalid URL for {:?}: {e}", self.name)))?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(Error::Config(format!(
                "source {:?} must be an http(s) URL: {}",
                self.name, self.url
            )));
        }
        Ok(url)
    }
}

/// Average fuel prices page, also the daily refresh target.
pub const AVERAGE_PRICES_URL: &str = "https://index.minfin.com.ua/ua/markets/fuel/";

/// The four fuel market pages.
#[must_use]
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new("Average prices in Ukraine", AVERAGE_PRICES_URL),
        Source::new(
            "By regions of Ukraine",
            "https://index.minfin.com.ua/ua/markets/fuel/reg/",
        ),
        Source::new(
            "By leading operators",
            "https://index.minfin.com.ua/ua/markets/fuel/tm/",
        ),
        Source::new(
            "Detailed information about the fuel market in Ukraine",
            "https://index.minfin.com.ua/ua/markets/fuel/detail/",
        ),
    ]
}

/// Resolve a CLI argument to a URL: a 1-based index into `sources`, a source
/// name (case-insensitive), or a literal http(s) URL.
pub fn resolve(sources: &[Source], needle: &str) -> Result<Url> {
    if let Ok(index) = needle.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| sources.get(i))
            .ok_or_else(|| Error::Config(format!("no source number {index}")))?
            .parsed_url();
    }

    if let Some(source) = sources.iter().find(|s| s.name.eq_ignore_ascii_case(needle)) {
        return source.parsed_url();
    }

    Source::new(needle, needle).parsed_url()
}
