//! Fetch-then-extract orchestration.
//!
//! The fetch is the only fallible step: a page that cannot be retrieved or
//! decoded is reported to the caller, never replaced with empty content.

use std::sync::Arc;

use crate::dictionary::Direction;
use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::ContentExtractor;
use crate::fetch::Fetcher;
use crate::render;
use crate::result::ExtractionResult;

/// A fetcher paired with an extractor.
#[derive(Clone)]
pub struct DigestPipeline {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<ContentExtractor>,
}

impl std::fmt::Debug for DigestPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestPipeline")
            .field("extractor", &self.extractor)
            .finish_non_exhaustive()
    }
}

impl DigestPipeline {
    pub fn new(fetcher: Arc<dyn Fetcher>, extractor: Arc<ContentExtractor>) -> Self {
        Self { fetcher, extractor }
    }

    #[must_use]
    pub fn extractor(&self) -> &ContentExtractor {
        &self.extractor
    }

    /// Fetch `url` and extract it in `direction`.
    pub async fn load(&self, url: &str, direction: Direction) -> Result<ExtractionResult> {
        let html = match self.fetcher.fetch_raw_html(url).await {
            Ok(html) => html,
            Err(err) => {
                log_failure(url, &err);
                return Err(err);
            }
        };

        // the parsed document stays local to this call
        let doc = dom::parse(&html);
        Ok(self.extractor.extract(&doc, direction))
    }

    /// Fetch, extract and render a display panel.
    ///
    /// Failures render as the "failed to load content" message.
    pub async fn load_panel(&self, url: &str, direction: Direction) -> String {
        match self.load(url, direction).await {
            Ok(result) => render::panel(&result),
            Err(_) => render::unavailable().to_string(),
        }
    }
}

fn log_failure(url: &str, err: &Error) {
    match err {
        Error::FetchUnavailable { reason, .. } => log::warn!("fetch failed for {url}: {reason}"),
        Error::MalformedDocument(reason) => log::warn!("unusable document from {url}: {reason}"),
        other => log::error!("loading {url} failed: {other}"),
    }
}
