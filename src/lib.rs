//! Scrape the FAPESP opportunities listing, keep the open entries that match
//! the configured keywords and return them as records ordered by deadline.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliArgs, OutputFormat};
pub use crate::config::{profile::MarkupProfile, settings::SettingsStore, SearchConfig};

pub use crate::core::{engine::SearchEngine, fetcher::HttpFetcher, pipeline::OpportunityPipeline};
pub use crate::domain::model::{EntryFragment, EntryStatus, KeywordSet, ListingPage, OpportunityRecord};
pub use crate::utils::error::{OpportunityError, Result};

use crate::utils::validation::Validate;

/// Engine over the live HTTP listing.
pub type HttpSearchEngine = SearchEngine<OpportunityPipeline<HttpFetcher, SearchConfig>>;

/// Validate `config` and build an engine for it.
///
/// Keep the returned engine around and call [`SearchEngine::run`] on it: the
/// overlapping-run guard lives in the engine, so only callers sharing one
/// engine are serialized.
pub fn engine(config: &SearchConfig) -> Result<HttpSearchEngine> {
    config.validate()?;

    let fetcher = HttpFetcher::from_config(config)?;
    let pipeline = OpportunityPipeline::new(fetcher, config.clone())?;
    Ok(SearchEngine::new(pipeline))
}

/// One-shot search over HTTP for `config` on a fresh engine.
///
/// Every call gets its own engine, so concurrent calls are never rejected
/// with [`OpportunityError::Busy`]; use [`engine`] when they should be.
pub async fn run(config: &SearchConfig) -> Result<Vec<OpportunityRecord>> {
    engine(config)?.run().await
}
