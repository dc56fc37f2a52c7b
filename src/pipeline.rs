use crate::builder;
use crate::config::Config;
use crate::error::Result;
use crate::extractor::{self, Selectors};
use crate::fetcher::PageFetcher;
use crate::storage::Dataset;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

/// Counts from one completed scrape cycle.
#[derive(Debug, Serialize)]
pub struct ScrapeSummary {
    pub total_cards: usize,
    pub built: usize,
    pub dropped: usize,
}

/// Runs one full scrape cycle: fetch, extract, build, then replace the
/// dataset. Fetch and extract run to completion before the dataset is
/// touched, so a failure anywhere leaves the previous data intact and
/// partial results are never observable.
pub fn run_scrape(
    fetcher: &dyn PageFetcher,
    config: &Config,
    dataset: &mut Dataset,
) -> Result<ScrapeSummary> {
    let span = tracing::info_span!("scrape_cycle", url = %config.url);
    let _enter = span.enter();

    let selectors = Selectors::compile(&config.selectors)?;

    info!("Starting scrape");
    let markup = fetcher.fetch(&config.url)?;
    let listings = extractor::extract(&markup, &selectors)?;

    // One timestamp per batch: every record of this scrape shares it.
    let now = Utc::now();
    let outcome = builder::build_all(&listings, now);

    let summary = ScrapeSummary {
        total_cards: listings.len(),
        built: outcome.products.len(),
        dropped: outcome.dropped,
    };
    if summary.dropped > 0 {
        warn!("{} card(s) dropped during record building", summary.dropped);
    }
    info!(
        "Scrape finished: {} cards, {} products built, {} dropped",
        summary.total_cards, summary.built, summary.dropped
    );

    dataset.replace(outcome.products);
    Ok(summary)
}
