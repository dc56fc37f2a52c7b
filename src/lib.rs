//! Scrape-to-record pipeline and aggregation engine for a single
//! e-commerce catalog page. The binary in `main.rs` is a thin text
//! presenter; everything here returns plain data so any rendering layer
//! can sit on top.

pub mod analysis;
pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod logging;
pub mod pipeline;
pub mod storage;
pub mod types;

pub use config::{Config, SelectorConfig};
pub use error::{BuildError, ExtractError, FetchError, Result, ScraperError};
pub use storage::Dataset;
pub use types::{Product, RawListing};
