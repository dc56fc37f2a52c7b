use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One validated product listing. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Non-negative; parsed from currency-formatted text.
    pub price: f64,
    /// Always in [0, 5]; bad source data becomes 0.
    pub rating: u8,
    pub category: String,
    /// Assigned at build time; all records of one scrape share it.
    pub scraped_at: DateTime<Utc>,
}

/// One raw product block as pulled from the markup, before typed parsing.
/// A missing sub-match leaves the field `None` rather than dropping the card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListing {
    pub name: Option<String>,
    pub price_text: Option<String>,
    pub rating_text: Option<String>,
    pub category: Option<String>,
}
