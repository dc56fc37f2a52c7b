use crate::constants::DEFAULT_CATEGORY;
use crate::error::BuildError;
use crate::types::{Product, RawListing};
use chrono::{DateTime, Utc};
use tracing::warn;

/// What `build_all` hands back: every card that validated, plus how many
/// were dropped for diagnostics.
#[derive(Debug)]
pub struct BuildOutcome {
    pub products: Vec<Product>,
    pub dropped: usize,
}

/// Coerces one raw listing into a typed [`Product`]. Fails only on a bad
/// name or price; rating and category always default.
pub fn build(raw: &RawListing, now: DateTime<Utc>) -> Result<Product, BuildError> {
    let name = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| BuildError {
            field: "name",
            reason: "missing or empty".to_string(),
        })?
        .to_string();

    let price = parse_price(raw.price_text.as_deref())?;
    let rating = parse_rating(raw.rating_text.as_deref());

    let category = raw
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();

    Ok(Product {
        name,
        price,
        rating,
        category,
        scraped_at: now,
    })
}

/// Builds every listing in one batch, all stamped with the same `now`.
/// Bad cards are dropped and counted; the batch itself never fails.
pub fn build_all(raws: &[RawListing], now: DateTime<Utc>) -> BuildOutcome {
    let mut products = Vec::with_capacity(raws.len());
    let mut dropped = 0;

    for raw in raws {
        match build(raw, now) {
            Ok(product) => products.push(product),
            Err(e) => {
                warn!("Dropping card ({}): {:?}", e, raw);
                dropped += 1;
            }
        }
    }

    BuildOutcome { products, dropped }
}

/// Strips everything but digits and the decimal point, then parses.
/// Handles currency symbols and thousands separators; decimal point assumed.
fn parse_price(price_text: Option<&str>) -> Result<f64, BuildError> {
    let raw = price_text.ok_or_else(|| BuildError {
        field: "price",
        reason: "missing".to_string(),
    })?;

    let numeric: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    numeric
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| BuildError {
            field: "price",
            reason: format!("'{}' is not a non-negative number", raw.trim()),
        })
}

/// Bad rating data is tolerated rather than rejected: unparseable or
/// out-of-range values become 0, not a clamp and not an error.
fn parse_rating(rating_text: Option<&str>) -> u8 {
    rating_text
        .and_then(|r| r.trim().parse::<u8>().ok())
        .filter(|r| *r <= 5)
        .unwrap_or(0)
}
