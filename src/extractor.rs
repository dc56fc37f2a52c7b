use crate::config::SelectorConfig;
use crate::error::{ExtractError, Result, ScraperError};
use crate::types::RawListing;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// Compiled form of [`SelectorConfig`]. Compiling up front surfaces a bad
/// selector expression as a configuration error before any network call.
#[derive(Debug)]
pub struct Selectors {
    card: Selector,
    name: Selector,
    price: Selector,
    /// Attribute selector `[attr]` derived from `rating_attribute`, plus
    /// the attribute name itself for the value lookup.
    rating: Selector,
    rating_attribute: String,
    category: Option<Selector>,
}

impl Selectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        let category = match &config.category_selector {
            Some(expr) => Some(parse_selector(expr, "category_selector")?),
            None => None,
        };
        Ok(Self {
            card: parse_selector(&config.card_selector, "card_selector")?,
            name: parse_selector(&config.name_selector, "name_selector")?,
            price: parse_selector(&config.price_selector, "price_selector")?,
            rating: parse_selector(
                &format!("[{}]", config.rating_attribute),
                "rating_attribute",
            )?,
            rating_attribute: config.rating_attribute.clone(),
            category,
        })
    }
}

fn parse_selector(expression: &str, option_name: &str) -> Result<Selector> {
    Selector::parse(expression).map_err(|e| {
        ScraperError::Config(format!(
            "invalid {} '{}': {}",
            option_name, expression, e
        ))
    })
}

/// Pulls one [`RawListing`] per card match. A missing sub-match nulls that
/// field only; one malformed card never drops the rest. Zero card matches
/// is a valid "no products" outcome, not an error.
pub fn extract(markup: &str, selectors: &Selectors) -> std::result::Result<Vec<RawListing>, ExtractError> {
    // The HTML5 parser recovers from almost anything, so the only input it
    // cannot treat as a document is a blank one.
    if markup.trim().is_empty() {
        return Err(ExtractError::MalformedDocument);
    }
    let document = Html::parse_document(markup);

    let mut listings = Vec::new();
    for card in document.select(&selectors.card) {
        let listing = RawListing {
            name: select_text(card, &selectors.name),
            price_text: select_text(card, &selectors.price),
            rating_text: select_attribute(card, &selectors.rating, &selectors.rating_attribute),
            category: selectors
                .category
                .as_ref()
                .and_then(|sel| select_text(card, sel)),
        };
        debug!("Extracted card: {:?}", listing);
        listings.push(listing);
    }

    info!("Extracted {} product cards", listings.len());
    Ok(listings)
}

fn select_text(card: ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

fn select_attribute(card: ElementRef, selector: &Selector, attribute: &str) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|el| el.value().attr(attribute))
        .map(|v| v.to_string())
}
