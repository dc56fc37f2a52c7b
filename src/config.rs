use crate::constants;
use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_bin_count")]
    pub distribution_bin_count: usize,
    #[serde(default = "default_top_rated_count")]
    pub top_rated_count: usize,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// Structural selectors for the target page. `rating_attribute` is an
/// attribute name, not a selector: the extractor reads it off the first
/// descendant that carries it.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    #[serde(default = "default_card_selector")]
    pub card_selector: String,
    #[serde(default = "default_name_selector")]
    pub name_selector: String,
    #[serde(default = "default_price_selector")]
    pub price_selector: String,
    #[serde(default = "default_rating_attribute")]
    pub rating_attribute: String,
    /// The demo site carries no category markup, so this has no default.
    #[serde(default)]
    pub category_selector: Option<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            card_selector: default_card_selector(),
            name_selector: default_name_selector(),
            price_selector: default_price_selector(),
            rating_attribute: default_rating_attribute(),
            category_selector: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout_seconds(),
            distribution_bin_count: default_bin_count(),
            top_rated_count: default_top_rated_count(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl Config {
    /// Loads the config file, or falls back to the built-in demo-site
    /// defaults when the file does not exist.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::info!(
                "Config file '{}' not found, using built-in defaults",
                config_path.display()
            );
            return Ok(Config::default());
        }
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.distribution_bin_count == 0 {
            return Err(ScraperError::Config(
                "distribution_bin_count must be at least 1".to_string(),
            ));
        }
        if self.top_rated_count == 0 {
            return Err(ScraperError::Config(
                "top_rated_count must be at least 1".to_string(),
            ));
        }
        if self.url.trim().is_empty() {
            return Err(ScraperError::Config("url must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_url() -> String {
    constants::DEFAULT_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    constants::DEFAULT_TIMEOUT_SECONDS
}

fn default_bin_count() -> usize {
    constants::DEFAULT_DISTRIBUTION_BIN_COUNT
}

fn default_top_rated_count() -> usize {
    constants::DEFAULT_TOP_RATED_COUNT
}

fn default_card_selector() -> String {
    constants::DEFAULT_CARD_SELECTOR.to_string()
}

fn default_name_selector() -> String {
    constants::DEFAULT_NAME_SELECTOR.to_string()
}

fn default_price_selector() -> String {
    constants::DEFAULT_PRICE_SELECTOR.to_string()
}

fn default_rating_attribute() -> String {
    constants::DEFAULT_RATING_ATTRIBUTE.to_string()
}
