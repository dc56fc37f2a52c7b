//! Defaults for the demo target: the webscraper.io e-commerce test page.

pub const DEFAULT_URL: &str = "https://webscraper.io/test-sites/e-commerce/allinone";

pub const DEFAULT_CARD_SELECTOR: &str = "div.product-wrapper";
pub const DEFAULT_NAME_SELECTOR: &str = "a.title";
pub const DEFAULT_PRICE_SELECTOR: &str = "h4.price";
pub const DEFAULT_RATING_ATTRIBUTE: &str = "data-rating";

pub const DEFAULT_CATEGORY: &str = "Uncategorized";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_DISTRIBUTION_BIN_COUNT: usize = 10;
pub const DEFAULT_TOP_RATED_COUNT: usize = 10;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
