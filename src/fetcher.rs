use crate::constants::USER_AGENT;
use crate::error::FetchError;
use std::time::Duration;
use tracing::info;

/// Port for the one network call a scrape cycle makes. Kept as a trait so
/// the pipeline can be driven with canned markup in tests.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking reqwest-backed fetcher with a bounded timeout. No retries;
/// retry policy, if any, belongs to the caller.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("HTTP GET request to: {}", url);
        let resp = self.client.get(url).send().map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = resp.text().map_err(classify)?;
        info!("HTTP response: status={}, size={} bytes", status.as_u16(), body.len());
        Ok(body)
    }
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if let Some(status) = e.status() {
        FetchError::HttpStatus(status.as_u16())
    } else {
        FetchError::Network(e.to_string())
    }
}
