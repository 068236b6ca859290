//! Client for the remote alerts feed
//!
//! Fetches and leniently parses the published alerts document. The base URL
//! is injected so tests can point the client at a mock server.

use std::time::Duration;

use crate::contracts::{AlertRecord, ALERTS_BASE_URL};
use crate::error::{AgentError, Result};

const FEED_PATH: &str = "/alerts.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Alerts feed client
pub struct AlertsFeedClient {
    base_url: String,
    client: reqwest::Client,
}

impl AlertsFeedClient {
    /// Create a client against the given feed base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AgentError::feed(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client against the published alerts site
    pub fn default_feed() -> Result<Self> {
        Self::new(ALERTS_BASE_URL)
    }

    /// Fetch and parse the alerts document.
    ///
    /// An empty body is a valid empty alert list. A non-success status or an
    /// unparseable body is an error; malformed individual records are
    /// skipped inside [`parse_feed`](Self::parse_feed).
    pub async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>> {
        let url = format!("{}{}", self.base_url, FEED_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AgentError::feed(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::feed(format!("feed returned status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AgentError::feed(format!("failed to read feed body: {}", e)))?;

        Self::parse_feed(&body)
    }

    /// Parse a feed document into alert records
    pub fn parse_feed(body: &str) -> Result<Vec<AlertRecord>> {
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<serde_json::Value> = serde_json::from_str(body)
            .map_err(|e| AgentError::parse(format!("feed is not a JSON array: {}", e)))?;

        Ok(values.iter().filter_map(AlertRecord::from_value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_empty_list() {
        assert!(AlertsFeedClient::parse_feed("").unwrap().is_empty());
        assert!(AlertsFeedClient::parse_feed("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_non_array_body_is_parse_error() {
        let err = AlertsFeedClient::parse_feed("{\"not\": \"an array\"}").unwrap_err();
        assert!(matches!(err, AgentError::Parse(_)));

        let err = AlertsFeedClient::parse_feed("not json at all").unwrap_err();
        assert!(matches!(err, AgentError::Parse(_)));
    }

    #[test]
    fn test_malformed_records_do_not_poison_document() {
        let body = r#"[
            {"filename": "dark_sky.markdown", "integrations": [{"package": "darksky"}],
             "alert_url": "https://alerts.home-assistant.io/#dark_sky.markdown"},
            {"integrations": [{"package": "orphan"}]},
            {"filename": "no_url.markdown", "integrations": [{"package": "nourl"}]},
            {"filename": "hikvision.markdown", "integrations": [{"package": "hikvision"}],
             "alert_url": "https://alerts.home-assistant.io/#hikvision.markdown"}
        ]"#;

        let records = AlertsFeedClient::parse_feed(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].filename, "dark_sky.markdown");
        assert_eq!(records[1].filename, "hikvision.markdown");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = AlertsFeedClient::new("http://localhost:1234/").unwrap();
        assert_eq!(client.base_url, "http://localhost:1234");
    }
}
