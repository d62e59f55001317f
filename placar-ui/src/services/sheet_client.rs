//! Published-sheet CSV client
//!
//! Single-shot text fetch of a published spreadsheet export. One attempt
//! per dataset per ingestion cycle; no retry, caching or cancellation
//! beyond the request timeout.

use std::time::Duration;

use thiserror::Error;

const USER_AGENT: &str = concat!("placar/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sheet fetch errors
#[derive(Debug, Error)]
pub enum SheetError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Server returned a non-success status
    #[error("HTTP {0} fetching sheet")]
    Status(u16),
}

/// HTTP client for published CSV exports
#[derive(Clone)]
pub struct SheetClient {
    http: reqwest::Client,
}

impl SheetClient {
    /// Create a new sheet client
    pub fn new() -> Result<Self, SheetError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SheetError::Network(e.to_string()))?;
        Ok(Self { http })
    }

    /// Fetch a published CSV export as text
    pub async fn fetch_csv(&self, url: &str) -> Result<String, SheetError> {
        tracing::debug!(url = %url, "Fetching sheet");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SheetError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SheetError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds() {
        assert!(SheetClient::new().is_ok());
    }
}
