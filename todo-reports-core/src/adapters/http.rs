//! HTTP record source
//!
//! Reads the todos and users collections with a blocking reqwest client.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::ports::{RecordSource, SourceResponse};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking HTTP implementation of [`RecordSource`]
#[derive(Debug)]
pub struct HttpRecordSource {
    client: Client,
    timeout: Duration,
}

impl HttpRecordSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("todo-reports/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, url: &str, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::request(format!(
                "Request to {} timed out after {} seconds",
                url,
                self.timeout.as_secs()
            ))
        } else if error.is_connect() {
            Error::request(format!("Unable to connect to {}", url))
        } else {
            Error::request(format!("Request to {} failed: {}", url, error))
        }
    }
}

impl RecordSource for HttpRecordSource {
    fn name(&self) -> &str {
        "http"
    }

    fn get(&self, url: &str) -> Result<SourceResponse> {
        debug!(url, "sending request");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.map_request_error(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::request(format!("Failed to read response from {}: {}", url, e)))?;

        debug!(url, status, bytes = body.len(), "received response");
        Ok(SourceResponse { status, body })
    }
}
