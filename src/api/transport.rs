use reqwest::{
    blocking::{self, Client},
    StatusCode,
};
use url::Url;

use super::errors::ApiClientError;

/// Status and body of one HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single GET. Implementations must not retry.
///
/// Transports not built on `reqwest` report their own failures through
/// [`ApiClientError::IoError`] (via `From<std::io::Error>`).
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns `Err` when no response was received at all.
    fn get(&self, url: &Url) -> Result<RawResponse, ApiClientError>;
}

/// The production transport, a blocking `reqwest` client with its default
/// timeout.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: blocking::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<RawResponse, ApiClientError> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        let body = response.text()?;

        Ok(RawResponse { status, body })
    }
}
