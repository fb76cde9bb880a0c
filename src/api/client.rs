use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::{config::ClientConfig, errors::RequestFailure, tariff_code::TariffCode};

use super::errors::ApiClientError;
use super::models::{HealthStatus, LookupRecord, Origin, VerificationRequest};
use super::transport::{HttpTransport, RawResponse, Transport};
use super::types::{Outcome, Verification};

/// Asks the lookup service whether a tariff code needs an Aviso Automático.
///
/// Holds no mutable state; clones share the same transport and calls are
/// independent of each other.
#[derive(Clone)]
pub struct VerificationClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl VerificationClient {
    /// # Errors
    ///
    /// Fails if the configured base `Url` cannot be a base. We rely on that
    /// invariant when appending the query.
    pub fn new(config: ClientConfig) -> Result<Self, ApiClientError> {
        Self::with_transport(config, HttpTransport::new())
    }

    /// # Errors
    ///
    /// Same as [`VerificationClient::new`].
    pub fn with_transport(
        config: ClientConfig,
        transport: impl Transport + 'static,
    ) -> Result<Self, ApiClientError> {
        // Test here so that we are sure query_pairs_mut is meaningful
        if config.base_url.cannot_be_a_base() {
            Err(ApiClientError::CannotBeBase(config.base_url))
        } else {
            Ok(Self {
                config: Arc::new(config),
                transport: Arc::new(transport),
            })
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn lookup_url(&self, code: &TariffCode, industry: &str, origin: Origin) -> Url {
        let params = &self.config.params;
        let mut url = self.config.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            if let Some(name) = &params.origin {
                query.append_pair(name, origin.as_str());
            }
            query.append_pair(&params.industry, industry);
            query.append_pair(&params.code, code.as_str());
        }
        url
    }

    /// The base URL with its last path segment replaced by `health`.
    /// A trailing slash does not count as a segment, so `/consulta` and
    /// `/consulta/` both map to `/health`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn health_url(&self) -> Result<Url, ApiClientError> {
        let mut base = self.config.base_url.clone();
        let base_clone = base.clone();
        base.set_query(None);
        base.path_segments_mut()
            .map_err(|_| ApiClientError::CannotBeBase(base_clone))?
            .pop_if_empty();
        base.join("health").map_err(ApiClientError::from)
    }

    /// Runs one verification and reports only its [`Outcome`].
    pub fn verify(&self, request: VerificationRequest) -> Outcome {
        self.check(request).outcome
    }

    /// Runs one verification.
    ///
    /// Never fails: incomplete input short-circuits to
    /// [`Outcome::MissingInput`] without touching the network, and every
    /// transport, status or decoding failure becomes
    /// [`Outcome::ConnectionError`]. A successful answer that is JSON but not
    /// an object carries no verdict and is [`Outcome::NotFound`]; a bare
    /// `null` is treated as undecodable.
    pub fn check(&self, request: VerificationRequest) -> Verification {
        let origin = request.origin();
        let industry = request.industry.trim();
        let code = request.code.trim();

        if industry.is_empty() || code.is_empty() || self.config.is_placeholder(industry) {
            log::debug!("Incomplete submission: industry={industry:?}, code={code:?}");
            return Verification::unanswered(Outcome::MissingInput);
        }

        let code = TariffCode::normalize(code);
        let url = self.lookup_url(&code, industry, origin);

        match self.lookup(&url) {
            Ok(Value::Object(body)) => {
                let outcome = Outcome::from_flag(body.get(&self.config.notice_field));
                log::debug!("Lookup of {code} classified as {outcome}");
                Verification {
                    outcome,
                    record: Some(LookupRecord::from_map(&body)),
                }
            }
            Ok(other) => {
                log::debug!("Lookup of {code} answered {}, no verdict", kind(&other));
                Verification::unanswered(Outcome::from_flag(None))
            }
            Err(err) => {
                log::warn!("Lookup of {code} failed [{}]: {err}", err.error_code());
                Verification::unanswered(Outcome::ConnectionError)
            }
        }
    }

    fn lookup(&self, url: &Url) -> Result<Value, ApiClientError> {
        log::debug!("GET {url}");
        let response = self.transport.get(url)?;
        let body = Self::success_body(url, response)?;
        log::debug!("Raw API Response: {body}");

        match serde_json::from_str::<Value>(&body)? {
            Value::Null => Err(ApiClientError::UnexpectedShape(
                "expected a JSON object, got null".to_string(),
            )),
            value => Ok(value),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` on network failure, a non-success status, or a body
    /// that is not a health report.
    pub fn health(&self) -> Result<HealthStatus, ApiClientError> {
        let url = self.health_url()?;
        let response = self.transport.get(&url)?;
        let body = Self::success_body(&url, response)?;

        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse JSON response: {e}");
            log::error!("Response text: {body}");
            ApiClientError::from(e)
        })
    }

    fn success_body(url: &Url, response: RawResponse) -> Result<String, ApiClientError> {
        if response.status.is_success() {
            Ok(response.body)
        } else {
            Err(ApiClientError::from(RequestFailure::new(
                url.clone(),
                response.status,
                response.body,
            )))
        }
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
