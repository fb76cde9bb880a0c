use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Which nomenclature the code belongs to.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Mexican TIGIE fracción
    #[default]
    Mx,

    /// U.S. HTSUS code
    Us,
}

impl Origin {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mx => "mx",
            Self::Us => "us",
        }
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0} is not a known origin, expected mx or us")]
pub struct UnknownOrigin(pub String);

impl FromStr for Origin {
    type Err = UnknownOrigin;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mx" => Ok(Self::Mx),
            "us" => Ok(Self::Us),
            _ => Err(UnknownOrigin(raw.to_string())),
        }
    }
}

/// One user submission, consumed by a single verification.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct VerificationRequest {
    #[serde(default)]
    pub origin: Option<Origin>,
    pub industry: String,
    pub code: String,
}

impl VerificationRequest {
    pub fn new(industry: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            origin: None,
            industry: industry.into(),
            code: code.into(),
        }
    }

    #[must_use]
    pub const fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn origin(&self) -> Origin {
        self.origin.unwrap_or_default()
    }
}

/// Descriptive fields the lookup service sends next to the notice flag.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LookupRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl LookupRecord {
    /// Picks the known string fields out of a response body, ignoring the rest.
    pub fn from_map(body: &Map<String, Value>) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            mensaje: text("mensaje"),
            descripcion: text("descripcion"),
            match_source: text("match_source"),
            code: text("code"),
            industria: text("industria"),
            origin: text("origin"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub origins: Vec<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_origin_parsing() {
        assert_eq!("mx".parse::<Origin>(), Ok(Origin::Mx));
        assert_eq!(" US ".parse::<Origin>(), Ok(Origin::Us));
        assert_eq!(
            "ca".parse::<Origin>(),
            Err(UnknownOrigin("ca".to_string()))
        );
    }

    #[test]
    fn test_origin_defaults_to_mx() {
        let request = VerificationRequest::new("acero", "72081000");
        assert_eq!(request.origin(), Origin::Mx);
        assert_eq!(request.with_origin(Origin::Us).origin(), Origin::Us);
    }

    #[test]
    fn test_request_deserializes_without_origin() {
        let request: VerificationRequest =
            serde_json::from_str(r#"{"industry":"textil","code":"6109.10.01"}"#).unwrap();
        assert_eq!(request.origin, None);
        assert_eq!(request.industry, "textil");
    }

    #[test]
    fn test_lookup_record_from_map() {
        let body = json!({
            "requiere_aviso_automatico": true,
            "industria": "acero",
            "origin": "mx",
            "code": "7208.10.00",
            "match_source": "override/prefix",
            "descripcion": "Productos laminados planos de hierro",
            "extra": 3
        });
        let record = LookupRecord::from_map(body.as_object().unwrap());

        assert_eq!(record.code.as_deref(), Some("7208.10.00"));
        assert_eq!(record.match_source.as_deref(), Some("override/prefix"));
        assert_eq!(
            record.descripcion.as_deref(),
            Some("Productos laminados planos de hierro")
        );
        assert!(record.mensaje.is_none());
    }

    #[test]
    fn test_lookup_record_ignores_non_strings() {
        let body = json!({ "mensaje": null, "code": 72081000 });
        let record = LookupRecord::from_map(body.as_object().unwrap());
        assert!(record.is_empty());
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"status":"ok","origins":["https://www.northcrossconsulting.com"]}"#,
        )
        .unwrap();
        assert!(health.is_ok());
        assert_eq!(health.origins.len(), 1);

        let health: HealthStatus = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!health.is_ok());
        assert!(health.origins.is_empty());
    }
}
