use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

use super::models::LookupRecord;

/// Result of one verification. Every submission ends in exactly one of these.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    RequiresNotice,
    NoNoticeRequired,
    NotFound,
    MissingInput,
    ConnectionError,
}

/// Tone a front end should use when rendering an [`Outcome`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    Affirmative,
    Negative,
    Neutral,
    Error,
}

impl Outcome {
    /// Classify the notice flag of a decoded lookup response.
    ///
    /// Only JSON booleans count; strings such as `"true"`, numbers and
    /// `null` all mean no record matched.
    pub fn from_flag(flag: Option<&Value>) -> Self {
        match flag {
            Some(Value::Bool(true)) => Self::RequiresNotice,
            Some(Value::Bool(false)) => Self::NoNoticeRequired,
            _ => Self::NotFound,
        }
    }

    pub const fn category(&self) -> MessageCategory {
        match self {
            Self::RequiresNotice => MessageCategory::Affirmative,
            Self::NoNoticeRequired => MessageCategory::Negative,
            Self::NotFound | Self::MissingInput => MessageCategory::Neutral,
            Self::ConnectionError => MessageCategory::Error,
        }
    }

    pub const fn headline(&self) -> &'static str {
        match self {
            Self::RequiresNotice => "✅ Requiere Aviso Automático",
            Self::NoNoticeRequired => "❌ No requiere Aviso Automático",
            Self::NotFound => "⚠️ No encontrado",
            Self::MissingInput => "Faltan datos",
            Self::ConnectionError => "Error de conexión",
        }
    }

    pub const fn note(&self) -> &'static str {
        match self {
            Self::RequiresNotice => "Podemos ayudarte a gestionarlo y liberar tu importación.",
            Self::NoNoticeRequired => "Aun así, si tu importación está detenida, contáctanos.",
            Self::NotFound => "Revisa la fracción o contáctanos para verificarla manualmente.",
            Self::MissingInput => "Selecciona industria e ingresa una fracción válida.",
            Self::ConnectionError => "No pudimos consultar la API. Intenta de nuevo más tarde.",
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiresNotice => write!(f, "RequiresNotice"),
            Self::NoNoticeRequired => write!(f, "NoNoticeRequired"),
            Self::NotFound => write!(f, "NotFound"),
            Self::MissingInput => write!(f, "MissingInput"),
            Self::ConnectionError => write!(f, "ConnectionError"),
        }
    }
}

/// An [`Outcome`] together with whatever else the service said about the code.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Verification {
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<LookupRecord>,
}

impl Verification {
    pub const fn unanswered(outcome: Outcome) -> Self {
        Self {
            outcome,
            record: None,
        }
    }
}
