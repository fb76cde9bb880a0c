use thiserror::Error;
use url::Url;

use crate::errors::RequestFailure;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("[E001] Invalid base URL: {0}\n\nSuggestions:\n  • Provide a valid HTTP or HTTPS URL\n  • Example: https://northcross-api.onrender.com/consulta\n  • Ensure the URL includes the protocol (http:// or https://)")]
    CannotBeBase(Url),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Failure(#[from] RequestFailure),

    #[error("[E003] Failed to decode lookup response: {0}\n\nSuggestions:\n  • Check that the URL points at the lookup endpoint\n  • The service must answer with a JSON object")]
    Decode(#[from] serde_json::Error),

    #[error("[E004] Unexpected response shape: {0}\n\nSuggestions:\n  • The service must answer with a JSON object\n  • Check that the URL points at the lookup endpoint")]
    UnexpectedShape(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("[E005] Invalid URL format: {0}\n\nSuggestions:\n  • Check the URL format is correct\n  • Use absolute URLs with protocol (http:// or https://)")]
    UrlParse(#[from] url::ParseError),
}

impl ApiClientError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CannotBeBase(_) => "E001",
            Self::Reqwest(_) | Self::IoError(_) => "E999", // Network errors get generic code
            Self::Failure(_) => "E002",
            Self::Decode(_) => "E003",
            Self::UnexpectedShape(_) => "E004",
            Self::UrlParse(_) => "E005",
        }
    }
}
