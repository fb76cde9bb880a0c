use reqwest::StatusCode;
use std::fmt::{self, Formatter};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub struct RequestFailure {
    pub url: Url,
    pub status: StatusCode,
    pub msg: String,
}

impl RequestFailure {
    pub fn new(url: Url, status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            url,
            status,
            msg: msg.into(),
        }
    }

    pub fn suggestions(&self) -> Vec<&'static str> {
        match self.status {
            StatusCode::NOT_FOUND => vec![
                "Check that the lookup endpoint path is correct",
                "The default endpoint ends in /consulta",
            ],
            StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => vec![
                "Check the query parameter convention (--convention web|consulta)",
                "The service may require an origin parameter (mx or us)",
            ],
            StatusCode::SERVICE_UNAVAILABLE => vec![
                "The tariff database is not loaded on the service",
                "Try again later",
            ],
            status if status.is_server_error() => vec![
                "The lookup service is having problems",
                "Try again later",
            ],
            _ => vec!["Check the API URL and try again"],
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "[E002] {}\n returned {}, with:\n{}",
            self.url, self.status, self.msg
        )?;

        writeln!(formatter, "\n\nSuggestions:")?;
        for suggestion in self.suggestions() {
            writeln!(formatter, "  • {suggestion}")?;
        }

        Ok(())
    }
}
