//! Error taxonomy for rate lookups

use reqwest::StatusCode;

/// Broad category of a [`RateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Format,
    Arithmetic,
}

#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Connection, timeout or body read failure. The wrapped error never
    /// carries the request URL since it holds the access key.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP error: {status} for date: {date}")]
    HttpStatus { status: StatusCode, date: String },

    #[error("failed to parse rate response for {date}: {reason}")]
    Format { date: String, reason: String },

    #[error("upstream error {code} ({kind}) for {date}: {info}")]
    Upstream {
        date: String,
        code: i64,
        kind: String,
        info: String,
    },

    #[error("no rate for currency: {0}")]
    MissingCurrency(String),

    #[error("rate for {0} is zero, cross-rate is undefined")]
    ZeroRate(String),
}

impl RateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RateError::Configuration(_) => ErrorKind::Configuration,
            RateError::Transport(_) | RateError::HttpStatus { .. } => ErrorKind::Transport,
            RateError::Format { .. }
            | RateError::Upstream { .. }
            | RateError::MissingCurrency(_) => ErrorKind::Format,
            RateError::ZeroRate(_) => ErrorKind::Arithmetic,
        }
    }
}

impl From<reqwest::Error> for RateError {
    fn from(err: reqwest::Error) -> Self {
        RateError::Transport(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            RateError::Configuration("missing".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            RateError::HttpStatus {
                status: StatusCode::NOT_FOUND,
                date: "2010-06-25".into()
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            RateError::MissingCurrency("XYZ".into()).kind(),
            ErrorKind::Format
        );
        assert_eq!(
            RateError::Upstream {
                date: "2010-06-25".into(),
                code: 101,
                kind: "invalid_access_key".into(),
                info: "bad key".into()
            }
            .kind(),
            ErrorKind::Format
        );
        assert_eq!(RateError::ZeroRate("GBP".into()).kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RateError::MissingCurrency("XYZ".into()).to_string(),
            "no rate for currency: XYZ"
        );
        assert_eq!(
            RateError::HttpStatus {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                date: "2010-06-25".into()
            }
            .to_string(),
            "HTTP error: 500 Internal Server Error for date: 2010-06-25"
        );
    }
}
