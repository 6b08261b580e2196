//! Error types for the Alexa ISP helpers.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching in-skill products.
///
/// Every variant is terminal for the call that produced it; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The outbound request could not be built (missing endpoint or token, bad URL, bad header)
    #[error("Request construction error: {0}")]
    RequestConstruction(String),

    /// Network, DNS or TLS failure
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The configured timeout elapsed before the call completed
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The ISP service answered with a non-2xx status
    #[error("ISP service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be read to completion
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The body was not a valid product response
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequestConstruction,
    Transport,
    Decode,
    BodyClose,
}

impl Error {
    /// Get the taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RequestConstruction(_) => ErrorKind::RequestConstruction,
            Error::Transport(_) | Error::Timeout(_) | Error::Status { .. } => ErrorKind::Transport,
            Error::Body(_) => ErrorKind::BodyClose,
            Error::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Whether the failure was the client timeout firing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// Map a reqwest failure from `send()` onto our variants.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err)
        } else if err.is_builder() {
            Error::RequestConstruction(err.to_string())
        } else {
            Error::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let err = Error::RequestConstruction("missing apiEndpoint".to_string());
        assert_eq!(err.kind(), ErrorKind::RequestConstruction);

        let err = Error::Status {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!err.is_timeout());

        let err = Error::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_status_message() {
        let err = Error::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "ISP service returned status 500: boom");
    }
}
