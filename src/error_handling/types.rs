//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Errors produced by the validate → request → process pipeline.
///
/// One variant per failure the pipeline can hit; [`LookupError::kind`] maps
/// them onto the coarser [`ErrorKind`] taxonomy.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The access-key file could not be read.
    #[error("Cannot read access key file {path}: {source}")]
    KeyFileUnreadable {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The access-key file exists but is empty.
    #[error("Access key file {0} is of size zero")]
    EmptyKeyFile(PathBuf),

    /// The target address is not a valid IPv4 or IPv6 literal.
    #[error("'{0}' is not a valid IP address")]
    InvalidAddress(String),

    /// The configured endpoint base URL does not parse.
    #[error("Invalid API endpoint '{0}'")]
    InvalidEndpoint(String),

    /// The HTTP request itself failed (connection, I/O, body read).
    ///
    /// No `From` impl on purpose: the wrapped error must go through
    /// `reqwest::Error::without_url` first, since the request URL embeds the
    /// access key.
    #[error("Request to the geodata endpoint failed: {0}")]
    RequestFailed(reqwest::Error),

    /// The API answered with a non-200 status.
    #[error("Upstream returned status {0} instead of 200")]
    UpstreamStatus(u16),

    /// The response did not declare an `application/json` content type.
    #[error("Response content type {} is not JSON as expected", fmt_content_type(.0))]
    UnexpectedContentType(Option<String>),

    /// The response body was not a JSON object.
    #[error("Response body is not a JSON object: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// A required geodata field was absent from the response body.
    #[error("Unable to find {0} in response")]
    MissingField(&'static str),
}

/// Renders the observed content type for the error message.
fn fmt_content_type(content_type: &Option<String>) -> String {
    match content_type {
        Some(ct) => format!("'{ct}'"),
        None => "(absent)".to_string(),
    }
}

impl LookupError {
    /// Categorizes this error into the failure taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::KeyFileUnreadable { .. } | LookupError::EmptyKeyFile(_) => {
                ErrorKind::Configuration
            }
            LookupError::InvalidAddress(_) | LookupError::InvalidEndpoint(_) => {
                ErrorKind::Validation
            }
            LookupError::RequestFailed(_) | LookupError::UpstreamStatus(_) => ErrorKind::Upstream,
            LookupError::UnexpectedContentType(_) | LookupError::MalformedBody(_) => {
                ErrorKind::Format
            }
            LookupError::MissingField(_) => ErrorKind::MissingField,
        }
    }
}

/// Coarse failure categories for lookup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Key file missing, unreadable, or empty.
    Configuration,
    /// Malformed target address or endpoint.
    Validation,
    /// The request failed or the API answered with a non-200 status.
    Upstream,
    /// The response was not JSON of the expected shape.
    Format,
    /// A required geodata field was absent.
    MissingField,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Validation => "validation",
            ErrorKind::Upstream => "upstream",
            ErrorKind::Format => "format",
            ErrorKind::MissingField => "missing-field",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_cover_taxonomy() {
        assert_eq!(
            LookupError::EmptyKeyFile(PathBuf::from("/tmp/.key")).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            LookupError::InvalidAddress("gibberish".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(LookupError::UpstreamStatus(401).kind(), ErrorKind::Upstream);
        assert_eq!(
            LookupError::UnexpectedContentType(Some("text/html".into())).kind(),
            ErrorKind::Format
        );
        assert_eq!(
            LookupError::MissingField("latitude").kind(),
            ErrorKind::MissingField
        );
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = LookupError::MissingField("longitude");
        assert_eq!(err.to_string(), "Unable to find longitude in response");

        let err = LookupError::UpstreamStatus(400);
        assert!(err.to_string().contains("400"));

        let err = LookupError::InvalidAddress("8.8.8.".into());
        assert!(err.to_string().contains("8.8.8."));
    }

    #[test]
    fn test_content_type_mismatch_renders_plainly() {
        let err = LookupError::UnexpectedContentType(Some("text/html".into()));
        assert_eq!(
            err.to_string(),
            "Response content type 'text/html' is not JSON as expected"
        );

        let err = LookupError::UnexpectedContentType(None);
        assert_eq!(
            err.to_string(),
            "Response content type (absent) is not JSON as expected"
        );
    }
}
