//! Error types and result handling.
//!
//! Every fallible operation in this crate returns [`Result`] with a
//! [`ConfigError`]. Nothing logs-and-exits: fetch, decode, and key-path
//! lookup failures all propagate to the caller.

use crate::format::Format;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while constructing a client or resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required constructor argument was empty, or a client option was
    /// given an invalid value. Surfaced synchronously at construction.
    #[error("{0}")]
    Validation(String),

    /// The constructed request URL does not parse as a URL.
    ///
    /// `host`, `application`, and `profile` are joined without encoding, so
    /// callers must pass URL-safe values.
    #[error("invalid config url [{url}]: {source}")]
    InvalidUrl {
        /// The URL string that failed to parse.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The request could not be sent or no response was received
    /// (DNS failure, connection refused, broken connection).
    #[error("config resolution failed: {source}")]
    Transport {
        /// The underlying transport error.
        #[from]
        source: reqwest::Error,
    },

    /// The server answered with a status above 299.
    #[error("error fetching config data from [{url}]: status {status}")]
    UnexpectedStatus {
        /// HTTP status code of the response.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// The response body could not be decoded in the configured format.
    ///
    /// The original parser message is preserved for diagnostics.
    #[error("failed to decode {format} config: {message}")]
    Decode {
        /// Format the body was expected to be in.
        format: Format,
        /// Message of the underlying syntax error.
        message: String,
    },

    /// A key-path lookup tried to index into a value that is not a mapping.
    #[error("key [{key}] indexes a non-mapping value")]
    InvalidKeyPath {
        /// The key at which the walk failed.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ConfigError::Validation("server is required".into());
        assert_eq!(err.to_string(), "server is required");
    }

    #[test]
    fn test_decode_preserves_message() {
        let err = ConfigError::Decode {
            format: Format::Yaml,
            message: "mapping values are not allowed in this context".into(),
        };
        assert!(err.to_string().contains("yaml"));
        assert!(err.to_string().contains("mapping values are not allowed"));
    }

    #[test]
    fn test_invalid_url_source_preserved() {
        let source = url::Url::parse("http//nope").unwrap_err();
        let err = ConfigError::InvalidUrl {
            url: "http//nope".into(),
            source,
        };
        assert!(err.to_string().contains("http//nope"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
