//! Fetch error types
//!
//! Errors never leave the controller: they are rendered into the view as the
//! `Display` text below.

use thiserror::Error;

/// Errors that can occur while fetching a collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network, DNS or connection failure
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// A 2xx response whose body is not JSON
    #[error("Parse error: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Http { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");

        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = FetchError::Malformed("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "Parse error: expected value at line 1");
    }
}
