//! Loader error types

use thiserror::Error;

/// Why a dataset could not be loaded from its source
#[derive(Error, Debug)]
pub enum LoadError {
    /// The endpoint answered with a non-success status
    #[error("Endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The request never got a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The configured request timeout elapsed
    #[error("Request timed out")]
    Timeout,

    /// Local source could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Body is not JSON, or records have the wrong shape
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    /// Body is JSON but a required top-level field is absent or null
    #[error("Response is missing the `{0}` field")]
    MissingField(&'static str),
}

impl LoadError {
    /// Network failures: the data never arrived
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            LoadError::Status { .. } | LoadError::Transport(_) | LoadError::Timeout | LoadError::Io(_)
        )
    }

    /// Malformed responses: data arrived but cannot be used
    pub fn is_malformed(&self) -> bool {
        !self.is_network()
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::InvalidJson(err.to_string())
    }
}

/// Result type alias for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::Status { status: 503 };
        assert_eq!(err.to_string(), "Endpoint returned HTTP 503");

        let err = LoadError::MissingField("customers");
        assert_eq!(err.to_string(), "Response is missing the `customers` field");
    }

    #[test]
    fn test_classification() {
        assert!(LoadError::Timeout.is_network());
        assert!(LoadError::Transport("refused".into()).is_network());
        assert!(LoadError::MissingField("transactions").is_malformed());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(matches!(err, LoadError::InvalidJson(_)));
        assert!(err.is_malformed());
    }
}
