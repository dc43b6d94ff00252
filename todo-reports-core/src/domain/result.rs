//! Result and error types for the core library

use std::path::PathBuf;

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    /// At least one endpoint answered with a non-success status.
    /// Both statuses are kept so the operator sees the full picture.
    #[error(
        "Failed to fetch data: todos request returned HTTP {todos_status}, \
         users request returned HTTP {users_status}"
    )]
    Fetch { todos_status: u16, users_status: u16 },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a request (transport) error
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a write error for the given path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether this is the reported, non-fatal fetch failure
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_mentions_both_statuses() {
        let err = Error::Fetch {
            todos_status: 500,
            users_status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("404"));
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn test_write_error_names_path() {
        let err = Error::write(
            "tasks/ann.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("ann.txt"));
        assert!(!err.is_fetch_failure());
    }

    #[test]
    fn test_every_variant_is_produced_by_a_real_path() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let errors = vec![
            Error::Fetch {
                todos_status: 500,
                users_status: 200,
            },
            Error::request("connection refused"),
            Error::write("x.txt", std::io::Error::other("full")),
            Error::config("bad url"),
            Error::from(std::io::Error::other("io")),
            Error::from(json_err),
        ];

        // Exhaustive on purpose: a variant with no producer must not be added
        let labels: Vec<&str> = errors
            .iter()
            .map(|e| match e {
                Error::Fetch { .. } => "fetch",
                Error::Request(_) => "request",
                Error::Write { .. } => "write",
                Error::Config(_) => "config",
                Error::Io(_) => "io",
                Error::Json(_) => "json",
            })
            .collect();
        assert_eq!(labels, vec!["fetch", "request", "write", "config", "io", "json"]);
    }
}
