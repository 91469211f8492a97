//! Error types for router construction and dispatch.

use http::{Method, StatusCode};
use thiserror::Error;

use crate::config::validation::ValidationError;

/// Boxed error preserving the collaborator's native error as the source.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One or more application definitions were rejected at construction.
///
/// Carries every validation failure found, not just the first.
#[derive(Debug)]
pub struct ConfigError {
    pub errors: Vec<ValidationError>,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid application config: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

/// Errors reported for a single dispatch.
///
/// Dispatch never panics and never degrades silently; every failure is
/// classified into one of these kinds and returned to the caller.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No application's routes matched the request path.
    #[error("no application matched {path}")]
    NotFound { path: String },

    /// Method other than GET/HEAD; routes are never consulted.
    #[error("method {method} is not allowed")]
    MethodNotAllowed { method: Method },

    /// The HTTP client collaborator failed (DNS, connect, timeout, reset).
    /// The native error is preserved unmodified as the source.
    #[error("upstream request failed")]
    Upstream(#[source] BoxError),
}

impl DispatchError {
    /// Conventional HTTP status for routing failures.
    ///
    /// Transport failures have no status mapping; translating them into a
    /// client-visible response is the server layer's decision.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            DispatchError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            DispatchError::MethodNotAllowed { .. } => Some(StatusCode::METHOD_NOT_ALLOWED),
            DispatchError::Upstream(_) => None,
        }
    }
}
