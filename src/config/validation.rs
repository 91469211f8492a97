//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject duplicate or empty application names
//! - Reject unparseable hosts, malformed headers, unknown transforms
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: `&[AppConfig]` → `Result<(), Vec<ValidationError>>`
//! - Shares the compilation path used by `Router::new`, so anything that
//!   validates also constructs

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::router::Application;

/// A single rejected property of an application definition.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// An application has an empty name.
    #[error("application name is empty")]
    EmptyName,

    /// Two applications share a name.
    #[error("duplicate application name: {0}")]
    DuplicateName(String),

    /// The host could not be parsed into an origin URL.
    #[error("application {name}: invalid host {host:?}: {source}")]
    InvalidHost {
        name: String,
        host: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured header name is not a valid HTTP header name.
    #[error("application {name}: invalid header name {header:?}")]
    InvalidHeaderName { name: String, header: String },

    /// A configured header value cannot be carried in an HTTP header.
    #[error("application {name}: invalid value for header {header:?}")]
    InvalidHeaderValue { name: String, header: String },

    /// A transform name does not resolve to a built-in transform.
    #[error("application {name}: unknown transform {transform:?}")]
    UnknownTransform { name: String, transform: String },

    /// Routes given as a scalar other than the `"*"` wildcard.
    #[error("application {name}: routes must be \"*\" or a pattern list, got {value:?}")]
    InvalidRoutes { name: String, value: String },
}

/// Validate a full application list, collecting every error.
pub fn validate(configs: &[AppConfig]) -> Result<(), Vec<ValidationError>> {
    let mut errors = check_names(configs);

    for config in configs {
        if let Err(errs) = Application::compile(config) {
            errors.extend(errs);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Cross-application checks: names must be present and unique.
pub(crate) fn check_names(configs: &[AppConfig]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for config in configs {
        if config.name.is_empty() {
            errors.push(ValidationError::EmptyName);
        } else if !seen.insert(config.name.as_str()) {
            errors.push(ValidationError::DuplicateName(config.name.clone()));
        }
    }

    errors
}
