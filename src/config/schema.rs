//! Configuration schema definitions.
//!
//! This module defines the application definitions the router is built from.
//! All types derive Serde traits so callers can deserialize them from
//! whatever format their config layer uses; the router itself never reads
//! files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One backend application: where it lives and how requests reach it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Unique identifier, used in logs and error diagnostics.
    pub name: String,

    /// Upstream origin. A bare hostname defaults to `https`; an explicit
    /// `scheme://` is honored.
    pub host: String,

    /// Paths this application answers for. Defaults to an empty list,
    /// which never matches.
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Headers injected into every outbound request to this application.
    /// Inbound request headers are never forwarded.
    #[serde(default)]
    pub headers: BTreeMap<String, HeaderScalar>,

    /// Names of inbound cookies forwarded upstream. Empty means no
    /// cookies are forwarded.
    #[serde(default)]
    pub cookies: Vec<String>,

    /// Transform names applied to the response body, in order.
    #[serde(default)]
    pub transforms: Vec<String>,
}

/// Route set for one application: the wildcard sentinel `"*"` or an
/// ordered list of patterns.
///
/// The untagged representation accepts both shapes on the wire; validation
/// rejects any scalar other than `"*"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RoutesConfig {
    /// A single string, which must be the `"*"` wildcard.
    Wildcard(String),
    /// Ordered list of exact or splat (`prefix/*`) patterns.
    Patterns(Vec<String>),
}

impl Default for RoutesConfig {
    fn default() -> Self {
        RoutesConfig::Patterns(Vec::new())
    }
}

/// Scalar header value as written in config.
///
/// Rendered textually on the wire: `true` becomes the header value `"true"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HeaderScalar {
    Text(String),
    Flag(bool),
    Number(i64),
}

impl std::fmt::Display for HeaderScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderScalar::Text(s) => f.write_str(s),
            HeaderScalar::Flag(b) => write!(f, "{}", b),
            HeaderScalar::Number(n) => write!(f, "{}", n),
        }
    }
}
