//! Response body transforms.
//!
//! # Design Decisions
//! - Transforms are a fixed enumerable set, resolved by name once at router
//!   construction so an unknown name fails fast instead of per request
//! - Each transform consumes and produces the full body; the pipeline is
//!   pure, synchronous, and performs no I/O

use bytes::Bytes;
use url::Url;

pub mod absolute;

/// A named, pure rewrite of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Rewrite relative `src`/`href` attribute values to absolute URLs on
    /// the upstream origin.
    Absolute,
}

impl Transform {
    /// Resolve a configured transform name.
    pub fn resolve(name: &str) -> Option<Transform> {
        match name {
            "absolute" => Some(Transform::Absolute),
            _ => None,
        }
    }

    /// The configuration name of this transform.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Absolute => "absolute",
        }
    }

    /// Apply this transform to a response body.
    pub fn apply(&self, body: Bytes, origin: &Url) -> Bytes {
        match self {
            Transform::Absolute => absolute::rewrite(body, origin),
        }
    }
}

/// Run a transform pipeline in configured order.
pub fn apply_all(transforms: &[Transform], body: Bytes, origin: &Url) -> Bytes {
    transforms
        .iter()
        .fold(body, |body, transform| transform.apply(body, origin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(Transform::resolve("absolute"), Some(Transform::Absolute));
        assert_eq!(Transform::resolve("absolute").unwrap().name(), "absolute");
    }

    #[test]
    fn test_resolve_unknown_name() {
        assert_eq!(Transform::resolve("relative"), None);
        assert_eq!(Transform::resolve(""), None);
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let origin = Url::parse("https://github.com").unwrap();
        let body = Bytes::from_static(b"untouched");
        assert_eq!(apply_all(&[], body.clone(), &origin), body);
    }
}
