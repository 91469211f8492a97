//! Route matching logic.
//!
//! # Responsibilities
//! - Classify a path against one application's route set
//! - Exact patterns, splat (`prefix/*`) patterns, and the `*` wildcard
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Splat matching is prefix-boundary inclusive: `r/*` matches `r`,
//!   `r/` and `r/anything`, but not a sibling like `rx`
//! - Within one route set the first listed pattern wins; overlap between
//!   later patterns is never consulted
//! - No regex, plain string comparison only

use std::fmt;

/// How a path matched: against an exact pattern, a splat pattern, or the
/// `*` wildcard. Used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Splat,
    Default,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchKind::Exact => "exact",
            MatchKind::Splat => "splat",
            MatchKind::Default => "default",
        })
    }
}

/// A single compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches the path exactly.
    Exact(String),
    /// Matches the stored prefix itself or anything beneath it.
    Splat(String),
}

impl Pattern {
    /// Compile a raw pattern string. A trailing `/*` makes a splat;
    /// anything else is exact.
    pub fn parse(raw: &str) -> Pattern {
        match raw.strip_suffix("/*") {
            Some(prefix) => Pattern::Splat(prefix.to_string()),
            None => Pattern::Exact(raw.to_string()),
        }
    }

    /// Whether this pattern matches the given path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Exact(exact) => path == exact,
            Pattern::Splat(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }

    fn kind(&self) -> MatchKind {
        match self {
            Pattern::Exact(_) => MatchKind::Exact,
            Pattern::Splat(_) => MatchKind::Splat,
        }
    }
}

/// Compiled route set for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routes {
    /// The `*` wildcard: every path matches with [`MatchKind::Default`].
    All,
    /// Ordered patterns, evaluated in listed order.
    Patterns(Vec<Pattern>),
}

impl Routes {
    /// Classify a path against this route set, or `None` if nothing matches.
    pub fn match_path(&self, path: &str) -> Option<MatchKind> {
        match self {
            Routes::All => Some(MatchKind::Default),
            Routes::Patterns(patterns) => patterns
                .iter()
                .find(|pattern| pattern.matches(path))
                .map(Pattern::kind),
        }
    }
}
