//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (method, path)
//!     → router.rs (application lookup, list order)
//!     → matcher.rs (evaluate exact / splat / wildcard patterns)
//!     → Return: matched Application + MatchKind, or no match
//!
//! Compilation (at construction):
//!     AppConfig[]
//!     → parse origins, patterns, headers, transforms
//!     → Freeze as immutable Application list
//! ```
//!
//! # Design Decisions
//! - Definitions compiled at construction, immutable at runtime
//! - No regex in the match path (string comparison only)
//! - Deterministic: first application in list order wins
//! - Host is never a match discriminator; it only names the forward target

pub mod matcher;
pub mod router;

pub use matcher::MatchKind;
pub use router::{Application, Router};
