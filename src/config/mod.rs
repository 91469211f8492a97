//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! caller-supplied definitions (deserialized upstream of this crate)
//!     → schema.rs (typed AppConfig with documented defaults)
//!     → validation.rs (semantic checks, all errors collected)
//!     → compiled Application list (validated, immutable)
//!     → shared by every concurrent dispatch
//! ```
//!
//! # Design Decisions
//! - Definitions are immutable once the router is constructed
//! - Optional fields default to no-ops (empty maps/sets/lists), never errors
//! - The `routes` scalar-vs-list wire duality lives only in the serde layer;
//!   compiled routes are an explicit tagged enum

pub mod schema;
pub mod validation;

pub use schema::{AppConfig, HeaderScalar, RoutesConfig};
pub use validation::{validate, ValidationError};
