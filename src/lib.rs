//! Host-aware HTTP application router.
//!
//! Dispatches an inbound request to one of several configured backend
//! applications: matches by path against an ordered definition list,
//! builds the outbound request (header injection, cookie whitelisting),
//! forwards it through an [`HttpClient`] collaborator, rewrites the
//! response body through the configured transforms, and relays the result
//! to a [`ResponseWriter`] collaborator.
//!
//! ```text
//! inbound request
//!     → routing (match: exact / splat / wildcard, first app wins)
//!     → http::request (build upstream request)
//!     → http::client (forward)
//!     → transform (body rewrites, in configured order)
//!     → http::response (relay status / headers / body)
//!     → Result<(), DispatchError>  (the completion contract)
//! ```
//!
//! The HTTP server, config file loading, and CLI wiring live outside this
//! crate; the router only consumes and exposes the trait boundaries above.
//!
//! ```no_run
//! use std::sync::Arc;
//! use http_app_router::{AppConfig, ReqwestClient, Router};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let apps: Vec<AppConfig> = serde_json::from_str(
//!     r#"[{"name": "github", "host": "github.com", "routes": ["/bendrucker"]}]"#,
//! )?;
//! let router = Router::new(&apps, Arc::new(ReqwestClient::new()?))?;
//! router.on_log(|event: &http_app_router::LogEvent| {
//!     eprintln!("{:?}: {}", event.level, event.message);
//! });
//! # Ok(())
//! # }
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod transform;

// Cross-cutting concerns
pub mod error;
pub mod observability;

pub use config::{AppConfig, HeaderScalar, RoutesConfig, ValidationError};
pub use error::{BoxError, ConfigError, DispatchError};
pub use http::{HttpClient, ReqwestClient, ResponseWriter, UpstreamRequest};
pub use observability::{LogEvent, LogLevel, LogSubscriber};
pub use routing::{Application, MatchKind, Router};
pub use transform::Transform;
