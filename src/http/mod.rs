//! HTTP boundary types.
//!
//! # Data Flow
//! ```text
//! inbound http::Request<Bytes>
//!     → request.rs (build UpstreamRequest: origin URL, injected headers,
//!       whitelisted cookies)
//!     → client.rs (HttpClient collaborator performs the call)
//!     → response.rs (ResponseWriter collaborator receives the relay)
//! ```

pub mod client;
pub mod request;
pub mod response;

pub use client::{HttpClient, ReqwestClient};
pub use request::UpstreamRequest;
pub use response::ResponseWriter;
