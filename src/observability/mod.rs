//! Observability subsystem.
//!
//! # Design Decisions
//! - Dispatch events go through the router-owned [`log::LogSink`], the
//!   hook the caller subscribes to
//! - The same events mirror to `tracing` so ordinary structured logging
//!   works without a subscriber

pub mod log;

pub use log::{LogEvent, LogLevel, LogSink, LogSubscriber};
