//! Dispatch event log sink.
//!
//! # Responsibilities
//! - Carry debug/info events produced during dispatch to subscribers
//! - Mirror every event to `tracing` at the matching level
//!
//! # Design Decisions
//! - Subscribers are invoked synchronously, in registration order
//! - No buffering or replay: a late subscriber sees only later events
//! - The registry is append-only; emissions may interleave with appends

use parking_lot::RwLock;

/// Severity of a dispatch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

/// A single dispatch event, passed by reference to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
}

/// Sink for dispatch events.
///
/// Closures `Fn(&LogEvent)` are subscribers via the blanket impl.
pub trait LogSubscriber: Send + Sync {
    fn on_event(&self, event: &LogEvent);
}

impl<F> LogSubscriber for F
where
    F: Fn(&LogEvent) + Send + Sync,
{
    fn on_event(&self, event: &LogEvent) {
        self(event)
    }
}

/// Multi-subscriber event emitter owned by the router.
#[derive(Default)]
pub struct LogSink {
    subscribers: RwLock<Vec<Box<dyn LogSubscriber>>>,
}

impl LogSink {
    pub fn new() -> LogSink {
        LogSink::default()
    }

    /// Register a subscriber for every subsequent event.
    pub fn subscribe(&self, subscriber: impl LogSubscriber + 'static) {
        self.subscribers.write().push(Box::new(subscriber));
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.emit(LogLevel::Debug, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(LogLevel::Info, message.into());
    }

    fn emit(&self, level: LogLevel, message: String) {
        match level {
            LogLevel::Debug => tracing::debug!("{message}"),
            LogLevel::Info => tracing::info!("{message}"),
        }

        let event = LogEvent { level, message };
        for subscriber in self.subscribers.read().iter() {
            subscriber.on_event(&event);
        }
    }
}
