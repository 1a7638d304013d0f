//! The `Logger` capability: a pure, leveled side channel the Versioner
//! reports through.
//!
//! Predicates are pure so a caller can gate expensive message formatting;
//! the Versioner itself never lets a disabled level change control flow or
//! the version it computes (see the Design Notes on log-side effects).

/// A leveled log sink consumed by [`crate::get_version`].
pub trait Logger: Send + Sync {
    fn is_trace(&self) -> bool {
        false
    }
    fn is_debug(&self) -> bool {
        false
    }
    fn is_info(&self) -> bool {
        false
    }
    fn is_warn(&self) -> bool {
        false
    }

    fn trace(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    /// `code` is `Some(1001)` for the "not a working directory" warning and
    /// `None` for every other warning this crate emits.
    fn warn(&self, _message: &str, _code: Option<u32>) {}
}

/// Discards every log event. The default for callers with no logging story.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {}

/// Bridges the [`Logger`] capability onto the `tracing` facade, which is how
/// a host process wires this crate's events into its own subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn is_trace(&self) -> bool {
        tracing::enabled!(tracing::Level::TRACE)
    }

    fn is_debug(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }

    fn is_info(&self) -> bool {
        tracing::enabled!(tracing::Level::INFO)
    }

    fn is_warn(&self) -> bool {
        tracing::enabled!(tracing::Level::WARN)
    }

    fn trace(&self, message: &str) {
        tracing::trace!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str, code: Option<u32>) {
        match code {
            Some(code) => tracing::warn!(code, "{message}"),
            None => tracing::warn!("{message}"),
        }
    }
}
