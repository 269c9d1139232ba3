//! Warning diagnostics emitted while batching.
//!
//! Oversized statements are a policy case, not an error: the batcher isolates
//! them into a singleton flush and reports the event through an injectable
//! sink. The default sink forwards to `tracing::warn!`, so embedders that
//! only want log output need no wiring; tests and callers that want
//! structured events install their own sink with
//! [`crate::Batcher::with_warning_sink`].

use std::fmt;
use tracing::warn;

/// Event describing a statement whose measured size alone exceeds the
/// configured batch ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OversizeWarning {
    /// Measured size of the offending statement in bytes
    pub statement_bytes: usize,

    /// The configured maximum batch size in bytes
    pub max_bytes: usize,
}

impl fmt::Display for OversizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Statement size ({} bytes) exceeds max_bytes ({}); it will be executed individually",
            self.statement_bytes, self.max_bytes
        )
    }
}

/// Boxed callback receiving warning events from a batcher.
pub type WarningSink = Box<dyn FnMut(&OversizeWarning) + Send>;

/// Default sink: log the event at warning level.
pub(crate) fn default_warning_sink() -> WarningSink {
    Box::new(|warning: &OversizeWarning| {
        warn!(
            statement_bytes = warning.statement_bytes,
            max_bytes = warning.max_bytes,
            "{}",
            warning
        );
    })
}
