//! Error types for sqlbatch-rs.
//!
//! The crate owns very few errors by design: configuration problems are
//! rejected at construction time with [`ConfigError`], while anything raised
//! by a caller-supplied executor, collector, or adapter crosses the batcher
//! as a [`BoxError`] without being re-wrapped, so callers can downcast back
//! to their own error type.

use thiserror::Error;

/// Boxed error type used at the executor, collector, and adapter seams.
///
/// The batcher never inspects, retries, or wraps these errors; a failure in
/// any callback aborts the current flush and propagates to the caller with
/// the unflushed batch left intact.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised when constructing a batcher from invalid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration field failed validation
    #[error("Invalid configuration for '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },
}
