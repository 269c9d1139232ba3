//! Size-bounded SQL statement batching.
//!
//! The batcher groups statements by measured byte size rather than by count,
//! which matches database systems that cap query string length. It is
//! organized into three parts:
//! - `config` - configuration struct and validating builder
//! - `core` - the `Batcher` itself (accumulate, flush, process)
//! - `diagnostics` - structured warning events and the injectable sink
//!
//! # Example
//!
//! ```
//! use sqlbatch_rs::{Batcher, BatcherConfig};
//!
//! let config = BatcherConfig::builder().max_bytes(100_000).build()?;
//! let mut batcher = Batcher::new(config)?;
//!
//! let count = batcher.process_statements(
//!     ["SELECT 1", "SELECT 2"],
//!     |sql| {
//!         // Hand off to a database client here.
//!         let _ = sql;
//!         Ok(())
//!     },
//!     None,
//!     None,
//! )?;
//! assert_eq!(count, 2);
//! # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
//! ```

pub mod config;
pub mod core;
pub mod diagnostics;

// Re-export commonly used types
pub use self::config::{BatcherBuilder, BatcherConfig, DEFAULT_DELIMITER, DEFAULT_MAX_BYTES};
pub use self::core::Batcher;
pub use self::diagnostics::{OversizeWarning, WarningSink};
