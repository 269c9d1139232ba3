//! # sqlbatch-rs
//!
//! Size-bounded SQL statement batching with pluggable execution.
//!
//! This library groups SQL statements into batches that respect a byte-size
//! ceiling and drives each batch through a caller-supplied execution
//! function. It is aimed at database systems like Trino, Spark, and
//! Snowflake that cap query string size, where batching by byte count is
//! more useful than batching by statement count.
//!
//! The batcher is content-agnostic: it never parses, validates, or reorders
//! SQL. Connection handling, retries, and transaction scoping belong to the
//! caller and its [`SqlAdapter`] collaborator.
//!
//! ## Example
//!
//! ```
//! use sqlbatch_rs::{Batcher, BatcherConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = BatcherConfig::builder().max_bytes(100_000).build()?;
//! let mut batcher = Batcher::new(config)?;
//!
//! let statements = [
//!     "INSERT INTO users VALUES (1, 'Alice')",
//!     "INSERT INTO users VALUES (2, 'Bob')",
//! ];
//!
//! let mut executed: Vec<String> = Vec::new();
//! let count = batcher.process_statements(
//!     statements,
//!     |sql| {
//!         // In a real scenario this would hand the SQL to a database client.
//!         executed.push(sql.to_string());
//!         Ok(())
//!     },
//!     None,
//!     None,
//! )?;
//!
//! assert_eq!(count, 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Dry runs
//!
//! With `dry_run` enabled the execution function is never invoked; batches
//! are appended to a [`QueryCollector`] instead, so the exact SQL that would
//! have run can be inspected or persisted:
//!
//! ```
//! use sqlbatch_rs::{Batcher, BatcherConfig, ListQueryCollector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = BatcherConfig::builder().dry_run(true).build()?;
//! let mut batcher = Batcher::new(config)?;
//! let mut collector = ListQueryCollector::new();
//!
//! batcher.process_statements(
//!     ["DELETE FROM audit_log WHERE age > 90"],
//!     |_sql| Ok(()),
//!     Some(&mut collector),
//!     None,
//! )?;
//!
//! assert_eq!(collector.len(), 1);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod adapter;
pub mod batcher;
pub mod collector;
pub mod error;

// Re-export public API
pub use adapter::{ExecuteResult, GenericAdapter, Row, SqlAdapter};
pub use batcher::{
    Batcher, BatcherBuilder, BatcherConfig, OversizeWarning, WarningSink, DEFAULT_DELIMITER,
    DEFAULT_MAX_BYTES,
};
pub use collector::{CollectedQuery, ListQueryCollector, Metadata, QueryCollector};
pub use error::{BoxError, ConfigError};
