//! Query collection for dry runs.
//!
//! In dry-run mode the batcher never calls the executor; instead each flush
//! appends a [`CollectedQuery`] record to a caller-supplied
//! [`QueryCollector`]. The collector is an append-only sink from the
//! batcher's point of view: records are written during processing and read
//! back by the caller afterwards.
//!
//! # Example
//!
//! ```
//! use sqlbatch_rs::{Batcher, BatcherConfig, ListQueryCollector, QueryCollector};
//!
//! let config = BatcherConfig::builder().max_bytes(100).dry_run(true).build()?;
//! let mut batcher = Batcher::new(config)?;
//! let mut collector = ListQueryCollector::new();
//!
//! let statements = ["SELECT 1", "SELECT 2"];
//! batcher.process_statements(
//!     statements,
//!     |_sql| unreachable!("dry run never executes"),
//!     Some(&mut collector),
//!     None,
//! )?;
//!
//! assert_eq!(collector.len(), 1);
//! assert_eq!(collector.queries()[0].sql, "SELECT 1;SELECT 2");
//! # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
//! ```

use crate::error::BoxError;
use serde::{Deserialize, Serialize};

/// Free-form metadata attached to collected queries.
pub type Metadata = serde_json::Value;

/// A single batch recorded during a dry run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedQuery {
    /// The delimiter-joined SQL for the batch
    pub sql: String,

    /// Metadata supplied by the caller for this processing run, if any
    pub metadata: Option<Metadata>,
}

/// Sink for batches produced in dry-run mode.
///
/// A failing `add_query` propagates out of the flush exactly like a failing
/// executor would: the batch is left intact and the error reaches the caller
/// unchanged.
pub trait QueryCollector {
    /// Record one flushed batch.
    fn add_query(&mut self, sql: String, metadata: Option<Metadata>) -> Result<(), BoxError>;

    /// All records collected so far, in flush order.
    fn queries(&self) -> &[CollectedQuery];
}

/// Simple collector that stores records in a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct ListQueryCollector {
    queries: Vec<CollectedQuery>,
}

impl ListQueryCollector {
    /// Create a new, empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records collected.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Whether no records have been collected yet.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Discard all collected records.
    pub fn clear(&mut self) {
        self.queries.clear();
    }

    /// Consume the collector, returning the records.
    pub fn into_queries(self) -> Vec<CollectedQuery> {
        self.queries
    }
}

impl QueryCollector for ListQueryCollector {
    fn add_query(&mut self, sql: String, metadata: Option<Metadata>) -> Result<(), BoxError> {
        self.queries.push(CollectedQuery { sql, metadata });
        Ok(())
    }

    fn queries(&self) -> &[CollectedQuery] {
        &self.queries
    }
}
