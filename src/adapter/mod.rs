//! Database adapter interface.
//!
//! The batcher itself is content-agnostic and talks to databases only
//! through an execute callback. This module defines the capability set a
//! database-specific collaborator is expected to provide: execution, an
//! advisory query-size ceiling, resource release, and optional transaction
//! hooks. A [`GenericAdapter`] is included to turn any caller-supplied
//! closure into an adapter.
//!
//! Transaction scoping is entirely the caller's responsibility: the batcher
//! never calls `begin_transaction`/`commit_transaction`/`rollback_transaction`
//! itself. Wrap them around one or more
//! [`crate::Batcher::process_statements`] calls as needed.

pub mod generic;

pub use generic::GenericAdapter;

use crate::error::BoxError;

/// One result row, as loosely typed values.
pub type Row = Vec<serde_json::Value>;

/// Result of executing a batch of SQL.
///
/// Non-query statements (DDL, DML) produce an empty result; queries carry
/// their rows. The batcher never inspects this value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecuteResult {
    /// Rows returned by the statement, if any
    pub rows: Vec<Row>,
}

impl ExecuteResult {
    /// An empty result, for statements that return no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A result carrying rows.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows in the result.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Capability set for database-specific collaborators.
///
/// `execute` and `max_query_size` are required; the lifecycle and
/// transaction hooks default to no-ops, matching databases that have no
/// explicit transaction control or where the driver auto-commits.
pub trait SqlAdapter {
    /// Execute SQL and return its result (empty for non-query statements).
    fn execute(&mut self, sql: &str) -> Result<ExecuteResult, BoxError>;

    /// Advisory maximum query size in bytes for this database.
    ///
    /// Callers typically feed this into
    /// [`crate::BatcherConfig`]'s `max_bytes`.
    fn max_query_size(&self) -> usize;

    /// Release any resources held by the adapter.
    fn close(&mut self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Begin a database transaction.
    fn begin_transaction(&mut self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Commit the current database transaction.
    fn commit_transaction(&mut self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Roll back the current database transaction.
    fn rollback_transaction(&mut self) -> Result<(), BoxError> {
        Ok(())
    }
}
