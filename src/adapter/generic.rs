//! Generic closure-backed adapter.
//!
//! `GenericAdapter` bridges the [`SqlAdapter`] capability set to any
//! caller-supplied execute closure, so a database client can be plugged in
//! without writing a dedicated adapter type. Optional transaction closures
//! cover drivers that expose explicit transaction control; when absent, the
//! hooks stay no-ops.

use crate::adapter::{ExecuteResult, SqlAdapter};
use crate::error::BoxError;
use tracing::debug;

/// Default advisory query-size ceiling for generic adapters.
pub const DEFAULT_MAX_QUERY_SIZE: usize = 500_000;

type ExecuteFn = Box<dyn FnMut(&str) -> Result<ExecuteResult, BoxError> + Send>;
type HookFn = Box<dyn FnMut() -> Result<(), BoxError> + Send>;

/// Adapter wrapping a caller-supplied execute closure.
///
/// # Examples
///
/// ```
/// use sqlbatch_rs::{ExecuteResult, GenericAdapter, SqlAdapter};
///
/// // In real use the closure would hand the SQL to a database client.
/// let mut adapter = GenericAdapter::new(move |sql: &str| {
///     println!("executing: {sql}");
///     Ok(ExecuteResult::empty())
/// })
/// .with_max_query_size(100_000);
///
/// adapter.execute("CREATE TABLE users (id INT, name TEXT)")?;
/// assert_eq!(adapter.max_query_size(), 100_000);
/// # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
/// ```
pub struct GenericAdapter {
    execute_fn: ExecuteFn,
    max_query_size: usize,
    begin_fn: Option<HookFn>,
    commit_fn: Option<HookFn>,
    rollback_fn: Option<HookFn>,
}

impl GenericAdapter {
    /// Create an adapter from an execute closure.
    pub fn new<F>(execute_fn: F) -> Self
    where
        F: FnMut(&str) -> Result<ExecuteResult, BoxError> + Send + 'static,
    {
        Self {
            execute_fn: Box::new(execute_fn),
            max_query_size: DEFAULT_MAX_QUERY_SIZE,
            begin_fn: None,
            commit_fn: None,
            rollback_fn: None,
        }
    }

    /// Set the advisory maximum query size in bytes.
    pub fn with_max_query_size(mut self, max_query_size: usize) -> Self {
        self.max_query_size = max_query_size;
        self
    }

    /// Install a closure backing `begin_transaction`.
    pub fn with_begin<F>(mut self, begin_fn: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.begin_fn = Some(Box::new(begin_fn));
        self
    }

    /// Install a closure backing `commit_transaction`.
    pub fn with_commit<F>(mut self, commit_fn: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.commit_fn = Some(Box::new(commit_fn));
        self
    }

    /// Install a closure backing `rollback_transaction`.
    pub fn with_rollback<F>(mut self, rollback_fn: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.rollback_fn = Some(Box::new(rollback_fn));
        self
    }
}

impl SqlAdapter for GenericAdapter {
    fn execute(&mut self, sql: &str) -> Result<ExecuteResult, BoxError> {
        debug!(bytes = sql.len(), "Executing SQL through generic adapter");
        (self.execute_fn)(sql)
    }

    fn max_query_size(&self) -> usize {
        self.max_query_size
    }

    fn begin_transaction(&mut self) -> Result<(), BoxError> {
        match &mut self.begin_fn {
            Some(begin) => begin(),
            None => Ok(()),
        }
    }

    fn commit_transaction(&mut self) -> Result<(), BoxError> {
        match &mut self.commit_fn {
            Some(commit) => commit(),
            None => Ok(()),
        }
    }

    fn rollback_transaction(&mut self) -> Result<(), BoxError> {
        match &mut self.rollback_fn {
            Some(rollback) => rollback(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for GenericAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericAdapter")
            .field("max_query_size", &self.max_query_size)
            .field("has_begin", &self.begin_fn.is_some())
            .field("has_commit", &self.commit_fn.is_some())
            .field("has_rollback", &self.rollback_fn.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_execute_delegates_to_closure() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut adapter = GenericAdapter::new(move |sql: &str| {
            sink.lock().unwrap().push(sql.to_string());
            Ok(ExecuteResult::empty())
        });

        adapter.execute("SELECT 1").unwrap();
        adapter.execute("SELECT 2").unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_default_max_query_size() {
        let adapter = GenericAdapter::new(|_sql: &str| Ok(ExecuteResult::empty()));
        assert_eq!(adapter.max_query_size(), DEFAULT_MAX_QUERY_SIZE);
    }

    #[test]
    fn test_transaction_hooks_invoke_closures() {
        let commits: Arc<Mutex<usize>> = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&commits);
        let mut adapter = GenericAdapter::new(|_sql: &str| Ok(ExecuteResult::empty()))
            .with_commit(move || {
                *counter.lock().unwrap() += 1;
                Ok(())
            });

        adapter.begin_transaction().unwrap();
        adapter.commit_transaction().unwrap();
        adapter.commit_transaction().unwrap();
        assert_eq!(*commits.lock().unwrap(), 2);
    }

    #[test]
    fn test_execute_error_propagates() {
        let mut adapter = GenericAdapter::new(|_sql: &str| {
            Err("connection lost".to_string().into())
        });
        let err = adapter.execute("SELECT 1").unwrap_err();
        assert!(err.to_string().contains("connection lost"));
    }
}
