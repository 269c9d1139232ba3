//! Integration tests for pairing the batcher with the adapter capability
//! set: execution through `process_with_adapter`, advisory size ceilings,
//! and caller-driven transaction scoping.

mod common;

use common::statements_of_len;
use sqlbatch_rs::{
    Batcher, BatcherConfig, BoxError, ExecuteResult, GenericAdapter, SqlAdapter,
};
use std::sync::{Arc, Mutex};

/// In-memory adapter standing in for a database client.
struct FakeDbAdapter {
    executed: Vec<String>,
    in_transaction: bool,
    committed: usize,
    rolled_back: usize,
    fail_on_contains: Option<String>,
}

impl FakeDbAdapter {
    fn new() -> Self {
        Self {
            executed: Vec::new(),
            in_transaction: false,
            committed: 0,
            rolled_back: 0,
            fail_on_contains: None,
        }
    }
}

impl SqlAdapter for FakeDbAdapter {
    fn execute(&mut self, sql: &str) -> Result<ExecuteResult, BoxError> {
        if let Some(needle) = &self.fail_on_contains {
            if sql.contains(needle.as_str()) {
                return Err("table is locked".to_string().into());
            }
        }
        self.executed.push(sql.to_string());
        Ok(ExecuteResult::empty())
    }

    fn max_query_size(&self) -> usize {
        120
    }

    fn begin_transaction(&mut self) -> Result<(), BoxError> {
        self.in_transaction = true;
        Ok(())
    }

    fn commit_transaction(&mut self) -> Result<(), BoxError> {
        self.in_transaction = false;
        self.committed += 1;
        Ok(())
    }

    fn rollback_transaction(&mut self) -> Result<(), BoxError> {
        self.in_transaction = false;
        self.rolled_back += 1;
        Ok(())
    }
}

#[test]
fn test_process_with_adapter_executes_batches() {
    let mut adapter = FakeDbAdapter::new();
    let mut batcher = Batcher::new(BatcherConfig::default()).unwrap();

    let count = batcher
        .process_with_adapter(["SELECT 1", "SELECT 2", "SELECT 3"], &mut adapter)
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(adapter.executed, vec!["SELECT 1;SELECT 2;SELECT 3"]);
}

#[test]
fn test_adapter_advisory_ceiling_feeds_config() {
    let mut adapter = FakeDbAdapter::new();
    let config = BatcherConfig::builder()
        .max_bytes(adapter.max_query_size())
        .build()
        .unwrap();
    let mut batcher = Batcher::new(config).unwrap();

    // 40-byte statements against a 120-byte ceiling: batches of three.
    let count = batcher
        .process_with_adapter(statements_of_len(9, 40), &mut adapter)
        .unwrap();

    assert_eq!(count, 9);
    assert_eq!(adapter.executed.len(), 3);
}

#[test]
fn test_adapter_error_propagates_through_batcher() {
    let mut adapter = FakeDbAdapter::new();
    adapter.fail_on_contains = Some("locked_table".to_string());

    let mut batcher = Batcher::new(BatcherConfig::default()).unwrap();
    let result = batcher.process_with_adapter(
        ["INSERT INTO locked_table VALUES (1)"],
        &mut adapter,
    );

    assert!(result.unwrap_err().to_string().contains("table is locked"));
    assert_eq!(batcher.len(), 1);
    assert!(adapter.executed.is_empty());
}

/// Transaction scoping is the caller's job, wrapped around processing.
#[test]
fn test_caller_driven_transaction_scope() {
    let mut adapter = FakeDbAdapter::new();
    let mut batcher = Batcher::new(BatcherConfig::default()).unwrap();

    adapter.begin_transaction().unwrap();
    assert!(adapter.in_transaction);

    let count = batcher
        .process_with_adapter(statements_of_len(5, 40), &mut adapter)
        .unwrap();
    assert_eq!(count, 5);

    adapter.commit_transaction().unwrap();
    assert!(!adapter.in_transaction);
    assert_eq!(adapter.committed, 1);
    assert_eq!(adapter.rolled_back, 0);
}

#[test]
fn test_rollback_after_failed_processing() {
    let mut adapter = FakeDbAdapter::new();
    adapter.fail_on_contains = Some("poison".to_string());

    let mut batcher = Batcher::new(BatcherConfig::default()).unwrap();

    adapter.begin_transaction().unwrap();
    let result =
        batcher.process_with_adapter(["INSERT INTO poison VALUES (1)"], &mut adapter);
    assert!(result.is_err());

    adapter.rollback_transaction().unwrap();
    assert_eq!(adapter.rolled_back, 1);
    assert!(!adapter.in_transaction);
}

#[test]
fn test_generic_adapter_with_batcher() {
    let executed: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&executed);
    let mut adapter = GenericAdapter::new(move |sql: &str| {
        sink.lock().unwrap().push(sql.to_string());
        Ok(ExecuteResult::empty())
    })
    .with_max_query_size(80);

    let config = BatcherConfig::builder()
        .max_bytes(adapter.max_query_size())
        .build()
        .unwrap();
    let mut batcher = Batcher::new(config).unwrap();

    let count = batcher
        .process_with_adapter(statements_of_len(4, 40), &mut adapter)
        .unwrap();

    assert_eq!(count, 4);
    // 40 + 40 = 80 hits the ceiling exactly: two batches of two.
    let executed = executed.lock().unwrap();
    assert_eq!(executed.len(), 2);
}
