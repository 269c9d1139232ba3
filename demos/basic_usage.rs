//! Basic usage example for the sqlbatch-rs statement batcher.

use sqlbatch_rs::{
    Batcher, BatcherConfig, BoxError, ExecuteResult, GenericAdapter, ListQueryCollector,
    QueryCollector, SqlAdapter,
};
use std::sync::{Arc, Mutex};

const MAX_BYTES: usize = 120;
const ROW_COUNT: usize = 8;

fn sample_statements() -> Vec<String> {
    (1..=ROW_COUNT)
        .map(|i| format!("INSERT INTO users VALUES ({i}, 'user_{i}')"))
        .collect()
}

/// Batches statements through a generic adapter backed by a closure.
fn example_execute() -> Result<usize, BoxError> {
    let executed: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&executed);

    // In real use the closure would hand off to a Trino/Spark/Snowflake client.
    let mut adapter = GenericAdapter::new(move |sql: &str| {
        sink.lock().unwrap().push(sql.to_string());
        Ok(ExecuteResult::empty())
    })
    .with_max_query_size(MAX_BYTES);

    let config = BatcherConfig::builder()
        .max_bytes(adapter.max_query_size())
        .build()?;
    let mut batcher = Batcher::new(config)?;

    adapter.begin_transaction()?;
    let count = batcher.process_with_adapter(sample_statements(), &mut adapter)?;
    adapter.commit_transaction()?;
    adapter.close()?;

    for (i, batch) in executed.lock().unwrap().iter().enumerate() {
        println!("  batch {}: {} bytes", i + 1, batch.len());
    }
    Ok(count)
}

/// Collects batches in dry-run mode instead of executing them.
fn example_dry_run() -> Result<usize, BoxError> {
    let config = BatcherConfig::builder()
        .max_bytes(MAX_BYTES)
        .dry_run(true)
        .build()?;
    let mut batcher = Batcher::new(config)?;
    let mut collector = ListQueryCollector::new();

    let metadata = serde_json::json!({"table": "users", "type": "INSERT"});
    batcher.process_statements(
        sample_statements(),
        |_sql| Ok(()),
        Some(&mut collector),
        Some(&metadata),
    )?;

    for record in collector.queries() {
        println!("  would execute: {}", record.sql);
    }
    Ok(collector.len())
}

/// An oversized statement gets its own flush and a logged warning.
fn example_oversized() -> Result<usize, BoxError> {
    let config = BatcherConfig::builder().max_bytes(MAX_BYTES).build()?;
    let mut batcher = Batcher::new(config)?;

    let bulk_insert = format!(
        "INSERT INTO users VALUES {}",
        (0..40)
            .map(|i| format!("({i}, 'bulk_{i}')"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let statements = vec!["SELECT 1".to_string(), bulk_insert, "SELECT 2".to_string()];

    let mut flushes = 0;
    let count = batcher.process_statements(
        statements,
        |_sql| {
            flushes += 1;
            Ok(())
        },
        None,
        None,
    )?;

    println!("  {count} statements in {flushes} flushes");
    Ok(count)
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sqlbatch_rs=debug".into()),
        )
        .init();

    println!("Executing through a generic adapter:");
    let count = example_execute()?;
    println!("Executed {count} statement(s)\n");

    println!("Dry run with a collector:");
    let records = example_dry_run()?;
    println!("Collected {records} record(s)\n");

    println!("Oversized statement handling:");
    example_oversized()?;
    println!("Done");

    Ok(())
}
