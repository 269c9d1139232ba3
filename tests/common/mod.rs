//! Common test utilities for sqlbatch-rs integration tests.
//!
//! The batcher has no external dependencies, so these tests run entirely in
//! memory: executors are closures over caller-owned buffers, and statement
//! generators produce inputs with exact byte sizes so threshold behavior can
//! be asserted precisely.

use sqlbatch_rs::BoxError;

// ============================================================================
// Statement Generators
// ============================================================================

/// Build a single SQL-looking statement of exactly `len` bytes.
///
/// Statements start with an `INSERT` prefix and are padded with `x`; lengths
/// shorter than the prefix fall back to plain padding.
pub fn statement_of_len(len: usize) -> String {
    const PREFIX: &str = "INSERT INTO t VALUES ('";
    const SUFFIX: &str = "')";

    if len <= PREFIX.len() + SUFFIX.len() {
        return "x".repeat(len);
    }
    let padding = len - PREFIX.len() - SUFFIX.len();
    format!("{}{}{}", PREFIX, "x".repeat(padding), SUFFIX)
}

/// Build `count` distinct statements, each of exactly `len` bytes.
pub fn statements_of_len(count: usize, len: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut s = statement_of_len(len);
            // Stamp an index into the padding so statements stay distinct.
            let tag = format!("{i:06}");
            if s.len() > tag.len() + 2 {
                s.replace_range(s.len() - tag.len() - 2..s.len() - 2, &tag);
            }
            s
        })
        .collect()
}

// ============================================================================
// Executors
// ============================================================================

/// Executor that records every batch it receives into `batches`.
pub fn recording(batches: &mut Vec<String>) -> impl FnMut(&str) -> Result<(), BoxError> + '_ {
    move |sql: &str| {
        batches.push(sql.to_string());
        Ok(())
    }
}

/// Executor that records the first `succeed` batches, then fails.
pub fn failing_after(
    succeed: usize,
    batches: &mut Vec<String>,
) -> impl FnMut(&str) -> Result<(), BoxError> + '_ {
    let mut calls = 0;
    move |sql: &str| {
        calls += 1;
        if calls > succeed {
            return Err(format!("executor failed on call {calls}").into());
        }
        batches.push(sql.to_string());
        Ok(())
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Split a flushed batch back into its statements.
pub fn split_batch<'a>(sql: &'a str, delimiter: &str) -> Vec<&'a str> {
    sql.split(delimiter).collect()
}

/// Count the statements in a flushed batch (delimiters + 1).
pub fn count_statements(sql: &str, delimiter: &str) -> usize {
    sql.matches(delimiter).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_of_len_exact_size() {
        for len in [2, 10, 26, 40, 200] {
            assert_eq!(statement_of_len(len).len(), len, "len {len}");
        }
    }

    #[test]
    fn test_statements_of_len_distinct() {
        let stmts = statements_of_len(3, 40);
        assert_eq!(stmts.len(), 3);
        for s in &stmts {
            assert_eq!(s.len(), 40);
        }
        assert_ne!(stmts[0], stmts[1]);
        assert_ne!(stmts[1], stmts[2]);
    }

    #[test]
    fn test_count_statements() {
        assert_eq!(count_statements("SELECT 1", ";"), 1);
        assert_eq!(count_statements("SELECT 1;SELECT 2;SELECT 3", ";"), 3);
    }

    #[test]
    fn test_failing_after_fails_on_schedule() {
        let mut batches = Vec::new();
        let mut exec = failing_after(1, &mut batches);
        assert!(exec("first").is_ok());
        assert!(exec("second").is_err());
        drop(exec);
        assert_eq!(batches, vec!["first"]);
    }
}
