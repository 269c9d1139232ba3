//! Size-bounded statement accumulation and flushing.
//!
//! This module provides the [`Batcher`], which groups SQL statements into
//! batches that respect a byte-size ceiling and drives them through a
//! caller-supplied execute callback (or a [`QueryCollector`] in dry-run
//! mode).

use crate::adapter::SqlAdapter;
use crate::batcher::config::BatcherConfig;
use crate::batcher::diagnostics::{default_warning_sink, OversizeWarning, WarningSink};
use crate::collector::{Metadata, QueryCollector};
use crate::error::{BoxError, ConfigError};
use tracing::debug;

type SizeFn = Box<dyn Fn(&str) -> usize + Send>;

/// Size-bounded SQL statement batcher.
///
/// The batcher accumulates statements until their combined measured size
/// reaches the configured ceiling, then flushes them as one delimiter-joined
/// SQL string through an execute callback. Statements are never reordered,
/// and every statement is accounted for in exactly one flush.
///
/// # Size accounting
///
/// The flush threshold counts only the sum of individually measured
/// statement sizes; the delimiter bytes added when joining are not counted.
/// The joined SQL handed to the callback can therefore exceed `max_bytes` by
/// up to `(n - 1) * delimiter.len()` bytes for a batch of `n` statements.
/// This is a known boundary behavior, kept so the threshold stays a pure
/// function of the statements themselves.
///
/// # Threading
///
/// A `Batcher` is a synchronous, single-threaded accumulator. It mutates its
/// pending batch in place and must not be driven concurrently from multiple
/// threads; construct one batcher per statement stream instead.
///
/// # Examples
///
/// ```
/// use sqlbatch_rs::{Batcher, BatcherConfig};
///
/// let mut batcher = Batcher::new(BatcherConfig::default())?;
/// let statements = [
///     "INSERT INTO users VALUES (1, 'Alice')",
///     "INSERT INTO users VALUES (2, 'Bob')",
/// ];
///
/// let mut executed: Vec<String> = Vec::new();
/// let count = batcher.process_statements(
///     statements,
///     |sql| {
///         executed.push(sql.to_string());
///         Ok(())
///     },
///     None,
///     None,
/// )?;
///
/// assert_eq!(count, 2);
/// assert_eq!(executed.len(), 1); // both fit in one batch
/// # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
/// ```
pub struct Batcher {
    config: BatcherConfig,
    batch: Vec<String>,
    current_size: usize,
    size_func: SizeFn,
    warning_sink: WarningSink,
}

impl Batcher {
    /// Create a new batcher from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `max_bytes` is zero.
    pub fn new(config: BatcherConfig) -> Result<Self, ConfigError> {
        if config.max_bytes == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        debug!(
            max_bytes = config.max_bytes,
            delimiter = %config.delimiter,
            dry_run = config.dry_run,
            "Initialized batcher"
        );

        Ok(Self {
            config,
            batch: Vec::new(),
            current_size: 0,
            size_func: Box::new(|s: &str| s.len()),
            warning_sink: default_warning_sink(),
        })
    }

    /// Replace the size function (default: UTF-8 byte length).
    ///
    /// Useful when the target database measures query size differently, e.g.
    /// in UTF-16 code units or after client-side encoding.
    pub fn with_size_func<F>(mut self, size_func: F) -> Self
    where
        F: Fn(&str) -> usize + Send + 'static,
    {
        self.size_func = Box::new(size_func);
        self
    }

    /// Replace the warning sink (default: `tracing::warn!`).
    pub fn with_warning_sink<F>(mut self, sink: F) -> Self
    where
        F: FnMut(&OversizeWarning) + Send + 'static,
    {
        self.warning_sink = Box::new(sink);
        self
    }

    /// The configured maximum batch size in bytes.
    pub fn max_bytes(&self) -> usize {
        self.config.max_bytes
    }

    /// The configured statement delimiter.
    pub fn delimiter(&self) -> &str {
        &self.config.delimiter
    }

    /// Whether dry-run mode is active.
    pub fn dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Number of statements currently pending.
    pub fn len(&self) -> usize {
        self.batch.len()
    }

    /// Whether the pending batch is empty.
    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    /// Combined measured size of the pending statements in bytes.
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    /// Append a statement to the pending batch.
    ///
    /// The statement is always accepted; nothing is ever dropped here.
    /// Returns `true` when the running total has reached or passed
    /// `max_bytes` and the caller should flush before adding more.
    pub fn add_statement(&mut self, statement: impl Into<String>) -> bool {
        let statement = statement.into();
        let size = (self.size_func)(&statement);

        self.batch.push(statement);
        self.current_size += size;

        self.current_size >= self.config.max_bytes
    }

    /// Clear the pending batch.
    ///
    /// Always safe to call, including on an already-empty batch.
    pub fn reset(&mut self) {
        self.batch.clear();
        self.current_size = 0;
    }

    /// Execute (or, in dry-run mode, record) the pending batch.
    ///
    /// Joins the pending statements with the configured delimiter and hands
    /// the result to `execute`, or appends it to `collector` when dry-run is
    /// active. On success the batch is cleared and the number of statements
    /// it held is returned. Flushing an empty batch is a no-op returning 0.
    ///
    /// # Errors
    ///
    /// Propagates any error from the executor or collector unchanged. The
    /// batch is left intact on failure so the caller can inspect or retry.
    pub fn flush<F>(
        &mut self,
        mut execute: F,
        collector: Option<&mut (dyn QueryCollector + '_)>,
        metadata: Option<&Metadata>,
    ) -> Result<usize, BoxError>
    where
        F: FnMut(&str) -> Result<(), BoxError>,
    {
        if self.batch.is_empty() {
            return Ok(0);
        }

        let count = self.batch.len();
        let joined_sql = self.batch.join(&self.config.delimiter);

        debug!(
            statements = count,
            bytes = self.current_size,
            dry_run = self.config.dry_run,
            "Flushing batch"
        );

        if self.config.dry_run {
            if let Some(collector) = collector {
                collector.add_query(joined_sql, metadata.cloned())?;
            }
        } else {
            execute(&joined_sql)?;
        }

        self.reset();
        Ok(count)
    }

    /// Process a sequence of statements end to end, batching as needed.
    ///
    /// Statements are consumed in order and flushed just in time: whenever an
    /// append pushes the running total to or past `max_bytes`, the batch is
    /// flushed before the next statement is consumed. A statement whose
    /// measured size alone exceeds `max_bytes` is never merged into a batch;
    /// the pending batch is flushed first and the oversized statement is then
    /// flushed by itself, with a warning reported through the warning sink.
    /// A final flush runs unconditionally after the input is exhausted.
    ///
    /// Returns the total number of statements processed, which always equals
    /// the number of input statements.
    ///
    /// # Errors
    ///
    /// Propagates the first executor or collector error unchanged; statements
    /// already flushed stay flushed, and the failing batch remains pending.
    pub fn process_statements<I, S, F>(
        &mut self,
        statements: I,
        mut execute: F,
        mut collector: Option<&mut (dyn QueryCollector + '_)>,
        metadata: Option<&Metadata>,
    ) -> Result<usize, BoxError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnMut(&str) -> Result<(), BoxError>,
    {
        let mut total_processed = 0;

        for statement in statements {
            let statement = statement.into();
            let size = (self.size_func)(&statement);

            if size > self.config.max_bytes {
                // Isolate the oversized statement: drain whatever is pending,
                // then flush it as a batch of one.
                total_processed +=
                    self.flush(&mut execute, collector.as_deref_mut(), metadata)?;

                (self.warning_sink)(&OversizeWarning {
                    statement_bytes: size,
                    max_bytes: self.config.max_bytes,
                });

                self.batch.push(statement);
                self.current_size = size;
                total_processed +=
                    self.flush(&mut execute, collector.as_deref_mut(), metadata)?;
            } else if self.add_statement(statement) {
                total_processed +=
                    self.flush(&mut execute, collector.as_deref_mut(), metadata)?;
            }
        }

        total_processed += self.flush(&mut execute, collector.as_deref_mut(), metadata)?;

        debug!(total = total_processed, "Processed statements");

        Ok(total_processed)
    }

    /// Process a sequence of statements through an adapter's `execute`.
    ///
    /// Convenience wrapper over [`Batcher::process_statements`] that uses the
    /// adapter purely as the flush callback; results returned by the adapter
    /// are discarded. Transaction scoping stays with the caller.
    pub fn process_with_adapter<I, S, A>(
        &mut self,
        statements: I,
        adapter: &mut A,
    ) -> Result<usize, BoxError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        A: SqlAdapter + ?Sized,
    {
        self.process_statements(
            statements,
            |sql| adapter.execute(sql).map(|_| ()),
            None,
            None,
        )
    }
}

impl Default for Batcher {
    /// A batcher with default configuration (1 MB ceiling, `";"` delimiter,
    /// dry-run off).
    fn default() -> Self {
        Self {
            config: BatcherConfig::default(),
            batch: Vec::new(),
            current_size: 0,
            size_func: Box::new(|s: &str| s.len()),
            warning_sink: default_warning_sink(),
        }
    }
}

impl std::fmt::Debug for Batcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Batcher")
            .field("config", &self.config)
            .field("pending_statements", &self.batch.len())
            .field("current_size", &self.current_size)
            .finish()
    }
}
