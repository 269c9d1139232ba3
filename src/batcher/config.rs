//! Batcher configuration and validation.
//!
//! This module provides the configuration surface for [`crate::Batcher`]:
//! a plain struct with defaulted fields plus a validating builder.

use crate::error::ConfigError;
use std::fmt;

/// Default maximum batch size in bytes.
pub const DEFAULT_MAX_BYTES: usize = 1_000_000;

/// Default statement delimiter.
pub const DEFAULT_DELIMITER: &str = ";";

/// Configuration for a [`crate::Batcher`].
///
/// All fields are optional at construction time and fall back to defaults.
/// `max_bytes` must be greater than zero; [`crate::Batcher::new`] and
/// [`BatcherBuilder::build`] both reject a zero ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatcherConfig {
    /// Maximum batch size in bytes (default: 1,000,000)
    pub max_bytes: usize,

    /// Delimiter used to join statements at flush time (default: ";")
    pub delimiter: String,

    /// When set, statements are never executed, only optionally collected
    pub dry_run: bool,
}

impl BatcherConfig {
    /// Create a new `BatcherBuilder`.
    pub fn builder() -> BatcherBuilder {
        BatcherBuilder::new()
    }
}

impl Default for BatcherConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            delimiter: DEFAULT_DELIMITER.to_string(),
            dry_run: false,
        }
    }
}

impl fmt::Display for BatcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BatcherConfig {{ max_bytes: {}, delimiter: {:?}, dry_run: {} }}",
            self.max_bytes, self.delimiter, self.dry_run
        )
    }
}

/// Builder for constructing a [`BatcherConfig`] with validation.
///
/// # Examples
///
/// ```
/// use sqlbatch_rs::BatcherConfig;
///
/// let config = BatcherConfig::builder()
///     .max_bytes(500_000)
///     .delimiter(";\n")
///     .dry_run(true)
///     .build()?;
/// assert_eq!(config.max_bytes, 500_000);
/// # Ok::<(), sqlbatch_rs::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatcherBuilder {
    max_bytes: Option<usize>,
    delimiter: Option<String>,
    dry_run: Option<bool>,
}

impl BatcherBuilder {
    /// Create a new `BatcherBuilder` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum batch size in bytes.
    pub fn max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Set the statement delimiter.
    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = Some(delimiter.to_string());
        self
    }

    /// Enable or disable dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Build the [`BatcherConfig`] with validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `max_bytes` is zero.
    pub fn build(self) -> Result<BatcherConfig, ConfigError> {
        let max_bytes = self.max_bytes.unwrap_or(DEFAULT_MAX_BYTES);

        if max_bytes == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(BatcherConfig {
            max_bytes,
            delimiter: self.delimiter.unwrap_or_else(|| DEFAULT_DELIMITER.to_string()),
            dry_run: self.dry_run.unwrap_or(false),
        })
    }
}
