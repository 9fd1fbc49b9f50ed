//! Chained hash table configuration.

use super::{parse_env_var, Config, ValidationError};
use crate::error::{ChainTableError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest bucket count a table may have
pub const MIN_CAPACITY: usize = 10;

/// Load factor above which the next insert doubles the table
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.5;

/// Largest bucket array the address space can describe
///
/// Every bucket is one `Vec` header regardless of key type, and no allocation
/// may exceed `isize::MAX` bytes.
pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<Vec<u64>>();

/// Configuration for [`ChainedHashTable`](crate::hash_table::ChainedHashTable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Starting bucket count (raised to `min_capacity` if smaller)
    pub initial_capacity: usize,
    /// Lower bound on the bucket count
    pub min_capacity: usize,
    /// Load factor (size / capacity) that triggers doubling before an insert
    pub max_load_factor: f64,
    /// Ceiling on the bucket count (at most `MAX_CAPACITY`); a resize past it
    /// fails with `CapacityExceeded`
    pub max_capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: MIN_CAPACITY,
            min_capacity: MIN_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            max_capacity: MAX_CAPACITY,
        }
    }
}

impl TableConfig {
    /// Create a new configuration builder.
    pub fn builder() -> TableConfigBuilder {
        TableConfigBuilder::new()
    }

    /// Bucket count a table built from this configuration starts with
    ///
    /// `initial_capacity` raised to `min_capacity` and capped at `max_capacity`.
    pub fn effective_initial_capacity(&self) -> usize {
        self.initial_capacity
            .max(self.min_capacity)
            .min(self.max_capacity.min(MAX_CAPACITY))
    }
}

impl Config for TableConfig {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.min_capacity == 0 {
            errors.push(
                ValidationError::new(
                    "min_capacity",
                    &self.min_capacity.to_string(),
                    "minimum capacity must be greater than 0",
                )
                .with_suggestion("default: 10"),
            );
        }

        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            errors.push(
                ValidationError::new(
                    "max_load_factor",
                    &self.max_load_factor.to_string(),
                    "load factor must be a finite value greater than 0",
                )
                .with_suggestion("typical values: 0.5-1.0"),
            );
        }

        if self.max_capacity < self.min_capacity {
            errors.push(ValidationError::new(
                "max_capacity",
                &self.max_capacity.to_string(),
                "maximum capacity must be at least the minimum capacity",
            ));
        }

        if self.max_capacity > MAX_CAPACITY {
            errors.push(
                ValidationError::new(
                    "max_capacity",
                    &self.max_capacity.to_string(),
                    "maximum capacity exceeds the addressable bucket count",
                )
                .with_suggestion(&format!("at most {}", MAX_CAPACITY)),
            );
        }

        if !errors.is_empty() {
            return Err(ChainTableError::configuration(format!(
                "Table configuration validation failed: {}",
                errors
                    .into_iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ")
            )));
        }

        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity =
            parse_env_var(&format!("{}TABLE_INITIAL_CAPACITY", prefix), config.initial_capacity);
        config.min_capacity =
            parse_env_var(&format!("{}TABLE_MIN_CAPACITY", prefix), config.min_capacity);
        config.max_load_factor =
            parse_env_var(&format!("{}TABLE_MAX_LOAD_FACTOR", prefix), config.max_load_factor);
        config.max_capacity =
            parse_env_var(&format!("{}TABLE_MAX_CAPACITY", prefix), config.max_capacity);
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            initial_capacity: 64,
            min_capacity: MIN_CAPACITY,
            max_load_factor: 0.25,
            max_capacity: MAX_CAPACITY,
        }
    }

    fn memory_preset() -> Self {
        Self {
            initial_capacity: MIN_CAPACITY,
            min_capacity: MIN_CAPACITY,
            max_load_factor: 1.0,
            max_capacity: MAX_CAPACITY,
        }
    }

    fn realtime_preset() -> Self {
        Self {
            initial_capacity: 1024,
            min_capacity: MIN_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            max_capacity: MAX_CAPACITY,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            ChainTableError::configuration(format!("Failed to serialize table config: {}", e))
        })?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ChainTableError::configuration(format!("Failed to parse table config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`TableConfig`]
#[derive(Debug, Clone)]
pub struct TableConfigBuilder {
    config: TableConfig,
}

impl TableConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: TableConfig::default(),
        }
    }

    /// Set the starting bucket count.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the minimum bucket count.
    pub fn min_capacity(mut self, capacity: usize) -> Self {
        self.config.min_capacity = capacity;
        self
    }

    /// Set the growth threshold.
    pub fn max_load_factor(mut self, load_factor: f64) -> Self {
        self.config.max_load_factor = load_factor;
        self
    }

    /// Set the bucket count ceiling.
    pub fn max_capacity(mut self, capacity: usize) -> Self {
        self.config.max_capacity = capacity;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<TableConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for TableConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
