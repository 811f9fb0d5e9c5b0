//! Harness configuration
//!
//! Loadable from a JSON file; every field has a default so a bare run
//! works without one. The seed fully determines a run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed; identical seeds produce identical runs
    pub seed: u64,
    /// Ordinary holder accounts in the cast (clamped to at least two)
    pub holders: usize,
    /// Random operations applied in the soak scenario
    pub operations: u64,
    /// Upper bound for a single random amount, in whole tokens
    pub amount_ceiling: Decimal,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            holders: 8,
            operations: 2_000,
            amount_ceiling: Decimal::from(100_000),
        }
    }
}

impl SimConfig {
    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(std::io::Error::from)
    }
}
