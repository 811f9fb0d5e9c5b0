//! Regulatory Simulation Harness
//!
//! Deterministic simulation framework for the ZARS ledger. Exercises the
//! full operation surface under scripted regulatory scenarios and seeded
//! random soaks, re-checking the supply invariant after every step.
//!
//! # Modules
//! - `config`: Harness configuration, loadable from JSON
//! - `driver`: Seeded random operation driver around one ledger
//! - `scenarios`: Scripted regulatory scenarios and the random soak
//! - `report`: Run reports and JSON export

pub mod config;
pub mod driver;
pub mod report;
pub mod scenarios;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
