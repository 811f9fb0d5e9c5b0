//! Types library for the ZARS ledger
//!
//! This library provides the core type definitions shared by the ledger and
//! its tooling, ensuring type safety and deterministic behavior.
//!
//! # Version
//! v1.0.0
//!
//! # Modules
//! - `ids`: Unique identifiers (AccountId, custody identity)
//! - `amount`: Fixed-point token amounts (18 fractional digits)
//! - `roles`: Operator role taxonomy

// Public modules
pub mod ids;
pub mod amount;
pub mod roles;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::amount::*;
    pub use crate::ids::*;
    pub use crate::roles::*;
}
