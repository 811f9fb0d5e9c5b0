//! ZARS ledger core
//!
//! A permissioned, role-governed fungible token: role registry, global
//! pause switch, frozen-account registry, an overflow-safe balance book,
//! and the custody flow for seized funds. State never changes unless every
//! check on an operation has passed.
//!
//! # Modules
//! - `errors`: Rejection taxonomy shared by every operation
//! - `events`: Events emitted on successful state changes
//! - `security`: Role registry, pause switch, frozen-account registry
//! - `token`: The `Ledger` itself, queries and all mutating operations
//! - `snapshot`: Durable-state snapshots and SHA-256 digests

pub mod errors;
pub mod events;
pub mod security;
pub mod snapshot;
pub mod token;

/// Token name, fixed at deployment
pub const TOKEN_NAME: &str = "ZARS Stablecoin";

/// Token symbol, fixed at deployment
pub const TOKEN_SYMBOL: &str = "ZARS";

/// Fractional decimal digits in every balance
pub const TOKEN_DECIMALS: u32 = types::amount::DECIMALS;
