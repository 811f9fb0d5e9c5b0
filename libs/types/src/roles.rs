//! Operator role taxonomy
//!
//! Every privileged ledger operation is gated on exactly one role. Roles
//! carry no hierarchy; holding one grants nothing about another.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator roles recognized by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Grants and revokes all roles, including itself
    Admin,
    /// Creates new supply
    Minter,
    /// Destroys supply from its own balance
    Burner,
    /// Freezes and unfreezes accounts, seizes funds, withdraws from custody
    Govern,
    /// Toggles the global pause switch
    Pauser,
}

impl Role {
    /// All roles, for exhaustive iteration
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Minter,
        Role::Burner,
        Role::Govern,
        Role::Pauser,
    ];

    /// Canonical uppercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Minter => "MINTER",
            Role::Burner => "BURNER",
            Role::Govern => "GOVERN",
            Role::Pauser => "PAUSER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
