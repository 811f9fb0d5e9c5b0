//! Unique identifier types for ledger entities
//!
//! Account identifiers use UUID v7 for time-sortable ordering, enabling
//! efficient chronological queries and replay capabilities. The custody
//! identity is the one fixed exception.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an account
///
/// Uses UUID v7 for time-based sorting. `Ord` follows the byte order of the
/// underlying UUID, so identifiers key sorted maps deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// The ledger's internal custody account, holding seized funds.
    ///
    /// Fixed at the nil UUID so every deployment agrees on it. Custody is
    /// never an external caller and can never be frozen.
    pub const CUSTODY: AccountId = AccountId(Uuid::nil());

    /// Create a new AccountId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Whether this is the custody identity
    pub fn is_custody(&self) -> bool {
        *self == Self::CUSTODY
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
