//! Durable-state snapshots and digests
//!
//! A snapshot captures the five structures that survive restarts: the
//! balance book, the total supply, the role relation, the frozen set, and
//! the pause flag. The event log is excluded; it belongs to consumers.
//!
//! Serialization is canonical: sorted maps and a fixed field order, so the
//! same state always produces the same bytes and the same SHA-256 digest.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};

use types::amount::Amount;
use types::ids::AccountId;
use types::roles::Role;

use crate::security::{FrozenRegistry, PauseSwitch, RoleRegistry};
use crate::token::Ledger;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// The durable state of a ledger at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Format version for forward compatibility
    pub version: u32,
    pub balances: BTreeMap<AccountId, Amount>,
    pub total_supply: Amount,
    pub roles: BTreeMap<Role, BTreeSet<AccountId>>,
    pub frozen: BTreeSet<AccountId>,
    pub paused: bool,
}

impl LedgerSnapshot {
    /// SHA-256 digest over the canonical JSON encoding
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_json());
        hasher.finalize().into()
    }

    /// Hex-encoded digest for logs and reports
    pub fn digest_hex(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_json());
        format!("{:x}", hasher.finalize())
    }

    fn canonical_json(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("snapshot serialization should never fail")
    }
}

impl Ledger {
    /// Capture the durable state
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            version: SNAPSHOT_VERSION,
            balances: self.balances().clone(),
            total_supply: self.total_supply(),
            roles: self.role_registry().members().clone(),
            frozen: self.frozen_registry().accounts().clone(),
            paused: self.is_paused(),
        }
    }

    /// Rebuild a ledger from a snapshot. The event log starts empty;
    /// events already drained belong to their consumers.
    pub fn restore(snapshot: LedgerSnapshot) -> Ledger {
        Ledger::from_parts(
            snapshot.balances,
            snapshot.total_supply,
            RoleRegistry::from_members(snapshot.roles),
            PauseSwitch::from_state(snapshot.paused),
            FrozenRegistry::from_accounts(snapshot.frozen),
        )
    }

    /// Digest of the current durable state
    pub fn state_digest(&self) -> [u8; 32] {
        self.snapshot().digest()
    }
}
