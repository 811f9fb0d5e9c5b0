//! Events emitted by the ledger
//!
//! Every successful state change appends exactly the events listed here,
//! in operation order. Rejected operations emit nothing. Off-ledger
//! indexers consume these via `Ledger::drain_events`.

use serde::{Deserialize, Serialize};
use types::amount::Amount;
use types::ids::AccountId;
use types::roles::Role;

/// A role was granted to an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleGranted {
    pub caller: AccountId,
    pub role: Role,
    pub account: AccountId,
}

/// A role was revoked from an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRevoked {
    pub caller: AccountId,
    pub role: Role,
    pub account: AccountId,
}

/// New supply was created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minted {
    pub caller: AccountId,
    pub to: AccountId,
    pub amount: Amount,
}

/// Supply was destroyed from the caller's balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Burned {
    pub caller: AccountId,
    pub amount: Amount,
}

/// Value moved between two accounts
///
/// Batch transfers emit one of these per recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transferred {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Amount,
}

/// An account was frozen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frozen {
    pub caller: AccountId,
    pub account: AccountId,
}

/// An account was unfrozen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unfrozen {
    pub caller: AccountId,
    pub account: AccountId,
}

/// A frozen account's entire balance moved into custody
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seized {
    pub caller: AccountId,
    pub account: AccountId,
    pub amount: Amount,
}

/// Custody funds moved to the calling governor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub caller: AccountId,
    pub amount: Amount,
}

/// The ledger was paused
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paused {
    pub caller: AccountId,
}

/// The ledger was unpaused
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unpaused {
    pub caller: AccountId,
}

/// All events the ledger can emit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    RoleGranted(RoleGranted),
    RoleRevoked(RoleRevoked),
    Minted(Minted),
    Burned(Burned),
    Transferred(Transferred),
    Frozen(Frozen),
    Unfrozen(Unfrozen),
    Seized(Seized),
    Withdrawn(Withdrawn),
    Paused(Paused),
    Unpaused(Unpaused),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_event_serialization() {
        let event = LedgerEvent::Minted(Minted {
            caller: AccountId::new(),
            to: AccountId::new(),
            amount: Amount::from_whole(100),
        });

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: LedgerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_transferred_event_serialization() {
        let event = LedgerEvent::Transferred(Transferred {
            from: AccountId::new(),
            to: AccountId::CUSTODY,
            amount: Amount::from_raw(1),
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Transferred"));

        let deserialized: LedgerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_role_granted_event_carries_role_name() {
        let event = LedgerEvent::RoleGranted(RoleGranted {
            caller: AccountId::new(),
            role: Role::Govern,
            account: AccountId::new(),
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"GOVERN\""));
    }

    #[test]
    fn test_pause_event_round_trip() {
        let event = LedgerEvent::Paused(Paused {
            caller: AccountId::new(),
        });
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: LedgerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
