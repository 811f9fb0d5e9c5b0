//! Security primitives for the ledger
//!
//! Three small state machines gate every operation: the role registry
//! (who may call what), the pause switch (a circuit breaker over the
//! transfer family), and the frozen-account registry (which accounts may
//! participate in balance changes at all).

use std::collections::{BTreeMap, BTreeSet};
use types::ids::AccountId;
use types::roles::Role;

use crate::errors::LedgerError;

/// Role-based access control
///
/// A plain (role, account) relation. Grants and revokes are idempotent
/// at this level; callers observe the returned flag to decide whether
/// anything changed.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    members: BTreeMap<Role, BTreeSet<AccountId>>,
}

impl RoleRegistry {
    /// Create a registry with the deployer holding `Admin` and nothing else
    pub fn new(deployer: AccountId) -> Self {
        let mut members = BTreeMap::new();
        let mut admins = BTreeSet::new();
        admins.insert(deployer);
        members.insert(Role::Admin, admins);
        Self { members }
    }

    /// Whether the account holds the role
    pub fn has_role(&self, role: Role, account: &AccountId) -> bool {
        self.members
            .get(&role)
            .map_or(false, |set| set.contains(account))
    }

    /// Authorization predicate used by every gated operation
    pub fn require(&self, role: Role, caller: &AccountId) -> Result<(), LedgerError> {
        if self.has_role(role, caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized { role })
        }
    }

    /// Add an account to a role. Returns `true` if membership changed.
    pub fn grant(&mut self, role: Role, account: AccountId) -> bool {
        self.members.entry(role).or_default().insert(account)
    }

    /// Remove an account from a role. Returns `true` if membership changed.
    pub fn revoke(&mut self, role: Role, account: &AccountId) -> bool {
        self.members
            .get_mut(&role)
            .map_or(false, |set| set.remove(account))
    }

    /// The full membership relation
    pub fn members(&self) -> &BTreeMap<Role, BTreeSet<AccountId>> {
        &self.members
    }

    /// Rebuild a registry from a stored relation
    pub fn from_members(members: BTreeMap<Role, BTreeSet<AccountId>>) -> Self {
        Self { members }
    }
}

/// Global pause switch over the transfer family
///
/// Both transitions are strict: pausing while paused and unpausing while
/// unpaused are rejections, so redundant switches surface operator error.
#[derive(Debug, Clone)]
pub struct PauseSwitch {
    paused: bool,
}

impl PauseSwitch {
    pub fn new() -> Self {
        Self { paused: false }
    }

    /// Rebuild the switch from a stored flag
    pub fn from_state(paused: bool) -> Self {
        Self { paused }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Engage the switch. Fails when already paused.
    pub fn pause(&mut self) -> Result<(), LedgerError> {
        if self.paused {
            return Err(LedgerError::LedgerPaused);
        }
        self.paused = true;
        Ok(())
    }

    /// Release the switch. Fails when not paused.
    pub fn unpause(&mut self) -> Result<(), LedgerError> {
        if !self.paused {
            return Err(LedgerError::LedgerNotPaused);
        }
        self.paused = false;
        Ok(())
    }

    /// Gate applied to transfer-family operations
    pub fn require_unpaused(&self) -> Result<(), LedgerError> {
        if self.paused {
            return Err(LedgerError::LedgerPaused);
        }
        Ok(())
    }
}

impl Default for PauseSwitch {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of frozen accounts
///
/// Consulted by every balance mutation. Custody never enters the set,
/// which keeps seizure deposits and governor withdrawals possible no
/// matter what else is frozen.
#[derive(Debug, Clone)]
pub struct FrozenRegistry {
    frozen: BTreeSet<AccountId>,
}

impl FrozenRegistry {
    pub fn new() -> Self {
        Self {
            frozen: BTreeSet::new(),
        }
    }

    pub fn is_frozen(&self, account: &AccountId) -> bool {
        self.frozen.contains(account)
    }

    /// Freeze an account. Strict: fails when already frozen, and the
    /// custody account is refused outright.
    pub fn freeze(&mut self, account: AccountId) -> Result<(), LedgerError> {
        if account.is_custody() {
            return Err(LedgerError::CannotFreezeCustody);
        }
        if !self.frozen.insert(account) {
            return Err(LedgerError::AccountFrozen {
                account: account.to_string(),
            });
        }
        Ok(())
    }

    /// Unfreeze an account. Strict: fails when not frozen.
    pub fn unfreeze(&mut self, account: &AccountId) -> Result<(), LedgerError> {
        if !self.frozen.remove(account) {
            return Err(LedgerError::AccountNotFrozen {
                account: account.to_string(),
            });
        }
        Ok(())
    }

    /// Gate applied wherever a balance would change
    pub fn require_active(&self, account: &AccountId) -> Result<(), LedgerError> {
        if self.is_frozen(account) {
            return Err(LedgerError::AccountFrozen {
                account: account.to_string(),
            });
        }
        Ok(())
    }

    /// Number of frozen accounts
    pub fn count(&self) -> usize {
        self.frozen.len()
    }

    /// The frozen set
    pub fn accounts(&self) -> &BTreeSet<AccountId> {
        &self.frozen
    }

    /// Rebuild a registry from a stored set
    pub fn from_accounts(frozen: BTreeSet<AccountId>) -> Self {
        Self { frozen }
    }
}

impl Default for FrozenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- RoleRegistry tests ---

    #[test]
    fn test_deployer_holds_admin_only() {
        let deployer = AccountId::new();
        let registry = RoleRegistry::new(deployer);

        assert!(registry.has_role(Role::Admin, &deployer));
        for role in [Role::Minter, Role::Burner, Role::Govern, Role::Pauser] {
            assert!(!registry.has_role(role, &deployer));
        }
    }

    #[test]
    fn test_require_rejects_missing_role() {
        let registry = RoleRegistry::new(AccountId::new());
        let outsider = AccountId::new();

        assert_eq!(
            registry.require(Role::Minter, &outsider),
            Err(LedgerError::Unauthorized { role: Role::Minter })
        );
        assert!(registry.require(Role::Admin, &outsider).is_err());
    }

    #[test]
    fn test_grant_and_revoke_report_change() {
        let mut registry = RoleRegistry::new(AccountId::new());
        let account = AccountId::new();

        assert!(registry.grant(Role::Pauser, account));
        assert!(!registry.grant(Role::Pauser, account), "second grant is a no-op");
        assert!(registry.has_role(Role::Pauser, &account));

        assert!(registry.revoke(Role::Pauser, &account));
        assert!(!registry.revoke(Role::Pauser, &account), "second revoke is a no-op");
        assert!(!registry.has_role(Role::Pauser, &account));
    }

    #[test]
    fn test_account_can_hold_multiple_roles() {
        let mut registry = RoleRegistry::new(AccountId::new());
        let account = AccountId::new();

        registry.grant(Role::Minter, account);
        registry.grant(Role::Burner, account);

        assert!(registry.has_role(Role::Minter, &account));
        assert!(registry.has_role(Role::Burner, &account));
        assert!(!registry.has_role(Role::Govern, &account));
    }

    #[test]
    fn test_registry_round_trips_through_members() {
        let mut registry = RoleRegistry::new(AccountId::new());
        registry.grant(Role::Govern, AccountId::new());

        let rebuilt = RoleRegistry::from_members(registry.members().clone());
        assert_eq!(rebuilt.members(), registry.members());
    }

    // --- PauseSwitch tests ---

    #[test]
    fn test_pause_cycle_is_strict() {
        let mut switch = PauseSwitch::new();
        assert!(!switch.is_paused());

        assert!(switch.pause().is_ok());
        assert_eq!(switch.pause(), Err(LedgerError::LedgerPaused));
        assert!(switch.is_paused());

        assert!(switch.unpause().is_ok());
        assert_eq!(switch.unpause(), Err(LedgerError::LedgerNotPaused));
        assert!(!switch.is_paused());
    }

    #[test]
    fn test_require_unpaused_gate() {
        let mut switch = PauseSwitch::new();
        assert!(switch.require_unpaused().is_ok());

        switch.pause().unwrap();
        assert_eq!(switch.require_unpaused(), Err(LedgerError::LedgerPaused));
    }

    #[test]
    fn test_pause_switch_from_state() {
        let switch = PauseSwitch::from_state(true);
        assert!(switch.is_paused());
    }

    // --- FrozenRegistry tests ---

    #[test]
    fn test_freeze_unfreeze_strict_cycle() {
        let mut registry = FrozenRegistry::new();
        let account = AccountId::new();

        assert!(registry.freeze(account).is_ok());
        assert!(registry.is_frozen(&account));
        assert!(matches!(
            registry.freeze(account),
            Err(LedgerError::AccountFrozen { .. })
        ));

        assert!(registry.unfreeze(&account).is_ok());
        assert!(!registry.is_frozen(&account));
        assert!(matches!(
            registry.unfreeze(&account),
            Err(LedgerError::AccountNotFrozen { .. })
        ));
    }

    #[test]
    fn test_custody_freeze_refused() {
        let mut registry = FrozenRegistry::new();
        assert_eq!(
            registry.freeze(AccountId::CUSTODY),
            Err(LedgerError::CannotFreezeCustody)
        );
        assert!(!registry.is_frozen(&AccountId::CUSTODY));
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_require_active_gate() {
        let mut registry = FrozenRegistry::new();
        let account = AccountId::new();

        assert!(registry.require_active(&account).is_ok());
        registry.freeze(account).unwrap();
        assert!(matches!(
            registry.require_active(&account),
            Err(LedgerError::AccountFrozen { .. })
        ));
    }

    #[test]
    fn test_registry_round_trips_through_accounts() {
        let mut registry = FrozenRegistry::new();
        registry.freeze(AccountId::new()).unwrap();
        registry.freeze(AccountId::new()).unwrap();

        let rebuilt = FrozenRegistry::from_accounts(registry.accounts().clone());
        assert_eq!(rebuilt.count(), 2);
        assert_eq!(rebuilt.accounts(), registry.accounts());
    }
}
