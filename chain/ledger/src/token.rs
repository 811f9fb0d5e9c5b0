//! Token operations
//!
//! The `Ledger` owns the balance book, the total supply, and the three
//! security primitives, and exposes every query and mutation of the token.
//! Callers are identified by an explicit `AccountId` argument; the ledger
//! never inspects ambient context.
//!
//! Checks run in a fixed order on every operation: pause gate (where the
//! operation is pause-gated), role gate, frozen checks, then arithmetic.
//! No balance or supply changes until every check has passed, so a
//! rejection is always a pure no-op.

use std::collections::BTreeMap;

use types::amount::Amount;
use types::ids::AccountId;
use types::roles::Role;

use crate::errors::LedgerError;
use crate::events::{
    Burned, Frozen, LedgerEvent, Minted, Paused, RoleGranted, RoleRevoked, Seized, Transferred,
    Unfrozen, Unpaused, Withdrawn,
};
use crate::security::{FrozenRegistry, PauseSwitch, RoleRegistry};
use crate::{TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};

/// The ZARS ledger
///
/// Holds all durable state plus the append-only event log. `sum(balances)
/// == total_supply` holds after every operation, accepted or rejected.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Balance book; accounts absent from the map hold zero
    balances: BTreeMap<AccountId, Amount>,
    /// Sum of all balances, maintained in lockstep
    total_supply: Amount,
    /// (role, account) relation
    roles: RoleRegistry,
    /// Circuit breaker over the transfer family
    pause: PauseSwitch,
    /// Accounts barred from balance participation
    frozen: FrozenRegistry,
    /// Events emitted by successful operations
    events: Vec<LedgerEvent>,
}

impl Ledger {
    /// Create a ledger with an empty book and the deployer holding `Admin`
    pub fn new(deployer: AccountId) -> Self {
        Self {
            balances: BTreeMap::new(),
            total_supply: Amount::ZERO,
            roles: RoleRegistry::new(deployer),
            pause: PauseSwitch::new(),
            frozen: FrozenRegistry::new(),
            events: Vec::new(),
        }
    }

    // ───────────────────────── Metadata ─────────────────────────

    pub fn name(&self) -> &'static str {
        TOKEN_NAME
    }

    pub fn symbol(&self) -> &'static str {
        TOKEN_SYMBOL
    }

    pub fn decimals(&self) -> u32 {
        TOKEN_DECIMALS
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Balance of an account. Accounts never touched report zero.
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    /// Total supply across all accounts, custody included
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Whether the account holds the role
    pub fn has_role(&self, role: Role, account: &AccountId) -> bool {
        self.roles.has_role(role, account)
    }

    /// Whether the account is frozen. Always `false` for custody.
    pub fn is_frozen(&self, account: &AccountId) -> bool {
        self.frozen.is_frozen(account)
    }

    /// Whether the transfer family is currently halted
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    // ───────────────────────── Role Administration ─────────────────────────

    /// Grant a role to an account. Admin-only.
    ///
    /// Idempotent: granting a role the account already holds succeeds
    /// without emitting an event.
    pub fn grant_role(
        &mut self,
        caller: AccountId,
        role: Role,
        account: AccountId,
    ) -> Result<(), LedgerError> {
        self.roles.require(Role::Admin, &caller)?;
        if self.roles.grant(role, account) {
            self.events
                .push(LedgerEvent::RoleGranted(RoleGranted { caller, role, account }));
        }
        Ok(())
    }

    /// Revoke a role from an account. Admin-only. Idempotent.
    pub fn revoke_role(
        &mut self,
        caller: AccountId,
        role: Role,
        account: AccountId,
    ) -> Result<(), LedgerError> {
        self.roles.require(Role::Admin, &caller)?;
        if self.roles.revoke(role, &account) {
            self.events
                .push(LedgerEvent::RoleRevoked(RoleRevoked { caller, role, account }));
        }
        Ok(())
    }

    // ───────────────────────── Pause Switch ─────────────────────────

    /// Halt the transfer family. Pauser-only; fails when already paused.
    pub fn pause(&mut self, caller: AccountId) -> Result<(), LedgerError> {
        self.roles.require(Role::Pauser, &caller)?;
        self.pause.pause()?;
        self.events.push(LedgerEvent::Paused(Paused { caller }));
        Ok(())
    }

    /// Resume the transfer family. Pauser-only; fails when not paused.
    pub fn unpause(&mut self, caller: AccountId) -> Result<(), LedgerError> {
        self.roles.require(Role::Pauser, &caller)?;
        self.pause.unpause()?;
        self.events.push(LedgerEvent::Unpaused(Unpaused { caller }));
        Ok(())
    }

    // ───────────────────────── Freeze Controls ─────────────────────────

    /// Freeze an account. Govern-only; strict; custody is refused.
    pub fn freeze(&mut self, caller: AccountId, account: AccountId) -> Result<(), LedgerError> {
        self.roles.require(Role::Govern, &caller)?;
        self.frozen.freeze(account)?;
        self.events.push(LedgerEvent::Frozen(Frozen { caller, account }));
        Ok(())
    }

    /// Unfreeze an account. Govern-only; strict.
    pub fn unfreeze(&mut self, caller: AccountId, account: AccountId) -> Result<(), LedgerError> {
        self.roles.require(Role::Govern, &caller)?;
        self.frozen.unfreeze(&account)?;
        self.events.push(LedgerEvent::Unfrozen(Unfrozen { caller, account }));
        Ok(())
    }

    // ───────────────────────── Supply ─────────────────────────

    /// Mint new supply to an account. Minter-only; not gated by pause;
    /// the recipient must not be frozen.
    pub fn mint(
        &mut self,
        caller: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.roles.require(Role::Minter, &caller)?;
        self.frozen.require_active(&to)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticFault)?;
        self.credit(&to, amount)?;
        self.total_supply = new_supply;
        self.events.push(LedgerEvent::Minted(Minted { caller, to, amount }));
        Ok(())
    }

    /// Destroy supply from the caller's own balance. Burner-only; not
    /// gated by pause; a frozen burner cannot burn.
    pub fn burn(&mut self, caller: AccountId, amount: Amount) -> Result<(), LedgerError> {
        self.roles.require(Role::Burner, &caller)?;
        self.frozen.require_active(&caller)?;
        let new_supply = match self.total_supply.checked_sub(amount) {
            Some(supply) => supply,
            None => {
                // More than the whole supply is certainly more than one balance
                return Err(LedgerError::InsufficientBalance {
                    required: amount.to_string(),
                    available: self.balance_of(&caller).to_string(),
                });
            }
        };
        self.debit(&caller, amount)?;
        self.total_supply = new_supply;
        self.events.push(LedgerEvent::Burned(Burned { caller, amount }));
        Ok(())
    }

    // ───────────────────────── Transfers ─────────────────────────

    /// Move value from the caller to a recipient. Open to any holder;
    /// blocked while paused; both ends must be unfrozen.
    pub fn transfer(
        &mut self,
        caller: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.pause.require_unpaused()?;
        self.apply_transfers(&caller, &[(to, amount)])?;
        self.events
            .push(LedgerEvent::Transferred(Transferred { from: caller, to, amount }));
        Ok(())
    }

    /// Move value from the caller to several recipients in one atomic
    /// batch. All-or-nothing: any failing check rejects the whole batch.
    /// An empty batch succeeds and changes nothing.
    pub fn multi_transfer(
        &mut self,
        caller: AccountId,
        recipients: &[AccountId],
        amounts: &[Amount],
    ) -> Result<(), LedgerError> {
        self.pause.require_unpaused()?;
        if recipients.len() != amounts.len() {
            return Err(LedgerError::LengthMismatch {
                recipients: recipients.len(),
                amounts: amounts.len(),
            });
        }
        let entries: Vec<(AccountId, Amount)> = recipients
            .iter()
            .copied()
            .zip(amounts.iter().copied())
            .collect();
        self.apply_transfers(&caller, &entries)?;
        for (to, amount) in entries {
            self.events
                .push(LedgerEvent::Transferred(Transferred { from: caller, to, amount }));
        }
        Ok(())
    }

    // ───────────────────────── Custody ─────────────────────────

    /// Move the entire balance of a frozen account into custody.
    /// Govern-only; the target must already be frozen; works while
    /// paused. Returns the seized amount.
    pub fn seize(&mut self, caller: AccountId, account: AccountId) -> Result<Amount, LedgerError> {
        self.roles.require(Role::Govern, &caller)?;
        if !self.frozen.is_frozen(&account) {
            return Err(LedgerError::AccountNotFrozen {
                account: account.to_string(),
            });
        }
        let amount = self.balance_of(&account);
        let custody = self.balance_of(&AccountId::CUSTODY);
        let new_custody = custody
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticFault)?;
        self.balances.insert(account, Amount::ZERO);
        self.balances.insert(AccountId::CUSTODY, new_custody);
        self.events
            .push(LedgerEvent::Seized(Seized { caller, account, amount }));
        Ok(amount)
    }

    /// Move funds out of custody to the calling governor. Govern-only;
    /// not gated by pause; a frozen governor cannot receive.
    pub fn withdraw(&mut self, caller: AccountId, amount: Amount) -> Result<(), LedgerError> {
        self.roles.require(Role::Govern, &caller)?;
        self.apply_transfers(&AccountId::CUSTODY, &[(caller, amount)])?;
        self.events
            .push(LedgerEvent::Withdrawn(Withdrawn { caller, amount }));
        Ok(())
    }

    // ───────────────────────── Events ─────────────────────────

    /// All events emitted since the last drain
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Drain all events (consume and clear)
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    // ───────────────────────── Internal Book ─────────────────────────

    /// Stage and commit a set of transfers out of one account.
    ///
    /// The caller is debited the sum of all entries, each recipient is
    /// credited against a staged view of the book, and nothing is written
    /// until every check has passed. The staged view makes duplicate
    /// recipients, self-transfers, and the caller appearing among its own
    /// recipients settle exactly.
    fn apply_transfers(
        &mut self,
        from: &AccountId,
        entries: &[(AccountId, Amount)],
    ) -> Result<(), LedgerError> {
        // Every account whose balance would change must be unfrozen
        self.frozen.require_active(from)?;
        for (to, _) in entries {
            self.frozen.require_active(to)?;
        }

        let mut total = Amount::ZERO;
        for (_, amount) in entries {
            total = total
                .checked_add(*amount)
                .ok_or(LedgerError::ArithmeticFault)?;
        }
        let available = self.balance_of(from);
        let debited = available
            .checked_sub(total)
            .ok_or_else(|| LedgerError::InsufficientBalance {
                required: total.to_string(),
                available: available.to_string(),
            })?;

        let mut staged: BTreeMap<AccountId, Amount> = BTreeMap::new();
        staged.insert(*from, debited);
        for (to, amount) in entries {
            let current = staged
                .get(to)
                .copied()
                .unwrap_or_else(|| self.balance_of(to));
            let next = current
                .checked_add(*amount)
                .ok_or(LedgerError::ArithmeticFault)?;
            staged.insert(*to, next);
        }

        for (account, balance) in staged {
            self.balances.insert(account, balance);
        }
        Ok(())
    }

    /// Credit one account with freeze and overflow checks
    fn credit(&mut self, account: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        self.frozen.require_active(account)?;
        let next = self
            .balance_of(account)
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticFault)?;
        self.balances.insert(*account, next);
        Ok(())
    }

    /// Debit one account with freeze and shortfall checks
    fn debit(&mut self, account: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        self.frozen.require_active(account)?;
        let available = self.balance_of(account);
        let next = available
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::InsufficientBalance {
                required: amount.to_string(),
                available: available.to_string(),
            })?;
        self.balances.insert(*account, next);
        Ok(())
    }

    // ───────────────────────── Snapshot Access ─────────────────────────

    pub(crate) fn balances(&self) -> &BTreeMap<AccountId, Amount> {
        &self.balances
    }

    pub(crate) fn role_registry(&self) -> &RoleRegistry {
        &self.roles
    }

    pub(crate) fn frozen_registry(&self) -> &FrozenRegistry {
        &self.frozen
    }

    /// Reassemble a ledger from stored parts. The event log starts empty.
    pub(crate) fn from_parts(
        balances: BTreeMap<AccountId, Amount>,
        total_supply: Amount,
        roles: RoleRegistry,
        pause: PauseSwitch,
        frozen: FrozenRegistry,
    ) -> Self {
        Self {
            balances,
            total_supply,
            roles,
            pause,
            frozen,
            events: Vec::new(),
        }
    }
}
