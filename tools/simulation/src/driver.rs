//! Seeded random operation driver
//!
//! Wraps one ledger with a fixed cast (admin, one account per operator
//! role, and a pool of holders) and applies a deterministic stream of
//! random operations. Rejections are expected traffic and are counted,
//! never propagated; the driver's own failure mode is a broken supply
//! invariant, which `run` reports.

use std::collections::BTreeMap;

use ledger::errors::LedgerError;
use ledger::token::Ledger;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use types::amount::{Amount, AmountError};
use types::ids::AccountId;
use types::roles::Role;
use uuid::Uuid;

use crate::config::SimConfig;

/// Harness-level errors around scripted setup
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Ledger rejected a scripted operation: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Invalid amount in configuration: {0}")]
    Amount(#[from] AmountError),
}

/// Operation classes the driver draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OpKind {
    Mint,
    Burn,
    Transfer,
    MultiTransfer,
    Freeze,
    Unfreeze,
    Seize,
    Withdraw,
    Pause,
    Unpause,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Mint => "mint",
            OpKind::Burn => "burn",
            OpKind::Transfer => "transfer",
            OpKind::MultiTransfer => "multi_transfer",
            OpKind::Freeze => "freeze",
            OpKind::Unfreeze => "unfreeze",
            OpKind::Seize => "seize",
            OpKind::Withdraw => "withdraw",
            OpKind::Pause => "pause",
            OpKind::Unpause => "unpause",
        }
    }
}

/// Per-class accept/reject counters
#[derive(Debug, Clone, Copy, Default)]
pub struct OpCounters {
    pub accepted: u64,
    pub rejected: u64,
}

/// Deterministic driver around a single ledger
///
/// Cast identities derive from the seed, so two drivers built from the
/// same configuration produce identical operation streams, identical
/// counters, and identical final state digests.
pub struct SimDriver {
    pub ledger: Ledger,
    admin: AccountId,
    minter: AccountId,
    burner: AccountId,
    governor: AccountId,
    pauser: AccountId,
    holders: Vec<AccountId>,
    rng: ChaCha8Rng,
    amount_ceiling: Amount,
    counters: BTreeMap<OpKind, OpCounters>,
    pub accepted: u64,
    pub rejected: u64,
}

impl SimDriver {
    /// Build the cast and grant each operator its role
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        let admin = cast_id(config.seed, 0);
        let minter = cast_id(config.seed, 1);
        let burner = cast_id(config.seed, 2);
        let governor = cast_id(config.seed, 3);
        let pauser = cast_id(config.seed, 4);

        // Scripted scenarios address at least two holders
        let holder_count = config.holders.max(2);
        let holders: Vec<AccountId> = (0..holder_count)
            .map(|i| cast_id(config.seed, 5 + i as u64))
            .collect();

        let mut ledger = Ledger::new(admin);
        ledger.grant_role(admin, Role::Minter, minter)?;
        ledger.grant_role(admin, Role::Burner, burner)?;
        ledger.grant_role(admin, Role::Govern, governor)?;
        ledger.grant_role(admin, Role::Pauser, pauser)?;

        Ok(Self {
            ledger,
            admin,
            minter,
            burner,
            governor,
            pauser,
            holders,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            amount_ceiling: Amount::from_decimal(config.amount_ceiling)?,
            counters: BTreeMap::new(),
            accepted: 0,
            rejected: 0,
        })
    }

    // ───────────────────────── Cast Access ─────────────────────────

    pub fn admin(&self) -> AccountId {
        self.admin
    }

    pub fn minter(&self) -> AccountId {
        self.minter
    }

    pub fn burner(&self) -> AccountId {
        self.burner
    }

    pub fn governor(&self) -> AccountId {
        self.governor
    }

    pub fn pauser(&self) -> AccountId {
        self.pauser
    }

    pub fn holders(&self) -> &[AccountId] {
        &self.holders
    }

    // ───────────────────────── Random Stream ─────────────────────────

    /// Apply one random operation. Returns whether the ledger accepted it.
    pub fn step(&mut self) -> bool {
        let kind = self.draw_kind();
        let outcome = self.apply(kind);

        let entry = self.counters.entry(kind).or_default();
        match outcome {
            Ok(()) => {
                entry.accepted += 1;
                self.accepted += 1;
                true
            }
            Err(_) => {
                entry.rejected += 1;
                self.rejected += 1;
                false
            }
        }
    }

    /// Apply `n` random operations, re-checking the supply invariant
    /// after every step. Returns `false` if the invariant ever breaks.
    pub fn run(&mut self, n: u64) -> bool {
        for _ in 0..n {
            self.step();
            if !self.supply_invariant_holds() {
                return false;
            }
        }
        true
    }

    /// `sum(balances) == total_supply` over a fresh snapshot
    pub fn supply_invariant_holds(&self) -> bool {
        let snapshot = self.ledger.snapshot();
        let mut sum = Amount::ZERO;
        for balance in snapshot.balances.values() {
            sum = match sum.checked_add(*balance) {
                Some(next) => next,
                None => return false,
            };
        }
        sum == snapshot.total_supply
    }

    /// Per-class accept/reject counters
    pub fn counters(&self) -> &BTreeMap<OpKind, OpCounters> {
        &self.counters
    }

    /// One-line accept/reject summary across operation classes
    pub fn summary(&self) -> String {
        let per_class: Vec<String> = self
            .counters
            .iter()
            .map(|(kind, c)| {
                format!("{} {}/{}", kind.as_str(), c.accepted, c.accepted + c.rejected)
            })
            .collect();
        format!(
            "accepted {} of {} ({})",
            self.accepted,
            self.accepted + self.rejected,
            per_class.join(", ")
        )
    }

    // ───────────────────────── Internals ─────────────────────────

    fn draw_kind(&mut self) -> OpKind {
        match self.rng.gen_range(0..100u32) {
            0..=34 => OpKind::Transfer,
            35..=44 => OpKind::MultiTransfer,
            45..=59 => OpKind::Mint,
            60..=69 => OpKind::Burn,
            70..=77 => OpKind::Freeze,
            78..=83 => OpKind::Unfreeze,
            84..=87 => OpKind::Seize,
            88..=91 => OpKind::Withdraw,
            92..=95 => OpKind::Pause,
            _ => OpKind::Unpause,
        }
    }

    fn apply(&mut self, kind: OpKind) -> Result<(), LedgerError> {
        match kind {
            OpKind::Mint => {
                let to = self.pick_account();
                let amount = self.random_amount();
                self.ledger.mint(self.minter, to, amount)
            }
            OpKind::Burn => {
                let amount = self.random_amount();
                self.ledger.burn(self.burner, amount)
            }
            OpKind::Transfer => {
                let from = self.pick_account();
                let to = self.pick_account();
                let amount = self.random_amount();
                self.ledger.transfer(from, to, amount)
            }
            OpKind::MultiTransfer => {
                let from = self.pick_account();
                let count = self.rng.gen_range(2..=4usize);
                let recipients: Vec<AccountId> =
                    (0..count).map(|_| self.pick_account()).collect();
                let amounts: Vec<Amount> = (0..count).map(|_| self.random_amount()).collect();
                self.ledger.multi_transfer(from, &recipients, &amounts)
            }
            OpKind::Freeze => {
                let target = self.pick_holder();
                self.ledger.freeze(self.governor, target)
            }
            OpKind::Unfreeze => {
                let target = self.pick_holder();
                self.ledger.unfreeze(self.governor, target)
            }
            OpKind::Seize => {
                let target = self.pick_holder();
                self.ledger.seize(self.governor, target).map(|_| ())
            }
            OpKind::Withdraw => {
                let amount = self.random_amount();
                self.ledger.withdraw(self.governor, amount)
            }
            OpKind::Pause => self.ledger.pause(self.pauser),
            OpKind::Unpause => self.ledger.unpause(self.pauser),
        }
    }

    /// Any cast member that can hold a balance: operators and holders
    fn pick_account(&mut self) -> AccountId {
        let index = self.rng.gen_range(0..self.holders.len() + 4);
        match index {
            0 => self.minter,
            1 => self.burner,
            2 => self.governor,
            3 => self.pauser,
            _ => self.holders[index - 4],
        }
    }

    fn pick_holder(&mut self) -> AccountId {
        let index = self.rng.gen_range(0..self.holders.len());
        self.holders[index]
    }

    fn random_amount(&mut self) -> Amount {
        Amount::from_raw(self.rng.gen_range(0..=self.amount_ceiling.raw()))
    }
}

/// Deterministic cast identity: seed in the high bits, slot in the low.
/// The low word is offset by one so slot zero never collides with the
/// custody (nil) identity.
fn cast_id(seed: u64, slot: u64) -> AccountId {
    AccountId::from_uuid(Uuid::from_u128(((seed as u128) << 64) | (slot as u128 + 1)))
}
