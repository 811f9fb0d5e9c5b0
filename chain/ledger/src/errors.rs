//! Rejection taxonomy for ledger operations
//!
//! Every operation is total: it either succeeds or returns one of these
//! rejections, and a rejected operation leaves all state untouched.

use thiserror::Error;
use types::roles::Role;

/// Ledger operation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Unauthorized: caller lacks the {role} role")]
    Unauthorized { role: Role },

    #[error("Account is frozen: {account}")]
    AccountFrozen { account: String },

    #[error("Account is not frozen: {account}")]
    AccountNotFrozen { account: String },

    #[error("Ledger is paused")]
    LedgerPaused,

    #[error("Ledger is not paused")]
    LedgerNotPaused,

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: String, available: String },

    #[error("Arithmetic overflow in balance or supply update")]
    ArithmeticFault,

    #[error("Batch length mismatch: {recipients} recipients, {amounts} amounts")]
    LengthMismatch { recipients: usize, amounts: usize },

    #[error("Custody account cannot be frozen")]
    CannotFreezeCustody,
}
