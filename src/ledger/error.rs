use thiserror::Error;

use crate::error::StoreError;

/// Reasons a transaction is rejected. A rejected transaction changes no balance.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),
    #[error("Transfer source and destination are the same account: {0}")]
    SameAccount(u32),
    #[error("Insufficient funds in account {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        account: u32,
        requested: i64,
        available: i64,
    },
    #[error("Balance overflow in account {0}")]
    BalanceOverflow(u32),
}
