use thiserror::Error;

use crate::grades::GradeError;
use crate::inventory_log::LogError;
use crate::ledger::TransactionError;
use crate::pharmacy::PharmacyError;

/// Failures reported by [`KeyedEntityStore`](crate::store_framework::KeyedEntityStore).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),
}

/// Errors that escape a demo run and end the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Pharmacy(#[from] PharmacyError),
    #[error(transparent)]
    Grade(#[from] GradeError),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("Console output failed: {0}")]
    Output(#[from] std::io::Error),
}
