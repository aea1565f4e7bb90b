use thiserror::Error;

use crate::error::StoreError;

/// Errors that can occur during patient and prescription operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PharmacyError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Unknown patient: {0}")]
    UnknownPatient(u32),
    #[error("Invalid dose count: {0}")]
    InvalidDoses(i32),
    #[error("Insufficient supply: requested {requested}, available {available}")]
    InsufficientSupply { requested: i32, available: i32 },
}
