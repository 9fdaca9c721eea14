use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the ledger and reporting layers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account already managed: {0}")]
    AccountAlreadyManaged(Uuid),
    #[error("Account not managed: {0}")]
    AccountNotManaged(Uuid),
    #[error("Unknown account: {0}")]
    UnknownAccount(Uuid),
    #[error("No display name for account: {0}")]
    UnnamedAccount(Uuid),
}

pub type Result<T> = StdResult<T, LedgerError>;
