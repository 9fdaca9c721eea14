//! Ledger domain models: transactions, accounts, portfolios, and the arena
//! that owns them.

pub mod account;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod portfolio;
pub mod transaction;

pub use account::Account;
pub use ledger::Ledger;
pub use portfolio::Portfolio;
pub use transaction::{
    CertificateOfDeposit, Transaction, TransactionClassifier, TransactionKind, Transfer,
};
