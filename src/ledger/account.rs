use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::Transaction;

/// A leaf account: an append-only, ordered list of registered transactions.
///
/// Insertion order drives summary output; balance is order-independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Creates a new account with no transactions.
    pub(crate) fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            transactions: Vec::new(),
        }
    }

    pub(crate) fn register(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    /// Left fold of every registered transaction, starting at zero.
    pub fn balance(&self) -> f64 {
        self.transactions
            .iter()
            .fold(0.0, |balance, transaction| transaction.apply_to(balance))
    }

    /// Whether the transaction was registered on this account.
    pub fn registers(&self, transaction: Uuid) -> bool {
        self.transactions.iter().any(|t| t.id == transaction)
    }

    /// Registration-order view of this account's transactions.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

#[cfg(test)]
mod tests {
    use super::super::transaction::TransactionKind;
    use super::*;

    #[test]
    fn fresh_account_has_zero_balance_and_no_transactions() {
        let account = Account::new();
        assert_eq!(account.balance(), 0.0);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn balance_folds_transactions_in_order() {
        let mut account = Account::new();
        account.register(Transaction::new(TransactionKind::Deposit { value: 100.0 }));
        account.register(Transaction::new(TransactionKind::Withdraw { value: 30.0 }));
        assert_eq!(account.balance(), 70.0);
    }

    #[test]
    fn registers_matches_by_identity() {
        let mut account = Account::new();
        let id = account.register(Transaction::new(TransactionKind::Deposit { value: 1.0 }));
        assert!(account.registers(id));
        assert!(!account.registers(Uuid::new_v4()));
    }
}
