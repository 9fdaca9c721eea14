use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::{LedgerError, Result};

use super::account::Account;
use super::portfolio::Portfolio;
use super::transaction::{CertificateOfDeposit, Transaction, TransactionKind, Transfer};

/// Owns every account, portfolio, and transfer; nodes are referenced by id.
///
/// Identity is id-based throughout: `registers` and `manages` never compare
/// transaction or account contents. Single-writer: the ledger provides no
/// interior locking, callers serialize mutation externally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    accounts: Vec<Account>,
    portfolios: Vec<Portfolio>,
    transfers: Vec<Transfer>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty leaf account and returns its id.
    pub fn new_account(&mut self) -> Uuid {
        let account = Account::new();
        let id = account.id;
        self.accounts.push(account);
        debug!(account = %id, "account created");
        id
    }

    /// Creates a deposit and registers it on `account` in one step.
    pub fn register_deposit(&mut self, value: f64, account: Uuid) -> Result<Uuid> {
        self.register(account, TransactionKind::Deposit { value })
    }

    /// Creates a withdrawal and registers it on `account` in one step.
    pub fn register_withdraw(&mut self, value: f64, account: Uuid) -> Result<Uuid> {
        self.register(account, TransactionKind::Withdraw { value })
    }

    /// Registers a withdraw leg on `from` and a deposit leg on `to`, both
    /// owned by the returned transfer and sharing its value. Fails before
    /// touching either account when one of them is unknown.
    pub fn register_transfer(&mut self, value: f64, from: Uuid, to: Uuid) -> Result<Transfer> {
        self.leaf_index(from)?;
        self.leaf_index(to)?;
        let transfer_id = Uuid::new_v4();
        let withdraw_leg = self.register(
            from,
            TransactionKind::WithdrawLeg {
                value,
                transfer: transfer_id,
            },
        )?;
        let deposit_leg = self.register(
            to,
            TransactionKind::DepositLeg {
                value,
                transfer: transfer_id,
            },
        )?;
        let transfer = Transfer::new(transfer_id, value, withdraw_leg, deposit_leg);
        self.transfers.push(transfer.clone());
        debug!(transfer = %transfer_id, value, "transfer registered");
        Ok(transfer)
    }

    /// Registers a certificate of deposit, withdrawing its principal from
    /// `account` immediately.
    pub fn register_certificate_of_deposit(
        &mut self,
        principal: f64,
        days: u32,
        annual_rate: f64,
        account: Uuid,
    ) -> Result<Uuid> {
        self.register(
            account,
            TransactionKind::CertificateOfDeposit(CertificateOfDeposit {
                principal,
                days,
                annual_rate,
            }),
        )
    }

    fn register(&mut self, account: Uuid, kind: TransactionKind) -> Result<Uuid> {
        let index = self.leaf_index(account)?;
        let id = self.accounts[index].register(Transaction::new(kind));
        debug!(account = %account, transaction = %id, "transaction registered");
        Ok(id)
    }

    /// Groups two nodes under a new portfolio.
    ///
    /// Fails with [`LedgerError::AccountAlreadyManaged`] when the nodes are
    /// the same or either already manages the other; a failed construction
    /// leaves the ledger untouched.
    pub fn create_portfolio(&mut self, first: Uuid, second: Uuid) -> Result<Uuid> {
        self.node_known(first)?;
        self.node_known(second)?;
        if first == second || self.manages(first, second) || self.manages(second, first) {
            warn!(%first, %second, "portfolio construction rejected");
            return Err(LedgerError::AccountAlreadyManaged(second));
        }
        let portfolio = Portfolio::new(first, second);
        let id = portfolio.id;
        self.portfolios.push(portfolio);
        debug!(portfolio = %id, %first, %second, "portfolio created");
        Ok(id)
    }

    /// Current balance of an account or portfolio: a leaf folds its own
    /// transactions, a portfolio sums its children.
    pub fn balance(&self, node: Uuid) -> Result<f64> {
        if let Some(account) = self.account(node) {
            return Ok(account.balance());
        }
        if let Some(portfolio) = self.portfolio(node) {
            let mut total = 0.0;
            for child in portfolio.children() {
                total += self.balance(*child)?;
            }
            return Ok(total);
        }
        Err(LedgerError::UnknownAccount(node))
    }

    /// Whether the transaction is registered anywhere under `node`.
    pub fn registers(&self, node: Uuid, transaction: Uuid) -> bool {
        if let Some(account) = self.account(node) {
            return account.registers(transaction);
        }
        self.portfolio(node).is_some_and(|portfolio| {
            portfolio
                .children()
                .iter()
                .any(|child| self.registers(*child, transaction))
        })
    }

    /// Reflexive, transitive management predicate: every node manages
    /// itself, a portfolio additionally manages whatever its children manage.
    pub fn manages(&self, node: Uuid, other: Uuid) -> bool {
        if node == other {
            return true;
        }
        self.portfolio(node).is_some_and(|portfolio| {
            portfolio
                .children()
                .iter()
                .any(|child| self.manages(*child, other))
        })
    }

    /// Transactions under `node`: registration order for an account, child
    /// concatenation in construction order for a portfolio. No cross-child
    /// merge by time is attempted.
    pub fn transactions(&self, node: Uuid) -> Result<Vec<Transaction>> {
        if let Some(account) = self.account(node) {
            return Ok(account.transactions().to_vec());
        }
        if let Some(portfolio) = self.portfolio(node) {
            let mut all = Vec::new();
            for child in portfolio.children() {
                all.extend(self.transactions(*child)?);
            }
            return Ok(all);
        }
        Err(LedgerError::UnknownAccount(node))
    }

    /// The target's own transaction sequence, provided `node` manages it.
    pub fn transactions_of(&self, node: Uuid, account: Uuid) -> Result<Vec<Transaction>> {
        if !self.manages(node, account) {
            return Err(LedgerError::AccountNotManaged(account));
        }
        self.transactions(account)
    }

    /// Looks a transaction up by id across every account.
    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.accounts
            .iter()
            .flat_map(|account| account.transactions().iter())
            .find(|transaction| transaction.id == id)
    }

    pub fn transfer(&self, id: Uuid) -> Option<&Transfer> {
        self.transfers.iter().find(|transfer| transfer.id == id)
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn portfolio(&self, id: Uuid) -> Option<&Portfolio> {
        self.portfolios.iter().find(|portfolio| portfolio.id == id)
    }

    fn leaf_index(&self, account: Uuid) -> Result<usize> {
        self.accounts
            .iter()
            .position(|a| a.id == account)
            .ok_or(LedgerError::UnknownAccount(account))
    }

    fn node_known(&self, node: Uuid) -> Result<()> {
        if self.account(node).is_some() || self.portfolio(node).is_some() {
            Ok(())
        } else {
            Err(LedgerError::UnknownAccount(node))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_fails_for_unknown_accounts() {
        let mut ledger = Ledger::new();
        let foreign = Uuid::new_v4();
        assert_eq!(
            ledger.register_deposit(100.0, foreign),
            Err(LedgerError::UnknownAccount(foreign))
        );
    }

    #[test]
    fn transfer_with_unknown_destination_registers_nothing() {
        let mut ledger = Ledger::new();
        let from = ledger.new_account();
        let foreign = Uuid::new_v4();

        assert_eq!(
            ledger.register_transfer(100.0, from, foreign),
            Err(LedgerError::UnknownAccount(foreign))
        );
        assert!(ledger.transactions(from).unwrap().is_empty());
        assert!(ledger.transfers.is_empty());
    }

    #[test]
    fn rejected_portfolio_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        let account = ledger.new_account();

        assert_eq!(
            ledger.create_portfolio(account, account),
            Err(LedgerError::AccountAlreadyManaged(account))
        );
        assert!(ledger.portfolios.is_empty());
    }

    #[test]
    fn duplicate_check_is_symmetric() {
        let mut ledger = Ledger::new();
        let a = ledger.new_account();
        let b = ledger.new_account();
        let inner = ledger.create_portfolio(a, b).unwrap();

        // managed child on either side of the call is rejected
        assert!(ledger.create_portfolio(inner, a).is_err());
        assert!(ledger.create_portfolio(a, inner).is_err());
        assert_eq!(ledger.portfolios.len(), 1);
    }

    #[test]
    fn manages_does_not_reach_outside_the_tree() {
        let mut ledger = Ledger::new();
        let a = ledger.new_account();
        let b = ledger.new_account();
        let outsider = ledger.new_account();
        let portfolio = ledger.create_portfolio(a, b).unwrap();

        assert!(ledger.manages(portfolio, portfolio));
        assert!(ledger.manages(portfolio, a));
        assert!(!ledger.manages(portfolio, outsider));
        assert!(!ledger.manages(a, b));
    }

    #[test]
    fn transaction_lookup_spans_accounts() {
        let mut ledger = Ledger::new();
        let a = ledger.new_account();
        let b = ledger.new_account();
        ledger.register_deposit(10.0, a).unwrap();
        let id = ledger.register_deposit(20.0, b).unwrap();

        let found = ledger.transaction(id).expect("registered transaction");
        assert_eq!(found.value(), 20.0);
    }
}
