//! Derived-metric folds over a node's registered transactions.
//!
//! Each query goes through [`Transaction::classify`], so non-matching
//! variants contribute exactly zero without any per-query type checks.

use uuid::Uuid;

use crate::errors::Result;
use crate::ledger::{CertificateOfDeposit, Ledger, Transaction, TransactionClassifier};

/// Net amount moved into a node by transfers: deposit legs minus withdraw
/// legs.
pub struct TransferNet<'a> {
    ledger: &'a Ledger,
    node: Uuid,
}

impl<'a> TransferNet<'a> {
    pub fn new(ledger: &'a Ledger, node: Uuid) -> Self {
        Self { ledger, node }
    }

    pub fn value(&self) -> Result<f64> {
        Ok(Self::over(&self.ledger.transactions(self.node)?))
    }

    pub(crate) fn over(transactions: &[Transaction]) -> f64 {
        #[derive(Default)]
        struct Net(f64);
        impl TransactionClassifier for Net {
            fn on_deposit_leg(&mut self, value: f64, _transfer: Uuid) {
                self.0 += value;
            }
            fn on_withdraw_leg(&mut self, value: f64, _transfer: Uuid) {
                self.0 -= value;
            }
        }

        let mut net = Net::default();
        for transaction in transactions {
            transaction.classify(&mut net);
        }
        net.0
    }
}

/// Total principal currently locked in certificates of deposit, reported as
/// a positive amount.
pub struct InvestmentNet<'a> {
    ledger: &'a Ledger,
    node: Uuid,
}

impl<'a> InvestmentNet<'a> {
    pub fn new(ledger: &'a Ledger, node: Uuid) -> Self {
        Self { ledger, node }
    }

    pub fn value(&self) -> Result<f64> {
        Ok(Self::over(&self.ledger.transactions(self.node)?))
    }

    pub(crate) fn over(transactions: &[Transaction]) -> f64 {
        #[derive(Default)]
        struct Invested(f64);
        impl TransactionClassifier for Invested {
            fn on_certificate_of_deposit(&mut self, certificate: &CertificateOfDeposit) {
                self.0 += certificate.principal;
            }
        }

        let mut invested = Invested::default();
        for transaction in transactions {
            transaction.classify(&mut invested);
        }
        invested.0
    }
}

/// Sum of simple-interest earnings over every certificate of deposit in
/// scope.
pub struct InvestmentEarnings<'a> {
    ledger: &'a Ledger,
    node: Uuid,
}

impl<'a> InvestmentEarnings<'a> {
    pub fn new(ledger: &'a Ledger, node: Uuid) -> Self {
        Self { ledger, node }
    }

    pub fn value(&self) -> Result<f64> {
        Ok(Self::over(&self.ledger.transactions(self.node)?))
    }

    pub(crate) fn over(transactions: &[Transaction]) -> f64 {
        #[derive(Default)]
        struct Earnings(f64);
        impl TransactionClassifier for Earnings {
            fn on_certificate_of_deposit(&mut self, certificate: &CertificateOfDeposit) {
                self.0 += certificate.earnings();
            }
        }

        let mut earnings = Earnings::default();
        for transaction in transactions {
            transaction.classify(&mut earnings);
        }
        earnings.0
    }
}
