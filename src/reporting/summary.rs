//! Flat, line-oriented summaries of a node's transaction history.

use uuid::Uuid;

use crate::errors::Result;
use crate::ledger::Ledger;
use crate::reporting::queries::{InvestmentEarnings, InvestmentNet};
use crate::utils::deferred::Deferred;

/// One humanized line per registered transaction, in registration order.
///
/// Works over any node: a portfolio summarizes the concatenation of its
/// children's histories.
pub struct AccountSummary<'a> {
    ledger: &'a Ledger,
    node: Uuid,
}

impl<'a> AccountSummary<'a> {
    pub fn new(ledger: &'a Ledger, node: Uuid) -> Self {
        Self { ledger, node }
    }

    pub fn lines(&self) -> Result<Vec<String>> {
        Ok(self
            .ledger
            .transactions(self.node)?
            .iter()
            .map(|transaction| transaction.humanize())
            .collect())
    }
}

/// Base summary plus a trailing "Earnings of {v}" line.
///
/// The earnings fold runs on its own thread while the base lines are built,
/// so the total cost approaches the slower of the two.
pub struct AccountSummaryWithInvestmentEarnings<'a> {
    ledger: &'a Ledger,
    node: Uuid,
}

impl<'a> AccountSummaryWithInvestmentEarnings<'a> {
    pub fn new(ledger: &'a Ledger, node: Uuid) -> Self {
        Self { ledger, node }
    }

    pub fn lines(&self) -> Result<Vec<String>> {
        let snapshot = self.ledger.transactions(self.node)?;
        let earnings = Deferred::spawn(move || InvestmentEarnings::over(&snapshot));

        let mut lines = AccountSummary::new(self.ledger, self.node).lines()?;
        lines.push(format!("Earnings of {}", earnings.value()));
        Ok(lines)
    }
}

/// Earnings summary plus a trailing "Investments of {v}" line.
pub struct AccountSummaryWithAllInvestmentInformation<'a> {
    ledger: &'a Ledger,
    node: Uuid,
}

impl<'a> AccountSummaryWithAllInvestmentInformation<'a> {
    pub fn new(ledger: &'a Ledger, node: Uuid) -> Self {
        Self { ledger, node }
    }

    pub fn lines(&self) -> Result<Vec<String>> {
        let snapshot = self.ledger.transactions(self.node)?;
        let invested = Deferred::spawn(move || InvestmentNet::over(&snapshot));

        let mut lines = AccountSummaryWithInvestmentEarnings::new(self.ledger, self.node).lines()?;
        lines.push(format!("Investments of {}", invested.value()));
        Ok(lines)
    }
}
