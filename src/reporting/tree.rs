//! Indented tree renderings of a portfolio's management hierarchy.

use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::{LedgerError, Result};
use crate::ledger::Ledger;

/// Caller-supplied display names, keyed by node id. Every visited node must
/// be present.
pub type AccountNames = HashMap<Uuid, String>;

/// Pre-order rendering: parent line first, children in construction order,
/// one leading space per depth level.
pub struct PortfolioTreePrinter<'a> {
    ledger: &'a Ledger,
    root: Uuid,
    names: &'a AccountNames,
}

impl<'a> PortfolioTreePrinter<'a> {
    pub fn new(ledger: &'a Ledger, root: Uuid, names: &'a AccountNames) -> Self {
        Self {
            ledger,
            root,
            names,
        }
    }

    pub fn lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.walk(self.root, 0, &mut lines)?;
        Ok(lines)
    }

    fn walk(&self, node: Uuid, depth: usize, lines: &mut Vec<String>) -> Result<()> {
        lines.push(render_line(self.names, node, depth)?);
        if let Some(portfolio) = self.ledger.portfolio(node) {
            for child in portfolio.children() {
                self.walk(*child, depth + 1, lines)?;
            }
        }
        Ok(())
    }
}

/// Post-order rendering over reversed children: the last child's subtree is
/// emitted first and the parent line last. Not the same as reversing the
/// forward printer's output.
pub struct ReversePortfolioTreePrinter<'a> {
    ledger: &'a Ledger,
    root: Uuid,
    names: &'a AccountNames,
}

impl<'a> ReversePortfolioTreePrinter<'a> {
    pub fn new(ledger: &'a Ledger, root: Uuid, names: &'a AccountNames) -> Self {
        Self {
            ledger,
            root,
            names,
        }
    }

    pub fn lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.walk(self.root, 0, &mut lines)?;
        Ok(lines)
    }

    fn walk(&self, node: Uuid, depth: usize, lines: &mut Vec<String>) -> Result<()> {
        if let Some(portfolio) = self.ledger.portfolio(node) {
            for child in portfolio.children().iter().rev() {
                self.walk(*child, depth + 1, lines)?;
            }
        }
        lines.push(render_line(self.names, node, depth)?);
        Ok(())
    }
}

fn render_line(names: &AccountNames, node: Uuid, depth: usize) -> Result<String> {
    let name = names
        .get(&node)
        .ok_or(LedgerError::UnnamedAccount(node))?;
    Ok(format!("{}{}", " ".repeat(depth), name))
}
