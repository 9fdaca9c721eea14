//! Read-only reporting over a ledger: derived-metric queries, flat account
//! summaries, and indented portfolio tree renderings.

pub mod queries;
pub mod summary;
pub mod tree;

pub use queries::{InvestmentEarnings, InvestmentNet, TransferNet};
pub use summary::{
    AccountSummary, AccountSummaryWithAllInvestmentInformation,
    AccountSummaryWithInvestmentEarnings,
};
pub use tree::{AccountNames, PortfolioTreePrinter, ReversePortfolioTreePrinter};
