#![doc(test(attr(deny(warnings))))]

//! Portfolio Core models a composable financial ledger: leaf accounts,
//! nested portfolios, typed transactions, derived-metric queries, and
//! line-oriented summary and tree reporting.

pub mod errors;
pub mod ledger;
pub mod reporting;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Portfolio Core tracing initialized.");
    });
}
