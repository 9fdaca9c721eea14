use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A composite node grouping two managed accounts or portfolios.
///
/// Children are fixed at construction; construction order is the traversal
/// order for balances, transaction concatenation, and tree printing. The
/// cycle and duplicate checks live in the ledger's fallible factory, so a
/// portfolio can only exist in a valid state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    children: Vec<Uuid>,
}

impl Portfolio {
    pub(crate) fn new(first: Uuid, second: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            children: vec![first, second],
        }
    }

    /// Managed children, in construction order.
    pub fn children(&self) -> &[Uuid] {
        &self.children
    }
}
