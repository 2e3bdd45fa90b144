use super::expense::Expense;
use super::group::Group;
use super::settlement::Settlement;
use serde::{Deserialize, Serialize};

/// A complete, consistent view of the record store at one point in time.
/// The pure pipeline only ever consumes one of these; the caller is
/// responsible for assembling it before invoking the core, so the core never
/// observes partial or interleaved updates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub expenses: Vec<Expense>,
    pub settlements: Vec<Settlement>,
    pub groups: Vec<Group>,
}

impl LedgerSnapshot {
    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn settlement(&self, id: &str) -> Option<&Settlement> {
        self.settlements.iter().find(|s| s.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }
}
