use crate::error::LedgerError;
use crate::models::{Expense, Group, LedgerSnapshot, Settlement};

/// Persistence seam. The core computes new record states; implementations own
/// where they live. Updates against unknown ids fail with the matching
/// not-found error rather than inserting.
pub trait Storage {
    fn create_expense(&mut self, expense: Expense) -> Result<Expense, LedgerError>;
    fn update_expense(&mut self, expense: Expense) -> Result<Expense, LedgerError>;
    fn get_expense(&self, id: &str) -> Option<Expense>;

    fn create_settlement(&mut self, settlement: Settlement) -> Result<Settlement, LedgerError>;
    fn update_settlement(&mut self, settlement: Settlement) -> Result<Settlement, LedgerError>;
    fn get_settlement(&self, id: &str) -> Option<Settlement>;

    fn create_group(&mut self, group: Group) -> Result<Group, LedgerError>;
    fn update_group(&mut self, group: Group) -> Result<Group, LedgerError>;
    fn get_group(&self, id: &str) -> Option<Group>;

    /// A complete, consistent snapshot for the pure pipeline.
    fn snapshot(&self) -> LedgerSnapshot;
}

pub mod in_memory;
