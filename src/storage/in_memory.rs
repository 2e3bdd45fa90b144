use crate::error::LedgerError;
use crate::models::{Expense, Group, LedgerSnapshot, Settlement};
use crate::storage::Storage;
use std::collections::HashMap;

/// Reference storage for tests and embedding. Active and archived records
/// share the maps; the archived partition is the records' own `state`.
#[derive(Default)]
pub struct InMemoryStorage {
    expenses: HashMap<String, Expense>,
    settlements: HashMap<String, Settlement>,
    groups: HashMap<String, Group>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    fn create_expense(&mut self, expense: Expense) -> Result<Expense, LedgerError> {
        if self.expenses.contains_key(&expense.id) {
            return Err(LedgerError::DuplicateRecord(expense.id));
        }
        self.expenses.insert(expense.id.clone(), expense.clone());
        Ok(expense)
    }

    fn update_expense(&mut self, expense: Expense) -> Result<Expense, LedgerError> {
        if !self.expenses.contains_key(&expense.id) {
            return Err(LedgerError::ExpenseNotFound(expense.id));
        }
        self.expenses.insert(expense.id.clone(), expense.clone());
        Ok(expense)
    }

    fn get_expense(&self, id: &str) -> Option<Expense> {
        self.expenses.get(id).cloned()
    }

    fn create_settlement(&mut self, settlement: Settlement) -> Result<Settlement, LedgerError> {
        if self.settlements.contains_key(&settlement.id) {
            return Err(LedgerError::DuplicateRecord(settlement.id));
        }
        self.settlements
            .insert(settlement.id.clone(), settlement.clone());
        Ok(settlement)
    }

    fn update_settlement(&mut self, settlement: Settlement) -> Result<Settlement, LedgerError> {
        if !self.settlements.contains_key(&settlement.id) {
            return Err(LedgerError::SettlementNotFound(settlement.id));
        }
        self.settlements
            .insert(settlement.id.clone(), settlement.clone());
        Ok(settlement)
    }

    fn get_settlement(&self, id: &str) -> Option<Settlement> {
        self.settlements.get(id).cloned()
    }

    fn create_group(&mut self, group: Group) -> Result<Group, LedgerError> {
        if self.groups.contains_key(&group.id) {
            return Err(LedgerError::DuplicateRecord(group.id));
        }
        self.groups.insert(group.id.clone(), group.clone());
        Ok(group)
    }

    fn update_group(&mut self, group: Group) -> Result<Group, LedgerError> {
        if !self.groups.contains_key(&group.id) {
            return Err(LedgerError::GroupNotFound(group.id));
        }
        self.groups.insert(group.id.clone(), group.clone());
        Ok(group)
    }

    fn get_group(&self, id: &str) -> Option<Group> {
        self.groups.get(id).cloned()
    }

    fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            expenses: self.expenses.values().cloned().collect(),
            settlements: self.settlements.values().cloned().collect(),
            groups: self.groups.values().cloned().collect(),
        }
    }
}
