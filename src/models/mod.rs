pub mod audit;
pub mod expense;
pub mod group;
pub mod settlement;
pub mod snapshot;
pub mod state;

pub use audit::{AuditAction, AuditLogEntry};
pub use expense::{Expense, Share};
pub use group::{Group, GroupMember};
pub use settlement::{Settlement, SettlementStatus};
pub use snapshot::LedgerSnapshot;
pub use state::RecordState;
