pub mod archive;
pub mod constants;
pub mod error;
pub mod history;
pub mod ledger;
pub mod logger;
pub mod models;
pub mod reconcile;
pub mod service;
pub mod split;
pub mod storage;

pub use error::LedgerError;
pub use logger::in_memory::InMemoryAuditLogger;
pub use service::LedgerService;
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
