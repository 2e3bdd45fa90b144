use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Archival state of a record. Deletion never erases a record; it moves it
/// into the archived partition with provenance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordState {
    Active,
    Archived {
        deleted_at: DateTime<Utc>,
        /// Set when the record was archived as part of deleting its owning
        /// group rather than individually.
        deleted_from_group: Option<String>,
    },
}

impl RecordState {
    pub fn is_active(&self) -> bool {
        matches!(self, RecordState::Active)
    }

    pub fn is_archived(&self) -> bool {
        !self.is_active()
    }

    pub fn archived(deleted_at: DateTime<Utc>, deleted_from_group: Option<String>) -> Self {
        RecordState::Archived {
            deleted_at,
            deleted_from_group,
        }
    }
}
