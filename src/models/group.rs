use super::state::RecordState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Roster entry. Removal marks `removed_at` but keeps the entry, so the
/// display name stays resolvable for archived records that still reference
/// the participant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupMember {
    pub participant: String,
    pub display_name: String,
    pub joined_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl GroupMember {
    pub fn is_active(&self) -> bool {
        self.removed_at.is_none()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub members: Vec<GroupMember>,
    pub created_at: DateTime<Utc>,
    pub state: RecordState,
}

impl Group {
    pub fn is_member(&self, participant: &str) -> bool {
        self.members
            .iter()
            .any(|m| m.participant == participant && m.is_active())
    }

    /// Resolves a display name from the roster, removed members included.
    pub fn display_name(&self, participant: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.participant == participant)
            .map(|m| m.display_name.as_str())
    }
}
