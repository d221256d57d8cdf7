use crate::domain::board::BoardId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Store-assigned identifier for a swimlane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwimlaneId(Uuid);

impl SwimlaneId {
    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for SwimlaneId {
    type Err = crate::error::SwimlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| crate::error::SwimlaneError::InvalidSwimlaneId(s.to_string()))
    }
}

impl fmt::Display for SwimlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSwimlane {
    pub title: String,
    pub board_id: BoardId,
    pub sort: u32,
}

/// One horizontal lane of a kanban board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swimlane {
    pub id: SwimlaneId,
    pub title: String,
    pub board_id: BoardId,
    pub sort: u32,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Swimlane {
    /// Creates an active swimlane from a create request
    pub fn new(id: SwimlaneId, fields: NewSwimlane) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: fields.title,
            board_id: fields.board_id,
            sort: fields.sort,
            archived: false,
            archived_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the title
    pub fn rename(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Marks the swimlane archived. Already archived lanes keep their
    /// original `archived_at`.
    pub fn archive(&mut self) {
        if self.archived {
            return;
        }
        let now = Utc::now();
        self.archived = true;
        self.archived_at = Some(now);
        self.updated_at = now;
    }

    /// Brings an archived swimlane back into the active ordering
    pub fn restore(&mut self) {
        if !self.archived {
            return;
        }
        self.archived = false;
        self.archived_at = None;
        self.updated_at = Utc::now();
    }

    pub fn is_active(&self) -> bool {
        !self.archived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane(title: &str, sort: u32) -> Swimlane {
        Swimlane::new(
            SwimlaneId::generate(),
            NewSwimlane {
                title: title.to_string(),
                board_id: BoardId::new("board-1"),
                sort,
            },
        )
    }

    #[test]
    fn test_swimlane_id_parsing() {
        let id = SwimlaneId::generate();
        let parsed = SwimlaneId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(SwimlaneId::from_str("not-a-uuid").is_err());
        assert!(SwimlaneId::from_str("").is_err());
    }

    #[test]
    fn test_new_swimlane_is_active() {
        let swimlane = lane("Backlog", 0);
        assert!(swimlane.is_active());
        assert!(swimlane.archived_at.is_none());
        assert_eq!(swimlane.board_id.as_str(), "board-1");
    }

    #[test]
    fn test_rename_updates_updated_at() {
        let mut swimlane = lane("Backlog", 0);
        let initial_updated_at = swimlane.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        swimlane.rename("Icebox".to_string());

        assert_eq!(swimlane.title, "Icebox");
        assert!(swimlane.updated_at > initial_updated_at);
    }

    #[test]
    fn test_archive_is_idempotent() {
        let mut swimlane = lane("Done", 2);

        swimlane.archive();
        let first_archived_at = swimlane.archived_at;
        assert!(!swimlane.is_active());
        assert!(first_archived_at.is_some());

        swimlane.archive();
        assert_eq!(swimlane.archived_at, first_archived_at);
    }

    #[test]
    fn test_restore() {
        let mut swimlane = lane("Done", 2);
        swimlane.archive();
        swimlane.restore();

        assert!(swimlane.is_active());
        assert!(swimlane.archived_at.is_none());
    }

    #[test]
    fn test_deserialize_without_archive_fields() {
        let json = r#"{
        "id": "5b1f0d4e-7c1a-4f3e-9a62-3d1c9a1b2e40",
        "title": "Legacy Lane",
        "board_id": "board-1",
        "sort": 4,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;

        let swimlane: Swimlane = serde_json::from_str(json).unwrap();
        assert_eq!(swimlane.sort, 4);
        assert!(swimlane.is_active());
    }
}
