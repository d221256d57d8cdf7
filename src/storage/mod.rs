use crate::{
    domain::{BoardId, NewSwimlane, Swimlane, SwimlaneId},
    error::Result,
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Persistence and ordering collaborator for swimlanes
///
/// Mutations take the swimlane as the caller last saw it; implementations
/// apply the change to their own stored copy, which stays the source of
/// truth.
#[async_trait]
pub trait SwimlaneStore: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Persists a new active swimlane and returns its assigned ID
    async fn create(&self, fields: NewSwimlane) -> Result<SwimlaneId>;

    /// Replaces the title of a swimlane
    async fn rename(&self, swimlane: &Swimlane, new_title: &str) -> Result<()>;

    /// Soft-removes a swimlane from the active ordering
    async fn archive(&self, swimlane: &Swimlane) -> Result<()>;

    /// Returns an archived swimlane to the active ordering
    async fn restore(&self, swimlane: &Swimlane) -> Result<()>;

    /// Loads a swimlane by ID, archived or not
    async fn load_swimlane(&self, id: &SwimlaneId) -> Result<Swimlane>;

    /// Lists the active swimlanes of a board in display order
    async fn list_swimlanes(&self, board_id: &BoardId) -> Result<Vec<Swimlane>>;

    /// Checks if the store is initialized
    async fn is_initialized(&self) -> bool;
}

/// Title as stored: trimmed and non-empty
pub(crate) fn normalized_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(crate::error::SwimlaneError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
