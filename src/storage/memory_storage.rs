use crate::{
    domain::{active_swimlanes, BoardId, NewSwimlane, Swimlane, SwimlaneId},
    error::{Result, SwimlaneError},
    storage::{normalized_title, SwimlaneStore},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store, always initialized
#[derive(Default)]
pub struct MemoryStorage {
    swimlanes: RwLock<HashMap<SwimlaneId, Swimlane>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    async fn update<F>(&self, id: &SwimlaneId, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Swimlane) + Send,
    {
        let mut swimlanes = self.swimlanes.write().await;
        let stored = swimlanes
            .get_mut(id)
            .ok_or_else(|| SwimlaneError::SwimlaneNotFound(id.to_string()))?;
        apply(stored);
        Ok(())
    }
}

#[async_trait]
impl SwimlaneStore for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn create(&self, fields: NewSwimlane) -> Result<SwimlaneId> {
        let title = normalized_title(&fields.title)?;
        let swimlane = Swimlane::new(SwimlaneId::generate(), NewSwimlane { title, ..fields });
        let id = swimlane.id;

        self.swimlanes.write().await.insert(id, swimlane);
        tracing::debug!(swimlane = %id, "stored swimlane in memory");
        Ok(id)
    }

    async fn rename(&self, swimlane: &Swimlane, new_title: &str) -> Result<()> {
        let title = normalized_title(new_title)?;
        self.update(&swimlane.id, |stored| stored.rename(title)).await
    }

    async fn archive(&self, swimlane: &Swimlane) -> Result<()> {
        self.update(&swimlane.id, Swimlane::archive).await
    }

    async fn restore(&self, swimlane: &Swimlane) -> Result<()> {
        self.update(&swimlane.id, Swimlane::restore).await
    }

    async fn load_swimlane(&self, id: &SwimlaneId) -> Result<Swimlane> {
        self.swimlanes
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| SwimlaneError::SwimlaneNotFound(id.to_string()))
    }

    async fn list_swimlanes(&self, board_id: &BoardId) -> Result<Vec<Swimlane>> {
        let swimlanes = self.swimlanes.read().await;
        Ok(active_swimlanes(swimlanes.values(), board_id))
    }

    async fn is_initialized(&self) -> bool {
        true
    }
}
