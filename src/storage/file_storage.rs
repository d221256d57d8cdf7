use crate::{
    config::SwimlaneConfig,
    domain::{active_swimlanes, BoardId, NewSwimlane, Swimlane, SwimlaneId},
    error::{Result, SwimlaneError},
    storage::{normalized_title, SwimlaneStore},
};
use async_trait::async_trait;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use tokio::{fs, sync::Mutex};

/// File-based storage, one JSON document per swimlane
///
/// Writes are serialized through `write_lock` and land via rename, so a
/// reader only ever sees a complete document.
pub struct FileStorage {
    root_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    const SWIMLANES_DIR: &'static str = "swimlanes";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self::with_config(project_root, &SwimlaneConfig::default())
    }

    pub fn with_config(project_root: impl AsRef<Path>, config: &SwimlaneConfig) -> Self {
        Self {
            root_path: project_root.as_ref().join(&config.storage_dir),
            write_lock: Mutex::new(()),
        }
    }

    fn swimlanes_dir(&self) -> PathBuf {
        self.root_path.join(Self::SWIMLANES_DIR)
    }

    fn swimlane_file(&self, id: &SwimlaneId) -> PathBuf {
        self.swimlanes_dir().join(format!("{}.json", id))
    }

    async fn ensure_initialized(&self) -> Result<()> {
        if !self.is_initialized().await {
            return Err(SwimlaneError::StoreNotInitialized);
        }
        Ok(())
    }

    fn staging_file(&self, id: &SwimlaneId) -> PathBuf {
        self.swimlanes_dir().join(format!("{}.json.tmp", id))
    }

    /// Caller must hold `write_lock`
    async fn save(&self, swimlane: &Swimlane) -> Result<()> {
        let json = serde_json::to_string_pretty(swimlane)?;
        let staging = self.staging_file(&swimlane.id);

        fs::write(&staging, json).await?;
        fs::rename(&staging, self.swimlane_file(&swimlane.id)).await?;
        tracing::debug!(swimlane = %swimlane.id, "saved swimlane");
        Ok(())
    }

    async fn update<F>(&self, id: &SwimlaneId, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Swimlane) + Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut stored = self.load_swimlane(id).await?;
        apply(&mut stored);
        self.save(&stored).await
    }

    async fn load_all(&self) -> Result<Vec<Swimlane>> {
        let mut entries = fs::read_dir(self.swimlanes_dir()).await?;
        let mut swimlanes = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|stem| SwimlaneId::from_str(stem).ok())
            else {
                continue;
            };
            swimlanes.push(self.load_swimlane(&id).await?);
        }

        Ok(swimlanes)
    }
}

#[async_trait]
impl SwimlaneStore for FileStorage {
    async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.swimlanes_dir()).await?;
        Ok(())
    }

    async fn create(&self, fields: NewSwimlane) -> Result<SwimlaneId> {
        self.ensure_initialized().await?;

        let title = normalized_title(&fields.title)?;
        let swimlane = Swimlane::new(SwimlaneId::generate(), NewSwimlane { title, ..fields });

        let _guard = self.write_lock.lock().await;
        self.save(&swimlane).await?;

        Ok(swimlane.id)
    }

    async fn rename(&self, swimlane: &Swimlane, new_title: &str) -> Result<()> {
        self.ensure_initialized().await?;

        let title = normalized_title(new_title)?;
        self.update(&swimlane.id, |stored| stored.rename(title)).await
    }

    async fn archive(&self, swimlane: &Swimlane) -> Result<()> {
        self.ensure_initialized().await?;
        self.update(&swimlane.id, Swimlane::archive).await
    }

    async fn restore(&self, swimlane: &Swimlane) -> Result<()> {
        self.ensure_initialized().await?;
        self.update(&swimlane.id, Swimlane::restore).await
    }

    async fn load_swimlane(&self, id: &SwimlaneId) -> Result<Swimlane> {
        let file_path = self.swimlane_file(id);

        if !file_path.exists() {
            return Err(SwimlaneError::SwimlaneNotFound(id.to_string()));
        }

        let contents = fs::read_to_string(&file_path).await?;
        let swimlane: Swimlane = serde_json::from_str(&contents)?;

        Ok(swimlane)
    }

    async fn list_swimlanes(&self, board_id: &BoardId) -> Result<Vec<Swimlane>> {
        if !self.is_initialized().await {
            return Ok(Vec::new());
        }

        let all = self.load_all().await?;
        Ok(active_swimlanes(&all, board_id))
    }

    async fn is_initialized(&self) -> bool {
        self.swimlanes_dir().exists()
    }
}
