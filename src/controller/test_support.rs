use crate::{
    domain::{BoardId, NewSwimlane, Swimlane, SwimlaneId},
    error::{Result, SwimlaneError},
    storage::SwimlaneStore,
    ui::{InlineForm, Popup, TextInput},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create(NewSwimlane),
    Rename(SwimlaneId, String),
    Archive(SwimlaneId),
}

/// Store double that records every mutation it receives
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    failing: bool,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            failing: true,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            return Err(SwimlaneError::StorageError("write rejected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SwimlaneStore for RecordingStore {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn create(&self, fields: NewSwimlane) -> Result<SwimlaneId> {
        self.record(StoreCall::Create(fields))?;
        Ok(SwimlaneId::generate())
    }

    async fn rename(&self, swimlane: &Swimlane, new_title: &str) -> Result<()> {
        self.record(StoreCall::Rename(swimlane.id, new_title.to_string()))
    }

    async fn archive(&self, swimlane: &Swimlane) -> Result<()> {
        self.record(StoreCall::Archive(swimlane.id))
    }

    async fn restore(&self, _swimlane: &Swimlane) -> Result<()> {
        Ok(())
    }

    async fn load_swimlane(&self, id: &SwimlaneId) -> Result<Swimlane> {
        Err(SwimlaneError::SwimlaneNotFound(id.to_string()))
    }

    async fn list_swimlanes(&self, _board_id: &BoardId) -> Result<Vec<Swimlane>> {
        Ok(Vec::new())
    }

    async fn is_initialized(&self) -> bool {
        true
    }
}

pub struct FakeForm(pub String);

impl InlineForm for FakeForm {
    fn current_value(&self) -> String {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct FakeInput {
    pub value: String,
    pub focused: bool,
    pub writes: usize,
}

impl FakeInput {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::default()
        }
    }
}

impl TextInput for FakeInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.writes += 1;
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

#[derive(Default)]
pub struct FakePopup {
    pub opened: Vec<(String, SwimlaneId)>,
    pub closes: usize,
}

impl Popup for FakePopup {
    fn open(&mut self, menu_id: &str, context: Swimlane) {
        self.opened.push((menu_id.to_string(), context.id));
    }

    fn close(&mut self) {
        self.closes += 1;
    }
}

pub fn swimlane(title: &str) -> Swimlane {
    Swimlane::new(
        SwimlaneId::generate(),
        NewSwimlane {
            title: title.to_string(),
            board_id: BoardId::new("board-1"),
            sort: 0,
        },
    )
}

/// Multi-thread runtime for tests that call handlers from a plain thread
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}
