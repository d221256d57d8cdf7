use crate::{
    controller::PendingMutation,
    domain::Swimlane,
    storage::SwimlaneStore,
    ui::{Popup, UiEvent},
};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Handlers for the per-swimlane action popup
pub struct SwimlaneActionMenu {
    store: Arc<dyn SwimlaneStore>,
    runtime: Handle,
}

impl SwimlaneActionMenu {
    pub fn new(store: Arc<dyn SwimlaneStore>, runtime: Handle) -> Self {
        Self { store, runtime }
    }

    /// Archives the swimlane the popup was opened for and closes the popup,
    /// whatever the outcome of the archive request.
    pub fn archive_current(
        &self,
        event: &mut impl UiEvent,
        popup: &mut impl Popup,
        swimlane: &Swimlane,
    ) -> PendingMutation<()> {
        event.prevent_default();

        tracing::info!(swimlane = %swimlane.id, "archiving swimlane");
        let store = Arc::clone(&self.store);
        let target = swimlane.clone();
        let pending = PendingMutation::spawn(&self.runtime, "archive", async move {
            store.archive(&target).await
        });

        popup.close();
        pending
    }
}
