use crate::{
    config::SwimlaneConfig,
    controller::{accepted_title, PendingMutation},
    domain::{append_sort_key, CurrentBoardContext, NewSwimlane, Swimlane, SwimlaneId},
    storage::SwimlaneStore,
    ui::{InlineForm, Popup, TextInput, UiEvent},
};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Rename and create handlers for a swimlane header
pub struct SwimlaneHeaderController {
    store: Arc<dyn SwimlaneStore>,
    runtime: Handle,
    action_menu_id: String,
}

impl SwimlaneHeaderController {
    /// Creates a controller whose store writes run on `runtime`
    pub fn new(store: Arc<dyn SwimlaneStore>, runtime: Handle) -> Self {
        Self::with_config(store, runtime, &SwimlaneConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn SwimlaneStore>,
        runtime: Handle,
        config: &SwimlaneConfig,
    ) -> Self {
        Self {
            store,
            runtime,
            action_menu_id: config.action_menu_id.clone(),
        }
    }

    /// Handles submission of the inline title form.
    ///
    /// A blank title leaves the swimlane untouched and returns `None`.
    pub fn submit_rename(
        &self,
        event: &mut impl UiEvent,
        form: &impl InlineForm,
        swimlane: &Swimlane,
    ) -> Option<PendingMutation<()>> {
        event.prevent_default();

        let raw = form.current_value();
        let Some(title) = accepted_title(&raw) else {
            tracing::debug!(swimlane = %swimlane.id, "ignoring blank swimlane title");
            return None;
        };

        tracing::info!(swimlane = %swimlane.id, title, "renaming swimlane");
        let store = Arc::clone(&self.store);
        let swimlane = swimlane.clone();
        let title = title.to_string();
        Some(PendingMutation::spawn(&self.runtime, "rename", async move {
            store.rename(&swimlane, &title).await
        }))
    }

    /// Handles the "add swimlane" shortcut.
    ///
    /// The new lane is appended after the `visible_count` lanes currently
    /// rendered. On acceptance the input is cleared and refocused right away
    /// so several lanes can be typed in a row; a blank input is left as is.
    pub fn submit_create(
        &self,
        event: &mut impl UiEvent,
        input: &mut impl TextInput,
        board: &impl CurrentBoardContext,
        visible_count: usize,
    ) -> Option<PendingMutation<SwimlaneId>> {
        event.prevent_default();

        let raw = input.value();
        let Some(title) = accepted_title(&raw) else {
            tracing::debug!("ignoring blank new swimlane title");
            return None;
        };

        let fields = NewSwimlane {
            title: title.to_string(),
            board_id: board.current_board_id(),
            sort: append_sort_key(visible_count),
        };
        tracing::info!(board = %fields.board_id, sort = fields.sort, title, "creating swimlane");

        let store = Arc::clone(&self.store);
        let pending = PendingMutation::spawn(&self.runtime, "create", async move {
            store.create(fields).await
        });

        input.set_value("");
        input.focus();
        Some(pending)
    }

    /// Opens the action menu bound to `swimlane`
    pub fn open_action_menu(&self, popup: &mut impl Popup, swimlane: &Swimlane) {
        popup.open(&self.action_menu_id, swimlane.clone());
    }
}
