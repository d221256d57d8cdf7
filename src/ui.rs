//! Host-side UI elements the controllers act on.

use crate::domain::Swimlane;

/// A dispatched form submission or link click
pub trait UiEvent {
    /// Stops the host from navigating away
    fn prevent_default(&mut self);
}

/// Inline edit form holding an in-progress value
pub trait InlineForm {
    fn current_value(&self) -> String;
}

/// Single-line text input
pub trait TextInput {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn focus(&mut self);
}

/// Contextual popup layer; at most one popup is open at a time
pub trait Popup {
    fn open(&mut self, menu_id: &str, context: Swimlane);
    fn close(&mut self);
}

/// Plain event record for hosts without their own event type
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl UiEvent for SubmitEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
