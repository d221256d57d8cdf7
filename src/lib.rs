//! # Swimlane Core
//!
//! Swimlane management for kanban boards: renaming a lane from its header,
//! appending new lanes to a board and archiving lanes from their action menu.
//!
//! Controllers are thin event handlers. They validate user input, hand the
//! mutation to a [`SwimlaneStore`] without waiting for it and then reset the
//! transient UI element they were invoked from.

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use config::SwimlaneConfig;
pub use controller::{PendingMutation, SwimlaneActionMenu, SwimlaneHeaderController};
pub use domain::{
    board::{BoardContext, BoardId, CurrentBoardContext},
    swimlane::{NewSwimlane, Swimlane, SwimlaneId},
};
pub use error::{Result, SwimlaneError};
pub use storage::SwimlaneStore;
