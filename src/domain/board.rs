use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to the board that owns a swimlane
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read access to the board currently being viewed
pub trait CurrentBoardContext {
    fn current_board_id(&self) -> BoardId;
}

/// Board selection owned by the navigation layer and lent to controllers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardContext {
    current: BoardId,
}

impl BoardContext {
    pub fn new(current: BoardId) -> Self {
        Self { current }
    }

    /// Switches the viewed board
    pub fn navigate_to(&mut self, board_id: BoardId) {
        self.current = board_id;
    }
}

impl CurrentBoardContext for BoardContext {
    fn current_board_id(&self) -> BoardId {
        self.current.clone()
    }
}
