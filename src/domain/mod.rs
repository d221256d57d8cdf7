pub mod board;
pub mod ordering;
pub mod swimlane;

pub use board::{BoardContext, BoardId, CurrentBoardContext};
pub use ordering::{active_swimlanes, append_sort_key, sort_swimlanes};
pub use swimlane::{NewSwimlane, Swimlane, SwimlaneId};
