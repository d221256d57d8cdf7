use crate::domain::{board::BoardId, swimlane::Swimlane};
use std::cmp::Ordering;

/// Sorts swimlanes into display order
///
/// Lanes are ordered by ascending `sort` key. Equal keys fall back to
/// creation time and then to the identifier so the order is total.
///
/// # Examples
/// ```
/// use swimlane_core::domain::ordering::sort_swimlanes;
/// use swimlane_core::{BoardId, NewSwimlane, Swimlane, SwimlaneId};
///
/// let lane = |title: &str, sort| {
///     Swimlane::new(
///         SwimlaneId::generate(),
///         NewSwimlane { title: title.to_string(), board_id: BoardId::new("b"), sort },
///     )
/// };
///
/// let mut lanes = vec![lane("Done", 2), lane("Todo", 0), lane("Doing", 1)];
/// sort_swimlanes(&mut lanes);
/// assert_eq!(lanes[0].title, "Todo");
/// ```
pub fn sort_swimlanes(swimlanes: &mut [Swimlane]) {
    swimlanes.sort_by(compare_display_order);
}

fn compare_display_order(a: &Swimlane, b: &Swimlane) -> Ordering {
    a.sort
        .cmp(&b.sort)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
}

/// Returns the active swimlanes of one board in display order
pub fn active_swimlanes<'a, I>(swimlanes: I, board_id: &BoardId) -> Vec<Swimlane>
where
    I: IntoIterator<Item = &'a Swimlane>,
{
    let mut active: Vec<Swimlane> = swimlanes
        .into_iter()
        .filter(|lane| lane.is_active() && &lane.board_id == board_id)
        .cloned()
        .collect();
    sort_swimlanes(&mut active);
    active
}

/// Sort key that appends a lane after `visible_count` rendered lanes
pub fn append_sort_key(visible_count: usize) -> u32 {
    u32::try_from(visible_count).unwrap_or(u32::MAX)
}
