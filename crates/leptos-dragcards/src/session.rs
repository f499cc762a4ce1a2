//! Drag Session State Machine
//!
//! One explicit state machine fed by both input sources (mouse and touch).
//! The session never mutates the board itself; it tracks a candidate slot as
//! a preview and reports a single `DropOutcome` on release.

use crate::geometry::Point;

/// Movement threshold in pixels to start dragging (distinguishes a tap/click
/// aimed at the edit/delete affordances from a drag gesture)
pub const DRAG_THRESHOLD_PX: f64 = 10.0;

/// What the finished gesture asks the board to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Click/tap or cancelled gesture, nothing to apply
    None,
    /// Reposition within the source column. `to` is the insertion index with
    /// the dragged card removed from the column.
    Reorder { column: usize, from: usize, to: usize },
    /// Remove from the source column, append to the destination's tail
    Transfer {
        from_column: usize,
        index: usize,
        to_column: usize,
    },
}

/// Gesture state. `Pending` holds a press that has not yet crossed the
/// movement threshold; card ids and column indexes are the caller's.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Pending {
        card: u32,
        column: usize,
        index: usize,
        start: Point,
    },
    Dragging {
        card: u32,
        source_column: usize,
        original_index: usize,
        /// Insertion slot in the source column, dragged card excluded
        candidate: usize,
        /// Column currently under the gesture
        hover_column: usize,
    },
}

impl DragSession {
    /// Gesture press on a card. Ignored while another gesture is active.
    pub fn press(&mut self, card: u32, column: usize, index: usize, start: Point) {
        if matches!(self, DragSession::Idle) {
            *self = DragSession::Pending { card, column, index, start };
        }
    }

    /// Gesture movement. Promotes `Pending` to `Dragging` once either axis
    /// moves past the threshold. Returns true when the session is dragging.
    pub fn move_to(&mut self, point: Point) -> bool {
        match *self {
            DragSession::Pending { card, column, index, start } => {
                let dx = (point.x - start.x).abs();
                let dy = (point.y - start.y).abs();
                if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                    *self = DragSession::Dragging {
                        card,
                        source_column: column,
                        original_index: index,
                        candidate: index,
                        hover_column: column,
                    };
                    true
                } else {
                    false
                }
            }
            DragSession::Dragging { .. } => true,
            DragSession::Idle => false,
        }
    }

    /// Midpoint rule applied against a sibling in the source column.
    /// `slot` is the sibling's index with the dragged card removed; above the
    /// sibling's midpoint inserts before it, below inserts after.
    pub fn hover_sibling(&mut self, slot: usize, before: bool) {
        if let DragSession::Dragging { source_column, candidate, hover_column, .. } = self {
            *candidate = if before { slot } else { slot + 1 };
            *hover_column = *source_column;
        }
    }

    /// Direct candidate slot (tail drop zone, touch slot resolution)
    pub fn hover_slot(&mut self, slot: usize) {
        if let DragSession::Dragging { source_column, candidate, hover_column, .. } = self {
            *candidate = slot;
            *hover_column = *source_column;
        }
    }

    /// Gesture crossed into a column's drop region. Visual affordance and
    /// eventual transfer target only, no candidate change.
    pub fn hover_column(&mut self, column: usize) {
        if let DragSession::Dragging { hover_column, .. } = self {
            *hover_column = column;
        }
    }

    /// Gesture release. A cross-column hover becomes a transfer, anything
    /// else commits the candidate slot (a release with no resolvable target
    /// keeps the last preview position). A pending press is just a click.
    pub fn release(&mut self) -> DropOutcome {
        let outcome = match *self {
            DragSession::Dragging {
                card: _,
                source_column,
                original_index,
                candidate,
                hover_column,
            } => {
                if hover_column != source_column {
                    DropOutcome::Transfer {
                        from_column: source_column,
                        index: original_index,
                        to_column: hover_column,
                    }
                } else {
                    DropOutcome::Reorder {
                        column: source_column,
                        from: original_index,
                        to: candidate,
                    }
                }
            }
            _ => DropOutcome::None,
        };
        *self = DragSession::Idle;
        outcome
    }

    /// Gesture cancelled (touchcancel). The preview is discarded and the
    /// card stays at its original position.
    pub fn cancel(&mut self) {
        *self = DragSession::Idle;
    }

    /// Card id while dragging (not while merely pending)
    pub fn dragging_card(&self) -> Option<u32> {
        match self {
            DragSession::Dragging { card, .. } => Some(*card),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    /// Preview placement for a column: the dragged card id and its candidate
    /// slot, present only for the source column of an active drag.
    pub fn preview_for(&self, column: usize) -> Option<(u32, usize)> {
        match self {
            DragSession::Dragging { card, source_column, candidate, .. }
                if *source_column == column =>
            {
                Some((*card, *candidate))
            }
            _ => None,
        }
    }

    /// Column currently marked as drop target, while dragging
    pub fn hover_target(&self) -> Option<usize> {
        match self {
            DragSession::Dragging { hover_column, .. } => Some(*hover_column),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging_session() -> DragSession {
        let mut s = DragSession::default();
        s.press(7, 0, 1, Point::new(10.0, 10.0));
        assert!(s.move_to(Point::new(10.0, 40.0)));
        s
    }

    #[test]
    fn test_press_then_release_is_a_click() {
        let mut s = DragSession::default();
        s.press(1, 0, 0, Point::new(5.0, 5.0));
        // Moved, but within the threshold
        assert!(!s.move_to(Point::new(9.0, 12.0)));
        assert_eq!(s.release(), DropOutcome::None);
        assert_eq!(s, DragSession::Idle);
    }

    #[test]
    fn test_threshold_promotes_to_dragging() {
        let mut s = DragSession::default();
        s.press(1, 2, 3, Point::new(0.0, 0.0));
        assert!(!s.move_to(Point::new(10.0, 0.0)));
        assert!(s.move_to(Point::new(11.0, 0.0)));
        assert_eq!(s.dragging_card(), Some(1));
        assert_eq!(s.preview_for(2), Some((1, 3)));
        assert_eq!(s.hover_target(), Some(2));
    }

    #[test]
    fn test_move_only_changes_state_on_promotion() {
        // The global move handlers write their signal only when the session
        // value changed; movement must not produce a new value otherwise.
        let mut s = DragSession::Idle;
        assert!(!s.move_to(Point::new(500.0, 500.0)));
        assert_eq!(s, DragSession::Idle);

        let mut s = DragSession::default();
        s.press(1, 0, 0, Point::new(0.0, 0.0));
        let before = s;
        assert!(!s.move_to(Point::new(4.0, 4.0))); // under the threshold
        assert_eq!(s, before);

        assert!(s.move_to(Point::new(30.0, 0.0))); // promotion changes state
        assert_ne!(s, before);

        let dragging = s;
        assert!(s.move_to(Point::new(60.0, 60.0))); // plain movement does not
        assert_eq!(s, dragging);
    }

    #[test]
    fn test_second_press_is_ignored_while_active() {
        let mut s = dragging_session();
        s.press(99, 1, 0, Point::new(0.0, 0.0));
        assert_eq!(s.dragging_card(), Some(7));
    }

    #[test]
    fn test_midpoint_rule_moves_candidate() {
        let mut s = dragging_session();
        s.hover_sibling(2, true); // above sibling midpoint -> before it
        assert_eq!(s.preview_for(0), Some((7, 2)));
        s.hover_sibling(2, false); // below -> after it
        assert_eq!(s.preview_for(0), Some((7, 3)));
        assert_eq!(
            s.release(),
            DropOutcome::Reorder { column: 0, from: 1, to: 3 }
        );
    }

    #[test]
    fn test_cross_column_release_transfers() {
        let mut s = dragging_session();
        s.hover_sibling(0, true);
        s.hover_column(2);
        assert_eq!(s.preview_for(0), Some((7, 0)));
        assert_eq!(s.hover_target(), Some(2));
        assert_eq!(
            s.release(),
            DropOutcome::Transfer { from_column: 0, index: 1, to_column: 2 }
        );
        assert_eq!(s, DragSession::Idle);
    }

    #[test]
    fn test_hovering_back_over_source_clears_transfer_target() {
        let mut s = dragging_session();
        s.hover_column(2);
        s.hover_sibling(0, false); // back over a sibling in the source column
        assert_eq!(
            s.release(),
            DropOutcome::Reorder { column: 0, from: 1, to: 1 }
        );
    }

    #[test]
    fn test_cancel_discards_preview() {
        let mut s = dragging_session();
        s.hover_slot(4);
        s.cancel();
        assert_eq!(s, DragSession::Idle);
        assert_eq!(s.release(), DropOutcome::None);
    }

    #[test]
    fn test_hover_transitions_require_dragging() {
        let mut s = DragSession::default();
        s.press(1, 0, 0, Point::new(0.0, 0.0));
        s.hover_sibling(3, true);
        s.hover_column(2);
        assert_eq!(s.release(), DropOutcome::None);
    }
}
