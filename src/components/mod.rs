//! UI Components

mod board_column;
mod task_card;
mod task_modal;

pub use board_column::BoardColumn;
pub use task_card::TaskCard;
pub use task_modal::TaskModal;

/// DOM id of a column's drop region, used for touch hit-testing
pub fn column_dom_id(index: usize) -> String {
    format!("column-{}", index)
}

/// DOM id of a task card, used for touch slot resolution
pub fn task_dom_id(id: u32) -> String {
    format!("task-{}", id)
}
