//! Task Board App
//!
//! Main application component with the three-column layout. Owns the board
//! state, the drag signal plumbing, and the global gesture listeners.

use leptos::prelude::*;

use leptos_dragcards::{
    bind_global_mouse, bind_global_touch, create_dnd_signals, element_rect, DropOutcome, Rect,
};

use crate::board::Board;
use crate::components::{column_dom_id, task_dom_id, BoardColumn, TaskModal};
use crate::context::BoardContext;
use crate::models::{Column, COLUMNS};
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    // Rebuild the board from the persisted snapshot (empty on absence or
    // malformed data)
    let initial = Board::decode(storage::get().as_deref());
    web_sys::console::log_1(
        &format!("[BOARD] Loaded {} tasks from storage", initial.len()).into(),
    );

    let board = signal(initial);
    let modal_for = signal::<Option<Column>>(None);
    let ctx = BoardContext::new(board, modal_for);

    // Provide context to all children
    provide_context(ctx);

    let dnd = create_dnd_signals();

    // Apply a finished gesture to the board and persist
    let on_drop = move |outcome: DropOutcome| match outcome {
        DropOutcome::Reorder { column, from, to } => {
            if let Some(column) = Column::from_index(column) {
                web_sys::console::log_1(
                    &format!("[DND] Reorder in {}: {} -> {}", column.as_str(), from, to).into(),
                );
                ctx.mutate(|board| board.move_within(column, from, to));
            }
        }
        DropOutcome::Transfer { from_column, index, to_column } => {
            if let (Some(from), Some(to)) =
                (Column::from_index(from_column), Column::from_index(to_column))
            {
                web_sys::console::log_1(
                    &format!("[DND] Transfer {} #{} -> {}", from.as_str(), index, to.as_str())
                        .into(),
                );
                ctx.mutate(|board| board.transfer(from, index, to));
            }
        }
        DropOutcome::None => {}
    };

    bind_global_mouse(dnd, on_drop);

    // Touch resolves columns and slots from live DOM rects
    let column_rects = move || -> Vec<Rect> {
        COLUMNS
            .iter()
            .map(|column| element_rect(&column_dom_id(column.index())).unwrap_or_default())
            .collect()
    };
    let card_rects = move |column: usize, dragged: u32| -> Vec<Rect> {
        let Some(column) = Column::from_index(column) else {
            return Vec::new();
        };
        ctx.board.with_untracked(|board| {
            board
                .tasks(column)
                .iter()
                .filter(|task| task.id != dragged)
                .map(|task| element_rect(&task_dom_id(task.id)).unwrap_or_default())
                .collect()
        })
    };
    bind_global_touch(dnd, column_rects, card_rects, on_drop);

    view! {
        <div class="board-layout">
            <header class="board-header">
                <h1>"Task Board"</h1>
            </header>

            <main class="board-columns">
                <BoardColumn column=Column::NotStarted dnd=dnd />
                <BoardColumn column=Column::InProgress dnd=dnd />
                <BoardColumn column=Column::Completed dnd=dnd />
            </main>

            <TaskModal />
        </div>
    }
}
