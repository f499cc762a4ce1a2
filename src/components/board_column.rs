//! Board Column Component
//!
//! One workflow column: header with add button, the ordered task list, and
//! the drop affordances for an active drag.

use leptos::prelude::*;

use leptos_dragcards::{make_on_column_mouseenter, make_on_tail_mouseenter, DndSignals};

use crate::board::preview_order;
use crate::components::{column_dom_id, TaskCard};
use crate::context::BoardContext;
use crate::models::Column;

/// A single workflow column
#[component]
pub fn BoardColumn(column: Column, dnd: DndSignals) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let index = column.index();

    // Display order: the board's order with the drag preview overlaid.
    // The board itself only changes on release.
    let tasks = move || {
        let preview = dnd.session_read.get().preview_for(index);
        ctx.board.with(|board| preview_order(board.tasks(column), preview))
    };

    let on_mouseenter = make_on_column_mouseenter(dnd, index);

    // Drops past the last card land at the tail (source column only)
    let on_tail_mouseenter = make_on_tail_mouseenter(dnd, move |dragged| {
        ctx.board.with_untracked(|board| {
            let (source, _) = board.position_of(dragged)?;
            if source == column {
                Some(board.tail_slot(column, dragged))
            } else {
                None
            }
        })
    });

    let is_drop_target = move || dnd.session_read.get().hover_target() == Some(index);

    let section_class = move || {
        let mut c = String::from("section");
        if is_drop_target() {
            c.push_str(" drag-over");
        }
        c
    };

    view! {
        <section
            class=section_class
            id=column_dom_id(index)
            on:mouseenter=on_mouseenter
        >
            <div class="section-header">
                <h2 class="section-title">{column.as_str()}</h2>
                <button
                    class="btn-add-task"
                    on:click=move |_| ctx.open_modal(column)
                >
                    "+ Add task"
                </button>
            </div>

            <ul class="task-list">
                <For
                    each=tasks
                    key=|task| (task.id, task.title.clone(), task.column)
                    children=move |task| {
                        view! { <TaskCard task=task dnd=dnd /> }
                    }
                />

                // Empty space below the cards
                <li class="task-list-tail" on:mouseenter=on_tail_mouseenter></li>
            </ul>
        </section>
    }
}
