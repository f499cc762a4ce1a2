//! Task Card Component
//!
//! One task row: title (or the in-place edit input), delete and edit icons,
//! and the drag handlers for both input sources.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use leptos_dragcards::{
    make_on_card_mousemove, make_on_mousedown, make_on_touchstart, DndSignals,
};

use crate::components::task_dom_id;
use crate::context::BoardContext;
use crate::edit::EditSession;
use crate::models::Task;

/// A single task card
#[component]
pub fn TaskCard(task: Task, dnd: DndSignals) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let id = task.id;
    let title = task.title.clone();
    let title_for_edit = task.title.clone();

    // In-place edit session (None = viewing)
    let (editing, set_editing) = signal::<Option<EditSession>>(None);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the edit input once it exists
    Effect::new(move |_| {
        if editing.with(|e| e.is_some()) {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Drag handlers resolve the card's current position at event time; the
    // index captured at render time goes stale while a preview is shown.
    let on_mousedown = move |ev: web_sys::MouseEvent| {
        if editing.with_untracked(|e| e.is_some()) {
            return;
        }
        if let Some((column, index)) = ctx.board.with_untracked(|board| board.position_of(id)) {
            make_on_mousedown(dnd, id, column.index(), index)(ev);
        }
    };
    let on_touchstart = move |ev: web_sys::TouchEvent| {
        if editing.with_untracked(|e| e.is_some()) {
            return;
        }
        if let Some((column, index)) = ctx.board.with_untracked(|board| board.position_of(id)) {
            make_on_touchstart(dnd, id, column.index(), index)(ev);
        }
    };

    // Midpoint rule against this card while a sibling from the same column
    // is being dragged
    let on_mousemove = make_on_card_mousemove(dnd, id, move |dragged, sibling| {
        ctx.board.with_untracked(|board| {
            let (dragged_column, _) = board.position_of(dragged)?;
            let (sibling_column, _) = board.position_of(sibling)?;
            if dragged_column == sibling_column {
                board.sibling_slot(dragged, sibling)
            } else {
                None
            }
        })
    });

    let delete_task = move |_| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        ctx.mutate(|board| {
            if let Some((column, index)) = board.position_of(id) {
                board.remove(column, index);
            }
        });
    };

    let start_edit = move |_| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        set_editing.set(Some(EditSession::begin(&title_for_edit)));
    };

    // Commit on Enter or blur, whichever fires first; the session's one-shot
    // guard swallows the blur that follows an Enter commit.
    let commit = move |new_title: String| {
        let mut fire = false;
        set_editing.update(|session| {
            if let Some(session) = session.as_mut() {
                fire = session.take_commit();
            }
        });
        if fire {
            ctx.mutate(|board| {
                if let Some((column, index)) = board.position_of(id) {
                    board.edit_title(column, index, &new_title);
                }
            });
        }
        set_editing.set(None);
    };

    let is_dragging = move || dnd.session_read.get().dragging_card() == Some(id);

    let card_class = move || {
        let mut c = String::from("task");
        if is_dragging() {
            c.push_str(" dragging");
        }
        c
    };

    view! {
        <li
            class=card_class
            id=task_dom_id(id)
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
            on:mousemove=on_mousemove
        >
            {move || match editing.get() {
                Some(session) => view! {
                    <input
                        type="text"
                        class="task-description"
                        node_ref=input_ref
                        prop:value=session.original_title().to_string()
                        on:keyup=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                commit(input.value());
                            }
                        }
                        on:blur=move |ev: web_sys::FocusEvent| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            commit(input.value());
                        }
                    />
                }.into_any(),
                None => view! {
                    <p class="task-description">{title.clone()}</p>
                }.into_any(),
            }}

            <div class="task-actions">
                <button class="edit-icon" on:click=start_edit>"\u{270E}"</button>
                <button class="delete-icon" on:click=delete_task>"\u{1F5D1}"</button>
            </div>
        </li>
    }
}
