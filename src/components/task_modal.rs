//! Task Modal Component
//!
//! Shared add-task dialog. One button per column opens it; confirm via the
//! add button or Enter. A whitespace-only title silently aborts the add and
//! closes the modal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::BoardContext;

/// What confirming the modal input does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmAction {
    /// Whitespace-only input: close without adding, keep the typed text
    /// for the next open
    AbortKeepText,
    /// Add the task, then clear the input and close
    AddAndClear,
}

fn confirm_action(value: &str) -> ConfirmAction {
    if value.trim().is_empty() {
        ConfirmAction::AbortKeepText
    } else {
        ConfirmAction::AddAndClear
    }
}

/// Add-task modal with overlay, rendered while a target column is set
#[component]
pub fn TaskModal() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let (title, set_title) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the input shortly after the modal opens
    Effect::new(move |_| {
        if ctx.modal_for.get().is_some() {
            spawn_local(async move {
                TimeoutFuture::new(50).await;
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    });

    let confirm = move || {
        let Some(column) = ctx.modal_for.get_untracked() else {
            return;
        };
        let value = title.get_untracked();
        match confirm_action(&value) {
            ConfirmAction::AbortKeepText => {
                ctx.close_modal();
            }
            ConfirmAction::AddAndClear => {
                ctx.mutate(|board| {
                    board.add(column, &value);
                });
                set_title.set(String::new());
                ctx.close_modal();
            }
        }
    };

    let cancel = move |_| {
        set_title.set(String::new());
        ctx.close_modal();
    };

    view! {
        {move || match ctx.modal_for.get() {
            Some(column) => view! {
                <div class="modal-root">
                    <div class="overlay" on:click=move |_| ctx.close_modal()></div>
                    <div class="modal">
                        <h3 class="modal-title">{format!("Add task to \"{}\"", column.as_str())}</h3>
                        <input
                            type="text"
                            id="task-title"
                            placeholder="Task title..."
                            node_ref=input_ref
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                            on:keyup=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    confirm();
                                }
                            }
                        />
                        <div class="modal-buttons">
                            <button class="modal-button-add" on:click=move |_| confirm()>"Add"</button>
                            <button class="modal-button-cancel" on:click=cancel>"Cancel"</button>
                        </div>
                    </div>
                </div>
            }.into_any(),
            None => view! { <div></div> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_confirm_aborts_and_keeps_typed_text() {
        assert_eq!(confirm_action(""), ConfirmAction::AbortKeepText);
        assert_eq!(confirm_action("   "), ConfirmAction::AbortKeepText);
        assert_eq!(confirm_action("\t\n"), ConfirmAction::AbortKeepText);
    }

    #[test]
    fn test_real_title_confirm_adds_and_clears() {
        assert_eq!(confirm_action("Buy milk"), ConfirmAction::AddAndClear);
        assert_eq!(confirm_action(" padded "), ConfirmAction::AddAndClear);
    }
}
