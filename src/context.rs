//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::board::Board;
use crate::models::Column;
use crate::storage;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// The board, single source of truth - read
    pub board: ReadSignal<Board>,
    /// The board - write (go through `mutate` so every change persists)
    set_board: WriteSignal<Board>,
    /// Column whose add-task modal is open (None = closed) - read
    pub modal_for: ReadSignal<Option<Column>>,
    set_modal_for: WriteSignal<Option<Column>>,
}

impl BoardContext {
    pub fn new(
        board: (ReadSignal<Board>, WriteSignal<Board>),
        modal_for: (ReadSignal<Option<Column>>, WriteSignal<Option<Column>>),
    ) -> Self {
        Self {
            board: board.0,
            set_board: board.1,
            modal_for: modal_for.0,
            set_modal_for: modal_for.1,
        }
    }

    /// Apply a mutation and immediately persist the resulting snapshot.
    /// The write always happens after the board change it reflects.
    pub fn mutate(&self, f: impl FnOnce(&mut Board)) {
        self.set_board.update(f);
        let snapshot = self.board.with_untracked(|board| board.encode());
        storage::set(&snapshot);
    }

    /// Open the add-task modal targeting a column
    pub fn open_modal(&self, column: Column) {
        self.set_modal_for.set(Some(column));
    }

    pub fn close_modal(&self) {
        self.set_modal_for.set(None);
    }
}
