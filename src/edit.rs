//! In-place Edit Session
//!
//! Commit happens on Enter or on blur, whichever comes first. Enter also
//! blurs the input, so the session carries a one-shot guard: the first
//! commit wins and the trailing blur is ignored.

/// One in-place title edit. Created when the edit icon is clicked, dropped
/// when the input goes back to a static title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    original_title: String,
    committed: bool,
}

impl EditSession {
    pub fn begin(original_title: &str) -> Self {
        Self {
            original_title: original_title.to_string(),
            committed: false,
        }
    }

    /// Initial content of the edit input
    pub fn original_title(&self) -> &str {
        &self.original_title
    }

    /// First call returns true and arms the guard; every later call in the
    /// same session returns false.
    pub fn take_commit(&mut self) -> bool {
        if self.committed {
            return false;
        }
        self.committed = true;
        true
    }
}
