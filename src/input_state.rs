//! Input state management for message composition.
//!
//! Drafts are kept apart from `ClientState` so that switching a feed does
//! not lose what the user was typing in the other composer.

/// Composer drafts for the main feed, the thread panel and the inline editor.
#[derive(Default)]
pub struct InputState {
    /// Draft for the active channel or conversation
    pub main_draft: String,
    /// Draft for the open thread panel
    pub thread_draft: String,
    /// Plain text of the message being edited
    pub edit_draft: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Take the draft out of `draft` if it holds something worth sending.
///
/// Trailing newlines left by the Enter key are dropped. A draft that is
/// only whitespace stays untouched and yields `None`.
pub fn take_submission(draft: &mut String) -> Option<String> {
    let text = draft.trim_end_matches(['\n', '\r']);
    if text.trim().is_empty() {
        return None;
    }
    let text = text.to_string();
    draft.clear();
    Some(text)
}
