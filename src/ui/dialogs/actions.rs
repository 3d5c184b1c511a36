//! Dialog action types - dialogs return actions instead of mutating state directly.

use crate::model::{ChannelId, MessageId};

/// Actions that dialogs can return to the main application.
/// The app processes these in its update loop.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    /// Normalized, validated channel name
    CreateChannel(String),
    RenameChannel { id: ChannelId, name: String },
    DeleteChannel(ChannelId),
    DeleteMessage(MessageId),
    /// Trimmed, validated workspace name
    RenameWorkspace(String),
}
