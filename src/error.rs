//! Errors reported by backend requests.

use thiserror::Error;

use crate::model::{ChannelId, ConversationId, MemberId, MessageId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("channel not found: {0}")]
    ChannelNotFound(ChannelId),

    #[error("conversation not found: {0}")]
    ConversationNotFound(ConversationId),

    #[error("message not found: {0}")]
    MessageNotFound(MessageId),

    #[error("member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("only the author can change message {0}")]
    NotAuthor(MessageId),

    #[error("replies cannot start another thread")]
    NestedThread,

    #[error("a channel named \"{0}\" already exists")]
    DuplicateChannel(String),

    #[error("{0}")]
    Invalid(String),
}

pub type ChatResult<T> = Result<T, ChatError>;
