//! Messages exchanged between the UI thread and the backend thread.
//!
//! Feeds follow a subscribe / unsubscribe contract: after
//! `BackendAction::Subscribe` the backend publishes a `GuiEvent::FeedUpdated`
//! whenever the query's results change, until `BackendAction::Unsubscribe`.

use crate::model::{
    Channel, ChannelId, ConversationId, FeedPage, Member, MemberId, Message, MessageId, Workspace,
};

/// Client-chosen handle for one live feed query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// A paginated message query.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FeedQuery {
    /// Top-level messages of a channel.
    Channel(ChannelId),
    /// Replies to one message.
    Thread { parent: MessageId },
    /// Top-level messages of a direct conversation.
    Conversation(ConversationId),
}

impl FeedQuery {
    /// Stable name used to key pagination sentinels.
    pub fn scope(&self) -> String {
        match self {
            FeedQuery::Channel(id) => format!("channel:{}", id),
            FeedQuery::Thread { parent } => format!("thread:{}", parent),
            FeedQuery::Conversation(id) => format!("conversation:{}", id),
        }
    }

    /// Where a message composed under this feed is posted.
    pub fn target(&self) -> MessageTarget {
        match self {
            FeedQuery::Channel(id) => MessageTarget::Channel(id.clone()),
            FeedQuery::Thread { parent } => MessageTarget::Thread {
                parent: parent.clone(),
            },
            FeedQuery::Conversation(id) => MessageTarget::Conversation(id.clone()),
        }
    }
}

/// Where a new message goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageTarget {
    Channel(ChannelId),
    Conversation(ConversationId),
    Thread { parent: MessageId },
}

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone, PartialEq)]
pub enum BackendAction {
    /// Start a live feed query
    Subscribe {
        subscription: SubscriptionId,
        query: FeedQuery,
    },
    /// Stop publishing a feed; in-flight pages are dropped
    Unsubscribe(SubscriptionId),
    /// Grow a feed by one page
    LoadMore(SubscriptionId),
    SendMessage {
        target: MessageTarget,
        body: String,
        image: Option<String>,
    },
    EditMessage { id: MessageId, body: String },
    DeleteMessage(MessageId),
    ToggleReaction { message: MessageId, value: String },
    CreateChannel { name: String },
    /// Rename a channel; the name is normalized like on creation
    RenameChannel { id: ChannelId, name: String },
    /// Delete a channel and everything posted in it
    DeleteChannel(ChannelId),
    RenameWorkspace { name: String },
    /// Find or start the direct conversation with a member
    OpenConversation(MemberId),
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The viewer's session is ready
    Session {
        workspace: Workspace,
        viewer: Member,
        members: Vec<Member>,
        channels: Vec<Channel>,
    },
    /// The channel list changed
    ChannelsChanged(Vec<Channel>),
    /// A channel requested by this client was created
    ChannelCreated(ChannelId),
    /// The workspace's details changed
    WorkspaceChanged(Workspace),
    /// A request from this client succeeded; shown as a toast
    Notice(String),
    ConversationOpened {
        member: MemberId,
        conversation: ConversationId,
    },
    /// New snapshot of a feed
    FeedUpdated {
        subscription: SubscriptionId,
        page: FeedPage,
    },
    /// The parent message of a thread feed; `None` once it no longer exists
    ThreadParent {
        subscription: SubscriptionId,
        message: Option<Message>,
    },
    /// The feed's target does not exist
    FeedUnavailable {
        subscription: SubscriptionId,
        reason: String,
    },
    /// A request failed
    Error(String),
}
