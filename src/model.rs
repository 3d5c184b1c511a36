//! Data model shared by the backend and the feed views.
//!
//! Everything here is plain data: the backend produces it, the feed views
//! read it. Timestamps travel as epoch milliseconds on the wire and are
//! decoded into `DateTime<Utc>` at the boundary.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! document_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

document_id!(
    /// Identifier of a message document.
    MessageId
);
document_id!(
    /// Identifier of a workspace membership (not of the user account).
    MemberId
);
document_id!(ChannelId);
document_id!(WorkspaceId);
document_id!(
    /// Identifier of a direct conversation between two members.
    ConversationId
);

/// Aggregated reactions for one emoji on one message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReactionSummary {
    pub value: String,
    pub count: usize,
    pub member_ids: Vec<MemberId>,
}

impl ReactionSummary {
    pub fn reacted_by(&self, member: &MemberId) -> bool {
        self.member_ids.iter().any(|m| m == member)
    }
}

/// Reply statistics attached to a message that started a thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub count: usize,
    /// Display name of the last replier
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_reply_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub member_id: MemberId,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_image: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Serialized rich text, opaque to the client core.
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub reactions: Vec<ReactionSummary>,
    #[serde(default)]
    pub thread: Option<ThreadSummary>,
}

impl Message {
    /// Display name of the author, with the same fallback the row header uses.
    pub fn author_display_name(&self) -> &str {
        self.author_name.as_deref().unwrap_or("Member")
    }
}

/// Loading state of a paginated feed, as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedStatus {
    LoadingFirstPage,
    LoadingMore,
    CanLoadMore,
    Exhausted,
}

impl FeedStatus {
    pub fn can_load_more(self) -> bool {
        self == FeedStatus::CanLoadMore
    }

    pub fn is_loading_more(self) -> bool {
        self == FeedStatus::LoadingMore
    }
}

/// One snapshot of a paginated feed.
///
/// `results` is `None` until the first page arrives and is ordered
/// newest-first afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    pub results: Option<Vec<Message>>,
    pub status: FeedStatus,
}

impl FeedPage {
    pub fn loading() -> Self {
        Self {
            results: None,
            status: FeedStatus::LoadingFirstPage,
        }
    }

    pub fn messages(&self) -> Option<&[Message]> {
        self.results.as_deref()
    }

    /// The structurally oldest loaded message (last in newest-first order).
    pub fn oldest(&self) -> Option<&Message> {
        self.results.as_ref().and_then(|r| r.last())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub workspace_id: WorkspaceId,
    pub name: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
}
