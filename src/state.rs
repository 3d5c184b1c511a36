//! Core application state, separated from UI logic.
//!
//! `ClientState` holds everything the session knows: the workspace, the
//! viewer, the open feeds and which message is being edited. Navigation
//! methods return the backend actions they imply instead of sending them,
//! so the state can be driven and checked without a backend thread.

use std::time::Instant;

use crate::buffer::FeedBuffer;
use crate::model::{Channel, ChannelId, ConversationId, Member, MemberId, MessageId, Workspace};
use crate::protocol::{BackendAction, FeedQuery, SubscriptionId};

/// What the central panel shows.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ActiveView {
    #[default]
    None,
    Channel(ChannelId),
    Conversation {
        member: MemberId,
        conversation: ConversationId,
    },
}

/// Core application state for the chat client.
#[derive(Default)]
pub struct ClientState {
    pub workspace: Option<Workspace>,
    pub viewer: Option<Member>,
    pub members: Vec<Member>,
    pub channels: Vec<Channel>,

    pub active: ActiveView,
    /// Feed of the active channel or conversation
    pub main_feed: Option<FeedBuffer>,
    /// Feed of the open thread panel
    pub thread_feed: Option<FeedBuffer>,
    /// Message currently swapped for an inline editor
    pub editing: Option<MessageId>,

    /// Channel name to open once the session arrives
    pub preferred_channel: Option<String>,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,

    next_subscription: u64,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferred_channel(name: Option<String>) -> Self {
        Self {
            preferred_channel: name,
            ..Self::default()
        }
    }

    fn subscribe(&mut self, query: FeedQuery, actions: &mut Vec<BackendAction>) -> FeedBuffer {
        self.next_subscription += 1;
        let subscription = SubscriptionId(self.next_subscription);
        actions.push(BackendAction::Subscribe {
            subscription,
            query: query.clone(),
        });
        FeedBuffer::new(subscription, query)
    }

    fn replace_main_feed(&mut self, query: FeedQuery) -> Vec<BackendAction> {
        let mut actions = Vec::new();
        if let Some(old) = self.main_feed.take() {
            actions.push(BackendAction::Unsubscribe(old.subscription));
        }
        actions.extend(self.close_thread());
        self.editing = None;
        let feed = self.subscribe(query, &mut actions);
        self.main_feed = Some(feed);
        actions
    }

    /// Switch the central panel to a channel.
    pub fn open_channel(&mut self, id: &ChannelId) -> Vec<BackendAction> {
        if self.active == ActiveView::Channel(id.clone()) {
            return Vec::new();
        }
        self.active = ActiveView::Channel(id.clone());
        self.replace_main_feed(FeedQuery::Channel(id.clone()))
    }

    /// Switch the central panel to a direct conversation.
    pub fn open_conversation(
        &mut self,
        member: MemberId,
        conversation: ConversationId,
    ) -> Vec<BackendAction> {
        let view = ActiveView::Conversation {
            member,
            conversation: conversation.clone(),
        };
        if self.active == view {
            return Vec::new();
        }
        self.active = view;
        self.replace_main_feed(FeedQuery::Conversation(conversation))
    }

    /// Open the thread panel on `parent`, replacing any open thread.
    pub fn open_thread(&mut self, parent: &MessageId) -> Vec<BackendAction> {
        if self.open_thread_parent() == Some(parent) {
            return Vec::new();
        }
        let mut actions: Vec<BackendAction> = self.close_thread().into_iter().collect();
        let feed = self.subscribe(
            FeedQuery::Thread {
                parent: parent.clone(),
            },
            &mut actions,
        );
        self.thread_feed = Some(feed);
        actions
    }

    pub fn close_thread(&mut self) -> Option<BackendAction> {
        self.thread_feed
            .take()
            .map(|feed| BackendAction::Unsubscribe(feed.subscription))
    }

    pub fn open_thread_parent(&self) -> Option<&MessageId> {
        match &self.thread_feed.as_ref()?.query {
            FeedQuery::Thread { parent } => Some(parent),
            _ => None,
        }
    }

    /// Take a new channel list. When the active channel is gone the first
    /// remaining channel opens instead, or the view is cleared.
    pub fn sync_channels(&mut self, channels: Vec<Channel>) -> Vec<BackendAction> {
        self.channels = channels;
        let ActiveView::Channel(active) = &self.active else {
            return Vec::new();
        };
        if self.channel(active).is_some() {
            return Vec::new();
        }
        match self.channels.first().map(|c| c.id.clone()) {
            Some(first) => self.open_channel(&first),
            None => {
                self.active = ActiveView::None;
                self.editing = None;
                self.close_all()
            }
        }
    }

    /// Unsubscribe everything, for shutdown.
    pub fn close_all(&mut self) -> Vec<BackendAction> {
        let mut actions: Vec<BackendAction> = self.close_thread().into_iter().collect();
        if let Some(feed) = self.main_feed.take() {
            actions.push(BackendAction::Unsubscribe(feed.subscription));
        }
        actions
    }

    pub fn feed_mut(&mut self, subscription: SubscriptionId) -> Option<&mut FeedBuffer> {
        [self.main_feed.as_mut(), self.thread_feed.as_mut()]
            .into_iter()
            .flatten()
            .find(|feed| feed.subscription == subscription)
    }

    pub fn channel(&self, id: &ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| &c.id == id)
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn active_channel(&self) -> Option<&Channel> {
        match &self.active {
            ActiveView::Channel(id) => self.channel(id),
            _ => None,
        }
    }

    pub fn viewer_id(&self) -> Option<&MemberId> {
        self.viewer.as_ref().map(|v| &v.id)
    }

    pub fn start_editing(&mut self, id: MessageId) {
        self.editing = Some(id);
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    pub fn push_status(&mut self, text: impl Into<String>) {
        self.status_messages.push((text.into(), Instant::now()));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}
