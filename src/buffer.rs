use crate::model::{FeedPage, Message, MessageId};
use crate::pagination::{PaginationController, ScrollAnchor};
use crate::protocol::{FeedQuery, SubscriptionId};

/// What the client knows about a thread's parent message.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ParentState {
    /// Not reported by the backend yet
    #[default]
    Unknown,
    Found(Message),
    Missing,
}

/// Client-side copy of one subscribed feed
#[derive(Debug)]
pub struct FeedBuffer {
    pub subscription: SubscriptionId,
    pub query: FeedQuery,
    /// Latest snapshot published for the subscription
    pub page: FeedPage,
    /// Only meaningful for thread feeds
    pub parent: ParentState,
    /// Set when the feed's target does not exist
    pub unavailable: Option<String>,
    pub pagination: PaginationController,
    pub anchor: ScrollAnchor,
}

impl FeedBuffer {
    pub fn new(subscription: SubscriptionId, query: FeedQuery) -> Self {
        Self {
            subscription,
            query,
            page: FeedPage::loading(),
            parent: ParentState::Unknown,
            unavailable: None,
            pagination: PaginationController::new(),
            anchor: ScrollAnchor::new(),
        }
    }

    pub fn scope(&self) -> String {
        self.query.scope()
    }

    pub fn apply_page(&mut self, page: FeedPage) {
        self.page = page;
        self.unavailable = None;
    }

    pub fn mark_unavailable(&mut self, reason: String) {
        self.unavailable = Some(reason);
        // Nothing left to paginate
        self.pagination.release();
    }

    pub fn is_loading_first_page(&self) -> bool {
        self.unavailable.is_none() && self.page.results.is_none()
    }

    pub fn message(&self, id: &MessageId) -> Option<&Message> {
        self.page.messages()?.iter().find(|m| &m.id == id)
    }
}
