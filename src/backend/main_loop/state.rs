//! State kept by the backend loop between actions.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::backend::store::{ChatStore, FeedWindow};
use crate::model::{FeedPage, FeedStatus, Member, Message};
use crate::protocol::{FeedQuery, SubscriptionId};

/// Tunables for the reference backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Messages added to a feed per page
    pub page_size: usize,
    /// Simulated round-trip before a requested page is published
    pub latency: Duration,
    /// Display name the local viewer joins the workspace with
    pub viewer_name: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            latency: Duration::from_millis(300),
            viewer_name: "you".to_string(),
        }
    }
}

/// One live feed query
///
/// A subscription is anchored at the oldest message it has published: later
/// publishes keep everything from there on, so messages already shown never
/// drop out of the feed.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub query: FeedQuery,
    /// Creation time of the oldest published message
    pub anchor: Option<DateTime<Utc>>,
    pub status: FeedStatus,
    /// Results of the last publish, newest-first
    pub loaded: Option<Vec<Message>>,
    /// When the pending page is due; `None` when nothing is in flight
    pub due: Option<Instant>,
}

impl Subscription {
    pub fn new(query: FeedQuery, due: Instant) -> Self {
        Self {
            query,
            anchor: None,
            status: FeedStatus::LoadingFirstPage,
            loaded: None,
            due: Some(due),
        }
    }

    /// Window for the next publish: one more page when one was requested
    /// (or nothing is anchored yet), otherwise just the anchored messages.
    pub fn window(&self, page_size: usize) -> FeedWindow {
        let older = if self.anchor.is_none() || self.status.is_loading_more() {
            page_size
        } else {
            0
        };
        FeedWindow {
            since: self.anchor,
            older,
        }
    }

    /// Record a published page.
    pub fn settle(&mut self, messages: Vec<Message>, has_more: bool) {
        if let Some(oldest) = messages.last() {
            self.anchor = Some(oldest.created_at);
        }
        self.status = if has_more {
            FeedStatus::CanLoadMore
        } else {
            FeedStatus::Exhausted
        };
        self.loaded = Some(messages);
        self.due = None;
    }

    pub fn snapshot(&self) -> FeedPage {
        FeedPage {
            results: self.loaded.clone(),
            status: self.status,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.due.is_some_and(|due| due <= now)
    }
}

pub struct BackendState {
    pub store: ChatStore,
    pub viewer: Member,
    pub config: BackendConfig,
    pub subscriptions: BTreeMap<SubscriptionId, Subscription>,
}

impl BackendState {
    pub fn new(mut store: ChatStore, config: BackendConfig) -> Self {
        let viewer = store.ensure_member(&config.viewer_name, None);
        Self {
            store,
            viewer,
            config,
            subscriptions: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChannelId;
    use crate::test_support::{at, msg};

    #[test]
    fn test_window_grows_only_on_request() {
        let query = FeedQuery::Channel(ChannelId::new("c1"));
        let mut sub = Subscription::new(query, Instant::now());
        assert_eq!(sub.window(20), FeedWindow::newest(20));

        sub.settle(
            vec![msg("2", "a", at(2024, 3, 4, 10, 2)), msg("1", "a", at(2024, 3, 4, 10, 1))],
            true,
        );
        assert_eq!(sub.status, FeedStatus::CanLoadMore);
        let since = Some(at(2024, 3, 4, 10, 1));
        assert_eq!(sub.window(20), FeedWindow { since, older: 0 });

        sub.status = FeedStatus::LoadingMore;
        assert_eq!(sub.window(20), FeedWindow { since, older: 20 });
    }

    #[test]
    fn test_empty_publish_keeps_the_anchor() {
        let query = FeedQuery::Channel(ChannelId::new("c1"));
        let mut sub = Subscription::new(query, Instant::now());
        sub.settle(vec![msg("1", "a", at(2024, 3, 4, 10, 1))], false);
        sub.settle(Vec::new(), false);
        assert_eq!(sub.anchor, Some(at(2024, 3, 4, 10, 1)));
        assert_eq!(sub.status, FeedStatus::Exhausted);
    }
}
