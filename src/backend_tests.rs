//! Backend thread tests
//!
//! These run the real backend loop on its own thread against the demo
//! workspace and talk to it over the same channels the UI uses.

#[cfg(test)]
mod backend_tests {
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    use chrono::Utc;
    use crossbeam_channel::{unbounded, Receiver, Sender};

    use crate::backend::seed::{self, MESSAGES_PER_CHANNEL};
    use crate::backend::{run_backend, BackendConfig, ChatStore};
    use crate::model::{Channel, FeedPage, FeedStatus, Member};
    use crate::protocol::{BackendAction, FeedQuery, GuiEvent, MessageTarget, SubscriptionId};
    use crate::rich_text;

    const TIMEOUT: Duration = Duration::from_secs(5);

    struct Harness {
        tx: Sender<BackendAction>,
        rx: Receiver<GuiEvent>,
        handle: JoinHandle<()>,
        viewer: Member,
        channels: Vec<Channel>,
    }

    fn start(page_size: usize) -> Harness {
        let (tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, rx) = unbounded::<GuiEvent>();

        let mut store = ChatStore::new("Acme");
        seed::seed(&mut store, Utc::now()).unwrap();
        let config = BackendConfig {
            page_size,
            latency: Duration::from_millis(20),
            viewer_name: "tester".to_string(),
        };
        let handle = thread::spawn(move || run_backend(action_rx, event_tx, store, config));

        match rx.recv_timeout(TIMEOUT).expect("session event") {
            GuiEvent::Session {
                workspace,
                viewer,
                members,
                channels,
            } => {
                assert_eq!(workspace.name, "Acme");
                assert!(members.iter().any(|m| m.id == viewer.id));
                Harness {
                    tx,
                    rx,
                    handle,
                    viewer,
                    channels,
                }
            }
            other => panic!("expected session, got {:?}", other),
        }
    }

    impl Harness {
        fn channel(&self, name: &str) -> &Channel {
            self.channels.iter().find(|c| c.name == name).unwrap()
        }

        /// Next page published for `subscription`, skipping other events.
        fn next_page(&self, subscription: SubscriptionId) -> FeedPage {
            loop {
                match self.rx.recv_timeout(TIMEOUT).expect("feed update") {
                    GuiEvent::FeedUpdated {
                        subscription: s,
                        page,
                    } if s == subscription => return page,
                    _ => continue,
                }
            }
        }

        /// Next page for `subscription` that is no longer in flight.
        fn settled_page(&self, subscription: SubscriptionId) -> FeedPage {
            loop {
                let page = self.next_page(subscription);
                if matches!(page.status, FeedStatus::CanLoadMore | FeedStatus::Exhausted) {
                    return page;
                }
            }
        }

        fn shutdown(self) {
            self.tx.send(BackendAction::Shutdown).unwrap();
            self.handle.join().unwrap();
        }
    }

    #[test]
    fn test_session_lists_seeded_workspace() {
        let h = start(20);
        let names: Vec<&str> = h.channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["general", "random"]);
        assert_eq!(h.viewer.name, "tester");
        h.shutdown();
    }

    #[test]
    fn test_subscribe_then_paginate_to_the_beginning() {
        let h = start(25);
        let sub = SubscriptionId(1);
        h.tx.send(BackendAction::Subscribe {
            subscription: sub,
            query: FeedQuery::Channel(h.channel("general").id.clone()),
        })
        .unwrap();

        let first = h.next_page(sub);
        assert_eq!(first.status, FeedStatus::LoadingFirstPage);
        assert!(first.results.is_none());

        let page = h.settled_page(sub);
        assert_eq!(page.status, FeedStatus::CanLoadMore);
        let messages = page.messages().unwrap();
        assert_eq!(messages.len(), 25);
        // Newest first
        assert!(messages
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));

        h.tx.send(BackendAction::LoadMore(sub)).unwrap();
        let loading = h.next_page(sub);
        assert_eq!(loading.status, FeedStatus::LoadingMore);
        // Already loaded results stay visible while the next page is in flight
        assert_eq!(loading.messages().map(<[_]>::len), Some(25));

        let page = h.settled_page(sub);
        assert_eq!(page.messages().map(<[_]>::len), Some(50));
        assert_eq!(page.status, FeedStatus::CanLoadMore);

        h.tx.send(BackendAction::LoadMore(sub)).unwrap();
        let page = h.settled_page(sub);
        assert_eq!(page.messages().map(<[_]>::len), Some(MESSAGES_PER_CHANNEL));
        assert_eq!(page.status, FeedStatus::Exhausted);

        h.shutdown();
    }

    #[test]
    fn test_sent_message_is_pushed_to_live_feed() {
        let h = start(10);
        let sub = SubscriptionId(7);
        let channel = h.channel("random").id.clone();
        h.tx.send(BackendAction::Subscribe {
            subscription: sub,
            query: FeedQuery::Channel(channel.clone()),
        })
        .unwrap();
        h.settled_page(sub);

        h.tx.send(BackendAction::SendMessage {
            target: MessageTarget::Channel(channel),
            body: rich_text::encode_plain("ship it"),
            image: None,
        })
        .unwrap();

        let page = h.settled_page(sub);
        let newest = &page.messages().unwrap()[0];
        assert_eq!(rich_text::plain_text(&newest.body), "ship it");
        assert_eq!(newest.member_id, h.viewer.id);
        assert_eq!(newest.author_name.as_deref(), Some("tester"));

        h.shutdown();
    }

    #[test]
    fn test_create_channel_announces_it() {
        let h = start(10);
        h.tx.send(BackendAction::CreateChannel {
            name: "launch-plan".to_string(),
        })
        .unwrap();

        let channels = loop {
            if let GuiEvent::ChannelsChanged(channels) = h.rx.recv_timeout(TIMEOUT).unwrap() {
                break channels;
            }
        };
        assert!(channels.iter().any(|c| c.name == "launch-plan"));
        match h.rx.recv_timeout(TIMEOUT).unwrap() {
            GuiEvent::ChannelCreated(id) => {
                assert!(channels.iter().any(|c| c.id == id && c.name == "launch-plan"))
            }
            other => panic!("expected ChannelCreated, got {:?}", other),
        }

        // Same name again is refused
        h.tx.send(BackendAction::CreateChannel {
            name: "launch-plan".to_string(),
        })
        .unwrap();
        match h.rx.recv_timeout(TIMEOUT).unwrap() {
            GuiEvent::Error(msg) => assert!(msg.contains("launch-plan")),
            other => panic!("expected Error, got {:?}", other),
        }

        h.shutdown();
    }

    #[test]
    fn test_rename_then_delete_channel() {
        let h = start(10);
        let random = h.channel("random").id.clone();
        let sub = SubscriptionId(3);
        h.tx.send(BackendAction::Subscribe {
            subscription: sub,
            query: FeedQuery::Channel(random.clone()),
        })
        .unwrap();
        h.settled_page(sub);

        h.tx.send(BackendAction::RenameChannel {
            id: random.clone(),
            name: "Off Topic".to_string(),
        })
        .unwrap();
        match h.rx.recv_timeout(TIMEOUT).unwrap() {
            GuiEvent::ChannelsChanged(channels) => {
                assert!(channels.iter().any(|c| c.id == random && c.name == "off-topic"))
            }
            other => panic!("expected ChannelsChanged, got {:?}", other),
        }
        assert!(matches!(h.rx.recv_timeout(TIMEOUT).unwrap(), GuiEvent::Notice(_)));

        h.tx.send(BackendAction::DeleteChannel(random.clone())).unwrap();
        match h.rx.recv_timeout(TIMEOUT).unwrap() {
            GuiEvent::ChannelsChanged(channels) => {
                let names: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["general"]);
            }
            other => panic!("expected ChannelsChanged, got {:?}", other),
        }
        let unavailable = loop {
            match h.rx.recv_timeout(TIMEOUT).unwrap() {
                GuiEvent::FeedUnavailable { subscription, .. } => break subscription,
                _ => continue,
            }
        };
        assert_eq!(unavailable, sub);

        h.shutdown();
    }

    #[test]
    fn test_backend_exits_when_ui_goes_away() {
        let h = start(10);
        let Harness { tx, handle, .. } = h;
        drop(tx);
        handle.join().unwrap();
    }
}
