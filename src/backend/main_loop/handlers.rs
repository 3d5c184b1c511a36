//! Handlers for backend actions and feed publishing.

use std::time::Instant;

use chrono::Utc;
use crossbeam_channel::Sender;
use tracing::{debug, info, warn};

use super::state::{BackendState, Subscription};
use crate::error::ChatResult;
use crate::model::FeedStatus;
use crate::protocol::{BackendAction, FeedQuery, GuiEvent, SubscriptionId};

/// Handle a backend action from the GUI. Returns `false` once the loop
/// should stop.
pub fn handle_backend_action(
    action: BackendAction,
    state: &mut BackendState,
    event_tx: &Sender<GuiEvent>,
    now: Instant,
) -> bool {
    match action {
        BackendAction::Subscribe {
            subscription,
            query,
        } => {
            debug!(?subscription, scope = %query.scope(), "subscribe");
            let sub = Subscription::new(query, now + state.config.latency);
            let _ = event_tx.send(GuiEvent::FeedUpdated {
                subscription,
                page: sub.snapshot(),
            });
            state.subscriptions.insert(subscription, sub);
        }

        BackendAction::Unsubscribe(subscription) => {
            if state.subscriptions.remove(&subscription).is_some() {
                debug!(?subscription, "unsubscribe");
            }
        }

        BackendAction::LoadMore(subscription) => {
            let due = now + state.config.latency;
            match state.subscriptions.get_mut(&subscription) {
                Some(sub) if sub.status == FeedStatus::CanLoadMore && sub.due.is_none() => {
                    sub.status = FeedStatus::LoadingMore;
                    sub.due = Some(due);
                    debug!(?subscription, anchor = ?sub.anchor, "loading more");
                    let _ = event_tx.send(GuiEvent::FeedUpdated {
                        subscription,
                        page: sub.snapshot(),
                    });
                }
                Some(sub) => {
                    debug!(?subscription, status = ?sub.status, "load more ignored");
                }
                None => {
                    debug!(?subscription, "load more for unknown subscription");
                }
            }
        }

        BackendAction::SendMessage {
            target,
            body,
            image,
        } => {
            let author = state.viewer.id.clone();
            let result = state
                .store
                .send_message(&author, &target, &body, image, Utc::now());
            finish_mutation(state, event_tx, result.map(|_| ()));
        }

        BackendAction::EditMessage { id, body } => {
            let author = state.viewer.id.clone();
            let result = state.store.edit_message(&author, &id, &body, Utc::now());
            finish_mutation(state, event_tx, result);
        }

        BackendAction::DeleteMessage(id) => {
            let author = state.viewer.id.clone();
            let result = state.store.delete_message(&author, &id);
            finish_mutation(state, event_tx, result);
        }

        BackendAction::ToggleReaction { message, value } => {
            let member = state.viewer.id.clone();
            let result = state.store.toggle_reaction(&member, &message, &value);
            finish_mutation(state, event_tx, result);
        }

        BackendAction::CreateChannel { name } => match state.store.create_channel(&name, Utc::now()) {
            Ok(channel) => {
                info!(name = %channel.name, "channel created");
                let _ = event_tx.send(GuiEvent::ChannelsChanged(state.store.channels().to_vec()));
                let _ = event_tx.send(GuiEvent::ChannelCreated(channel.id));
            }
            Err(e) => {
                warn!("create channel failed: {}", e);
                let _ = event_tx.send(GuiEvent::Error(e.to_string()));
            }
        },

        BackendAction::RenameChannel { id, name } => match state.store.rename_channel(&id, &name) {
            Ok(channel) => {
                info!(id = %channel.id, name = %channel.name, "channel renamed");
                let _ = event_tx.send(GuiEvent::ChannelsChanged(state.store.channels().to_vec()));
                let _ = event_tx.send(GuiEvent::Notice("Channel name updated".to_string()));
            }
            Err(e) => {
                warn!("rename channel failed: {}", e);
                let _ = event_tx.send(GuiEvent::Error(e.to_string()));
            }
        },

        BackendAction::DeleteChannel(id) => match state.store.delete_channel(&id) {
            Ok(channel) => {
                info!(id = %channel.id, name = %channel.name, "channel deleted");
                let _ = event_tx.send(GuiEvent::ChannelsChanged(state.store.channels().to_vec()));
                let _ = event_tx.send(GuiEvent::Notice("Channel deleted".to_string()));
                // Feeds and threads inside the channel are now gone
                republish_all(state, event_tx);
            }
            Err(e) => {
                warn!("delete channel failed: {}", e);
                let _ = event_tx.send(GuiEvent::Error(e.to_string()));
            }
        },

        BackendAction::RenameWorkspace { name } => match state.store.rename_workspace(&name) {
            Ok(workspace) => {
                info!(name = %workspace.name, "workspace renamed");
                let _ = event_tx.send(GuiEvent::WorkspaceChanged(workspace));
                let _ = event_tx.send(GuiEvent::Notice("Workspace name updated".to_string()));
            }
            Err(e) => {
                warn!("rename workspace failed: {}", e);
                let _ = event_tx.send(GuiEvent::Error(e.to_string()));
            }
        },

        BackendAction::OpenConversation(member) => {
            let viewer = state.viewer.id.clone();
            match state.store.conversation_with(&viewer, &member) {
                Ok(conversation) => {
                    let _ = event_tx.send(GuiEvent::ConversationOpened {
                        member,
                        conversation,
                    });
                }
                Err(e) => {
                    let _ = event_tx.send(GuiEvent::Error(e.to_string()));
                }
            }
        }

        BackendAction::Shutdown => {
            info!("backend shutting down");
            return false;
        }
    }
    true
}

/// Report a failed mutation, or push fresh results to every feed.
fn finish_mutation(state: &mut BackendState, event_tx: &Sender<GuiEvent>, result: ChatResult<()>) {
    match result {
        Ok(()) => republish_all(state, event_tx),
        Err(e) => {
            warn!("request failed: {}", e);
            let _ = event_tx.send(GuiEvent::Error(e.to_string()));
        }
    }
}

/// Publish every subscription whose requested page is due.
pub fn publish_due(state: &mut BackendState, event_tx: &Sender<GuiEvent>, now: Instant) {
    let due: Vec<SubscriptionId> = state
        .subscriptions
        .iter()
        .filter(|(_, sub)| sub.is_due(now))
        .map(|(id, _)| *id)
        .collect();
    for id in due {
        publish(state, event_tx, id);
    }
}

/// Re-run every settled subscription after the data changed. Feeds with a
/// page in flight pick the change up when that page lands.
fn republish_all(state: &mut BackendState, event_tx: &Sender<GuiEvent>) {
    let settled: Vec<SubscriptionId> = state
        .subscriptions
        .iter()
        .filter(|(_, sub)| sub.due.is_none())
        .map(|(id, _)| *id)
        .collect();
    for id in settled {
        publish(state, event_tx, id);
    }
}

fn publish(state: &mut BackendState, event_tx: &Sender<GuiEvent>, subscription: SubscriptionId) {
    let page_size = state.config.page_size;
    let Some(sub) = state.subscriptions.get_mut(&subscription) else {
        return;
    };

    match state.store.query(&sub.query, sub.window(page_size)) {
        Ok(page) => {
            sub.settle(page.messages, page.has_more);
            debug!(
                ?subscription,
                count = sub.loaded.as_ref().map_or(0, Vec::len),
                status = ?sub.status,
                "publish"
            );
            let _ = event_tx.send(GuiEvent::FeedUpdated {
                subscription,
                page: sub.snapshot(),
            });
            if let FeedQuery::Thread { parent } = &sub.query {
                let _ = event_tx.send(GuiEvent::ThreadParent {
                    subscription,
                    message: state.store.message(parent),
                });
            }
        }
        Err(e) => {
            sub.due = None;
            debug!(?subscription, "feed unavailable: {}", e);
            if matches!(sub.query, FeedQuery::Thread { .. }) {
                let _ = event_tx.send(GuiEvent::ThreadParent {
                    subscription,
                    message: None,
                });
            }
            let _ = event_tx.send(GuiEvent::FeedUnavailable {
                subscription,
                reason: e.to_string(),
            });
        }
    }
}
