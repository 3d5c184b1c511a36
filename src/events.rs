//! Backend event processing (sessions, feed snapshots, errors).

use crossbeam_channel::Receiver;
use tracing::debug;

use crate::buffer::ParentState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;

/// Process all pending events from the backend, returning the actions
/// they trigger.
pub fn process_events(event_rx: &Receiver<GuiEvent>, state: &mut ClientState) -> Vec<BackendAction> {
    let mut actions = Vec::new();
    // Drain all pending events from the backend
    while let Ok(event) = event_rx.try_recv() {
        actions.extend(process_event(state, event));
    }
    actions
}

pub fn process_event(state: &mut ClientState, event: GuiEvent) -> Vec<BackendAction> {
    match event {
        GuiEvent::Session {
            workspace,
            viewer,
            members,
            channels,
        } => {
            state.workspace = Some(workspace);
            state.viewer = Some(viewer);
            state.members = members;
            state.channels = channels;

            let preferred = state.preferred_channel.as_deref();
            let initial = state
                .channels
                .iter()
                .find(|c| Some(c.name.as_str()) == preferred)
                .or_else(|| state.channels.first())
                .map(|c| c.id.clone());
            if let Some(id) = initial {
                return state.open_channel(&id);
            }
        }

        GuiEvent::ChannelsChanged(channels) => {
            return state.sync_channels(channels);
        }

        GuiEvent::WorkspaceChanged(workspace) => {
            state.workspace = Some(workspace);
        }

        GuiEvent::Notice(text) => {
            state.push_status(text);
        }

        GuiEvent::ChannelCreated(id) => {
            if let Some(channel) = state.channel(&id) {
                let text = format!("Channel #{} created", channel.name);
                state.push_status(text);
            }
            return state.open_channel(&id);
        }

        GuiEvent::ConversationOpened {
            member,
            conversation,
        } => {
            return state.open_conversation(member, conversation);
        }

        GuiEvent::FeedUpdated { subscription, page } => match state.feed_mut(subscription) {
            Some(feed) => feed.apply_page(page),
            None => debug!(?subscription, "dropping page for closed feed"),
        },

        GuiEvent::ThreadParent {
            subscription,
            message,
        } => {
            if let Some(feed) = state.feed_mut(subscription) {
                feed.parent = match message {
                    Some(message) => ParentState::Found(message),
                    None => ParentState::Missing,
                };
            }
        }

        GuiEvent::FeedUnavailable {
            subscription,
            reason,
        } => {
            if let Some(feed) = state.feed_mut(subscription) {
                feed.mark_unavailable(reason);
            }
        }

        GuiEvent::Error(msg) => {
            state.push_status(format!("Error: {}", msg));
        }
    }
    Vec::new()
}
