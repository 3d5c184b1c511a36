//! Central feed panel and thread side panel rendering

use chrono::{Local, Utc};
use eframe::egui;

use crate::app::ui::input::{render_composer, send_action};
use crate::app::ChatApp;
use crate::buffer::{FeedBuffer, ParentState};
use crate::feed::{self, FeedContext, FeedVariant};
use crate::input_state::InputState;
use crate::model::{Channel, Member, MemberId, MessageId};
use crate::protocol::{BackendAction, SubscriptionId};
use crate::rich_text;
use crate::state::ActiveView;
use crate::time_label;
use crate::ui::messages::{render_feed, render_thread_parent, FeedAction, FeedView};
use crate::ui::theme::ChatTheme;

/// Entries of the channel header menu.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ChannelMenuAction {
    Rename,
    Delete,
}

/// Channel title with its settings menu.
fn channel_header(ui: &mut egui::Ui, title: &str, theme: &ChatTheme) -> Option<ChannelMenuAction> {
    let mut picked = None;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(title)
                .size(17.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.menu_button("▾", |ui| {
            if ui.button("Rename channel…").clicked() {
                picked = Some(ChannelMenuAction::Rename);
                ui.close_menu();
            }
            let delete = egui::RichText::new("Delete channel…").color(theme.error);
            if ui.button(delete).clicked() {
                picked = Some(ChannelMenuAction::Delete);
                ui.close_menu();
            }
        });
    });
    picked
}

/// Viewer-side inputs shared by both feeds in one frame.
struct FeedFrame<'a> {
    viewer: Option<&'a MemberId>,
    editing: Option<&'a MessageId>,
    theme: &'a ChatTheme,
}

/// Compose and paint one feed. Returns the user's actions.
fn show_feed(
    ui: &mut egui::Ui,
    feed: &mut FeedBuffer,
    variant: &FeedVariant<'_>,
    frame: &FeedFrame<'_>,
    input: &mut InputState,
) -> Vec<FeedAction> {
    let today = time_label::today();
    let scope = feed.scope();
    let ctx = FeedContext {
        viewer: frame.viewer,
        editing: frame.editing,
        today,
    };
    let layout = feed::compose(&feed.page, variant, &scope, &ctx, &Local);
    let view = FeedView {
        layout: &layout,
        status: feed.page.status,
        viewer: frame.viewer,
        today,
        now: Utc::now(),
    };
    // A fresh subscription starts from a fresh scroll position
    let id_salt = format!("{}#{}", scope, feed.subscription.0);
    render_feed(
        ui,
        &id_salt,
        &view,
        &mut feed.pagination,
        &mut feed.anchor,
        &mut input.edit_draft,
        frame.theme,
    )
}

fn centered_notice(ui: &mut egui::Ui, text: &str, theme: &ChatTheme) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(egui::RichText::new(text).size(15.0).color(theme.text_muted));
    });
}

fn centered_spinner(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.spinner();
    });
}

fn main_variant<'a>(
    active: &ActiveView,
    channels: &'a [Channel],
    members: &'a [Member],
) -> Option<FeedVariant<'a>> {
    match active {
        ActiveView::Channel(id) => channels
            .iter()
            .find(|c| &c.id == id)
            .map(|c| FeedVariant::Channel {
                name: &c.name,
                created_at: c.created_at,
            }),
        ActiveView::Conversation { member, .. } => Some(FeedVariant::Conversation {
            member_name: members
                .iter()
                .find(|m| &m.id == member)
                .map(|m| m.name.as_str())
                .unwrap_or("Member"),
        }),
        ActiveView::None => None,
    }
}

impl ChatApp {
    /// Render the central panel with the active channel or conversation
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let mut pending: Option<(SubscriptionId, Vec<FeedAction>)> = None;
        let mut menu: Option<ChannelMenuAction> = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface[0]))
            .show(ctx, |ui| {
                let variant = main_variant(&self.state.active, &self.state.channels, &self.state.members);

                // Header
                egui::Frame::new()
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| match &variant {
                        Some(FeedVariant::Channel { name, .. }) => {
                            menu = channel_header(ui, &format!("# {}", name), &theme);
                        }
                        Some(FeedVariant::Conversation { member_name }) => {
                            ui.label(
                                egui::RichText::new(*member_name)
                                    .size(17.0)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                        }
                        _ => {
                            ui.label(egui::RichText::new("").size(17.0));
                        }
                    });
                ui.separator();

                let Some(feed) = self.state.main_feed.as_mut() else {
                    if self.state.workspace.is_none() {
                        centered_spinner(ui);
                    } else {
                        centered_notice(ui, "Select a channel to start chatting", &theme);
                    }
                    return;
                };
                if feed.unavailable.is_some() {
                    centered_notice(ui, "Channel not found", &theme);
                    return;
                }
                if feed.is_loading_first_page() {
                    centered_spinner(ui);
                    return;
                }
                let Some(variant) = variant else {
                    centered_notice(ui, "Channel not found", &theme);
                    return;
                };

                let frame = FeedFrame {
                    viewer: self.state.viewer.as_ref().map(|v| &v.id),
                    editing: self.state.editing.as_ref(),
                    theme: &theme,
                };
                let actions = show_feed(ui, feed, &variant, &frame, &mut self.input);
                pending = Some((feed.subscription, actions));
            });

        if let Some((subscription, actions)) = pending {
            self.handle_feed_actions(subscription, actions);
        }
        if let (Some(picked), Some(channel)) = (menu, self.state.active_channel()) {
            match picked {
                ChannelMenuAction::Rename => self.dialogs.open_rename_channel(channel),
                ChannelMenuAction::Delete => self.dialogs.confirm_delete_channel(channel),
            }
        }
    }

    /// Render the thread side panel when a thread is open
    pub(in crate::app) fn render_thread_panel(&mut self, ctx: &egui::Context) {
        if self.state.thread_feed.is_none() {
            return;
        }
        let theme = self.theme.clone();
        let today = time_label::today();
        let mut close = false;
        let mut pending: Option<(SubscriptionId, Vec<FeedAction>)> = None;
        let mut reply: Option<BackendAction> = None;

        egui::SidePanel::right("thread_panel")
            .resizable(true)
            .default_width(380.0)
            .min_width(280.0)
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[0])
                    .stroke(egui::Stroke::new(1.0, theme.border_medium)),
            )
            .show(ctx, |ui| {
                let Some(feed) = self.state.thread_feed.as_mut() else {
                    return;
                };

                egui::Frame::new()
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new("Thread")
                                    .size(17.0)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("✕").on_hover_text("Close").clicked() {
                                        close = true;
                                    }
                                },
                            );
                        });
                    });
                ui.separator();

                match &feed.parent {
                    ParentState::Unknown => {
                        centered_spinner(ui);
                        return;
                    }
                    ParentState::Missing => {
                        centered_notice(ui, "Message not found", &theme);
                        return;
                    }
                    ParentState::Found(parent) => {
                        ui.add_space(8.0);
                        render_thread_parent(ui, parent, today, &theme);
                        ui.add_space(8.0);
                    }
                }

                egui::TopBottomPanel::bottom("thread_composer")
                    .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(12, 10)))
                    .show_inside(ui, |ui| {
                        if let Some(text) =
                            render_composer(ui, &mut self.input.thread_draft, "Reply...", &theme)
                        {
                            reply = Some(send_action(feed.query.target(), &text));
                        }
                    });

                if feed.is_loading_first_page() {
                    centered_spinner(ui);
                    return;
                }

                let frame = FeedFrame {
                    viewer: self.state.viewer.as_ref().map(|v| &v.id),
                    editing: self.state.editing.as_ref(),
                    theme: &theme,
                };
                let actions = show_feed(ui, feed, &FeedVariant::Thread, &frame, &mut self.input);
                pending = Some((feed.subscription, actions));
            });

        self.send(reply);
        if let Some((subscription, actions)) = pending {
            self.handle_feed_actions(subscription, actions);
        }
        if close {
            let action = self.state.close_thread();
            self.send(action);
        }
    }

    /// Translate feed actions into state changes and backend requests.
    pub(in crate::app) fn handle_feed_actions(
        &mut self,
        subscription: SubscriptionId,
        actions: Vec<FeedAction>,
    ) {
        for action in actions {
            match action {
                FeedAction::LoadMore => self.send([BackendAction::LoadMore(subscription)]),
                FeedAction::OpenThread(id) => {
                    let actions = self.state.open_thread(&id);
                    self.send(actions);
                }
                FeedAction::ToggleReaction { message, value } => {
                    self.send([BackendAction::ToggleReaction { message, value }]);
                }
                FeedAction::StartEdit(id) => {
                    let text = self
                        .state
                        .feed_mut(subscription)
                        .and_then(|feed| feed.message(&id))
                        .map(|m| rich_text::plain_text(&m.body));
                    if let Some(text) = text {
                        self.input.edit_draft = text;
                        self.state.start_editing(id);
                    }
                }
                FeedAction::SaveEdit { id, body } => {
                    self.state.stop_editing();
                    self.input.edit_draft.clear();
                    self.send([BackendAction::EditMessage {
                        id,
                        body: rich_text::encode_plain(&body),
                    }]);
                }
                FeedAction::CancelEdit => {
                    self.state.stop_editing();
                    self.input.edit_draft.clear();
                }
                FeedAction::RequestDelete(id) => self.dialogs.confirm_delete(id),
            }
        }
    }
}
