//! Feed painting: date separators, message rows and the pagination edge.

use chrono::{DateTime, Local, NaiveDate, Utc};
use eframe::egui::{self, Color32};

use crate::feed::{self, FeedEdge, FeedItem, FeedLayout, MessageRow};
use crate::model::{FeedStatus, MemberId, Message, MessageId};
use crate::pagination::{ObservationId, PaginationController, ScrollAnchor};
use crate::time_label;
use crate::ui::theme::{self, ChatTheme};

use super::format::render_body;
use super::helpers::{reaction_hint, thread_footer_text, visible_ratio, QUICK_REACTIONS};

const AVATAR_SIZE: f32 = 36.0;
const THREAD_AVATAR_SIZE: f32 = 18.0;

/// What the user did inside a feed this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    LoadMore,
    OpenThread(MessageId),
    ToggleReaction { message: MessageId, value: String },
    StartEdit(MessageId),
    SaveEdit { id: MessageId, body: String },
    CancelEdit,
    RequestDelete(MessageId),
}

/// Per-frame inputs of the feed painter.
pub struct FeedView<'r, 'a> {
    pub layout: &'r FeedLayout<'a>,
    pub status: FeedStatus,
    pub viewer: Option<&'r MemberId>,
    pub today: NaiveDate,
    pub now: DateTime<Utc>,
}

/// Paint a feed inside its own scroll area and report user actions.
///
/// The sentinel is mounted on `pagination` every frame it is painted; when
/// it stops being painted the observation is released at the end of the
/// frame. Its visibility is only sampled once `anchor` reports the frame as
/// settled, and rows inserted above the viewport are compensated by moving
/// the offset so the visible messages stay where they were.
pub fn render_feed(
    ui: &mut egui::Ui,
    id_salt: &str,
    view: &FeedView<'_, '_>,
    pagination: &mut PaginationController,
    anchor: &mut ScrollAnchor,
    edit_draft: &mut String,
    theme: &ChatTheme,
) -> Vec<FeedAction> {
    let mut actions = Vec::new();
    pagination.begin_frame();

    let mut area = egui::ScrollArea::vertical()
        .id_salt(id_salt)
        .auto_shrink([false; 2])
        .stick_to_bottom(true);
    if let Some(offset) = anchor.take_correction() {
        area = area.vertical_scroll_offset(offset);
    }

    let tracked = anchor.tracked().cloned();
    let mut sentinel: Option<(ObservationId, f32)> = None;
    let mut top_row: Option<(MessageId, f32)> = None;
    let mut tracked_top: Option<f32> = None;

    let output = area.show(ui, |ui| {
        // Content coordinates are measured from here
        let origin = ui.max_rect().top();
        ui.add_space(8.0);

        for item in view.layout.visual_order() {
            match item {
                FeedItem::Edge(FeedEdge::Sentinel(key)) => {
                    let observation = pagination.mount(key.clone());
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), 1.0),
                        egui::Sense::hover(),
                    );
                    sentinel = Some((observation, visible_ratio(rect, ui.clip_rect())));
                }
                FeedItem::Edge(FeedEdge::ChannelHero { name, created_at }) => {
                    render_channel_hero(ui, name, created_at, theme);
                }
                FeedItem::LoadingMore => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(4.0);
                        ui.spinner();
                    });
                }
                FeedItem::Separator(section) => render_separator(ui, &section.label, theme),
                FeedItem::Row(row) => {
                    let rect = render_row(ui, row, view, edit_draft, &mut actions, theme);
                    let top = rect.top() - origin;
                    if top_row.is_none() {
                        top_row = Some((row.message.id.clone(), top));
                    }
                    if tracked.as_ref() == Some(&row.message.id) {
                        tracked_top = Some(top);
                    }
                }
            }
        }

        ui.add_space(8.0);
    });

    let max_offset = output.content_size.y - output.inner_rect.height();
    if anchor.end_frame(tracked_top, top_row, output.state.offset.y, max_offset) {
        if let Some((observation, ratio)) = sentinel {
            pagination.sample(observation, ratio, view.status, || {
                actions.push(FeedAction::LoadMore)
            });
        }
    } else {
        ui.ctx().request_repaint();
    }

    pagination.end_frame();
    actions
}

/// The message a thread hangs off, shown above the replies.
pub fn render_thread_parent(ui: &mut egui::Ui, message: &Message, today: NaiveDate, theme: &ChatTheme) {
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        theme::render_avatar(
            ui,
            message.author_display_name(),
            message.member_id.as_str(),
            AVATAR_SIZE,
        );
        ui.add_space(12.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(message.author_display_name())
                        .text_style(egui::TextStyle::Name(theme::STYLE_AUTHOR.into()))
                        .strong()
                        .color(theme::member_color(message.member_id.as_str())),
                );
                ui.label(
                    egui::RichText::new(time_label::full_time(&message.created_at, &Local, today))
                        .text_style(egui::TextStyle::Name(theme::STYLE_TIMESTAMP.into()))
                        .color(theme.text_muted),
                );
            });
            render_body(ui, &message.body, message.updated_at.is_some(), theme);
        });
    });
}

fn render_channel_hero(ui: &mut egui::Ui, name: &str, created_at: &DateTime<Utc>, theme: &ChatTheme) {
    ui.add_space(24.0);
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(format!("# {}", name))
                    .size(24.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.label(
                egui::RichText::new(feed::channel_hero_text(name, created_at, &Local))
                    .color(theme.text_secondary),
            );
        });
    });
    ui.add_space(12.0);
}

/// Horizontal rule with the date label in a pill at its center.
fn render_separator(ui: &mut egui::Ui, label: &str, theme: &ChatTheme) {
    ui.add_space(12.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 24.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.hline(
        rect.x_range(),
        rect.center().y,
        egui::Stroke::new(1.0, theme.border_medium),
    );
    let galley = painter.layout_no_wrap(
        label.to_string(),
        egui::TextStyle::Name(theme::STYLE_SECTION_HEADER.into()).resolve(ui.style()),
        theme.text_secondary,
    );
    let pill = egui::Rect::from_center_size(rect.center(), galley.size() + egui::vec2(20.0, 8.0));
    painter.rect_filled(pill, 12.0, theme.surface[2]);
    painter.galley(pill.center() - galley.size() / 2.0, galley, theme.text_secondary);
}

/// Paint one message row. Returns the rect it occupies.
fn render_row(
    ui: &mut egui::Ui,
    row: &MessageRow<'_>,
    view: &FeedView<'_, '_>,
    edit_draft: &mut String,
    actions: &mut Vec<FeedAction>,
    theme: &ChatTheme,
) -> egui::Rect {
    let message = row.message;
    let full_time = time_label::full_time(&message.created_at, &Local, view.today);

    ui.add_space(if row.is_compact { 2.0 } else { 12.0 });

    let response = ui.horizontal(|ui| {
        ui.add_space(12.0);

        if row.is_compact {
            // Faint gutter time instead of the avatar
            ui.add_sized(
                [AVATAR_SIZE, 16.0],
                egui::Label::new(
                    egui::RichText::new(time_label::clock_time(&message.created_at, &Local))
                        .text_style(egui::TextStyle::Name(theme::STYLE_TIMESTAMP.into()))
                        .color(theme.text_muted.gamma_multiply(0.6)),
                ),
            )
            .on_hover_text(&full_time);
        } else {
            theme::render_avatar(
                ui,
                message.author_display_name(),
                message.member_id.as_str(),
                AVATAR_SIZE,
            );
        }

        ui.add_space(12.0);

        ui.vertical(|ui| {
            if !row.is_compact {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(message.author_display_name())
                            .text_style(egui::TextStyle::Name(theme::STYLE_AUTHOR.into()))
                            .strong()
                            .color(theme::member_color(message.member_id.as_str())),
                    );
                    ui.label(
                        egui::RichText::new(time_label::clock_time(&message.created_at, &Local))
                            .text_style(egui::TextStyle::Name(theme::STYLE_TIMESTAMP.into()))
                            .color(theme.text_muted),
                    )
                    .on_hover_text(&full_time);
                });
            }

            if row.is_editing {
                render_editor(ui, &message.id, edit_draft, actions);
            } else {
                render_body(ui, &message.body, message.updated_at.is_some(), theme);
            }

            if let Some(image) = &message.image {
                ui.hyperlink_to(egui::RichText::new("🖼 Attached image").color(theme.link), image);
            }

            if !message.reactions.is_empty() {
                render_reactions(ui, message, view.viewer, actions, theme);
            }

            if let Some(summary) = &message.thread {
                ui.add_space(2.0);
                ui.horizontal(|ui| {
                    let replier = summary.name.as_deref().unwrap_or("Member");
                    theme::render_avatar(ui, replier, replier, THREAD_AVATAR_SIZE);
                    let footer = egui::RichText::new(thread_footer_text(summary, view.now))
                        .small()
                        .color(theme.link);
                    if ui.link(footer).clicked() {
                        actions.push(FeedAction::OpenThread(message.id.clone()));
                    }
                });
            }
        });
    });

    let row_rect = response.response.rect;
    if !row.is_editing && ui.rect_contains_pointer(row_rect) {
        ui.painter()
            .rect_filled(row_rect, 4.0, Color32::from_rgba_unmultiplied(255, 255, 255, 8));
        render_toolbar(ui, row, row_rect, actions, theme);
    }
    row_rect
}

fn render_editor(
    ui: &mut egui::Ui,
    id: &MessageId,
    edit_draft: &mut String,
    actions: &mut Vec<FeedAction>,
) {
    let response = ui.add(
        egui::TextEdit::multiline(edit_draft)
            .desired_rows(2)
            .desired_width(ui.available_width() - 24.0),
    );
    let enter = response.has_focus()
        && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);
    let escape = response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape));

    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() || escape {
            actions.push(FeedAction::CancelEdit);
        }
        let can_save = !edit_draft.trim().is_empty();
        if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() || (enter && can_save) {
            actions.push(FeedAction::SaveEdit {
                id: id.clone(),
                body: edit_draft.trim_end_matches('\n').to_string(),
            });
        }
    });
}

fn render_reactions(
    ui: &mut egui::Ui,
    message: &Message,
    viewer: Option<&MemberId>,
    actions: &mut Vec<FeedAction>,
    theme: &ChatTheme,
) {
    ui.horizontal_wrapped(|ui| {
        for reaction in &message.reactions {
            let mine = viewer.is_some_and(|v| reaction.reacted_by(v));
            let (fill, stroke) = if mine {
                (theme.accent_soft, egui::Stroke::new(1.0, theme.accent))
            } else {
                (theme.surface[5], egui::Stroke::NONE)
            };
            let chip = egui::Button::new(
                egui::RichText::new(format!("{} {}", reaction.value, reaction.count))
                    .small()
                    .color(theme.text_primary),
            )
            .fill(fill)
            .stroke(stroke)
            .corner_radius(10.0);
            if ui
                .add(chip)
                .on_hover_text(reaction_hint(reaction.count, &reaction.value))
                .clicked()
            {
                actions.push(FeedAction::ToggleReaction {
                    message: message.id.clone(),
                    value: reaction.value.clone(),
                });
            }
        }
    });
}

/// Floating toolbar in the row's top-right corner.
fn render_toolbar(
    ui: &mut egui::Ui,
    row: &MessageRow<'_>,
    row_rect: egui::Rect,
    actions: &mut Vec<FeedAction>,
    theme: &ChatTheme,
) {
    let id = &row.message.id;
    let width = 260.0_f32.min(row_rect.width());
    let rect = egui::Rect::from_min_size(
        egui::pos2(row_rect.right() - width - 8.0, row_rect.top() - 6.0),
        egui::vec2(width, 28.0),
    );
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::right_to_left(egui::Align::Center)),
    );

    egui::Frame::new()
        .fill(theme.surface[5])
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(4, 2))
        .show(&mut child, |ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            if row.is_author {
                if ui.small_button("🗑").on_hover_text("Delete message").clicked() {
                    actions.push(FeedAction::RequestDelete(id.clone()));
                }
                if ui.small_button("✏").on_hover_text("Edit message").clicked() {
                    actions.push(FeedAction::StartEdit(id.clone()));
                }
            }
            if !row.hide_thread_button
                && ui.small_button("💬").on_hover_text("Reply in thread").clicked()
            {
                actions.push(FeedAction::OpenThread(id.clone()));
            }
            for value in QUICK_REACTIONS.iter().rev() {
                if ui.small_button(*value).clicked() {
                    actions.push(FeedAction::ToggleReaction {
                        message: id.clone(),
                        value: value.to_string(),
                    });
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    use crate::feed::{FeedContext, FeedVariant};
    use crate::model::FeedPage;
    use crate::test_support::{at, msg};
    use crate::ui::theme::apply_app_style;

    const SCOPE: &str = "thread:p1";
    const PAGE: usize = 20;

    /// Headless egui host painting one feed on a 600x400 screen, with an
    /// instant backend that answers a load on the following frame.
    struct FeedHost {
        ctx: egui::Context,
        theme: ChatTheme,
        /// Every message of the feed, newest first
        all: Vec<Message>,
        loaded: usize,
        status: FeedStatus,
        /// Paint the channel variant (hero once exhausted) instead of a thread
        channel: bool,
        pagination: PaginationController,
        anchor: ScrollAnchor,
        draft: String,
        frame: u32,
        load_frames: Vec<u32>,
    }

    impl FeedHost {
        fn new(total: usize, loaded: usize) -> Self {
            let start = at(2024, 3, 4, 9, 0);
            let all = (0..total)
                .rev()
                .map(|i| {
                    let author = if i % 2 == 0 { "alice" } else { "bob" };
                    msg(&format!("m{}", i), author, start + TimeDelta::minutes(10 * i as i64))
                })
                .collect();
            let ctx = egui::Context::default();
            let theme = ChatTheme::dark();
            apply_app_style(&ctx, &theme);
            Self {
                ctx,
                theme,
                all,
                loaded,
                status: if loaded < total {
                    FeedStatus::CanLoadMore
                } else {
                    FeedStatus::Exhausted
                },
                channel: false,
                pagination: PaginationController::new(),
                anchor: ScrollAnchor::new(),
                draft: String::new(),
                frame: 0,
                load_frames: Vec::new(),
            }
        }

        fn paint(&mut self, events: Vec<egui::Event>) {
            let page = FeedPage {
                results: Some(self.all[..self.loaded].to_vec()),
                status: self.status,
            };
            let now = at(2024, 3, 7, 12, 0);
            let variant = if self.channel {
                FeedVariant::Channel {
                    name: "general",
                    created_at: at(2024, 3, 1, 9, 0),
                }
            } else {
                FeedVariant::Thread
            };
            let feed_ctx = FeedContext {
                viewer: None,
                editing: None,
                today: now.date_naive(),
            };
            let layout = feed::compose(&page, &variant, SCOPE, &feed_ctx, &Utc);
            let view = FeedView {
                layout: &layout,
                status: self.status,
                viewer: None,
                today: now.date_naive(),
                now,
            };
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(600.0, 400.0),
                )),
                time: Some(f64::from(self.frame) / 60.0),
                events,
                ..Default::default()
            };

            let mut actions = Vec::new();
            let ctx = self.ctx.clone();
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    actions = render_feed(
                        ui,
                        SCOPE,
                        &view,
                        &mut self.pagination,
                        &mut self.anchor,
                        &mut self.draft,
                        &self.theme,
                    );
                });
            });

            if actions.contains(&FeedAction::LoadMore) {
                self.load_frames.push(self.frame);
                self.status = FeedStatus::LoadingMore;
            } else if self.status == FeedStatus::LoadingMore {
                self.loaded = (self.loaded + PAGE).min(self.all.len());
                self.status = if self.loaded < self.all.len() {
                    FeedStatus::CanLoadMore
                } else {
                    FeedStatus::Exhausted
                };
            }
            self.frame += 1;
        }

        fn idle(&mut self, frames: u32) {
            for _ in 0..frames {
                self.paint(vec![egui::Event::PointerMoved(egui::pos2(300.0, 200.0))]);
            }
        }

        /// One wheel gesture far enough to reach the top of the content.
        fn scroll_to_top(&mut self) {
            let mut events = vec![egui::Event::PointerMoved(egui::pos2(300.0, 200.0))];
            events.extend((0..3000).map(|_| egui::Event::MouseWheel {
                unit: egui::MouseWheelUnit::Point,
                delta: egui::vec2(0.0, 7.0),
                modifiers: egui::Modifiers::NONE,
            }));
            self.paint(events);
        }
    }

    #[test]
    fn test_opening_a_long_feed_does_not_load() {
        let mut host = FeedHost::new(300, 60);
        host.idle(12);
        assert!(host.load_frames.is_empty(), "loaded at {:?}", host.load_frames);
        assert_eq!(host.loaded, 60);
    }

    #[test]
    fn test_one_scroll_to_the_top_loads_one_page() {
        let mut host = FeedHost::new(300, 60);
        host.idle(10);
        host.scroll_to_top();
        host.idle(20);
        assert_eq!(host.load_frames.len(), 1, "loaded at {:?}", host.load_frames);
        assert_eq!(host.loaded, 80);

        // The prepended page kept the view in place; scrolling up again is a
        // new transition
        host.scroll_to_top();
        host.idle(20);
        assert_eq!(host.load_frames.len(), 2, "loaded at {:?}", host.load_frames);
        assert_eq!(host.loaded, 100);
    }

    #[test]
    fn test_short_feed_loads_until_the_viewport_is_filled() {
        let mut host = FeedHost::new(300, 2);
        host.idle(20);
        // Two rows leave the sentinel on screen; one page fills the viewport
        assert_eq!(host.load_frames.len(), 1, "loaded at {:?}", host.load_frames);
        assert_eq!(host.loaded, 22);
        assert_eq!(host.status, FeedStatus::CanLoadMore);
    }

    #[test]
    fn test_hero_replacing_the_sentinel_ends_the_observation() {
        let mut host = FeedHost::new(25, 5);
        host.channel = true;
        host.idle(20);
        assert_eq!(host.loaded, 25);
        assert_eq!(host.status, FeedStatus::Exhausted);
        let loads = host.load_frames.len();
        assert!(!host.pagination.is_observing());

        host.scroll_to_top();
        host.idle(5);
        assert_eq!(host.load_frames.len(), loads);
    }

    #[test]
    fn test_unpainted_feed_never_loads() {
        // Two rows: the sentinel is on screen from the first frame
        let mut host = FeedHost::new(300, 2);
        host.idle(1);
        assert!(host.pagination.is_observing());
        assert!(host.load_frames.is_empty());

        // The view goes away (feed closed or replaced by a notice): a frame
        // without the sentinel releases the observation
        let ctx = host.ctx.clone();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |_ui| {
                host.pagination.begin_frame();
                host.pagination.end_frame();
            });
        });
        assert!(!host.pagination.is_observing());
        assert_eq!(host.pagination.loads_requested(), 0);
    }
}
