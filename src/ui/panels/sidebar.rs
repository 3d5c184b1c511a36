//! Workspace sidebar: channels and direct messages.

use eframe::egui::{self, Color32, Stroke};

use crate::model::{ChannelId, MemberId};
use crate::state::{ActiveView, ClientState};
use crate::ui::theme::{render_avatar, ChatTheme};

/// What the user picked in the sidebar this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    OpenChannel(ChannelId),
    OpenMember(MemberId),
    CreateChannel,
    /// The workspace name was clicked
    OpenPreferences,
}

/// Render the left workspace panel.
pub fn render_sidebar(
    ctx: &egui::Context,
    state: &ClientState,
    theme: &ChatTheme,
) -> Option<SidebarAction> {
    let mut action = None;

    egui::SidePanel::left("workspace_sidebar")
        .resizable(true)
        .default_width(240.0)
        .min_width(180.0)
        .frame(
            egui::Frame::new()
                .fill(theme.surface[1])
                .inner_margin(egui::Margin::same(0))
                .stroke(Stroke::new(1.0, theme.border_medium)),
        )
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.add_space(16.0);
                let name = state
                    .workspace
                    .as_ref()
                    .map(|w| w.name.as_str())
                    .unwrap_or("Workspace");
                let header = egui::Label::new(
                    egui::RichText::new(format!("{} ▾", name))
                        .size(16.0)
                        .strong()
                        .color(theme.text_primary),
                )
                .sense(egui::Sense::click());
                let clicked = ui
                    .add(header)
                    .on_hover_text("Workspace preferences")
                    .clicked();
                if clicked && state.workspace.is_some() {
                    action = Some(SidebarAction::OpenPreferences);
                }
            });
            ui.add_space(10.0);
            section_separator(ui, theme);

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space(16.0);
                        ui.label(
                            egui::RichText::new("CHANNELS")
                                .size(11.0)
                                .strong()
                                .color(theme.text_muted),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.add_space(12.0);
                            if ui
                                .small_button("+")
                                .on_hover_text("Create a channel")
                                .clicked()
                            {
                                action = Some(SidebarAction::CreateChannel);
                            }
                        });
                    });
                    ui.add_space(6.0);

                    for channel in &state.channels {
                        let selected = state.active == ActiveView::Channel(channel.id.clone());
                        ui.add_space(2.0);
                        if render_channel_item(ui, &channel.name, selected, theme) {
                            action = Some(SidebarAction::OpenChannel(channel.id.clone()));
                        }
                    }

                    ui.add_space(16.0);
                    ui.horizontal(|ui| {
                        ui.add_space(16.0);
                        ui.label(
                            egui::RichText::new("DIRECT MESSAGES")
                                .size(11.0)
                                .strong()
                                .color(theme.text_muted),
                        );
                    });
                    ui.add_space(6.0);

                    let viewer = state.viewer_id();
                    for member in state.members.iter().filter(|m| Some(&m.id) != viewer) {
                        let selected = matches!(
                            &state.active,
                            ActiveView::Conversation { member: id, .. } if id == &member.id
                        );
                        ui.add_space(2.0);
                        if render_member_item(ui, &member.name, member.id.as_str(), selected, theme)
                        {
                            action = Some(SidebarAction::OpenMember(member.id.clone()));
                        }
                    }
                });
        });

    action
}

fn section_separator(ui: &mut egui::Ui, theme: &ChatTheme) {
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        let sep_rect = egui::Rect::from_min_size(
            ui.cursor().min,
            egui::vec2(ui.available_width() - 32.0, 1.0),
        );
        ui.painter().rect_filled(sep_rect, 0.0, theme.surface[3]);
    });
}

/// Row background plus the selected indicator bar. Returns the response.
fn item_frame(ui: &mut egui::Ui, selected: bool, theme: &ChatTheme) -> (egui::Rect, egui::Response) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 30.0),
        egui::Sense::click(),
    );

    let bg_color = if selected {
        theme.surface[4]
    } else if response.hovered() {
        theme.surface[3]
    } else {
        Color32::TRANSPARENT
    };
    if selected || response.hovered() {
        ui.painter().rect_filled(rect.shrink2(egui::vec2(8.0, 0.0)), 6.0, bg_color);
    }
    if selected {
        let indicator_rect = egui::Rect::from_min_size(
            egui::pos2(rect.min.x + 8.0, rect.center().y - 10.0),
            egui::vec2(3.0, 20.0),
        );
        ui.painter().rect_filled(indicator_rect, 1.5, theme.accent);
    }

    (rect, response)
}

fn render_channel_item(ui: &mut egui::Ui, name: &str, selected: bool, theme: &ChatTheme) -> bool {
    let (rect, response) = item_frame(ui, selected, theme);
    let color = if selected {
        theme.text_primary
    } else {
        theme.text_secondary
    };

    ui.painter().text(
        egui::pos2(rect.min.x + 20.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        "#",
        egui::FontId::new(15.0, egui::FontFamily::Proportional),
        theme.text_muted,
    );
    ui.painter().text(
        egui::pos2(rect.min.x + 38.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        name,
        egui::FontId::new(13.0, egui::FontFamily::Proportional),
        color,
    );

    response.clicked()
}

fn render_member_item(
    ui: &mut egui::Ui,
    name: &str,
    color_key: &str,
    selected: bool,
    theme: &ChatTheme,
) -> bool {
    let (rect, response) = item_frame(ui, selected, theme);

    let avatar_rect = egui::Rect::from_min_size(
        egui::pos2(rect.min.x + 18.0, rect.center().y - 10.0),
        egui::vec2(20.0, 20.0),
    );
    ui.put(avatar_rect, |ui: &mut egui::Ui| {
        render_avatar(ui, name, color_key, 20.0)
    });

    let color = if selected {
        theme.text_primary
    } else {
        theme.text_secondary
    };
    ui.painter().text(
        egui::pos2(rect.min.x + 46.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        name,
        egui::FontId::new(13.0, egui::FontFamily::Proportional),
        color,
    );

    response.clicked()
}
