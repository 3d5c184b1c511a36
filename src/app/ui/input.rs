//! Message composers for the active feed and the thread panel

use eframe::egui;

use crate::app::ChatApp;
use crate::input_state::take_submission;
use crate::protocol::{BackendAction, MessageTarget};
use crate::rich_text;
use crate::state::ActiveView;
use crate::ui::theme::ChatTheme;

/// Multiline composer. Returns the submitted text when Enter (without
/// Shift) is pressed.
pub(in crate::app) fn render_composer(
    ui: &mut egui::Ui,
    draft: &mut String,
    hint: &str,
    theme: &ChatTheme,
) -> Option<String> {
    let mut submitted = None;

    // Styled input frame with rounding and focus indication
    egui::Frame::new()
        .fill(theme.surface[2])
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::multiline(draft)
                    .desired_rows(1)
                    .desired_width(ui.available_width() - 4.0)
                    .frame(false)
                    .hint_text(hint),
            );

            if response.has_focus() {
                let outer = response.rect.expand(2.0);
                ui.painter().rect_stroke(
                    outer,
                    8.0,
                    egui::Stroke::new(1.0, theme.accent),
                    egui::StrokeKind::Outside,
                );
            }

            // Shift+Enter inserts a newline in the multiline edit by default
            let enter = response.has_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);
            if enter {
                submitted = take_submission(draft);
                response.request_focus();
            }
        });

    submitted
}

/// A plain-text message posted to `target`.
pub(in crate::app) fn send_action(target: MessageTarget, text: &str) -> BackendAction {
    BackendAction::SendMessage {
        target,
        body: rich_text::encode_plain(text),
        image: None,
    }
}

impl ChatApp {
    fn composer_hint(&self) -> String {
        match &self.state.active {
            ActiveView::Channel(id) => self
                .state
                .channel(id)
                .map(|c| format!("Message #{}", c.name))
                .unwrap_or_else(|| "Message".to_string()),
            ActiveView::Conversation { member, .. } => self
                .state
                .member(member)
                .map(|m| format!("Message {}", m.name))
                .unwrap_or_else(|| "Message".to_string()),
            ActiveView::None => "Message".to_string(),
        }
    }

    /// Render the composer at the bottom of the central panel
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        let Some(target) = self
            .state
            .main_feed
            .as_ref()
            .filter(|feed| feed.unavailable.is_none())
            .map(|feed| feed.query.target())
        else {
            return;
        };
        let hint = self.composer_hint();

        let mut submitted = None;
        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface[0])
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                submitted = render_composer(ui, &mut self.input.main_draft, &hint, &self.theme);
            });

        if let Some(text) = submitted {
            self.send([send_action(target, &text)]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChannelId;

    #[test]
    fn test_send_action_encodes_rich_text() {
        let action = send_action(MessageTarget::Channel(ChannelId::new("c1")), "hi there");
        match action {
            BackendAction::SendMessage {
                target,
                body,
                image,
            } => {
                assert_eq!(target, MessageTarget::Channel(ChannelId::new("c1")));
                assert_eq!(rich_text::plain_text(&body), "hi there");
                assert!(image.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
