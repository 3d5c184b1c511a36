//! Confirmation before deleting a message or a channel.

use eframe::egui;

use super::DialogAction;
use crate::model::{ChannelId, MessageId};

/// What is about to be deleted.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteSubject {
    Message(MessageId),
    Channel { id: ChannelId, name: String },
}

pub struct DeleteConfirmDialog {
    pub open: bool,
    subject: DeleteSubject,
}

impl DeleteConfirmDialog {
    pub fn new(subject: DeleteSubject) -> Self {
        Self {
            open: true,
            subject,
        }
    }

    pub fn subject(&self) -> &DeleteSubject {
        &self.subject
    }

    pub fn confirm(&mut self) -> DialogAction {
        self.open = false;
        match &self.subject {
            DeleteSubject::Message(id) => DialogAction::DeleteMessage(id.clone()),
            DeleteSubject::Channel { id, .. } => DialogAction::DeleteChannel(id.clone()),
        }
    }

    fn text(&self) -> (&'static str, String) {
        match &self.subject {
            DeleteSubject::Message(_) => (
                "Delete message",
                "Are you sure you want to delete this message? This cannot be undone.".to_string(),
            ),
            DeleteSubject::Channel { name, .. } => (
                "Delete this channel?",
                format!(
                    "#{} and every message in it will be deleted. This action cannot be undone.",
                    name
                ),
            ),
        }
    }

    pub fn render(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action = None;
        let (title, body) = self.text();
        egui::Window::new(title)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(body);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                    let delete = egui::Button::new(
                        egui::RichText::new("Delete").color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(240, 71, 71));
                    if ui.add(delete).clicked() {
                        action = Some(self.confirm());
                    }
                });
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.open = false;
                }
            });

        action
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_closes_with_delete_action() {
        let mut dialog = DeleteConfirmDialog::new(DeleteSubject::Message(MessageId::new("m1")));
        assert!(dialog.is_open());
        match dialog.confirm() {
            DialogAction::DeleteMessage(id) => assert_eq!(id.as_str(), "m1"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_channel_delete_names_the_channel() {
        let mut dialog = DeleteConfirmDialog::new(DeleteSubject::Channel {
            id: ChannelId::new("c2"),
            name: "random".into(),
        });
        let (title, body) = dialog.text();
        assert_eq!(title, "Delete this channel?");
        assert!(body.contains("#random"));
        assert_eq!(dialog.confirm(), DialogAction::DeleteChannel(ChannelId::new("c2")));
    }
}
