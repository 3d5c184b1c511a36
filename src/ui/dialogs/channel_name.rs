//! Channel name dialog - name input with live normalization, used both to
//! create a channel and to rename one.

use eframe::egui;

use super::DialogAction;
use crate::model::ChannelId;
use crate::validation;

/// What submitting the dialog does.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelNameMode {
    Create,
    Rename(ChannelId),
}

/// Self-contained channel name dialog state.
pub struct ChannelNameDialog {
    pub open: bool,
    pub mode: ChannelNameMode,
    /// The name as shown in the field, already normalized
    pub name_input: String,
    error: Option<String>,
}

impl ChannelNameDialog {
    pub fn create() -> Self {
        Self {
            open: true,
            mode: ChannelNameMode::Create,
            name_input: String::new(),
            error: None,
        }
    }

    /// Rename `id`, starting from its current name.
    pub fn rename(id: ChannelId, current: &str) -> Self {
        Self {
            open: true,
            mode: ChannelNameMode::Rename(id),
            name_input: current.to_string(),
            error: None,
        }
    }

    /// Normalize the field as the user types: spaces become dashes and
    /// letters are lowercased.
    pub fn set_input(&mut self, text: &str) {
        self.name_input = validation::normalize_channel_name(text);
        self.error = None;
    }

    /// Validate and, on success, close the dialog with the mode's action.
    pub fn submit(&mut self) -> Option<DialogAction> {
        match validation::validate_channel_name(&self.name_input) {
            Ok(name) => {
                self.open = false;
                Some(match &self.mode {
                    ChannelNameMode::Create => DialogAction::CreateChannel(name),
                    ChannelNameMode::Rename(id) => DialogAction::RenameChannel {
                        id: id.clone(),
                        name,
                    },
                })
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn labels(&self) -> (&'static str, &'static str) {
        match self.mode {
            ChannelNameMode::Create => ("Add a channel", "Create"),
            ChannelNameMode::Rename(_) => ("Rename this channel", "Save"),
        }
    }

    /// Render the dialog. Returns an action once the name is accepted.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action: Option<DialogAction> = None;
        let mut still_open = true;
        let (title, confirm) = self.labels();

        egui::Window::new(title)
            .open(&mut still_open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let mut text = self.name_input.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .hint_text("e.g. plan-budget")
                        .char_limit(validation::CHANNEL_NAME_MAX)
                        .desired_width(280.0),
                );
                if response.changed() {
                    self.set_input(&text);
                }
                response.request_focus();

                if let Some(error) = &self.error {
                    ui.colored_label(egui::Color32::from_rgb(240, 71, 71), error);
                }

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button(confirm).clicked() {
                        action = self.submit();
                    }
                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });

                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = self.submit();
                }
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.open = false;
                }
            });

        if !still_open {
            self.open = false;
        }

        action
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
