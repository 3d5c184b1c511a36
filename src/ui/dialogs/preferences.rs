//! Workspace preferences window.

use eframe::egui;

use super::DialogAction;
use crate::validation;

pub struct PreferencesDialog {
    pub open: bool,
    /// Name shown while not editing
    current: String,
    /// `Some` while the name field is being edited
    pub name_input: Option<String>,
    error: Option<String>,
}

impl PreferencesDialog {
    pub fn new(workspace_name: &str) -> Self {
        Self {
            open: true,
            current: workspace_name.to_string(),
            name_input: None,
            error: None,
        }
    }

    pub fn start_editing(&mut self) {
        self.name_input = Some(self.current.clone());
        self.error = None;
    }

    pub fn cancel_editing(&mut self) {
        self.name_input = None;
        self.error = None;
    }

    /// Validate the edited name. An unchanged name just leaves edit mode.
    pub fn submit(&mut self) -> Option<DialogAction> {
        let input = self.name_input.as_deref()?;
        match validation::validate_workspace_name(input) {
            Ok(name) => {
                self.name_input = None;
                if name == self.current {
                    return None;
                }
                self.current = name.clone();
                Some(DialogAction::RenameWorkspace(name))
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

    pub fn render(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action = None;
        let mut still_open = true;
        egui::Window::new(self.current.clone())
            .id(egui::Id::new("workspace_preferences"))
            .open(&mut still_open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Workspace name").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.name_input.is_none() && ui.link("Edit").clicked() {
                            self.start_editing();
                        }
                    });
                });

                let mut cancel = false;
                if let Some(mut input) = self.name_input.clone() {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut input)
                            .char_limit(validation::WORKSPACE_NAME_MAX)
                            .desired_width(280.0),
                    );
                    if response.changed() {
                        self.error = None;
                    }
                    self.name_input = Some(input);
                    response.request_focus();
                    if let Some(error) = &self.error {
                        ui.colored_label(egui::Color32::from_rgb(240, 71, 71), error);
                    }
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            action = self.submit();
                        }
                        if ui.button("Cancel").clicked() {
                            cancel = true;
                        }
                    });
                    if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        action = self.submit();
                    }
                } else {
                    ui.label(self.current.as_str());
                }

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    if self.name_input.is_some() {
                        cancel = true;
                    } else {
                        self.open = false;
                    }
                }
                if cancel {
                    self.cancel_editing();
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
