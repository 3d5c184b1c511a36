//! Dialog rendering orchestration

use eframe::egui;

use super::ChatApp;
use crate::protocol::BackendAction;
use crate::ui;
use crate::ui::dialogs::DialogAction;

impl ChatApp {
    /// Render all dialogs and handle their actions
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Floating status toasts (top-right corner)
        ui::dialogs::render_status_toasts(ctx, &self.state.status_messages, &self.theme);

        for action in self.dialogs.render(ctx) {
            self.handle_dialog_action(action);
        }
    }

    /// Handle dialog actions by sending appropriate backend commands
    fn handle_dialog_action(&mut self, action: DialogAction) {
        match action {
            DialogAction::CreateChannel(name) => {
                self.send([BackendAction::CreateChannel { name }]);
            }
            DialogAction::RenameChannel { id, name } => {
                self.send([BackendAction::RenameChannel { id, name }]);
            }
            DialogAction::DeleteChannel(id) => {
                self.send([BackendAction::DeleteChannel(id)]);
            }
            DialogAction::RenameWorkspace(name) => {
                self.send([BackendAction::RenameWorkspace { name }]);
            }
            DialogAction::DeleteMessage(id) => {
                if self.state.editing.as_ref() == Some(&id) {
                    self.state.stop_editing();
                }
                self.send([BackendAction::DeleteMessage(id)]);
            }
        }
    }
}
