//! Dialog management for centralized dialog state and rendering.
//!
//! Which modal is open lives here, in one struct owned by the app, rather
//! than in scattered flags.

use eframe::egui::Context;

use crate::model::{Channel, MessageId};
use crate::ui::dialogs::{
    ChannelNameDialog, DeleteConfirmDialog, DeleteSubject, DialogAction, HelpDialog,
    PreferencesDialog,
};

/// Manages all application dialogs in one place.
///
/// Uses the Option<Dialog> pattern where None = closed, Some = open.
#[derive(Default)]
pub struct DialogManager {
    pub help_dialog: HelpDialog,
    pub channel_name_dialog: Option<ChannelNameDialog>,
    pub delete_confirm_dialog: Option<DeleteConfirmDialog>,
    pub preferences_dialog: Option<PreferencesDialog>,
}

impl DialogManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create_channel(&mut self) {
        self.channel_name_dialog = Some(ChannelNameDialog::create());
    }

    pub fn open_rename_channel(&mut self, channel: &Channel) {
        self.channel_name_dialog = Some(ChannelNameDialog::rename(channel.id.clone(), &channel.name));
    }

    /// Ask for confirmation before deleting `message`.
    pub fn confirm_delete(&mut self, message: MessageId) {
        self.delete_confirm_dialog = Some(DeleteConfirmDialog::new(DeleteSubject::Message(message)));
    }

    /// Ask for confirmation before deleting a whole channel.
    pub fn confirm_delete_channel(&mut self, channel: &Channel) {
        self.delete_confirm_dialog = Some(DeleteConfirmDialog::new(DeleteSubject::Channel {
            id: channel.id.clone(),
            name: channel.name.clone(),
        }));
    }

    pub fn open_preferences(&mut self, workspace_name: &str) {
        self.preferences_dialog = Some(PreferencesDialog::new(workspace_name));
    }

    pub fn toggle_help(&mut self) {
        self.help_dialog.toggle();
    }

    /// Whether a modal that should swallow keyboard shortcuts is open.
    pub fn any_modal_open(&self) -> bool {
        self.channel_name_dialog.is_some()
            || self.delete_confirm_dialog.is_some()
            || self.preferences_dialog.is_some()
    }

    /// Render all dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context) -> Vec<DialogAction> {
        let mut actions: Vec<DialogAction> = Vec::new();

        self.help_dialog.render(ctx);

        if let Some(dialog) = self.preferences_dialog.as_mut() {
            actions.extend(dialog.render(ctx));
            if !dialog.is_open() {
                self.preferences_dialog = None;
            }
        }

        if let Some(dialog) = self.channel_name_dialog.as_mut() {
            actions.extend(dialog.render(ctx));
            if !dialog.is_open() {
                self.channel_name_dialog = None;
            }
        }

        if let Some(dialog) = self.delete_confirm_dialog.as_mut() {
            actions.extend(dialog.render(ctx));
            if !dialog.is_open() {
                self.delete_confirm_dialog = None;
            }
        }

        actions
    }
}
