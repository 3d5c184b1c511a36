//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::ChatApp;
use crate::ui::panels::{render_sidebar, SidebarAction};

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process backend events
        self.process_events();

        // Global keyboard shortcuts (work even when input doesn't have focus)
        let (help, sidebar, theme, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F1),
                i.modifiers.ctrl && i.key_pressed(egui::Key::B),
                i.modifiers.ctrl && i.modifiers.shift && i.key_pressed(egui::Key::L),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if help {
            self.dialogs.toggle_help();
        }
        if sidebar {
            self.show_sidebar = !self.show_sidebar;
        }
        if theme {
            self.toggle_theme(ctx);
        }
        // Esc cancels an edit first, then closes the thread panel
        if escape && !self.dialogs.any_modal_open() {
            if self.state.editing.is_some() {
                self.state.stop_editing();
            } else {
                let close = self.state.close_thread();
                self.send(close);
            }
        }

        // Pages arrive on the backend's schedule, keep polling
        ctx.request_repaint_after(Duration::from_millis(100));
        // Purge old status messages (toasts) older than 4 seconds
        self.state.purge_old_status_messages(4);

        if self.show_sidebar {
            if let Some(action) = render_sidebar(ctx, &self.state, &self.theme) {
                self.handle_sidebar_action(action);
            }
        }

        // Right panel: open thread
        self.render_thread_panel(ctx);

        // Bottom panel: composer for the active feed
        self.render_input_panel(ctx);

        // Central panel: active channel or conversation
        self.render_central_panel(ctx);

        self.render_dialogs(ctx);
    }
}

impl ChatApp {
    fn handle_sidebar_action(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::OpenChannel(id) => {
                let actions = self.state.open_channel(&id);
                self.send(actions);
            }
            SidebarAction::OpenMember(member) => {
                self.send([crate::protocol::BackendAction::OpenConversation(member)]);
            }
            SidebarAction::CreateChannel => self.dialogs.open_create_channel(),
            SidebarAction::OpenPreferences => {
                if let Some(workspace) = &self.state.workspace {
                    self.dialogs.open_preferences(&workspace.name);
                }
            }
        }
    }
}
