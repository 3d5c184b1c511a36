//! Help window (F1) listing keyboard shortcuts.

use eframe::egui;

/// Key combination and what it does, in display order.
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("F1", "Toggle this window"),
    ("Ctrl+B", "Toggle the sidebar"),
    ("Ctrl+Shift+L", "Switch between light and dark theme"),
    ("Enter", "Send message"),
    ("Shift+Enter", "New line"),
    ("Esc", "Cancel an edit, then close the thread panel"),
];

#[derive(Default)]
pub struct HelpDialog {
    pub open: bool,
}

impl HelpDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether the window is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }

        egui::Window::new("Keyboard shortcuts")
            .open(&mut self.open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                egui::Grid::new("shortcut_grid")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for (keys, action) in SHORTCUTS {
                            ui.label(egui::RichText::new(*keys).monospace().strong());
                            ui.label(*action);
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(
                        "Older messages load as you scroll up. Hover a message to react, \
                         reply in a thread, edit or delete it.",
                    )
                    .small()
                    .weak(),
                );
            });

        self.open
    }
}
