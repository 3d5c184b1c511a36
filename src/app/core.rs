//! Core ChatApp struct definition and initialization

use std::thread;
use std::time::Duration;

use chrono::Utc;
use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use tracing::{info, warn};

use crate::backend::{run_backend, seed, BackendConfig, ChatStore};
use crate::config::{save_settings, Settings, DEFAULT_DISPLAY_NAME};
use crate::dialog_manager::DialogManager;
use crate::input_state::InputState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;
use crate::ui::theme::{apply_app_style, ChatTheme};
use crate::validation;

/// Name of the demo workspace the embedded backend serves.
const WORKSPACE_NAME: &str = "Acme";

pub struct ChatApp {
    // Core state (workspace, open feeds, toasts)
    pub state: ClientState,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Composer and inline editor drafts
    pub input: InputState,

    // Dialogs - managed centrally by DialogManager
    pub dialogs: DialogManager,

    // Persisted preferences, written back on exit
    pub settings: Settings,
    pub theme: ChatTheme,

    // UI visibility toggles
    pub show_sidebar: bool,
}

/// Backend tunables derived from the user's settings.
pub fn backend_config(settings: &Settings) -> BackendConfig {
    let viewer_name = validation::validate_display_name(&settings.display_name).unwrap_or_else(|e| {
        warn!(name = %settings.display_name, "ignoring display name: {}", e);
        DEFAULT_DISPLAY_NAME.to_string()
    });
    BackendConfig {
        page_size: settings.effective_page_size(),
        latency: Duration::from_millis(settings.latency_ms),
        viewer_name,
    }
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        let mut store = ChatStore::new(WORKSPACE_NAME);
        if let Err(e) = seed::seed(&mut store, Utc::now()) {
            warn!("failed to seed demo workspace: {}", e);
        }
        let config = backend_config(&settings);
        info!(page_size = config.page_size, latency = ?config.latency, "starting backend");

        // Spawn the backend thread
        thread::spawn(move || {
            run_backend(action_rx, event_tx, store, config);
        });

        let theme = ChatTheme::from_setting(&settings.theme);
        apply_app_style(&cc.egui_ctx, &theme);

        Self {
            state: ClientState::with_preferred_channel(settings.last_channel.clone()),
            action_tx,
            event_rx,
            input: InputState::new(),
            dialogs: DialogManager::new(),
            settings,
            theme,
            show_sidebar: true,
        }
    }

    /// Forward actions to the backend thread.
    pub(super) fn send(&self, actions: impl IntoIterator<Item = BackendAction>) {
        for action in actions {
            if self.action_tx.send(action).is_err() {
                warn!("backend is gone, dropping action");
                return;
            }
        }
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        let next = if self.settings.theme == "light" {
            "dark"
        } else {
            "light"
        };
        self.settings.theme = next.to_string();
        self.theme = ChatTheme::from_setting(next);
        apply_app_style(ctx, &self.theme);
    }
}

impl Drop for ChatApp {
    fn drop(&mut self) {
        let mut actions = self.state.close_all();
        actions.push(BackendAction::Shutdown);
        self.send(actions);

        // Persist settings on exit
        if let Some(channel) = self.state.active_channel() {
            self.settings.last_channel = Some(channel.name.clone());
        }
        if let Err(e) = save_settings(&self.settings) {
            warn!("Failed to save settings: {}", e);
        }
    }
}
