//! Backend main event loop: drains UI actions and publishes feed pages.

pub mod handlers;
pub mod state;

pub use state::BackendConfig;

use crate::backend::store::ChatStore;
use crate::protocol::{BackendAction, GuiEvent};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use state::BackendState;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tracing::info;

/// Run the backend event loop on a tokio runtime
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
    store: ChatStore,
    config: BackendConfig,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let mut state = BackendState::new(store, config);
        info!(viewer = %state.viewer.name, "backend session ready");
        let _ = event_tx.send(GuiEvent::Session {
            workspace: state.store.workspace().clone(),
            viewer: state.viewer.clone(),
            members: state.store.members().to_vec(),
            channels: state.store.channels().to_vec(),
        });

        loop {
            // Check for actions from the UI (non-blocking)
            loop {
                match action_rx.try_recv() {
                    Ok(action) => {
                        if !handlers::handle_backend_action(
                            action,
                            &mut state,
                            &event_tx,
                            Instant::now(),
                        ) {
                            return;
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        info!("UI channel closed, backend exiting");
                        return;
                    }
                }
            }

            handlers::publish_due(&mut state, &event_tx, Instant::now());

            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    });
}
