//! Event processing from backend

use super::ChatApp;
use crate::events;

impl ChatApp {
    /// Drain backend events into the client state and forward the
    /// subscriptions they imply.
    pub fn process_events(&mut self) {
        let actions = events::process_events(&self.event_rx, &mut self.state);
        self.send(actions);
    }
}
