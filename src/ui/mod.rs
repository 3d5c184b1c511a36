//! UI rendering modules for the chat client.
//!
//! This module contains all egui-based UI rendering code, organized by component:
//! - `panels`: Workspace sidebar (channels and direct messages)
//! - `messages`: Feed rendering
//! - `dialogs`: Modal dialogs (help, create channel, delete confirmation)
//! - `theme`: Color schemes and styling utilities

pub mod dialogs;
pub mod messages;
pub mod panels;
pub mod theme;
