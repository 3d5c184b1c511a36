//! Application module structure for ChatApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: ChatApp struct and initialization
//! - `events`: Event processing from backend
//! - `update`: Main update loop and global shortcuts
//! - `dialogs`: Dialog rendering orchestration
//! - `ui::panels`: Central feed and thread panel rendering
//! - `ui::input`: Message composers

pub mod core;
pub mod dialogs;
pub mod events;
pub mod ui;
pub mod update;

// Re-export ChatApp for public API
pub use core::ChatApp;
