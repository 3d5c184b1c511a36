//! Team Chat client library.
//!
//! This module re-exports the core components for testing and extension.
//! The feed core (time labels, grouping, pagination, composition) has no
//! UI dependency and can be driven directly.

pub mod app;
pub mod backend;
pub mod buffer;
pub mod config;
pub mod dialog_manager;
pub mod error;
pub mod events;
pub mod feed;
pub mod grouping;
pub mod input_state;
pub mod model;
pub mod pagination;
pub mod protocol;
pub mod rich_text;
pub mod state;
pub mod time_label;
pub mod ui;
pub mod validation;

mod backend_tests;
#[cfg(test)]
mod test_support;
