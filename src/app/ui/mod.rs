//! Panels rendered directly by the app.

pub mod input;
pub mod panels;
