//! Color themes and styling utilities for the chat client.

pub mod colors;
pub mod style;
pub mod widgets;

pub use colors::{member_color, ChatTheme};
pub use style::{apply_app_style, STYLE_AUTHOR, STYLE_SECTION_HEADER, STYLE_TIMESTAMP};
pub use widgets::{avatar_initial, render_avatar};
