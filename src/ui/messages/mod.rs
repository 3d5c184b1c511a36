//! Message feed rendering: rows, separators, reactions and the pagination edge.

mod format;
mod helpers;
mod render;

pub use render::{render_feed, render_thread_parent, FeedAction, FeedView};
