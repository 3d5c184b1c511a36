//! Side panel rendering (workspace sidebar).

pub mod sidebar;

pub use sidebar::{render_sidebar, SidebarAction};
