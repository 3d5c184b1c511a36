//! Modal dialogs and windows - self-contained dialog components.
//!
//! Each dialog owns its editing state and returns `DialogAction`s
//! instead of mutating external state directly. Dialogs are stored as
//! `Option<Dialog>` in the `DialogManager`: `None` is closed.

mod actions;
mod channel_name;
mod delete_confirm;
mod help;
mod preferences;
mod status_toasts;

pub use actions::DialogAction;
pub use channel_name::{ChannelNameDialog, ChannelNameMode};
pub use delete_confirm::{DeleteConfirmDialog, DeleteSubject};
pub use help::HelpDialog;
pub use preferences::PreferencesDialog;
pub use status_toasts::render_status_toasts;
