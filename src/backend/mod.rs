/// Reference backend running on its own thread
///
/// - `store`: in-memory documents and the feed queries over them
/// - `seed`: demo workspace loaded at startup
/// - `main_loop`: action loop, subscriptions and simulated latency
mod main_loop;
pub mod seed;
pub mod store;

pub use main_loop::{run_backend, BackendConfig};
pub use store::{ChatStore, FeedWindow};
