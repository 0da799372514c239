// Server module entry point
// TCP listener creation, per-connection serving, signals, and the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the file maps to a different module name
#[path = "loop.rs"]
pub mod accept_loop;

// Re-export commonly used entry points
pub use accept_loop::run_accept_loop;
pub use listener::create_reusable_listener;
pub use signal::{start_signal_handler, SignalHandler};
