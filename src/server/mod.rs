// Server module entry point
// Listener setup, connection handling, and shutdown signals.

pub mod connection;
pub mod listener;
pub mod signal;

// Re-export commonly used functions
pub use connection::handle_connection;
pub use listener::create_listener;
pub use signal::wait_for_shutdown;
