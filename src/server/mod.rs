// Server module entry point
// Binds the listener and runs the accept loop

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the module gets a different name
#[path = "loop.rs"]
pub mod server_loop;


// Re-export commonly used items
pub use listener::create_listener;
pub use server_loop::run;
