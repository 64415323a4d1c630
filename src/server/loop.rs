// Server loop module
// Accepts connections for the lifetime of the process

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::spawn_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections forever, handing each one to its own task.
///
/// Accept failures (e.g. running out of file descriptors) are logged and
/// the loop keeps going; there is no shutdown path.
pub async fn run(listener: TcpListener, state: Arc<AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                if let Err(e) = stream.set_nodelay(true) {
                    logger::log_warning(&format!("Failed to set TCP_NODELAY: {e}"));
                }
                spawn_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
