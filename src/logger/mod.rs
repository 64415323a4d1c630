//! Logger module
//!
//! Console logging for the server:
//! - the startup announcement on stdout
//! - warnings and errors on stderr, timestamped

use chrono::Local;

/// Write to info log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{} {message}", timestamp());
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// The single line printed once the listener is bound
pub fn startup_message(public_url: &str) -> String {
    format!("Server started on {public_url}")
}

pub fn log_server_start(public_url: &str) {
    write_info(&startup_message(public_url));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Report an error that terminates the process
pub fn log_fatal(err: &impl std::fmt::Display) {
    write_error(&format!("[FATAL] {err}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_message() {
        assert_eq!(
            startup_message("http://localhost:8080"),
            "Server started on http://localhost:8080"
        );
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        // 2026-01-01 00:00:00.000
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
    }
}
