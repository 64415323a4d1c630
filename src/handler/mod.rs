//! Request handler module
//!
//! Runs the per-request steps: cross-origin isolation headers, then static file serving.

pub mod isolation;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
