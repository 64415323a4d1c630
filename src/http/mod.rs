//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from file resolution.

pub mod date;
pub mod mime;
pub mod path;
pub mod response;

// Re-export commonly used types
pub use path::{sanitize, SanitizedPath};
pub use response::{
    build_404_response, build_500_response, build_file_response, build_redirect_response,
};
