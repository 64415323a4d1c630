//! Static file server that sends cross-origin isolation headers.
//!
//! Every response carries `Cross-Origin-Embedder-Policy: require-corp` and
//! `Cross-Origin-Opener-Policy: same-origin`, which browsers require before
//! enabling `SharedArrayBuffer` for a page.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
