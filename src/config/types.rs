// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub performance: PerformanceConfig,
}

/// Listening address
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Served directory tree
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Root directory, resolved against the process working directory if relative
    pub root: String,
    /// Default document tried for directory requests
    pub index_file: String,
}

/// Per-connection behavior
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Seconds a client may take to send a complete request head
    pub header_read_timeout: u64,
}
