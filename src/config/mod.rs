// Configuration module entry point
// Holds the compiled-in server configuration and the shared runtime state

mod state;
mod types;

use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::{Config, FilesConfig, PerformanceConfig, ServerConfig};

/// IPv6 wildcard; the listener binds it dual-stack.
pub const DEFAULT_HOST: &str = "::";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Directory the server was built from; files are served out of it.
pub const DEFAULT_ROOT: &str = env!("CARGO_MANIFEST_DIR");

impl Config {
    /// Build the configuration from compiled-in defaults.
    ///
    /// No file or environment source is consulted: port, directory and
    /// headers are fixed when the binary is built.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("files.root", DEFAULT_ROOT)?
            .set_default("files.index_file", DEFAULT_INDEX_FILE)?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.header_read_timeout", 60)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ServerError::InvalidAddress(self.server.host.clone()))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Address announced in the startup message
    pub fn public_url(&self) -> String {
        format!("http://localhost:{}", self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.server.host, "::");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.files.root, env!("CARGO_MANIFEST_DIR"));
        assert_eq!(cfg.files.index_file, "index.html");
        assert!(cfg.performance.keep_alive);
        assert_eq!(cfg.performance.header_read_timeout, 60);
    }

    #[test]
    fn test_socket_addr_all_interfaces() {
        let cfg = Config::load().unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert!(addr.is_ipv6());
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8080);
        assert_eq!(addr.to_string(), "[::]:8080");
    }

    #[test]
    fn test_socket_addr_ipv4_host() {
        let mut cfg = Config::load().unwrap();
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 0;
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:0");
    }

    #[test]
    fn test_public_url() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.public_url(), "http://localhost:8080");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let mut cfg = Config::load().unwrap();
        cfg.server.host = "not an address".to_string();
        assert!(matches!(
            cfg.socket_addr(),
            Err(ServerError::InvalidAddress(_))
        ));
    }
}
