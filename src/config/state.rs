// Application state module
// Shared, read-only state handed to every connection task

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::ServerError;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Canonical form of `config.files.root`, resolved once at startup
    pub root: PathBuf,
}

impl AppState {
    /// Create `AppState`, checking that the served root exists and is a directory
    pub fn new(config: Config) -> Result<Self, ServerError> {
        let configured = Path::new(&config.files.root);
        let root = configured
            .canonicalize()
            .map_err(|source| ServerError::Root {
                path: configured.to_path_buf(),
                source,
            })?;

        if !root.is_dir() {
            return Err(ServerError::Root {
                path: root,
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "not a directory",
                ),
            });
        }

        Ok(Self { config, root })
    }

    pub fn index_file(&self) -> &str {
        &self.config.files.index_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_root(root: &Path) -> Config {
        let mut cfg = Config::load().unwrap();
        cfg.files.root = root.to_string_lossy().into_owned();
        cfg
    }

    #[test]
    fn test_root_is_canonicalized() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site");
        std::fs::create_dir(&nested).unwrap();

        let state = AppState::new(config_with_root(&nested.join("..").join("site"))).unwrap();
        assert_eq!(state.root, nested.canonicalize().unwrap());
        assert_eq!(state.index_file(), "index.html");
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppState::new(config_with_root(&dir.path().join("absent")));
        assert!(matches!(result, Err(ServerError::Root { .. })));
    }

    #[test]
    fn test_file_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");
        std::fs::write(&file, "<html></html>").unwrap();
        let result = AppState::new(config_with_root(&file));
        assert!(matches!(result, Err(ServerError::Root { .. })));
    }
}
