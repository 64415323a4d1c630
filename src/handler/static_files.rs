//! Static file serving module
//!
//! Resolves a request path against the served root, loads the matching file,
//! and builds the response.

use crate::config::AppState;
use crate::error::ResolveError;
use crate::handler::router::RequestContext;
use crate::http::{self, date, mime, SanitizedPath};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;

/// A file resolved under the root and read into memory
#[derive(Debug)]
pub struct StaticFile {
    /// Canonical location on disk
    pub path: PathBuf,
    pub content: Bytes,
    pub content_type: &'static str,
    pub modified: Option<SystemTime>,
}

/// Outcome of resolving a request path
#[derive(Debug)]
pub enum Resolution {
    File(StaticFile),
    /// Directory requested without a trailing slash; holds the `Location`
    Redirect(String),
}

/// Serve the file matching the request path
pub async fn serve(ctx: &RequestContext, state: &AppState) -> Response<Full<Bytes>> {
    match resolve(&state.root, state.index_file(), &ctx.path).await {
        Ok(Resolution::File(file)) => {
            let last_modified = file.modified.map(date::format_http_date);
            http::build_file_response(
                file.content,
                file.content_type,
                last_modified.as_deref(),
                ctx.is_head,
            )
        }
        Ok(Resolution::Redirect(mut location)) => {
            if let Some(query) = &ctx.query {
                location.push('?');
                location.push_str(query);
            }
            http::build_redirect_response(&location, ctx.is_head)
        }
        Err(err) => {
            match &err {
                // Routine, not worth a log line
                ResolveError::NotFound => {}
                ResolveError::Traversal(_) => logger::log_warning(&err.to_string()),
                ResolveError::Read { .. } => logger::log_error(&err.to_string()),
            }

            if err.status() == 500 {
                http::build_500_response(ctx.is_head)
            } else {
                http::build_404_response(ctx.is_head)
            }
        }
    }
}

/// Resolve `request_path` under `root` (which must already be canonical)
///
/// A directory named without a trailing slash redirects to the slashed
/// form, so relative links in its index resolve against the directory.
/// Otherwise directories fall back to `index_file`. Only regular files
/// whose canonical location is still inside `root` are returned.
pub async fn resolve(
    root: &Path,
    index_file: &str,
    request_path: &str,
) -> Result<Resolution, ResolveError> {
    let relative = match http::sanitize(request_path) {
        SanitizedPath::Relative(relative) => relative,
        SanitizedPath::Traversal => {
            return Err(ResolveError::Traversal(request_path.to_string()));
        }
        SanitizedPath::Rejected => return Err(ResolveError::NotFound),
    };

    let mut file_path = root.join(relative);
    let mut metadata = stat(&file_path).await?;

    if metadata.is_dir() {
        if !request_path.ends_with('/') {
            return Ok(Resolution::Redirect(directory_location(request_path)));
        }
        file_path.push(index_file);
        metadata = stat(&file_path).await?;
    }

    if !metadata.is_file() {
        return Err(ResolveError::NotFound);
    }

    // Symlinks are followed only as long as they stay inside the root
    let canonical = fs::canonicalize(&file_path)
        .await
        .map_err(|e| classify_io_error(&file_path, e))?;
    if !canonical.starts_with(root) {
        return Err(ResolveError::Traversal(format!(
            "{request_path} -> {}",
            canonical.display()
        )));
    }

    let content = fs::read(&canonical)
        .await
        .map_err(|source| ResolveError::Read {
            path: canonical.clone(),
            source,
        })?;

    Ok(Resolution::File(StaticFile {
        content_type: mime::content_type_for(&file_path),
        content: Bytes::from(content),
        modified: metadata.modified().ok(),
        path: canonical,
    }))
}

/// `request_path` with a trailing slash and a single leading one, so the
/// redirect can never become a protocol-relative `//host` URL
fn directory_location(request_path: &str) -> String {
    let trimmed = request_path.trim_start_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

async fn stat(path: &Path) -> Result<Metadata, ResolveError> {
    fs::metadata(path)
        .await
        .map_err(|e| classify_io_error(path, e))
}

/// Missing entries and names no file could have are a plain miss; anything
/// else on a matched path is a read failure
fn classify_io_error(path: &Path, err: std::io::Error) -> ResolveError {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::InvalidFilename => {
            ResolveError::NotFound
        }
        _ => ResolveError::Read {
            path: path.to_path_buf(),
            source: err,
        },
    }
}
