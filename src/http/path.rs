//! Request path sanitizing module
//!
//! Turns the path component of a request URI into a path relative to the
//! served root, refusing anything that could step outside of it.

use std::path::{Component, Path, PathBuf};

/// Outcome of sanitizing a URL path
#[derive(Debug, PartialEq, Eq)]
pub enum SanitizedPath {
    /// Path relative to the root; empty for the root itself
    Relative(PathBuf),
    /// A `..` segment tried to climb out of the root
    Traversal,
    /// Undecodable, hidden, or otherwise not servable
    Rejected,
}

/// Sanitize a URL path segment by segment.
///
/// Segments are percent-decoded first, so `%2e%2e` counts as `..` and an
/// encoded `/` cannot smuggle in an extra path level. Empty and `.`
/// segments are dropped and `..` removes the previous segment; only a `..`
/// with nothing left to remove is a traversal. Segments starting with `.`
/// (dotfiles) are rejected.
pub fn sanitize(path: &str) -> SanitizedPath {
    let mut relative = PathBuf::new();

    for segment in path.split('/') {
        let Some(decoded) = percent_decode(segment) else {
            return SanitizedPath::Rejected;
        };

        match decoded.as_str() {
            "" | "." => {}
            ".." => {
                if !relative.pop() {
                    return SanitizedPath::Traversal;
                }
            }
            s if s.starts_with('.') || s.contains(['/', '\\', '\0']) => {
                return SanitizedPath::Rejected;
            }
            s => {
                // Anything that is not a single plain component (drive
                // prefixes, root markers) is refused outright.
                let mut components = Path::new(s).components();
                match (components.next(), components.next()) {
                    (Some(Component::Normal(_)), None) => relative.push(s),
                    _ => return SanitizedPath::Rejected,
                }
            }
        }
    }

    SanitizedPath::Relative(relative)
}

/// Decode `%XX` escapes; `None` on a malformed escape or non-UTF-8 result
fn percent_decode(segment: &str) -> Option<String> {
    if !segment.contains('%') {
        return Some(segment.to_string());
    }

    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            let hex = std::str::from_utf8(hex).ok()?;
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative(p: &str) -> SanitizedPath {
        SanitizedPath::Relative(PathBuf::from(p))
    }

    #[test]
    fn test_plain_paths() {
        assert_eq!(sanitize("/"), relative(""));
        assert_eq!(sanitize("/app.js"), relative("app.js"));
        assert_eq!(sanitize("/pkg/module.wasm"), relative("pkg/module.wasm"));
    }

    #[test]
    fn test_empty_and_dot_segments_dropped() {
        assert_eq!(sanitize("//pkg/./module.wasm"), relative("pkg/module.wasm"));
        assert_eq!(sanitize("/pkg/"), relative("pkg"));
    }

    #[test]
    fn test_parent_segments_inside_root_resolve() {
        assert_eq!(sanitize("/pkg/../index.html"), relative("index.html"));
        assert_eq!(sanitize("/pkg/wasm/../../app.js"), relative("app.js"));
        assert_eq!(sanitize("/pkg/%2e%2e/app.js"), relative("app.js"));
        assert_eq!(sanitize("/pkg/.."), relative(""));
    }

    #[test]
    fn test_parent_segments_above_root_are_traversal() {
        assert_eq!(sanitize("/../../etc/passwd"), SanitizedPath::Traversal);
        assert_eq!(sanitize("/pkg/../../etc/passwd"), SanitizedPath::Traversal);
        assert_eq!(sanitize("/%2e%2e/etc/passwd"), SanitizedPath::Traversal);
        assert_eq!(sanitize("/%2E%2E/etc/passwd"), SanitizedPath::Traversal);
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(sanitize("/my%20file.txt"), relative("my file.txt"));
        assert_eq!(sanitize("/caf%C3%A9.html"), relative("café.html"));
    }

    #[test]
    fn test_rejected_segments() {
        assert_eq!(sanitize("/.env"), SanitizedPath::Rejected);
        assert_eq!(sanitize("/.git/config"), SanitizedPath::Rejected);
        assert_eq!(sanitize("/a%2F..%2Fb"), SanitizedPath::Rejected);
        assert_eq!(sanitize("/a%5Cb"), SanitizedPath::Rejected);
        assert_eq!(sanitize("/a%00b"), SanitizedPath::Rejected);
        assert_eq!(sanitize("/bad%zz"), SanitizedPath::Rejected);
        assert_eq!(sanitize("/trailing%2"), SanitizedPath::Rejected);
        assert_eq!(sanitize("/sign%+1"), SanitizedPath::Rejected);
        assert_eq!(sanitize("/%ff%fe"), SanitizedPath::Rejected);
    }
}
