//! Cross-origin isolation headers
//!
//! Browsers only expose `SharedArrayBuffer` and high-resolution timers to
//! pages served with both of these headers.

use hyper::header::{HeaderMap, HeaderName, HeaderValue};

pub const CROSS_ORIGIN_EMBEDDER_POLICY: &str = "cross-origin-embedder-policy";
pub const CROSS_ORIGIN_OPENER_POLICY: &str = "cross-origin-opener-policy";

/// Set both isolation headers, replacing any previous values
pub fn apply_isolation_headers(headers: &mut HeaderMap) {
    headers.insert(
        HeaderName::from_static(CROSS_ORIGIN_EMBEDDER_POLICY),
        HeaderValue::from_static("require-corp"),
    );
    headers.insert(
        HeaderName::from_static(CROSS_ORIGIN_OPENER_POLICY),
        HeaderValue::from_static("same-origin"),
    );
}

/// Header set every response starts from
pub fn isolation_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2);
    apply_isolation_headers(&mut headers);
    headers
}
