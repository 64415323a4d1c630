//! Request dispatch module
//!
//! Entry point for HTTP request processing. Every request runs the same
//! fixed chain: the isolation-header step, then static-file resolution.

use crate::config::AppState;
use crate::handler::{isolation, static_files};
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub path: String,
    pub query: Option<String>,
    pub is_head: bool,
}

impl RequestContext {
    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self {
            path: req.uri().path().to_string(),
            query: req.uri().query().map(ToString::to_string),
            is_head: req.method() == Method::HEAD,
        }
    }
}

/// Main entry point for HTTP request handling
///
/// The body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // 1. Isolation headers, fixed before anything else runs
    let headers = isolation::isolation_headers();

    // 2. Static files; other methods have no handler to fall through to
    let ctx = RequestContext::from_request(&req);
    let is_static = matches!(*req.method(), Method::GET | Method::HEAD);
    drop(req);

    let mut response = if is_static {
        static_files::serve(&ctx, &state).await
    } else {
        http::build_404_response(false)
    };

    response.headers_mut().extend(headers);
    Ok(response)
}
