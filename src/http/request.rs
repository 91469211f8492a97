//! Outbound request construction.
//!
//! # Responsibilities
//! - Build the upstream target URL from the matched application's origin
//! - Inject the application's configured headers
//! - Forward only whitelisted inbound cookies
//!
//! # Design Decisions
//! - No inbound header is forwarded unless configuration reintroduces it;
//!   this keeps arbitrary client headers from leaking upstream
//! - Construction cannot fail: everything fallible was resolved when the
//!   router was built

use std::collections::HashSet;

use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, Method, Request};
use url::Url;

use crate::routing::router::Application;

/// The request handed to the [`HttpClient`](crate::http::HttpClient)
/// collaborator.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl UpstreamRequest {
    /// Build the outbound request for a matched application.
    ///
    /// Target URL is the application origin plus the inbound path and query;
    /// method and body are copied unchanged.
    pub fn build(inbound: &Request<Bytes>, app: &Application) -> UpstreamRequest {
        let mut url = app.origin.clone();
        url.set_path(inbound.uri().path());
        url.set_query(inbound.uri().query());

        let mut headers = app.headers.clone();
        let cookie = whitelisted_cookies(inbound.headers(), &app.cookies);
        if !cookie.is_empty() {
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                headers.insert(header::COOKIE, value);
            }
        }

        UpstreamRequest {
            method: inbound.method().clone(),
            url,
            headers,
            body: inbound.body().clone(),
        }
    }
}

/// Collect the inbound `name=value` cookie pairs whose name is whitelisted,
/// joined with `"; "`. Empty when nothing survives the filter.
fn whitelisted_cookies(headers: &HeaderMap, allowed: &HashSet<String>) -> String {
    if allowed.is_empty() {
        return String::new();
    }

    let mut pairs = Vec::new();
    for value in headers.get_all(header::COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        for pair in raw.split(';') {
            let pair = pair.trim();
            let Some((name, _)) = pair.split_once('=') else {
                continue;
            };
            if allowed.contains(name.trim()) {
                pairs.push(pair.to_string());
            }
        }
    }
    pairs.join("; ")
}
