//! Upstream HTTP client boundary.
//!
//! # Responsibilities
//! - Define the client capability the dispatcher forwards through
//! - Provide a reqwest-backed default implementation
//!
//! # Design Decisions
//! - Transport failures surface the client's native error unmodified; the
//!   dispatcher classifies but never translates them
//! - The default client never follows redirects, so upstream redirects
//!   relay to the caller like any other response

use async_trait::async_trait;
use bytes::Bytes;
use http::Response;

use crate::error::BoxError;
use crate::http::request::UpstreamRequest;

/// Capability to perform one outbound HTTP call.
///
/// Implementations must be safe to share across concurrent dispatches.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform the call, yielding the full upstream response or the
    /// transport error as it occurred (DNS, connect, timeout, reset).
    async fn send(&self, request: UpstreamRequest) -> Result<Response<Bytes>, BoxError>;
}

/// Default [`HttpClient`] backed by [`reqwest`].
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client suitable for relaying: redirects disabled.
    pub fn new() -> Result<ReqwestClient, BoxError> {
        let inner = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(ReqwestClient { inner })
    }
}

impl From<reqwest::Client> for ReqwestClient {
    fn from(inner: reqwest::Client) -> Self {
        ReqwestClient { inner }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: UpstreamRequest) -> Result<Response<Bytes>, BoxError> {
        let UpstreamRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let upstream = self
            .inner
            .request(method, url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = upstream.status();
        let headers = upstream.headers().clone();
        let body = upstream.bytes().await?;

        let mut response = Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}
