//! Shared helpers for dispatch integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderName, HeaderValue, Method, Request, Response};
use http_app_router::{AppConfig, BoxError, HttpClient, ResponseWriter, UpstreamRequest};

type Handler = Box<dyn Fn(&UpstreamRequest) -> Result<Response<Bytes>, BoxError> + Send + Sync>;

/// Scripted [`HttpClient`] that records every outbound request.
pub struct MockClient {
    handler: Handler,
    calls: Mutex<Vec<UpstreamRequest>>,
}

impl MockClient {
    pub fn with(
        handler: impl Fn(&UpstreamRequest) -> Result<Response<Bytes>, BoxError>
            + Send
            + Sync
            + 'static,
    ) -> Arc<MockClient> {
        Arc::new(MockClient {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Always answer with the given status and body.
    pub fn ok(status: u16, body: &'static str) -> Arc<MockClient> {
        Self::with(move |_| Ok(response(status, body, &[])))
    }

    /// Always fail with a fresh I/O error of the given kind.
    pub fn failing(kind: std::io::ErrorKind) -> Arc<MockClient> {
        Self::with(move |_| Err(Box::new(std::io::Error::new(kind, "upstream unreachable"))))
    }

    /// Outbound requests seen so far.
    pub fn calls(&self) -> Vec<UpstreamRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn send(&self, request: UpstreamRequest) -> Result<Response<Bytes>, BoxError> {
        let result = (self.handler)(&request);
        self.calls.lock().unwrap().push(request);
        result
    }
}

/// [`ResponseWriter`] that captures every relayed response.
#[derive(Default)]
pub struct CaptureWriter {
    pub writes: Vec<Response<Bytes>>,
}

#[async_trait]
impl ResponseWriter for CaptureWriter {
    async fn write_response(&mut self, response: Response<Bytes>) {
        self.writes.push(response);
    }
}

/// Build an upstream response with extra headers.
pub fn response(status: u16, body: &str, headers: &[(&str, &str)]) -> Response<Bytes> {
    let mut response = Response::new(Bytes::from(body.to_string()));
    *response.status_mut() = http::StatusCode::from_u16(status).unwrap();
    for (name, value) in headers {
        response.headers_mut().append(
            name.parse::<HeaderName>().unwrap(),
            value.parse::<HeaderValue>().unwrap(),
        );
    }
    response
}

/// Build an inbound request.
pub fn request(method: Method, path: &str, headers: &[(&str, &str)]) -> Request<Bytes> {
    let mut builder = Request::builder().method(method).uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Bytes::new()).unwrap()
}

pub fn get(path: &str) -> Request<Bytes> {
    request(Method::GET, path, &[])
}

/// Parse application definitions from JSON, the shape callers feed in.
pub fn apps(json: &str) -> Vec<AppConfig> {
    serde_json::from_str(json).unwrap()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
