//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Compile application definitions into their runtime form
//! - Look up the matching application for a path
//! - Drive a dispatch end to end: match → build → forward → transform → relay
//!
//! # Design Decisions
//! - Definitions are immutable after construction (thread-safe without locks)
//! - O(n) scan in list order; first matching application wins, even when a
//!   later one would match more specifically
//! - Explicit typed errors rather than silent defaults; the dispatch result
//!   is the completion contract

use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Response};
use url::Url;

use crate::config::schema::{AppConfig, RoutesConfig};
use crate::config::validation::{self, ValidationError};
use crate::error::{ConfigError, DispatchError};
use crate::http::client::HttpClient;
use crate::http::request::UpstreamRequest;
use crate::http::response::ResponseWriter;
use crate::observability::log::{LogSink, LogSubscriber};
use crate::routing::matcher::{MatchKind, Pattern, Routes};
use crate::transform::{self, Transform};

/// An [`AppConfig`] compiled into its runtime form: origin parsed, headers
/// typed, transforms resolved. Everything fallible happens here, once.
#[derive(Debug, Clone)]
pub struct Application {
    pub(crate) name: String,
    pub(crate) origin: Url,
    pub(crate) routes: Routes,
    pub(crate) headers: HeaderMap,
    pub(crate) cookies: HashSet<String>,
    pub(crate) transforms: Vec<Transform>,
}

impl Application {
    /// Compile one definition, collecting every rejected property.
    pub(crate) fn compile(config: &AppConfig) -> Result<Application, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let origin = match parse_origin(&config.host) {
            Ok(origin) => Some(origin),
            Err(source) => {
                errors.push(ValidationError::InvalidHost {
                    name: config.name.clone(),
                    host: config.host.clone(),
                    source,
                });
                None
            }
        };

        let routes = match &config.routes {
            RoutesConfig::Wildcard(s) if s == "*" => Routes::All,
            RoutesConfig::Wildcard(other) => {
                errors.push(ValidationError::InvalidRoutes {
                    name: config.name.clone(),
                    value: other.clone(),
                });
                Routes::Patterns(Vec::new())
            }
            RoutesConfig::Patterns(patterns) => Routes::Patterns(
                patterns.iter().map(|raw| Pattern::parse(raw)).collect(),
            ),
        };

        let mut headers = HeaderMap::new();
        for (name, scalar) in &config.headers {
            let Ok(header) = HeaderName::from_bytes(name.as_bytes()) else {
                errors.push(ValidationError::InvalidHeaderName {
                    name: config.name.clone(),
                    header: name.clone(),
                });
                continue;
            };
            match HeaderValue::from_str(&scalar.to_string()) {
                Ok(value) => {
                    headers.insert(header, value);
                }
                Err(_) => errors.push(ValidationError::InvalidHeaderValue {
                    name: config.name.clone(),
                    header: name.clone(),
                }),
            }
        }

        let mut transforms = Vec::with_capacity(config.transforms.len());
        for raw in &config.transforms {
            match Transform::resolve(raw) {
                Some(transform) => transforms.push(transform),
                None => errors.push(ValidationError::UnknownTransform {
                    name: config.name.clone(),
                    transform: raw.clone(),
                }),
            }
        }

        match (origin, errors.is_empty()) {
            (Some(origin), true) => Ok(Application {
                name: config.name.clone(),
                origin,
                routes,
                headers,
                cookies: config.cookies.iter().cloned().collect(),
                transforms,
            }),
            _ => Err(errors),
        }
    }

    /// The application's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved upstream origin.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    fn match_path(&self, path: &str) -> Option<MatchKind> {
        self.routes.match_path(path)
    }
}

/// A bare hostname defaults to https; an explicit scheme is honored.
fn parse_origin(host: &str) -> Result<Url, url::ParseError> {
    if host.contains("://") {
        Url::parse(host)
    } else {
        Url::parse(&format!("https://{host}"))
    }
}

/// The dispatch-and-forward engine.
///
/// Owns the compiled application list (ordered, first match wins), the
/// upstream client capability, and the log sink. Safe to share across
/// concurrent dispatches; the subscriber list is the only mutable state.
pub struct Router {
    apps: Vec<Application>,
    client: Arc<dyn HttpClient>,
    sink: LogSink,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router").finish_non_exhaustive()
    }
}

impl Router {
    /// Compile and validate the application list.
    ///
    /// Fails fast with every rejected property; a router that constructs
    /// cannot fail on configuration at dispatch time.
    pub fn new(
        configs: &[AppConfig],
        client: Arc<dyn HttpClient>,
    ) -> Result<Router, ConfigError> {
        let mut errors = validation::check_names(configs);
        let mut apps = Vec::with_capacity(configs.len());

        for config in configs {
            match Application::compile(config) {
                Ok(app) => apps.push(app),
                Err(errs) => errors.extend(errs),
            }
        }

        if !errors.is_empty() {
            return Err(ConfigError { errors });
        }

        Ok(Router {
            apps,
            client,
            sink: LogSink::new(),
        })
    }

    /// Register a subscriber for every subsequent dispatch event.
    pub fn on_log(&self, subscriber: impl LogSubscriber + 'static) {
        self.sink.subscribe(subscriber);
    }

    /// The application that answers for `path`, with the match
    /// classification, or `None`. Applications are consulted in list order.
    pub fn match_path(&self, path: &str) -> Option<(&Application, MatchKind)> {
        self.apps
            .iter()
            .find_map(|app| app.match_path(path).map(|kind| (app, kind)))
    }

    /// Dispatch one inbound request.
    ///
    /// On success the writer receives the upstream status, every upstream
    /// header unmodified, and the transformed body, exactly once. On any
    /// failure the writer is never called and the error classifies what
    /// went wrong.
    pub async fn dispatch<W: ResponseWriter>(
        &self,
        request: &Request<Bytes>,
        writer: &mut W,
    ) -> Result<(), DispatchError> {
        let method = request.method();
        if !matches!(*method, Method::GET | Method::HEAD) {
            return Err(DispatchError::MethodNotAllowed {
                method: method.clone(),
            });
        }

        let path = request.uri().path();
        let Some((app, kind)) = self.match_path(path) else {
            return Err(DispatchError::NotFound {
                path: path.to_string(),
            });
        };
        self.sink.debug(format!("{path} -> {kind}"));
        self.sink.debug(format!("{path} -> {}", app.name));

        let upstream_request = UpstreamRequest::build(request, app);

        let response = match self.client.send(upstream_request).await {
            Ok(response) => response,
            Err(source) => {
                tracing::error!(application = %app.name, error = %source, "upstream request failed");
                return Err(DispatchError::Upstream(source));
            }
        };

        let (parts, body) = response.into_parts();
        let body = transform::apply_all(&app.transforms, body, &app.origin);
        let status = parts.status;

        writer.write_response(Response::from_parts(parts, body)).await;
        self.sink.info(format!("{}: {}", app.name, status.as_u16()));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use async_trait::async_trait;

    struct NoopClient;

    #[async_trait]
    impl HttpClient for NoopClient {
        async fn send(&self, _request: UpstreamRequest) -> Result<Response<Bytes>, BoxError> {
            Ok(Response::new(Bytes::new()))
        }
    }

    fn app(name: &str, routes: RoutesConfig) -> AppConfig {
        AppConfig {
            name: name.to_string(),
            host: format!("{name}.com"),
            routes,
            headers: Default::default(),
            cookies: Vec::new(),
            transforms: Vec::new(),
        }
    }

    fn router(configs: &[AppConfig]) -> Router {
        Router::new(configs, Arc::new(NoopClient)).unwrap()
    }

    fn patterns(raw: &[&str]) -> RoutesConfig {
        RoutesConfig::Patterns(raw.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_first_application_wins() {
        let router = router(&[
            app("github", patterns(&["/shared/*"])),
            app("apple", patterns(&["/shared/exact"])),
        ]);

        // The earlier splat shadows the later, more specific exact match.
        let (matched, kind) = router.match_path("/shared/exact").unwrap();
        assert_eq!(matched.name(), "github");
        assert_eq!(kind, MatchKind::Splat);
    }

    #[test]
    fn test_wildcard_application_shadows_everything_after_it() {
        let router = router(&[
            app("github", RoutesConfig::Wildcard("*".to_string())),
            app("apple", patterns(&["/iphone"])),
        ]);

        let (matched, kind) = router.match_path("/iphone").unwrap();
        assert_eq!(matched.name(), "github");
        assert_eq!(kind, MatchKind::Default);
    }

    #[test]
    fn test_no_match() {
        let router = router(&[app("github", patterns(&["/bendrucker"]))]);
        assert!(router.match_path("/unknown").is_none());
    }

    #[test]
    fn test_compile_resolves_origin_and_transforms() {
        let mut config = app("github", RoutesConfig::Wildcard("*".to_string()));
        config.transforms = vec!["absolute".to_string()];

        let compiled = Application::compile(&config).unwrap();
        assert_eq!(compiled.origin().as_str(), "https://github.com/");
        assert_eq!(compiled.transforms, vec![Transform::Absolute]);
    }

    #[test]
    fn test_construction_rejects_unknown_transform() {
        let mut config = app("github", RoutesConfig::Wildcard("*".to_string()));
        config.transforms = vec!["rot13".to_string()];

        let err = Router::new(&[config], Arc::new(NoopClient)).unwrap_err();
        assert!(err.to_string().contains("rot13"));
    }

    #[test]
    fn test_construction_rejects_duplicate_names() {
        let configs = vec![
            app("github", RoutesConfig::default()),
            app("github", RoutesConfig::default()),
        ];

        let err = Router::new(&configs, Arc::new(NoopClient)).unwrap_err();
        assert!(matches!(
            err.errors.as_slice(),
            [ValidationError::DuplicateName(name)] if name == "github"
        ));
    }
}
