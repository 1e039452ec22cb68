//! The transport seam: "send an HTTP request, receive an HTTP response".
//!
//! Everything above this layer (token endpoint, dispatcher) talks to the
//! network only through [`Transport`], so tests can substitute an in-process
//! implementation.

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::HttpRequest;
use crate::response::HttpResponse;

/// Sends a single HTTP request and returns the buffered response.
///
/// Implementations perform exactly one attempt and never inspect the status:
/// a 404 is a successful transport round-trip. Only failures to complete the
/// exchange (connect, TLS, timeout, body read) are errors.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>>;
}

/// reqwest-backed transport with pooling, timeouts and compression.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    enable_tracing: bool,
}

impl HttpTransport {
    /// Create a new transport from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed);

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            enable_tracing: config.enable_tracing,
        })
    }

    /// Create a transport with default configuration.
    pub fn default_transport() -> Result<Self> {
        Self::new(&ClientConfig::default())
    }

    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send_once(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        if self.enable_tracing {
            debug!("Sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let body = response.bytes().await?;

        if self.enable_tracing {
            if (200..300).contains(&status) {
                debug!(status, content_length = body.len(), "Response received");
            } else {
                info!(status, content_length = body.len(), "Non-success response");
            }
        }

        Ok(HttpResponse::new(status, headers, body))
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        self.send_once(request).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestMethod;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> HttpTransport {
        HttpTransport::new(&ClientConfig::builder().with_tracing(false).build()).unwrap()
    }

    #[tokio::test]
    async fn test_send_returns_status_headers_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/JSSResource/sites/id/1"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", "application/xml")
                    .set_body_string("<site><id>1</id><name>HQ</name></site>"),
            )
            .mount(&mock_server)
            .await;

        let response = transport()
            .send(
                HttpRequest::new(
                    RequestMethod::Get,
                    format!("{}/JSSResource/sites/id/1", mock_server.uri()),
                )
                .bearer_auth("test-token"),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.content_type(), Some("application/xml"));
        assert_eq!(response.text(), "<site><id>1</id><name>HQ</name></site>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_a_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/JSSResource/computers/id/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let response = transport()
            .send(HttpRequest::new(
                RequestMethod::Delete,
                format!("{}/JSSResource/computers/id/99", mock_server.uri()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_body_is_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/api-roles"))
            .and(header("Content-Type", "application/json"))
            .and(body_string(r#"{"displayName":"auditors"}"#))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = transport()
            .send(
                HttpRequest::new(
                    RequestMethod::Post,
                    format!("{}/api/v1/api-roles", mock_server.uri()),
                )
                .body("application/json", r#"{"displayName":"auditors"}"#),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 201);
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Port 9 (discard) on localhost is reliably closed in test environments.
        let err = transport()
            .send(HttpRequest::new(RequestMethod::Get, "http://127.0.0.1:9/unreachable"))
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Transport(_) | ErrorKind::Timeout));
        assert!(err.is_retryable());
    }
}
