//! In-process doubles for the transport and token source.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;

use jamfpro_auth::{IssuedToken, TokenManager, TokenSource};
use jamfpro_client::{ClientConfig, Error, ErrorKind, HttpRequest, HttpResponse, Result, Transport};

use super::JamfProClient;

/// Answers every request with the same status and body, recording requests
/// and the peak number of concurrent sends.
pub(crate) struct FakeTransport {
    status: u16,
    body: String,
    fail: AtomicBool,
    delay: Duration,
    requests: Mutex<Vec<HttpRequest>>,
    in_flight: Arc<AtomicUsize>,
    peak: AtomicUsize,
}

struct InFlight(Arc<AtomicUsize>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl FakeTransport {
    pub(crate) fn ok(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            fail: AtomicBool::new(false),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
            in_flight: Arc::new(AtomicUsize::new(0)),
            peak: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        let transport = Self::ok(0, "");
        transport.fail.store(true, Ordering::SeqCst);
        transport
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        async move {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            let _guard = InFlight(self.in_flight.clone());
            self.peak.fetch_max(now, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request);

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            if self.fail.load(Ordering::SeqCst) {
                return Err(Error::new(ErrorKind::Transport(
                    "connection reset".to_string(),
                )));
            }
            Ok(HttpResponse::new(
                self.status,
                vec![],
                self.body.clone().into_bytes(),
            ))
        }
        .boxed()
    }
}

/// Token source handing out `token-<n>`, counting fetches.
#[derive(Clone)]
pub(crate) struct StaticTokens {
    fetches: Arc<AtomicUsize>,
    reject: bool,
}

impl StaticTokens {
    pub(crate) fn new() -> Self {
        Self {
            fetches: Arc::new(AtomicUsize::new(0)),
            reject: false,
        }
    }

    pub(crate) fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::new()
        }
    }

    pub(crate) fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl TokenSource for StaticTokens {
    fn fetch(&self) -> BoxFuture<'_, jamfpro_auth::Result<IssuedToken>> {
        async move {
            let n = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
            if self.reject {
                return Err(jamfpro_auth::Error::new(
                    jamfpro_auth::ErrorKind::CredentialsRejected {
                        status: 401,
                        message: "invalid_client".to_string(),
                    },
                ));
            }
            Ok(IssuedToken::new(
                format!("token-{n}"),
                Some(Duration::from_secs(1800)),
            ))
        }
        .boxed()
    }
}

pub(crate) fn client_with(
    transport: Arc<dyn Transport>,
    tokens: StaticTokens,
    max_concurrent: usize,
) -> JamfProClient {
    let config = ClientConfig::builder()
        .with_max_concurrent_requests(max_concurrent)
        .build();
    let tokens = TokenManager::new(
        Arc::new(tokens),
        config.token_lifespan,
        config.buffer_period,
    );
    JamfProClient::builder()
        .with_base_url("https://acme.test")
        .with_config(config)
        .with_transport(transport)
        .with_token_manager(tokens)
        .build()
        .unwrap()
}
