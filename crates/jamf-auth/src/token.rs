//! Bearer token cache with single-flight refresh.
//!
//! The first caller that finds the cached token stale starts a refresh and
//! publishes it as a shared future; every caller arriving while it runs
//! awaits that same future and receives the same token or the same error.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use jamfpro_client::{ClientConfig, Transport};

use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::oauth::{TokenEndpoint, TokenSource};

/// A bearer token and its absolute expiry.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
    expires_at: Instant,
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl Token {
    /// Bearer value to send in `Authorization`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Absolute expiry.
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Time left before expiry.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    /// Whether the token stays valid for more than `buffer` past `now`.
    ///
    /// Never overflows: a buffer beyond the clock's range just means stale.
    pub fn is_fresh_at(&self, now: Instant, buffer: Duration) -> bool {
        self.expires_at
            .checked_duration_since(now)
            .map_or(false, |left| left > buffer)
    }
}

type RefreshOutcome = std::result::Result<Token, Arc<Error>>;
type SharedRefresh = Shared<BoxFuture<'static, RefreshOutcome>>;

#[derive(Default)]
struct State {
    current: Option<Token>,
    in_flight: Option<SharedRefresh>,
}

struct Inner {
    source: Arc<dyn TokenSource>,
    fallback_lifespan: Duration,
    buffer: Duration,
    state: Mutex<State>,
    refreshes: AtomicU64,
}

/// Owns the cached token for one client. Clones share the cache.
#[derive(Clone)]
pub struct TokenManager {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("fallback_lifespan", &self.inner.fallback_lifespan)
            .field("buffer", &self.inner.buffer)
            .field("refreshes", &self.refresh_count())
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Create a manager around any token source.
    ///
    /// `fallback_lifespan` applies only when the source does not report one.
    pub fn new(source: Arc<dyn TokenSource>, fallback_lifespan: Duration, buffer: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                fallback_lifespan,
                buffer,
                state: Mutex::new(State::default()),
                refreshes: AtomicU64::new(0),
            }),
        }
    }

    /// Create a manager for the instance's token endpoint.
    pub fn for_credentials(
        transport: Arc<dyn Transport>,
        credentials: &Credentials,
        config: &ClientConfig,
    ) -> Result<Self> {
        let endpoint = TokenEndpoint::new(transport, credentials)?;
        Ok(Self::new(
            Arc::new(endpoint),
            config.token_lifespan,
            config.buffer_period,
        ))
    }

    /// Buffer period before expiry during which a token counts as stale.
    pub fn buffer(&self) -> Duration {
        self.inner.buffer
    }

    /// Number of refreshes that produced a token.
    pub fn refresh_count(&self) -> u64 {
        self.inner.refreshes.load(Ordering::Relaxed)
    }

    /// Return a token valid for at least the buffer period, refreshing if needed.
    #[instrument(skip(self))]
    pub async fn valid_token(&self) -> Result<Token> {
        let refresh = {
            let mut state = self.inner.state.lock().await;

            if let Some(token) = &state.current {
                if token.is_fresh_at(Instant::now(), self.inner.buffer) {
                    return Ok(token.clone());
                }
            }

            match &state.in_flight {
                Some(refresh) => {
                    debug!("Joining token refresh in progress");
                    refresh.clone()
                }
                None => {
                    let refresh = self.start_refresh();
                    state.in_flight = Some(refresh.clone());
                    refresh
                }
            }
        };

        refresh
            .await
            .map_err(|err| Error::with_source(err.kind.clone(), err))
    }

    /// The cached token, fresh or not.
    pub async fn cached(&self) -> Option<Token> {
        self.inner.state.lock().await.current.clone()
    }

    /// Drop the cached token so the next caller re-authenticates.
    pub async fn invalidate(&self) {
        let mut state = self.inner.state.lock().await;
        if state.current.take().is_some() {
            debug!("Cached token invalidated");
        }
    }

    /// Drop the cached token only if it is still `token`.
    ///
    /// A request that was rejected with an older token must not discard a
    /// newer one another caller already fetched. Returns whether the cache
    /// was cleared.
    pub async fn invalidate_if(&self, token: &Token) -> bool {
        let mut state = self.inner.state.lock().await;
        match &state.current {
            Some(current) if current.value == token.value => {
                state.current = None;
                debug!("Cached token invalidated");
                true
            }
            _ => {
                debug!("Rejected token already replaced; keeping cache");
                false
            }
        }
    }

    fn start_refresh(&self) -> SharedRefresh {
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        let source = self.inner.source.clone();
        let fallback = self.inner.fallback_lifespan;
        let buffer = self.inner.buffer;

        async move {
            let issued_at = Instant::now();
            let outcome = match source.fetch().await {
                Ok(issued) => {
                    let lifespan = issued.lifespan.unwrap_or(fallback);
                    if lifespan <= buffer {
                        warn!(
                            lifespan_secs = lifespan.as_secs(),
                            buffer_secs = buffer.as_secs(),
                            "Token lifespan does not exceed the buffer period"
                        );
                    }
                    match issued_at.checked_add(lifespan) {
                        Some(expires_at) => Ok(Token {
                            value: issued.value,
                            expires_at,
                        }),
                        None => {
                            warn!(
                                lifespan_secs = lifespan.as_secs(),
                                "Token lifespan out of range"
                            );
                            Err(Arc::new(Error::new(ErrorKind::InvalidResponse(format!(
                                "token lifespan of {}s is out of range",
                                lifespan.as_secs()
                            )))))
                        }
                    }
                }
                Err(err) => {
                    warn!(error = %err, "Token refresh failed");
                    Err(Arc::new(err))
                }
            };

            if let Some(inner) = inner.upgrade() {
                let mut state = inner.state.lock().await;
                state.in_flight = None;
                if let Ok(token) = &outcome {
                    state.current = Some(token.clone());
                    let count = inner.refreshes.fetch_add(1, Ordering::Relaxed) + 1;
                    info!(refreshes = count, "Token refreshed");
                }
            }

            outcome
        }
        .boxed()
        .shared()
    }
}
