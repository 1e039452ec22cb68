//! Tuning for the HTTP transport, the concurrency gate and token renewal.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Settings shared by every request a Jamf Pro client sends.
///
/// Defaults match a Jamf Pro Cloud instance: five requests in flight,
/// 30 minute bearer tokens and a five minute renewal window.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline for one request, from send to the last body byte.
    pub timeout: Duration,
    /// Deadline for establishing the TCP and TLS connection.
    pub connect_timeout: Duration,
    /// How long an unused pooled connection is kept.
    pub pool_idle_timeout: Duration,
    /// Idle connections kept per Jamf Pro host.
    pub pool_max_idle_per_host: usize,
    /// Sent as `User-Agent` on every request.
    pub user_agent: String,
    /// Emit debug events for each request and response.
    pub enable_tracing: bool,
    /// Advertise gzip and deflate in `Accept-Encoding`.
    pub accept_compressed: bool,
    /// Maximum number of requests in flight at once. Must be at least 1.
    pub max_concurrent_requests: usize,
    /// Token lifespan assumed when the token endpoint does not report one.
    pub token_lifespan: Duration,
    /// A cached token is renewed once it is within this period of expiring.
    pub buffer_period: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
            accept_compressed: true,
            max_concurrent_requests: 5,
            token_lifespan: Duration::from_secs(30 * 60),
            buffer_period: Duration::from_secs(5 * 60),
        }
    }
}

impl ClientConfig {
    /// Start from the defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Reject settings the client cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_requests == 0 {
            return Err(Error::new(ErrorKind::Config(
                "max_concurrent_requests must be at least 1".to_string(),
            )));
        }
        if self.token_lifespan.is_zero() {
            return Err(Error::new(ErrorKind::Config(
                "token_lifespan must be greater than zero".to_string(),
            )));
        }
        if self.buffer_period >= self.token_lifespan {
            return Err(Error::new(ErrorKind::Config(
                "buffer_period must be shorter than token_lifespan".to_string(),
            )));
        }
        Ok(())
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Connect deadline.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Idle lifetime of pooled connections.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Idle connections kept per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Replace the default `jamfpro-sdk/<version>` agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Toggle per-request debug events.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Toggle compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    /// Size of the concurrency gate.
    pub fn with_max_concurrent_requests(mut self, max: usize) -> Self {
        self.config.max_concurrent_requests = max;
        self
    }

    /// Lifespan used when the token endpoint omits one.
    pub fn with_token_lifespan(mut self, lifespan: Duration) -> Self {
        self.config.token_lifespan = lifespan;
        self
    }

    /// Renewal window before a cached token expires.
    pub fn with_buffer_period(mut self, buffer: Duration) -> Self {
        self.config.buffer_period = buffer;
        self
    }

    /// Finish without validating; the client calls [`ClientConfig::validate`].
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
