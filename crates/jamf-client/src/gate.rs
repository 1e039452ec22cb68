//! Concurrency gate bounding simultaneous in-flight requests.
//!
//! Backed by a tokio `Semaphore`, which hands out permits in arrival order.
//! A permit is returned when its [`GatePermit`] is dropped, so release happens
//! exactly once on every exit path, including errors and cancelled futures.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::trace;

use crate::error::{Error, ErrorKind, Result};

/// Fixed pool of request permits shared by every clone of a client.
#[derive(Debug, Clone)]
pub struct ConcurrencyGate {
    semaphore: Arc<Semaphore>,
    max: usize,
    acquired_total: Arc<AtomicU64>,
}

impl ConcurrencyGate {
    /// Create a gate with `max` permits.
    pub fn new(max: usize) -> Result<Self> {
        if max == 0 {
            return Err(Error::new(ErrorKind::Config(
                "concurrency gate needs at least one permit".to_string(),
            )));
        }
        Ok(Self {
            semaphore: Arc::new(Semaphore::new(max)),
            max,
            acquired_total: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Wait for a permit. Fails with `ErrorKind::Closed` once the gate is closed.
    pub async fn acquire(&self) -> Result<GatePermit> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| Error::new(ErrorKind::Closed))?;
        self.acquired_total.fetch_add(1, Ordering::Relaxed);
        trace!(available = self.semaphore.available_permits(), "Permit acquired");
        Ok(GatePermit { _permit: permit })
    }

    /// Take a permit only if one is free right now.
    pub fn try_acquire(&self) -> Option<GatePermit> {
        let permit = self.semaphore.clone().try_acquire_owned().ok()?;
        self.acquired_total.fetch_add(1, Ordering::Relaxed);
        Some(GatePermit { _permit: permit })
    }

    /// Configured maximum.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Permits currently free.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Permits currently held.
    pub fn in_flight(&self) -> usize {
        self.max.saturating_sub(self.available())
    }

    /// Number of permits handed out since creation.
    pub fn acquired_total(&self) -> u64 {
        self.acquired_total.load(Ordering::Relaxed)
    }

    /// Refuse new acquisitions. Waiters are woken with `ErrorKind::Closed`;
    /// permits already held stay valid until dropped.
    pub fn close(&self) {
        self.semaphore.close();
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.semaphore.is_closed()
    }
}

/// Scoped permit; dropping it returns the slot to the gate.
#[derive(Debug)]
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
}
