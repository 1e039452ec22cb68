//! Concurrency and permit-conservation properties of the dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use jamfpro_client::{Error, ErrorKind, HttpRequest, HttpResponse, Result, Transport};

use super::test_support::{client_with, FakeTransport, StaticTokens};
use super::RequestDescriptor;
use crate::registry::Target;

fn list_sites() -> RequestDescriptor {
    RequestDescriptor::get("sites", Target::Collection)
}

#[tokio::test(start_paused = true)]
async fn test_in_flight_never_exceeds_max() {
    let transport = Arc::new(FakeTransport::ok(200, "<sites/>").with_delay(Duration::from_millis(20)));
    let client = client_with(transport.clone(), StaticTokens::new(), 3);

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.execute_unit::<()>(&list_sites(), None).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(transport.requests().len(), 20);
    assert_eq!(transport.peak(), 3);
    assert_eq!(client.gate().available(), 3);
    assert_eq!(client.gate().acquired_total(), 20);
}

#[tokio::test(start_paused = true)]
async fn test_five_requests_two_permits_one_token() {
    let transport = Arc::new(FakeTransport::ok(200, "<sites/>").with_delay(Duration::from_millis(100)));
    let tokens = StaticTokens::new();
    let client = client_with(transport.clone(), tokens.clone(), 2);

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.execute_unit::<()>(&list_sites(), None).await })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(transport.requests().len(), 2);
    assert_eq!(client.gate().in_flight(), 2);

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(transport.requests().len(), 5);
    assert_eq!(transport.peak(), 2);
    assert_eq!(tokens.fetches(), 1);
    assert_eq!(client.gate().available(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_caller_releases_permit() {
    let transport = Arc::new(FakeTransport::ok(200, "<sites/>").with_delay(Duration::from_secs(5)));
    let client = client_with(transport.clone(), StaticTokens::new(), 1);

    let abandoned = tokio::time::timeout(
        Duration::from_millis(10),
        client.execute_unit::<()>(&list_sites(), None),
    )
    .await;
    assert!(abandoned.is_err());
    assert_eq!(client.gate().available(), 1);

    let queued = {
        let client = client.clone();
        tokio::spawn(async move { client.execute_unit::<()>(&list_sites(), None).await })
    };
    tokio::time::sleep(Duration::from_millis(1)).await;
    queued.abort();
    assert!(queued.await.unwrap_err().is_cancelled());
    assert_eq!(client.gate().available(), 1);
}

/// Picks a random delay and outcome for every request.
struct RandomTransport {
    rng: Mutex<StdRng>,
    in_flight: Arc<AtomicUsize>,
    peak: AtomicUsize,
}

struct InFlight(Arc<AtomicUsize>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Transport for RandomTransport {
    fn send(&self, _request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        let (delay_ms, outcome) = {
            let mut rng = self.rng.lock().unwrap();
            (rng.random_range(0..5u64), rng.random_range(0..3u8))
        };
        async move {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            let _guard = InFlight(self.in_flight.clone());
            self.peak.fetch_max(now, Ordering::SeqCst);

            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            match outcome {
                0 => Ok(HttpResponse::new(200, vec![], "<sites/>")),
                1 => Ok(HttpResponse::new(503, vec![], "Service Unavailable")),
                _ => Err(Error::new(ErrorKind::Transport("connection reset".into()))),
            }
        }
        .boxed()
    }
}

#[tokio::test(start_paused = true)]
async fn test_no_permit_leak_under_random_outcomes() {
    const MAX: usize = 4;
    const BATCHES: usize = 100;
    const PER_BATCH: usize = 100;

    let transport = Arc::new(RandomTransport {
        rng: Mutex::new(StdRng::seed_from_u64(0x5eed)),
        in_flight: Arc::new(AtomicUsize::new(0)),
        peak: AtomicUsize::new(0),
    });
    let client = client_with(transport.clone(), StaticTokens::new(), MAX);
    let mut rng = StdRng::seed_from_u64(42);

    let mut completed = 0usize;
    let mut cancelled = 0usize;

    for _ in 0..BATCHES {
        let mut handles = Vec::with_capacity(PER_BATCH);
        let mut to_abort = Vec::new();

        for i in 0..PER_BATCH {
            let client = client.clone();
            let mode = rng.random_range(0..3u8);
            let timeout = Duration::from_millis(rng.random_range(0..6u64));
            let handle = tokio::spawn(async move {
                let descriptor = list_sites();
                let request = client.execute_unit::<()>(&descriptor, None);
                if mode == 1 {
                    tokio::time::timeout(timeout, request).await.ok().map(|_| ())
                } else {
                    request.await.ok();
                    Some(())
                }
            });
            if mode == 2 {
                to_abort.push(i);
            }
            handles.push(handle);
        }

        tokio::task::yield_now().await;
        for i in to_abort {
            handles[i].abort();
        }

        for handle in handles {
            match handle.await {
                Ok(Some(())) => completed += 1,
                Ok(None) => cancelled += 1,
                Err(err) => {
                    assert!(err.is_cancelled());
                    cancelled += 1;
                }
            }
        }

        assert_eq!(client.gate().available(), MAX);
    }

    assert_eq!(completed + cancelled, BATCHES * PER_BATCH);
    assert!(transport.peak.load(Ordering::SeqCst) <= MAX);
    assert_eq!(transport.in_flight.load(Ordering::SeqCst), 0);
    assert_eq!(client.gate().in_flight(), 0);
}
