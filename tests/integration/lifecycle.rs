//! Concurrency bound, 401 handling and shutdown through the real transport.

use std::time::{Duration, Instant};

use jamfpro_sdk::ErrorKind;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{client, mount_oauth};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrency_bound_holds_against_server() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/sites"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<sites><size>0</size></sites>")
                .set_delay(Duration::from_millis(50)),
        )
        .expect(12)
        .mount(&server)
        .await;

    let client = client(&server, 3);
    let started = Instant::now();
    let handles: Vec<_> = (0..12)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.list_sites().await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // 12 requests, 3 at a time, 50ms each: at least four rounds.
    assert!(started.elapsed() >= Duration::from_millis(200));
    assert_eq!(client.gate().available(), 3);
    assert_eq!(client.gate().acquired_total(), 12);
    assert_eq!(client.tokens().refresh_count(), 1);
}

#[tokio::test]
async fn test_unauthorized_forces_new_token_on_next_call() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 2).await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/sites"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<sites><size>0</size></sites>"))
        .mount(&server)
        .await;

    let client = client(&server, 1);
    let err = client.list_sites().await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    client.list_sites().await.unwrap();
    assert_eq!(client.tokens().refresh_count(), 2);
}

#[tokio::test]
async fn test_shutdown_rejects_new_requests() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<sites><size>0</size></sites>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 2);
    client.list_sites().await.unwrap();

    let clone = client.clone();
    client.shutdown().await;
    let err = clone.list_sites().await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Closed));
    assert!(client.tokens().cached().await.is_none());
}

#[tokio::test]
async fn test_clients_do_not_share_state() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 2).await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<sites><size>0</size></sites>"))
        .mount(&server)
        .await;

    let first = client(&server, 1);
    let second = client(&server, 1);
    first.list_sites().await.unwrap();
    second.list_sites().await.unwrap();
    first.shutdown().await;

    second.list_sites().await.unwrap();
    assert_eq!(second.tokens().refresh_count(), 1);
}
