use jamfpro_sdk::{ClientConfig, Credentials, JamfProClient};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "eyJhbGciOiJSUzI1NiJ9.mock.token";

/// Install a `tracing` subscriber once, honouring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Mock the OAuth token endpoint, expecting exactly `fetches` calls.
pub async fn mount_oauth(server: &MockServer, expires_in: u64, fetches: u64) {
    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": TOKEN,
            "scope": "api-role:1",
            "token_type": "Bearer",
            "expires_in": expires_in
        })))
        .expect(fetches)
        .mount(server)
        .await;
}

pub fn credentials(server: &MockServer) -> Credentials {
    Credentials::client_credentials(server.uri(), "client-id", "client-secret")
}

pub fn client(server: &MockServer, max_concurrent_requests: usize) -> JamfProClient {
    init_tracing();
    let config = ClientConfig::builder()
        .with_max_concurrent_requests(max_concurrent_requests)
        .build();
    JamfProClient::new(credentials(server), config).expect("client")
}

pub fn bearer() -> String {
    format!("Bearer {}", TOKEN)
}
