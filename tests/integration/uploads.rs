//! Multipart file uploads end to end.

use jamfpro_sdk::ErrorKind;
use wiremock::matchers::{header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{client, mount_oauth};

#[tokio::test]
async fn test_upload_icon_to_policy() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("POST"))
        .and(path("/JSSResource/fileuploads/policies/id/42"))
        .and(query_param("FORCE_IPA_UPLOAD", "false"))
        .and(header_regex("content-type", "^multipart/form-data; boundary=jamfpro-[0-9a-f]{32}$"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let icon = dir.path().join("icon.png");
    std::fs::write(&icon, b"\x89PNG\r\n\x1a\n").unwrap();

    let client = client(&server, 1);
    client
        .upload_files("policies", "id", "42", [("name", &icon)])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|request| request.url.path().starts_with("/JSSResource/fileuploads"))
        .unwrap();
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains("Content-Disposition: form-data; name=\"name\"; filename=\"icon.png\""));
    assert!(body.trim_end().ends_with("--"));
}

#[tokio::test]
async fn test_ipa_upload_forces_flag() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("POST"))
        .and(path("/JSSResource/fileuploads/mobiledeviceapplicationsipa/id/7"))
        .and(query_param("FORCE_IPA_UPLOAD", "true"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let ipa = dir.path().join("Notes.ipa");
    std::fs::write(&ipa, b"PK\x03\x04").unwrap();

    let client = client(&server, 1);
    client
        .upload_files("mobiledeviceapplicationsipa", "id", "7", [("name", &ipa)])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_missing_file_sends_nothing() {
    let server = MockServer::start().await;
    // Not even the token endpoint may be called.
    mount_oauth(&server, 1800, 0).await;

    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("present.pdf");
    std::fs::write(&present, b"%PDF").unwrap();
    let missing = dir.path().join("missing.pdf");

    let client = client(&server, 1);
    let err = client
        .upload_files(
            "computers",
            "id",
            "3",
            [("first", present.clone()), ("second", missing.clone())],
        )
        .await
        .unwrap_err();

    assert!(matches!(&err.kind, ErrorKind::FileRead { path } if *path == missing));
    assert!(server.received_requests().await.unwrap().is_empty());
}
