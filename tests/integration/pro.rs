//! Jamf Pro API (JSON) operations end to end.

use jamfpro_sdk::api::{ApiIntegration, ApiRole, PageRequest};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{client, mount_oauth};

#[tokio::test]
async fn test_api_role_lifecycle() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/api-roles"))
        .and(body_json(serde_json::json!({
            "displayName": "Read Sites",
            "privileges": ["Read Sites"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "5",
            "href": format!("{}/api/v1/api-roles/5", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/api-roles/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "5",
            "displayName": "Read Sites",
            "privileges": ["Read Sites"],
            "lastModifiedBy": "admin"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/api-roles/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 2);
    let created = client
        .create_api_role(&ApiRole::new("Read Sites", ["Read Sites"]))
        .await
        .unwrap();
    let role = client.get_api_role_by_id(&created.id).await.unwrap();
    assert_eq!(role.privileges, vec!["Read Sites".to_string()]);
    client.delete_api_role_by_id(&created.id).await.unwrap();
}

fn integration(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "authorizationScopes": ["Read Sites"],
        "displayName": name,
        "enabled": true,
        "accessTokenLifetimeSeconds": 300,
        "appType": "CLIENT_CREDENTIALS",
        "clientId": format!("client-{id}")
    })
}

#[tokio::test]
async fn test_list_follows_pages() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    let first: Vec<_> = (1..=100).map(|id| integration(id, &format!("ci-{id}"))).collect();
    Mock::given(method("GET"))
        .and(path("/api/v1/api-integrations"))
        .and(query_param("page", "0"))
        .and(query_param("sort", "id:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCount": 101,
            "results": first
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/api-integrations"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCount": 101,
            "results": [integration(101, "ci-101")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 2);
    let integrations = client.list_api_integrations().await.unwrap();
    assert_eq!(integrations.len(), 101);
    assert_eq!(integrations[100].client_id.as_deref(), Some("client-101"));
}

#[tokio::test]
async fn test_get_by_name_filters_and_misses_as_not_found() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/api-integrations"))
        .and(query_param("filter", "displayName==\"ci \\\"nightly\\\"\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCount": 1,
            "results": [integration(9, "ci \"nightly\"")]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/api-integrations"))
        .and(query_param("filter", "displayName==\"ghost\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCount": 0,
            "results": []
        })))
        .mount(&server)
        .await;

    let client = client(&server, 1);
    let found: ApiIntegration = client
        .get_api_integration_by_name("ci \"nightly\"")
        .await
        .unwrap();
    assert_eq!(found.id, Some(9));

    let err = client.get_api_integration_by_name("ghost").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_single_page_request() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/api-roles"))
        .and(query_param("page", "2"))
        .and(query_param("page-size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCount": 21,
            "results": [{"id": "21", "displayName": "last", "privileges": []}]
        })))
        .mount(&server)
        .await;

    let client = client(&server, 1);
    let mut request = PageRequest::with_page_size(10);
    request.page = 2;
    let page = client.list_api_roles_page(&request).await.unwrap();
    assert_eq!(page.total_count, 21);
    assert_eq!(page.results[0].display_name, "last");
}

#[tokio::test]
async fn test_json_error_envelope() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/api-roles"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "httpStatus": 400,
            "errors": [{
                "code": "INVALID_PRIVILEGE",
                "description": "Privilege 'Read Everything' does not exist",
                "id": "0",
                "field": "privileges"
            }]
        })))
        .mount(&server)
        .await;

    let client = client(&server, 1);
    let err = client
        .create_api_role(&ApiRole::new("bad", ["Read Everything"]))
        .await
        .unwrap_err();
    let errors = err.api_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code.as_deref(), Some("INVALID_PRIVILEGE"));
}

#[tokio::test]
async fn test_regenerate_sso_failover() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/sso/failover/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "failoverUrl": "https://acme.jamfcloud.com/?failover=new",
            "generationTime": 1700000000000i64
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1);
    let failover = client.regenerate_sso_failover().await.unwrap();
    assert_eq!(failover.generation_time, 1_700_000_000_000);
}
