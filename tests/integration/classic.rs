//! Classic API (XML) operations end to end.

use jamfpro_sdk::api::computer_groups::{Criteria, Criterion};
use jamfpro_sdk::api::{ComputerGroup, IdName, Script, Site};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{bearer, client, mount_oauth};

#[tokio::test]
async fn test_list_and_get_by_name() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/computers"))
        .and(header("accept", "application/xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <computers><size>2</size>\
             <computer><id>1</id><name>lab-01</name></computer>\
             <computer><id>2</id><name>lab 02</name></computer></computers>",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/JSSResource/computers/name/lab%2002"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<computer><general><id>2</id><name>lab 02</name>\
             <serial_number>C02XYZ</serial_number><remote_management><managed>true</managed></remote_management>\
             </general><hardware><model>iMac</model></hardware></computer>",
        ))
        .mount(&server)
        .await;

    let client = client(&server, 2);
    let list = client.list_computers().await.unwrap();
    assert_eq!(list.size, 2);
    assert_eq!(list.computers[1].name, "lab 02");

    let computer = client.get_computer_by_name("lab 02").await.unwrap();
    assert_eq!(computer.general.id, Some(2));
    assert_eq!(computer.general.serial_number.as_deref(), Some("C02XYZ"));
}

#[tokio::test]
async fn test_create_sends_xml_without_empty_tags() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("POST"))
        .and(path("/JSSResource/scripts/id/0"))
        .and(header("content-type", "application/xml"))
        .and(body_string(
            "<script><name>hello</name><priority>After</priority>\
             <script_contents>echo hello</script_contents></script>",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_string("<script><id>44</id></script>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1);
    let script = Script {
        name: "hello".to_string(),
        priority: Some("After".to_string()),
        script_contents: Some("echo hello".to_string()),
        ..Default::default()
    };
    assert_eq!(client.create_script(&script).await.unwrap(), 44);
}

#[tokio::test]
async fn test_update_smart_group_by_id() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("PUT"))
        .and(path("/JSSResource/computergroups/id/7"))
        .respond_with(
            ResponseTemplate::new(201).set_body_string("<computer_group><id>7</id></computer_group>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1);
    let group = ComputerGroup {
        name: "Sonoma".to_string(),
        is_smart: true,
        site: Some(IdName::name("None")),
        criteria: Some(Criteria {
            criteria: vec![Criterion {
                name: "Operating System Version".to_string(),
                priority: 0,
                and_or: "and".to_string(),
                search_type: "like".to_string(),
                value: "14.".to_string(),
                ..Default::default()
            }],
        }),
        ..Default::default()
    };
    assert_eq!(client.update_computer_group_by_id(7, &group).await.unwrap(), 7);
}

#[tokio::test]
async fn test_conflict_surfaces_status_and_body() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    let html = "<html><body><p>Error: Duplicate name</p></body></html>";
    Mock::given(method("POST"))
        .and(path("/JSSResource/sites/id/0"))
        .respond_with(ResponseTemplate::new(409).set_body_string(html))
        .mount(&server)
        .await;

    let client = client(&server, 1);
    let err = client.create_site(&Site::new("HQ")).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.body(), Some(html));
    assert!(!err.is_retryable());
    assert!(err.api_errors().is_empty());
}

#[tokio::test]
async fn test_delete_by_name() {
    let server = MockServer::start().await;
    mount_oauth(&server, 1800, 1).await;
    Mock::given(method("DELETE"))
        .and(path("/JSSResource/ebooks/name/Staff%20Handbook"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<ebook><id>3</id></ebook>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1);
    client.delete_ebook_by_name("Staff Handbook").await.unwrap();
}
