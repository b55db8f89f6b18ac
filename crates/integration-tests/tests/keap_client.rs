//! Keap REST client against a mock Keap server.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use keap_viewer::keap::{ContactSource, KeapClient, KeapError};
use keap_viewer_core::{ContactId, PoolType};
use keap_viewer_integration_tests::{
    TEST_TOKEN, contact_page, keap_config, salt_contact, sparse_contact,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn client(server: &MockServer) -> KeapClient {
    KeapClient::new(&keap_config(server)).unwrap()
}

#[tokio::test]
async fn test_list_contacts_sends_auth_and_paging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/contacts"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "20"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(contact_page(vec![salt_contact(), sparse_contact()])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server).list_contacts(100, 20).await.unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.contacts.len(), 2);
    assert_eq!(page.contacts[0].full_name(), "Pat Pool");
    assert_eq!(page.contacts[0].pool_type(), PoolType::Salt);

    let sparse = &page.contacts[1];
    assert!(sparse.email_addresses.is_empty());
    assert!(sparse.addresses.is_empty());
    assert_eq!(sparse.custom_fields[0].content, None);
}

#[tokio::test]
async fn test_get_contact_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/contacts/5"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(salt_contact()))
        .expect(1)
        .mount(&server)
        .await;

    let contact = client(&server)
        .get_contact(ContactId::new(5))
        .await
        .unwrap();

    assert_eq!(contact.id, ContactId::new(5));
    assert_eq!(contact.primary_email(), Some("pat@pools.test"));
    assert_eq!(contact.addresses[0].display_lines()[1], "Tampa, FL 33601");
}

#[tokio::test]
async fn test_search_encodes_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/contacts"))
        .and(query_param("email", "pat+spa@pools.test"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_page(vec![salt_contact()])))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .search_contacts("pat+spa@pools.test")
        .await
        .unwrap();

    assert_eq!(page.contacts.len(), 1);
}

#[tokio::test]
async fn test_error_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/contacts/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Contact not found"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_contact(ContactId::new(404))
        .await
        .unwrap_err();

    match err {
        KeapError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Contact not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/contacts"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server)
        .list_contacts(100, 0)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"contacts\": [{\"given_name\""))
        .mount(&server)
        .await;

    let err = client(&server)
        .list_contacts(100, 0)
        .await
        .unwrap_err();

    assert!(matches!(err, KeapError::Parse(_)));
}
