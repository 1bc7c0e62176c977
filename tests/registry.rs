use http_dao::dao::{json_headers, Headers};
use http_dao::Registry;
use httpmock::MockServer;
use serde::Deserialize;
use std::sync::Arc;

mod common;

#[derive(Debug, Deserialize)]
struct Post {
    id: i64,
    title: String,
}

#[test]
fn registered_dao_round_trips_json() {
    common::init_logging();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/posts/1");
        then.status(200)
            .body(r#"{"id": 1, "title": "sunt aut facere"}"#);
    });

    let registry = Registry::new();
    registry.register_or_get("api", server.base_url(), json_headers());

    let api = registry.get("api").unwrap();
    let post: Post = api.get_as("/posts/1", None).unwrap();

    assert_eq!(post.id, 1);
    assert!(!post.title.is_empty());
}

#[test]
fn duplicate_registration_keeps_the_first_base_url() {
    common::init_logging();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/ping");
        then.status(200);
    });

    let registry = Registry::new();
    let first = registry.register_or_get("api", server.base_url(), Headers::new());
    let second = registry.register_or_get("api", "https://ignored.example.com", Headers::new());

    assert!(Arc::ptr_eq(&first, &second));
    second.get("/ping", None).unwrap();
    mock.assert();
}

#[test]
fn auth_token_set_through_one_handle_is_sent_by_another() {
    common::init_logging();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/me")
            .header("Authorization", "Bearer SuperSecretToken");
        then.status(200);
    });

    let registry = Registry::new();
    registry.register_or_get("api", server.base_url(), Headers::new());

    registry.get("api").unwrap().set_auth_token("SuperSecretToken");
    registry.get("api").unwrap().get("/me", None).unwrap();

    mock.assert();
}
