use super::*;
use crate::dao::json_headers;

#[test]
fn register_or_get_creates_then_returns_the_same_instance() {
    let registry = Registry::new();

    let first = registry.register_or_get("api", "https://one.example.com", json_headers());
    let second = registry.register_or_get("api", "https://two.example.com", Headers::new());

    assert!(Arc::ptr_eq(&first, &second));
    // First writer wins: the second call's arguments are ignored.
    assert_eq!(second.base_url(), "https://one.example.com");
    assert_eq!(second.default_headers(), json_headers());
}

#[test]
fn get_returns_none_for_unregistered_names() {
    let registry = Registry::new();
    assert!(registry.get("missing").is_none());

    registry.register_or_get("api", "https://example.com", Headers::new());
    assert!(registry.get("missing").is_none());
}

#[test]
fn get_is_identity_stable() {
    let registry = Registry::new();
    registry.register_or_get("api", "https://example.com", Headers::new());

    let first = registry.get("api").unwrap();
    let second = registry.get("api").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn names_are_independent_entries() {
    let registry = Registry::new();
    let posts = registry.register_or_get("posts", "https://posts.example.com", Headers::new());
    let users = registry.register_or_get("users", "https://users.example.com", Headers::new());

    assert!(!Arc::ptr_eq(&posts, &users));
    assert_eq!(registry.get("posts").unwrap().base_url(), "https://posts.example.com");
    assert_eq!(registry.get("users").unwrap().base_url(), "https://users.example.com");
}

#[test]
fn header_mutation_is_shared_across_handles() {
    let registry = Registry::new();
    let writer = registry.register_or_get("api", "https://example.com", Headers::new());
    let reader = registry.get("api").unwrap();

    writer.set_auth_token("token");

    let headers = reader.default_headers();
    assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer token"));
}

#[test]
fn registries_are_independent() {
    let one = Registry::new();
    let two = Registry::new();

    one.register_or_get("api", "https://example.com", Headers::new());
    assert!(two.get("api").is_none());
}
