//! tests/instances/update.rs
//! PATCH /instances/{id} validates the replacement region list.

use crate::common::{self, TENANT_KEY};
use reqwest::{Method, StatusCode};

async fn update(base_url: &str, path: &str, body: &str) -> (StatusCode, String) {
    common::send(base_url, Method::PATCH, path, Some(TENANT_KEY), body).await
}

#[tokio::test]
async fn accepts_valid_region_lists() {
    let base_url: String = common::spawn_app();

    for (path, body) in [
        ("/instances/1", r#"{"regions":["us","eu"]}"#),
        ("/instances/2", r#"{"regions":["eu"]}"#),
        ("/instances/2", r#"{"regions":["us"]}"#),
    ] {
        let (status, text) = update(&base_url, path, body).await;
        assert_eq!(status, StatusCode::OK, "{} {}", path, body);
        assert_eq!(text, "");
    }
}

#[tokio::test]
async fn regions_are_not_persisted() {
    let base_url: String = common::spawn_app();

    let (status, _) = update(&base_url, "/instances/3", r#"{"regions":["eu"]}"#).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::send(&base_url, Method::GET, "/instances/3", Some(TENANT_KEY), "").await;
    assert!(body.contains(r#""regions":["us"]"#));
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let base_url: String = common::spawn_app();

    let (status, text) = update(&base_url, "/instances/5", "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text, "Not Found");
}

#[tokio::test]
async fn rejects_invalid_region() {
    let base_url: String = common::spawn_app();

    let (status, text) = update(&base_url, "/instances/3", r#"{"regions":["us", "en"]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Invalid region provided");
}

#[tokio::test]
async fn rejects_too_many_regions() {
    let base_url: String = common::spawn_app();

    let (status, text) = update(&base_url, "/instances/2", r#"{"regions":["us", "eu", "eu"]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Too many regions provided");
}

#[tokio::test]
async fn rejects_empty_regions() {
    let base_url: String = common::spawn_app();

    let (status, text) = update(&base_url, "/instances/2", r#"{"regions":[]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "No region provided");
}

#[tokio::test]
async fn accepts_capitalized_regions_field() {
    let base_url: String = common::spawn_app();

    let (status, text) = update(&base_url, "/instances/2", r#"{"Regions":["us","en"]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Invalid region provided");
}

#[tokio::test]
async fn rejects_unreadable_body_for_known_id() {
    let base_url: String = common::spawn_app();

    let (status, text) = update(&base_url, "/instances/1", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Failed to read body");
}

#[tokio::test]
async fn update_requires_tenant_key() {
    let base_url: String = common::spawn_app();

    common::assert_auth_enforced(&base_url, Method::PATCH, "/instances/2", r#"{"regions":["us","eu"]}"#).await;
}
