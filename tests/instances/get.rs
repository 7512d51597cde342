//! tests/instances/get.rs
//! GET /instances/{id} returns full fixture records.

use crate::common::{self, TENANT_KEY};
use reqwest::{Method, StatusCode};
use serde_json::Value;

const MONGO1: &str = r#"{"id":1,"name":"mongo1","regions":["eu","us"],"status":{"regions":{"eu":"ready","us":"ready"}},"connection":{"endpoint":"mongodb://t1m1.cloudprovider.com:27017","username":"admin","password":"password"}}"#;

#[tokio::test]
async fn returns_full_record() {
    let base_url: String = common::spawn_app();

    let (status, body) = common::send(&base_url, Method::GET, "/instances/1", Some(TENANT_KEY), "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, MONGO1);
}

#[tokio::test]
async fn repeated_reads_are_identical() {
    let base_url: String = common::spawn_app();

    for id in 1..=4 {
        let path: String = format!("/instances/{}", id);
        let (_, first) = common::send(&base_url, Method::GET, &path, Some(TENANT_KEY), "").await;
        let (status, second) = common::send(&base_url, Method::GET, &path, Some(TENANT_KEY), "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);

        let json: Value = serde_json::from_str(&second).unwrap();
        assert_eq!(json["id"], id);
        assert_eq!(json["name"], format!("mongo{}", id));
        assert!(json.get("tenant").is_none());
    }
}

#[tokio::test]
async fn migrating_instance_reports_status() {
    let base_url: String = common::spawn_app();

    let (_, body) = common::send(&base_url, Method::GET, "/instances/4", Some(TENANT_KEY), "").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["regions"], serde_json::json!(["eu", "us"]));
    assert_eq!(json["status"]["regions"]["us"], "migrating");
    assert_eq!(json["status"]["regions"]["eu"], "ready");
    assert_eq!(json["connection"]["endpoint"], "mongodb://t1m4.cloudprovider.com:27017");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let base_url: String = common::spawn_app();

    // The body is irrelevant to lookups
    let (status, body) = common::send(&base_url, Method::GET, "/instances/5", Some(TENANT_KEY), "{}").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found");
}

#[tokio::test]
async fn negative_id_is_not_found() {
    let base_url: String = common::spawn_app();

    let (status, body) = common::send(&base_url, Method::GET, "/instances/-1", Some(TENANT_KEY), "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found");
}

#[tokio::test]
async fn out_of_range_id_is_malformed() {
    let base_url: String = common::spawn_app();

    let (status, body) = common::send(
        &base_url,
        Method::GET,
        "/instances/9223372036854775808",
        Some(TENANT_KEY),
        "",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Id parameter malformed");
}

#[tokio::test]
async fn undecodable_id_is_malformed() {
    let base_url: String = common::spawn_app();

    let (status, body) = common::send(&base_url, Method::GET, "/instances/%FF", Some(TENANT_KEY), "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Id parameter malformed");
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let base_url: String = common::spawn_app();

    let (status, body) = common::send(&base_url, Method::GET, "/instances/one", Some(TENANT_KEY), "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Id parameter malformed");

    let (status, body) = common::send(&base_url, Method::GET, "/instances/", Some(TENANT_KEY), "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing id parameter");

    let (status, body) = common::send(&base_url, Method::GET, "/instances/1/2", Some(TENANT_KEY), "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Not Found");
}

#[tokio::test]
async fn get_requires_tenant_key() {
    let base_url: String = common::spawn_app();

    common::assert_auth_enforced(&base_url, Method::GET, "/instances/2", "").await;
}
