mod common;

use serde_json::Value;

use common::{STUDENT_EMAIL, STUDENT_SECRET, login_body};

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["user_directory"]["status"], "ok");
    assert_eq!(json["checks"]["session_store"]["status"], "ok");
    assert_eq!(
        json["checks"]["user_directory"]["message"],
        "3 accounts, 0 locked"
    );
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::server();

    let json = server.get("/health").await.json::<Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("user_directory").is_some());
    assert!(json["checks"].get("session_store").is_some());
}

#[tokio::test]
async fn test_health_counts_sessions() {
    let server = common::server();
    server
        .post("/api/login")
        .json(&login_body(STUDENT_EMAIL, STUDENT_SECRET))
        .await
        .assert_status_ok();

    let json = server.get("/health").await.json::<Value>();

    assert_eq!(
        json["checks"]["session_store"]["message"],
        "1 active session(s)"
    );
}
