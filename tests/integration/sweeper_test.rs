//! Integration tests for the expiration sweeper.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, Utc};

use notebin_worker::jobs::ExpirationSweeper;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_sweep_removes_exactly_the_expired_set() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let create = |title: &str, expiration: Option<chrono::DateTime<Utc>>| {
        let mut body = serde_json::json!({"title": title, "content": "c"});
        if let Some(exp) = expiration {
            body["expiration_date"] = serde_json::json!(exp.to_rfc3339());
        }
        body
    };

    let now = Utc::now();
    let expired = app
        .request(
            "POST",
            "/items/",
            Some(create("expired", Some(now - Duration::hours(1)))),
            Some(&token),
        )
        .await;
    let future = app
        .request(
            "POST",
            "/items/",
            Some(create("future", Some(now + Duration::hours(1)))),
            Some(&token),
        )
        .await;
    let eternal = app
        .request("POST", "/items/", Some(create("eternal", None)), Some(&token))
        .await;

    let expired_id = expired.body.get("id").unwrap().as_i64().unwrap();
    let future_id = future.body.get("id").unwrap().as_i64().unwrap();
    let eternal_id = eternal.body.get("id").unwrap().as_i64().unwrap();

    let sweeper = ExpirationSweeper::new(Arc::clone(&app.item_repo), "0 0 * * * *".to_string());
    let removed = sweeper.sweep(Utc::now()).await.unwrap();
    assert_eq!(removed, 1);

    let response = app
        .request("GET", &format!("/items/{}", expired_id), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    for id in [future_id, eternal_id] {
        let response = app
            .request("GET", &format!("/items/{}", id), None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_full_expiration_scenario() {
    // register → token → create already-expired item → absent from the
    // listing → still fetchable by id → sweep → fetch now fails.
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .request(
            "POST",
            "/items/",
            Some(serde_json::json!({
                "title": "t",
                "content": "c",
                "expiration_date": (Utc::now() - Duration::hours(1)).to_rfc3339(),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let id = response.body.get("id").unwrap().as_i64().unwrap();

    let listed = app.request("GET", "/items/", None, None).await;
    assert!(
        listed
            .body
            .as_array()
            .unwrap()
            .iter()
            .all(|i| i.get("id").unwrap().as_i64() != Some(id))
    );

    let fetched = app
        .request("GET", &format!("/items/{}", id), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);

    let sweeper = ExpirationSweeper::new(Arc::clone(&app.item_repo), "0 0 * * * *".to_string());
    sweeper.sweep(Utc::now()).await.unwrap();

    let fetched = app
        .request("GET", &format!("/items/{}", id), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_sweep_on_empty_store_is_a_noop() {
    let app = helpers::TestApp::new().await;

    let sweeper = ExpirationSweeper::new(Arc::clone(&app.item_repo), "0 0 * * * *".to_string());
    let removed = sweeper.sweep(Utc::now()).await.unwrap();
    assert_eq!(removed, 0);
}
