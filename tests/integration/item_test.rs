//! Integration tests for item lifecycle and ownership scoping.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_and_get_item() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .request(
            "POST",
            "/items/",
            Some(serde_json::json!({
                "title": "groceries",
                "content": "milk, eggs",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let id = response.body.get("id").unwrap().as_i64().unwrap();
    assert_eq!(
        response.body.get("owner_username").unwrap().as_str().unwrap(),
        "alice"
    );
    let short_url = response.body.get("short_url").unwrap().as_str().unwrap();
    assert!(
        short_url.ends_with(&format!("/{}", id)),
        "share URL should end with the item id: {short_url}"
    );
    assert!(response.body.get("expiration_date").unwrap().is_null());

    let response = app
        .request("GET", &format!("/items/{}", id), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("title").unwrap().as_str().unwrap(),
        "groceries"
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_delete_by_non_owner_is_not_found() {
    let app = helpers::TestApp::new().await;
    app.register("owner", "pw1").await;
    app.register("intruder", "pw2").await;
    let owner_token = app.login("owner", "pw1").await;
    let intruder_token = app.login("intruder", "pw2").await;

    let response = app
        .request(
            "POST",
            "/items/",
            Some(serde_json::json!({"title": "mine", "content": "secret"})),
            Some(&owner_token),
        )
        .await;
    let id = response.body.get("id").unwrap().as_i64().unwrap();

    // Not-owned and nonexistent are indistinguishable.
    let response = app
        .request(
            "DELETE",
            &format!("/items/{}", id),
            None,
            Some(&intruder_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/items/{}", id), None, Some(&owner_token))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("DELETE", &format!("/items/{}", id), None, Some(&owner_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_expired_item_listed_vs_fetched() {
    // Listing filters expired items but direct fetch by id does not; the
    // asymmetry is intentional and pinned here.
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let expired_at = Utc::now() - Duration::hours(1);
    let response = app
        .request(
            "POST",
            "/items/",
            Some(serde_json::json!({
                "title": "t",
                "content": "c",
                "expiration_date": expired_at.to_rfc3339(),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let id = response.body.get("id").unwrap().as_i64().unwrap();

    let response = app.request("GET", "/items/", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let listed = response.body.as_array().unwrap();
    assert!(
        listed.iter().all(|i| i.get("id").unwrap().as_i64() != Some(id)),
        "expired item must not appear in the listing"
    );

    let response = app
        .request("GET", &format!("/items/{}", id), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_list_respects_skip_and_limit() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let mut ids = Vec::new();
    for n in 0..3 {
        let response = app
            .request(
                "POST",
                "/items/",
                Some(serde_json::json!({
                    "title": format!("item-{n}"),
                    "content": "c",
                })),
                Some(&token),
            )
            .await;
        ids.push(response.body.get("id").unwrap().as_i64().unwrap());
    }

    let response = app
        .request("GET", "/items/?skip=1&limit=1", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let listed = response.body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    // Insertion order is stable, so skip=1 lands on the second item.
    assert_eq!(listed[0].get("id").unwrap().as_i64().unwrap(), ids[1]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_get_nonexistent_item_is_not_found() {
    let app = helpers::TestApp::new().await;
    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let response = app
        .request("GET", "/items/999999", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
