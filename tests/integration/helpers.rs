//! Shared test helpers for integration tests.
//!
//! These tests exercise the real router against a live PostgreSQL
//! instance. Point `NOTEBIN__DATABASE__URL` (or `config/test.toml`) at a
//! scratch database and run with `--ignored --test-threads=1`; every
//! `TestApp::new` wipes the shared database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use notebin_api::state::AppState;
use notebin_core::config::AppConfig;
use notebin_database::repositories::{ItemRepository, UserRepository};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    /// Item repository, for driving the sweeper directly
    pub item_repo: Arc<ItemRepository>,
}

impl TestApp {
    /// Create a new test application against a clean database
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db = notebin_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        notebin_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.into_pool();
        Self::clean_database(&db_pool).await;

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let item_repo = Arc::new(ItemRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(notebin_auth::password::PasswordHasher::new());
        let revocation = Arc::new(notebin_auth::jwt::RevocationSet::new());
        let jwt_encoder = Arc::new(notebin_auth::jwt::JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(notebin_auth::jwt::JwtDecoder::new(
            &config.auth,
            Arc::clone(&revocation),
        ));

        let account_service = Arc::new(notebin_service::account::AccountService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
        ));
        let item_service = Arc::new(notebin_service::item::ItemService::new(
            Arc::clone(&item_repo),
            config.share.clone(),
        ));

        let app_state = AppState {
            config: Arc::new(config.clone()),
            jwt_encoder,
            jwt_decoder,
            account_service,
            item_service,
        };

        let router = notebin_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
            item_repo,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        for table in ["items", "users"] {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Register a user through the API
    pub async fn register(&self, username: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/register",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self.token_request(username, password).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in token response")
            .to_string()
    }

    /// POST the form-encoded credential exchange
    pub async fn token_request(&self, username: &str, password: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/token")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(format!(
                "username={}&password={}",
                username, password
            )))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
