//! Shared helpers for the HTTP API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clubauth::config::ServerConfig;
use clubauth::db::AccountRepository;
use clubauth::web::{create_router, AppState};
use clubauth::Database;
use serde_json::{json, Value};

/// Create a test configuration with static serving disabled.
pub fn create_test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        serve_static: false,
        static_path: "public".to_string(),
    }
}

/// Create a test server over a fresh in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let app_state = Arc::new(AppState::from_database(&db));
    let router = create_router(app_state, &create_test_config());
    let server = TestServer::new(router).expect("Failed to create test server");
    (server, db)
}

/// Create a test server over an arbitrary account repository.
pub fn create_test_server_with(accounts: Arc<dyn AccountRepository>) -> TestServer {
    let app_state = Arc::new(AppState::new(accounts));
    let router = create_router(app_state, &create_test_config());
    TestServer::new(router).expect("Failed to create test server")
}

/// Sign up a user and return the response body.
pub async fn signup_user(
    server: &TestServer,
    username: &str,
    course: &str,
    year: &str,
    password: &str,
) -> Value {
    server
        .post("/api/user/signup")
        .json(&json!({
            "username": username,
            "course": course,
            "year": year,
            "password": password,
            "confirm_password": password
        }))
        .await
        .json::<Value>()
}

/// Sign up an admin and return the response body.
pub async fn signup_admin(
    server: &TestServer,
    admin_username: &str,
    password: &str,
    role: &str,
    club: &str,
) -> Value {
    server
        .post("/api/admin/signup")
        .json(&json!({
            "admin_username": admin_username,
            "admin_password": password,
            "role": role,
            "club": club
        }))
        .await
        .json::<Value>()
}
