//! Test helpers for Web API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use proprompter::config::CorsConfig;
use proprompter::web::{create_router, AppState};
use proprompter::Database;

/// Create a test server over an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let server = create_test_server_with_state(AppState::new(db.clone()));
    (server, db)
}

/// Create a test server over the given state.
pub fn create_test_server_with_state(state: AppState) -> TestServer {
    let router = create_router(Arc::new(state), &CorsConfig::default())
        .expect("Failed to create router");
    TestServer::new(router).expect("Failed to create test server")
}

/// Create a script through the API and return the response body.
pub async fn create_script(server: &TestServer, body: Value) -> Value {
    let response = server.post("/scripts").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Create a script with only content set.
pub async fn create_script_with_content(server: &TestServer, content: &str) -> Value {
    create_script(server, json!({ "content": content })).await
}
