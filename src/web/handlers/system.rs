//! Root greeting and liveness handlers.

use axum::Json;

use crate::web::dto::WelcomeResponse;

/// Greeting shown at the root path.
pub const WELCOME_MESSAGE: &str = "Welcome to ProPrompter API";

/// Root greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Greeting", body = WelcomeResponse)
    )
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Liveness probe. Does not touch the store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Process is up", body = String)
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
