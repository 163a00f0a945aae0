//! Router configuration for Web API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::dto::{
    CreateScriptRequest, DeleteResponse, ScriptResponse, UpdateScriptRequest, WelcomeResponse,
};
use super::error::{ErrorBody, ErrorCode, ErrorDetail};
use super::handlers::{self, AppState};
use super::middleware::create_cors_layer;
use crate::config::CorsConfig;
use crate::Result;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(title = "ProPrompter API", description = "Teleprompter script storage"),
    paths(
        handlers::root,
        handlers::health_check,
        handlers::list_scripts,
        handlers::create_script,
        handlers::get_script,
        handlers::update_script,
        handlers::delete_script,
    ),
    components(schemas(
        CreateScriptRequest,
        UpdateScriptRequest,
        ScriptResponse,
        DeleteResponse,
        WelcomeResponse,
        ErrorBody,
        ErrorDetail,
        ErrorCode,
    )),
    tags(
        (name = "Scripts", description = "Script CRUD"),
        (name = "System", description = "Greeting and liveness")
    )
)]
pub struct ApiDoc;

/// Create the main API router.
///
/// Collection routes answer with and without a trailing slash. Fails when
/// the CORS origin list is invalid.
pub fn create_router(app_state: Arc<AppState>, cors: &CorsConfig) -> Result<Router> {
    let cors_layer = create_cors_layer(cors)?;

    let script_routes = Router::new()
        .route(
            "/scripts",
            get(handlers::list_scripts).post(handlers::create_script),
        )
        .route(
            "/scripts/",
            get(handlers::list_scripts).post(handlers::create_script),
        )
        .route(
            "/scripts/:id",
            get(handlers::get_script)
                .put(handlers::update_script)
                .patch(handlers::update_script)
                .delete(handlers::delete_script),
        )
        .with_state(app_state);

    Ok(Router::new()
        .route("/", get(handlers::root))
        .merge(script_routes)
        .merge(create_health_router())
        .merge(create_swagger_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer)
                .layer(CompressionLayer::new()),
        ))
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(handlers::health_check))
}

/// Swagger UI at `/docs`, document at `/openapi.json`.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/docs")
        .url("/openapi.json", ApiDoc::openapi())
        .into()
}
