//! CORS middleware configuration.

use axum::http::Method;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::{CorsConfig, OriginPolicy};
use crate::Result;

/// Create a CORS layer from configuration.
///
/// When any origin is allowed the request's own origin, method and headers
/// are echoed back, which stays valid when credentials are enabled. An
/// origin list with an invalid entry is a configuration error.
pub fn create_cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials);

    let layer = match config.origin_policy()? {
        OriginPolicy::Any => layer
            .allow_methods(AllowMethods::mirror_request())
            .allow_origin(AllowOrigin::mirror_request()),
        OriginPolicy::List(origins) => layer
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_origin(origins),
    };

    Ok(layer)
}
