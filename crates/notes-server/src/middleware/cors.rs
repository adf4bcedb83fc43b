//! CORS policy built from configuration.

use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

use crate::config::AllowedOrigins;

/// Build the CORS layer.
///
/// A wildcard policy cannot carry credentials, so `Any` allows every
/// origin, method and header without them. An explicit origin list allows
/// credentials and mirrors the preflight's requested method and headers.
pub fn build_cors_layer(allowed_origins: &AllowedOrigins) -> CorsLayer {
    match allowed_origins {
        AllowedOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        AllowedOrigins::List(origins) => CorsLayer::new()
            .allow_origin(origins.clone())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
    }
}
