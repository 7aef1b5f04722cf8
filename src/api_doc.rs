use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "redis-kv-proxy API",
        version = "0.1.0",
        description = "Plain-text HTTP front-end for Redis SET and GET"
    ),
    paths(
        handlers::health::health_handler,
        handlers::set::set_handler,
        handlers::get::get_handler
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "kv", description = "Key-value store operations")
    )
)]
pub struct ApiDoc;
