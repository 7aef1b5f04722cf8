// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const SET: &str = "/set/{key}/{value}";
pub const GET: &str = "/get/{key}";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
