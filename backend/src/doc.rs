//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers in [`crate::inbound::http::schemas`]. The document
//! backs Swagger UI in debug builds and is printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::payload::UserRequest;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "Create, read, update, and delete users held in process memory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::root::greeting,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorSchema, UserRequest)),
    tags(
        (name = "users", description = "User resource operations"),
        (name = "root", description = "Service greeting"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
