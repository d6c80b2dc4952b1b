//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the schema wrappers that describe domain types ([`ErrorSchema`],
//! [`ErrorCodeSchema`], [`UserSchema`], [`ServerInfoSchema`]) without coupling
//! the domain to utoipa.
//!
//! The document is served by Swagger UI in debug builds and printed by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ServerInfoSchema, UserSchema};
use crate::inbound::http::site::{
    CalculateRequest, CalculateResponse, ContactRequest, ContactResponse,
};
use crate::inbound::http::users::{UserEnvelope, UserRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userdesk API",
        description = "Create, search, update and delete user records kept in a JSON document."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::add_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::site::server_info,
        crate::inbound::http::site::contact,
        crate::inbound::http::site::calculate_result,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        ServerInfoSchema,
        UserRequest,
        UserEnvelope,
        ContactRequest,
        ContactResponse,
        CalculateRequest,
        CalculateResponse,
    )),
    tags(
        (name = "users", description = "User record management"),
        (name = "site", description = "Server info, contact form and calculator"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
