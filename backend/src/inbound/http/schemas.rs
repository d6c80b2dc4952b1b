//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their serialised shape and register under the domain
//! type's path via `#[schema(as = ...)]`.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "user validation failed")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level details, such as `{"code": "validation_failed", "errors": [...]}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1, minimum = 1)]
    id: u64,
    #[schema(example = "Иван Иванов")]
    name: String,
    #[schema(example = "ivan@example.com")]
    email: String,
    #[schema(example = 25, minimum = 0, maximum = 150)]
    age: u8,
    /// Canonical `+7 (XXX) XXX-XX-XX` number, or empty.
    #[schema(example = "+7 (999) 123-45-67")]
    phone: String,
    #[schema(example = "Москва")]
    city: String,
    /// Local time, omitted when unset.
    #[schema(example = "2024-01-15 14:30:45")]
    created_at: Option<String>,
    #[schema(example = "2024-01-16 09:00:00")]
    updated_at: Option<String>,
}

/// OpenAPI schema for [`crate::domain::ServerInfo`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ServerInfo)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ServerInfoSchema {
    #[schema(example = "2024-01-15 14:30:45")]
    server_time: String,
    #[schema(example = 3)]
    total_users: usize,
    #[schema(example = "GET")]
    request_method: String,
    user_agent: Option<String>,
}
