//! Domain primitives, services and ports.
//!
//! Purpose: define the user record model, the rules that guard it, and the
//! use cases that change it. Nothing here knows about HTTP or the file
//! system; adapters reach the domain through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic error payload.
//! - User / UserId / UserDraft / UserProfile: record model.
//! - validation and phone helpers: pure field rules.
//! - UserService: implements the `UsersQuery` and `UsersCommand` ports.

pub mod calculator;
pub mod contact;
pub mod error;
pub mod phone;
pub mod ports;
pub mod seed;
pub mod server_info;
pub mod trace_id;
pub mod user;
pub mod user_search;
pub mod user_service;
pub mod user_service_error;
pub mod validation;

pub use self::calculator::{CalculationError, Operation, calculate};
pub use self::contact::ContactMessage;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::phone::normalize_phone;
pub use self::seed::sample_users;
pub use self::server_info::ServerInfo;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDraft, UserId, UserProfile};
pub use self::user_search::{SortDirection, SortField, SortParseError, UserSearch};
pub use self::user_service::{UserService, next_user_id};
pub use self::user_service_error::UserServiceError;
pub use self::validation::{
    AGE_MAX, AGE_MIN, CITY_MAX, NAME_MAX, ValidationErrors, ValidationIssue, email_is_duplicate,
    valid_age, valid_city, valid_email, valid_name, valid_phone, validate_user_form,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use userdesk::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
