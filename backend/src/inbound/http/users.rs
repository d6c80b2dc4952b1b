//! Users API handlers.
//!
//! ```text
//! GET    /api/users?q=ivan&minAge=20&maxAge=40&sort=age&order=desc
//! POST   /api/users {"name":"Иван Иванов","email":"ivan@example.com","age":25}
//! GET    /api/users/1
//! PUT    /api/users/1 {"name":"Иван Иванов","email":"ivan@example.com","age":26}
//! DELETE /api/users/1
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, SortDirection, SortField, User, UserDraft, UserSearch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, age_text, parse_age_bound, parse_query_value, parse_user_id, require,
};

const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");
const AGE: FieldName = FieldName::new("age");
const MIN_AGE: FieldName = FieldName::new("minAge");
const MAX_AGE: FieldName = FieldName::new("maxAge");
const SORT: FieldName = FieldName::new("sort");
const ORDER: FieldName = FieldName::new("order");

/// Body for creating or replacing a user.
///
/// `name`, `email` and `age` are required; `age` may be a number or a string
/// of digits. `phone` and `city` default to empty.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    /// Full name; required.
    #[schema(example = "Иван Иванов")]
    pub name: Option<String>,
    /// Email address; required and unique ignoring case.
    #[schema(example = "ivan@example.com")]
    pub email: Option<String>,
    /// Age in years; required.
    #[schema(value_type = Object, example = 25)]
    pub age: Option<Value>,
    /// Phone number in any accepted notation.
    #[schema(example = "8 999 123 45 67")]
    pub phone: Option<String>,
    /// City.
    #[schema(example = "Москва")]
    pub city: Option<String>,
}

impl TryFrom<UserRequest> for UserDraft {
    type Error = Error;

    fn try_from(value: UserRequest) -> Result<Self, Self::Error> {
        let name = require(value.name, NAME)?;
        let email = require(value.email, EMAIL)?;
        let age = age_text(require(value.age, AGE)?, AGE)?;
        Ok(Self {
            name,
            email,
            age,
            phone: value.phone.unwrap_or_default(),
            city: value.city.unwrap_or_default(),
        })
    }
}

/// Filters and ordering for `GET /api/users`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// Case-insensitive text matched against name, email, city and phone.
    pub q: Option<String>,
    /// Inclusive lower age bound.
    pub min_age: Option<String>,
    /// Inclusive upper age bound.
    pub max_age: Option<String>,
    /// One of `id`, `name`, `email`, `age`, `city`.
    pub sort: Option<String>,
    /// `asc` (default) or `desc`.
    pub order: Option<String>,
}

impl TryFrom<UserListQuery> for UserSearch {
    type Error = Error;

    fn try_from(value: UserListQuery) -> Result<Self, Self::Error> {
        let min_age = parse_age_bound(value.min_age.as_deref(), MIN_AGE)?;
        let max_age = parse_age_bound(value.max_age.as_deref(), MAX_AGE)?;
        let field = parse_query_value::<SortField>(value.sort.as_deref(), SORT)?;
        let direction = parse_query_value::<SortDirection>(value.order.as_deref(), ORDER)?;
        let sort = match (field, direction) {
            (Some(field), direction) => Some((field, direction.unwrap_or_default())),
            // Ordering alone applies to stored (id) order.
            (None, Some(direction)) => Some((SortField::Id, direction)),
            (None, None) => None,
        };
        Ok(Self {
            query: value.q,
            min_age,
            max_age,
            sort,
        })
    }
}

/// Confirmation returned by write operations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    /// What happened.
    #[schema(example = "User added successfully")]
    pub message: String,
    /// The affected record.
    #[schema(value_type = UserSchema)]
    pub user: User,
}

impl UserEnvelope {
    fn new(message: &str, user: User) -> Self {
        Self {
            message: message.to_owned(),
            user,
        }
    }
}

/// List users, optionally filtered and sorted.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use userdesk::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    params(UserListQuery),
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<UserListQuery>,
) -> ApiResult<web::Json<Vec<User>>> {
    let search = UserSearch::try_from(query.into_inner())?;
    let users = state.users.list_users(&search).await?;
    Ok(web::Json(users))
}

async fn create(state: &HttpState, payload: UserRequest) -> ApiResult<HttpResponse> {
    let draft = UserDraft::try_from(payload)?;
    let user = state.commands.create_user(draft).await?;
    Ok(HttpResponse::Created().json(UserEnvelope::new("User added successfully", user)))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Missing field or validation failure", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    create(&state, payload.into_inner()).await
}

/// Create a user through the legacy path. Behaves exactly like
/// `POST /api/users`.
#[utoipa::path(
    post,
    path = "/api/users/add",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Missing field or validation failure", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "addUser"
)]
#[post("/users/add")]
pub async fn add_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    create(&state, payload.into_inner()).await
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let user = state.users.find_user(id).await?;
    Ok(web::Json(user))
}

/// Replace a user's fields.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 400, description = "Missing field or validation failure", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let id = parse_user_id(&path)?;
    let draft = UserDraft::try_from(payload.into_inner())?;
    let user = state.commands.update_user(id, draft).await?;
    Ok(web::Json(UserEnvelope::new("User updated successfully", user)))
}

/// Delete a user, returning the removed record.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = UserEnvelope),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let id = parse_user_id(&path)?;
    let user = state.commands.delete_user(id).await?;
    Ok(web::Json(UserEnvelope::new("User deleted successfully", user)))
}
