//! Auxiliary API handlers: server info, contact form and calculator.

use actix_web::http::header;
use actix_web::{HttpRequest, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{CalculationError, ContactMessage, Error, Operation, ServerInfo, calculate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ServerInfoSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Report server time, collection size and details of this request.
#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Server information", body = ServerInfoSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["site"],
    operation_id = "serverInfo"
)]
#[get("/info")]
pub async fn server_info(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<web::Json<ServerInfo>> {
    let total_users = state.users.count_users().await?;
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);
    Ok(web::Json(ServerInfo::new(
        state.clock.local().naive_local(),
        total_users,
        request.method().as_str(),
        user_agent,
    )))
}

/// Contact form submission. Only `name` is required.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    /// Sender name; required.
    #[schema(example = "Анна")]
    pub name: Option<String>,
    /// Sender email.
    #[schema(example = "anna@example.com")]
    pub email: Option<String>,
    /// Message body.
    #[schema(example = "Hello!")]
    pub message: Option<String>,
}

/// Acknowledgement of a contact form submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Acknowledgement text.
    #[schema(example = "Thank you, Анна! Your message has been sent.")]
    pub message: String,
}

/// Acknowledge a contact message. Messages are not stored.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message acknowledged", body = ContactResponse),
        (status = 400, description = "Missing name", body = ErrorSchema)
    ),
    tags = ["site"],
    operation_id = "contact"
)]
#[post("/contact")]
pub async fn contact(payload: web::Json<ContactRequest>) -> ApiResult<web::Json<ContactResponse>> {
    let ContactRequest {
        name,
        email,
        message,
    } = payload.into_inner();
    let message = ContactMessage {
        name: require(name, FieldName::new("name"))?,
        email: email.unwrap_or_default(),
        message: message.unwrap_or_default(),
    };
    info!(
        length = message.message.chars().count(),
        "contact message received"
    );
    Ok(web::Json(ContactResponse {
        message: message.acknowledgement(),
    }))
}

/// Calculator input. Operands default to `0`, the operation to `add`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CalculateRequest {
    /// Left operand.
    #[schema(example = 6.0)]
    pub a: Option<f64>,
    /// Right operand.
    #[schema(example = 1.5)]
    pub b: Option<f64>,
    /// One of `add`, `subtract`, `multiply`, `divide`.
    #[schema(example = "divide")]
    pub operation: Option<String>,
}

/// Calculator output.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    /// Result of the operation.
    #[schema(example = 4.0)]
    pub result: f64,
}

fn map_calculation_error(err: CalculationError) -> Error {
    let code = match &err {
        CalculationError::DivisionByZero => "division_by_zero",
        CalculationError::UnknownOperation(_) => "unknown_operation",
        CalculationError::NotFinite => "not_finite",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "code": code }))
}

/// Apply a two-operand arithmetic operation.
#[utoipa::path(
    post,
    path = "/api/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Result", body = CalculateResponse),
        (status = 400, description = "Division by zero or unknown operation", body = ErrorSchema)
    ),
    tags = ["site"],
    operation_id = "calculate"
)]
#[post("/calculate")]
pub async fn calculate_result(
    payload: web::Json<CalculateRequest>,
) -> ApiResult<web::Json<CalculateResponse>> {
    let CalculateRequest { a, b, operation } = payload.into_inner();
    let operation = match operation.as_deref() {
        Some(name) => name.parse::<Operation>().map_err(map_calculation_error)?,
        None => Operation::default(),
    };
    let result = calculate(a.unwrap_or(0.0), b.unwrap_or(0.0), operation)
        .map_err(map_calculation_error)?;
    Ok(web::Json(CalculateResponse { result }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use crate::domain::ports::InMemoryUserStore;
    use crate::domain::sample_users;
    use crate::inbound::http::test_utils::in_memory_state;
    use crate::inbound::http::validation::json_config;

    async fn send(request: actix_test::TestRequest) -> (StatusCode, Value) {
        let store = Arc::new(InMemoryUserStore::with_users(sample_users()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(in_memory_state(store)))
                .app_data(json_config())
                .service(
                    web::scope("/api")
                        .service(server_info)
                        .service(contact)
                        .service(calculate_result),
                ),
        )
        .await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[rstest]
    #[actix_web::test]
    async fn info_reports_request_and_collection() {
        let request = actix_test::TestRequest::get()
            .uri("/api/info")
            .insert_header((header::USER_AGENT, "curl/8.5.0"));

        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("total_users").and_then(Value::as_u64), Some(3));
        assert_eq!(body.get("request_method").and_then(Value::as_str), Some("GET"));
        assert_eq!(body.get("user_agent").and_then(Value::as_str), Some("curl/8.5.0"));
        let server_time = body.get("server_time").and_then(Value::as_str).unwrap_or_default();
        assert_eq!(server_time.len(), "2024-01-15 11:30:45".len());
    }

    #[rstest]
    #[actix_web::test]
    async fn contact_acknowledges_sender() {
        let request = actix_test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({"name": "Анна", "email": "anna@example.com", "message": "Hi"}));

        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Thank you, Анна! Your message has been sent.")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn contact_requires_a_name() {
        let request = actix_test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({"message": "Hi"}));
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.pointer("/details/field").and_then(Value::as_str), Some("name"));
    }

    #[rstest]
    #[case(json!({"a": 6, "b": 1.5, "operation": "divide"}), 4.0)]
    #[case(json!({"a": 2, "b": 3}), 5.0)]
    #[case(json!({"b": 3, "operation": "subtract"}), -3.0)]
    #[case(json!({}), 0.0)]
    #[actix_web::test]
    async fn calculates_results(#[case] payload: Value, #[case] expected: f64) {
        let request = actix_test::TestRequest::post().uri("/api/calculate").set_json(payload);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("result").and_then(Value::as_f64), Some(expected));
    }

    #[rstest]
    #[case(json!({"a": 1, "b": 0, "operation": "divide"}), "division_by_zero")]
    #[case(json!({"a": 1, "b": 2, "operation": "power"}), "unknown_operation")]
    #[actix_web::test]
    async fn rejects_invalid_calculations(#[case] payload: Value, #[case] code: &str) {
        let request = actix_test::TestRequest::post().uri("/api/calculate").set_json(payload);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.pointer("/details/code").and_then(Value::as_str), Some(code));
    }
}
