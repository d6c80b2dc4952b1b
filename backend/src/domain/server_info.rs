//! Snapshot of server state for the info endpoint.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::user::timestamp_format::FORMAT;

/// Server time, collection size and details of the request being served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    /// Local server time as `YYYY-MM-DD HH:MM:SS`.
    pub server_time: String,
    /// Number of stored users.
    pub total_users: usize,
    /// HTTP method of the current request.
    pub request_method: String,
    /// `User-Agent` header, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ServerInfo {
    /// Capture `now` and the request details.
    #[must_use]
    pub fn new(
        now: NaiveDateTime,
        total_users: usize,
        request_method: impl Into<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            server_time: now.format(FORMAT).to_string(),
            total_users,
            request_method: request_method.into(),
            user_agent,
        }
    }
}
