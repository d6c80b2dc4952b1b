//! Failures surfaced by the user service.

use serde_json::json;
use thiserror::Error as ThisError;

use super::ports::UserStoreError;
use super::{Error, UserId, ValidationErrors};

/// Why a user operation did not complete.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum UserServiceError {
    /// The submitted form was rejected; nothing was written.
    #[error("user validation failed: {0}")]
    Validation(ValidationErrors),
    /// No record carries the requested identifier.
    #[error("user {id} not found")]
    NotFound { id: UserId },
    /// The document could not be read or written.
    #[error(transparent)]
    Storage(#[from] UserStoreError),
}

impl UserServiceError {
    /// Build [`Self::NotFound`] for `id`.
    pub fn not_found(id: UserId) -> Self {
        Self::NotFound { id }
    }
}

impl From<ValidationErrors> for UserServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<UserServiceError> for Error {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::Validation(errors) => {
                let issues: Vec<_> = errors
                    .issues()
                    .iter()
                    .map(|issue| {
                        json!({
                            "field": issue.field(),
                            "code": issue.code(),
                            "message": issue.to_string(),
                        })
                    })
                    .collect();
                Error::invalid_request("user validation failed").with_details(json!({
                    "code": "validation_failed",
                    "errors": issues,
                }))
            }
            UserServiceError::NotFound { id } => Error::not_found(format!("user {id} not found")),
            UserServiceError::Storage(store) => Error::internal(store.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, UserDraft, sample_users, validate_user_form};
    use rstest::rstest;
    use serde_json::Value;

    fn validation_error() -> UserServiceError {
        let draft = UserDraft {
            name: "Ivan".to_owned(),
            email: "IVAN@example.com".to_owned(),
            age: "200".to_owned(),
            ..UserDraft::default()
        };
        let errors = validate_user_form(&draft, &sample_users(), None).expect_err("invalid form");
        UserServiceError::from(errors)
    }

    #[rstest]
    fn validation_maps_to_invalid_request_with_issue_list() {
        let error = Error::from(validation_error());

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        let details = error.details().expect("details present");
        assert_eq!(details.get("code").and_then(Value::as_str), Some("validation_failed"));
        let errors = details
            .get("errors")
            .and_then(Value::as_array)
            .expect("errors array");
        let fields: Vec<_> = errors
            .iter()
            .filter_map(|issue| issue.get("field").and_then(Value::as_str))
            .collect();
        assert_eq!(fields, ["age", "email"]);
        assert_eq!(
            errors.last().and_then(|issue| issue.get("code")).and_then(Value::as_str),
            Some("duplicate")
        );
    }

    #[rstest]
    fn not_found_names_the_identifier() {
        let error = Error::from(UserServiceError::not_found(UserId::new(999)));
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "user 999 not found");
    }

    #[rstest]
    fn storage_failures_are_internal() {
        let store = UserStoreError::io("users.json", "permission denied");
        let error = Error::from(UserServiceError::from(store));
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert!(error.details().is_none());
    }
}
