//! Driving port for changing user records.
//!
//! Every command loads the collection, applies one change and saves it back.
//! A rejected command never writes.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId, UserServiceError};

/// Create, replace and delete user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate `draft`, assign the next identifier and append the record.
    ///
    /// # Errors
    /// [`UserServiceError::Validation`] with every rejected field, or
    /// [`UserServiceError::Storage`] when the document cannot be accessed.
    async fn create_user(&self, draft: UserDraft) -> Result<User, UserServiceError>;

    /// Replace the fields of user `id` with the validated `draft`.
    ///
    /// The record keeps its own email without tripping the duplicate check.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, UserServiceError>;

    /// Remove user `id` and return the removed record.
    async fn delete_user(&self, id: UserId) -> Result<User, UserServiceError>;
}
