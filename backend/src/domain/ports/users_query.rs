//! Driving port for reading user records.
//!
//! Inbound adapters list and look up users through this port without touching
//! the store directly. [`crate::domain::UserService`] is the production
//! implementation.

use async_trait::async_trait;

use crate::domain::{User, UserId, UserSearch, UserServiceError};

/// Read access to user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Users matching `search`, in stored order unless a sort is requested.
    async fn list_users(&self, search: &UserSearch) -> Result<Vec<User>, UserServiceError>;

    /// The user with `id`.
    ///
    /// # Errors
    /// [`UserServiceError::NotFound`] when no record carries `id`.
    async fn find_user(&self, id: UserId) -> Result<User, UserServiceError>;

    /// Size of the whole collection.
    async fn count_users(&self) -> Result<usize, UserServiceError>;
}
