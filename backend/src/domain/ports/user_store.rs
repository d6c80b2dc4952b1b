//! Driven port for the user record document.
//!
//! The store loads and saves the whole collection at once. There is no
//! partial update and no locking: each call sees whatever the last completed
//! save wrote.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{User, sample_users};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user store adapters.
    pub enum UserStoreError {
        /// The document could not be read or written.
        Io { path: String, message: String } =>
            "user document '{path}' is not accessible: {message}",
        /// The document exists but is not a valid user collection.
        Parse { path: String, message: String } =>
            "user document '{path}' is corrupt: {message}",
    }
}

/// Whole-collection persistence for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load the full collection in stored order.
    ///
    /// When no document exists yet the adapter writes and returns
    /// [`sample_users`].
    async fn load(&self) -> Result<Vec<User>, UserStoreError>;

    /// Replace the stored collection with `users`.
    async fn save(&self, users: &[User]) -> Result<(), UserStoreError>;
}

const IN_MEMORY_PATH: &str = "<memory>";

/// Process-local store used by tests and local experiments.
///
/// Starts without a document, so the first load bootstraps the sample users
/// exactly like the file adapter.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    document: Mutex<Option<Vec<User>>>,
    saves: AtomicUsize,
}

impl InMemoryUserStore {
    /// Empty store with no document yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            document: Mutex::new(Some(users)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Current stored collection, if one has been written.
    pub fn snapshot(&self) -> Option<Vec<User>> {
        self.document.lock().ok().and_then(|guard| guard.clone())
    }

    /// Number of completed saves, bootstrap included.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Acquire)
    }

    fn poisoned() -> UserStoreError {
        UserStoreError::io(IN_MEMORY_PATH, "store lock poisoned")
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn load(&self) -> Result<Vec<User>, UserStoreError> {
        let mut document = self.document.lock().map_err(|_| Self::poisoned())?;
        if let Some(users) = document.as_ref() {
            return Ok(users.clone());
        }
        let seeded = sample_users();
        *document = Some(seeded.clone());
        self.saves.fetch_add(1, Ordering::AcqRel);
        Ok(seeded)
    }

    async fn save(&self, users: &[User]) -> Result<(), UserStoreError> {
        let mut document = self.document.lock().map_err(|_| Self::poisoned())?;
        *document = Some(users.to_vec());
        self.saves.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}
