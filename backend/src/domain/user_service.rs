//! User record use cases.
//!
//! [`UserService`] implements both driving ports over a [`UserStore`]. Each
//! operation is a full load, an optional in-memory change and a full save, so
//! the service itself holds no state between calls.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{UserStore, UsersCommand, UsersQuery};
use crate::domain::{
    User, UserDraft, UserId, UserSearch, UserServiceError, validate_user_form,
};

/// Identifier for the next record: one past the largest in use.
#[must_use]
pub fn next_user_id(users: &[User]) -> UserId {
    users
        .iter()
        .map(User::id)
        .max()
        .map_or(UserId::FIRST, UserId::next)
}

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> UserService<S> {
    /// Serve users from `store`, stamping records with `clock`.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.local().naive_local()
    }
}

impl<S> UserService<S>
where
    S: UserStore,
{
    async fn load(&self) -> Result<Vec<User>, UserServiceError> {
        Ok(self.store.load().await?)
    }

    async fn save(&self, users: &[User]) -> Result<(), UserServiceError> {
        Ok(self.store.save(users).await?)
    }
}

#[async_trait]
impl<S> UsersQuery for UserService<S>
where
    S: UserStore,
{
    async fn list_users(&self, search: &UserSearch) -> Result<Vec<User>, UserServiceError> {
        let users = search.apply(self.load().await?);
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    async fn find_user(&self, id: UserId) -> Result<User, UserServiceError> {
        self.load()
            .await?
            .into_iter()
            .find(|user| user.id() == id)
            .ok_or_else(|| UserServiceError::not_found(id))
    }

    async fn count_users(&self) -> Result<usize, UserServiceError> {
        Ok(self.load().await?.len())
    }
}

#[async_trait]
impl<S> UsersCommand for UserService<S>
where
    S: UserStore,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, UserServiceError> {
        let mut users = self.load().await?;
        let profile = validate_user_form(&draft, &users, None)?;
        let user = User::new(next_user_id(&users), profile).created(self.now());
        users.push(user.clone());
        self.save(&users).await?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, UserServiceError> {
        let mut users = self.load().await?;
        let index = users
            .iter()
            .position(|user| user.id() == id)
            .ok_or_else(|| UserServiceError::not_found(id))?;
        let profile = validate_user_form(&draft, &users, Some(id))?;
        let now = self.now();
        let updated = users
            .get_mut(index)
            .map(|user| {
                user.apply_update(profile, now);
                user.clone()
            })
            .ok_or_else(|| UserServiceError::not_found(id))?;
        self.save(&users).await?;
        info!(user_id = %id, "user updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, UserServiceError> {
        let mut users = self.load().await?;
        let index = users
            .iter()
            .position(|user| user.id() == id)
            .ok_or_else(|| UserServiceError::not_found(id))?;
        let removed = users.remove(index);
        self.save(&users).await?;
        info!(user_id = %id, "user deleted");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
