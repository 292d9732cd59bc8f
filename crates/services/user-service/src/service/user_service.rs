//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{
    is_sortable_field, sort_users, DomainError, NewUser, User, UserId, UserPatch, USER_ENTITY,
};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List users in directory order, or ordered by the named attribute
    async fn list_users(&self, sorted_by: Option<String>) -> AppResult<Vec<User>>;

    /// Store a new user; fails if a phone number is already in use
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Merge a partial update into the first user with `id`
    async fn update_user(&self, id: UserId, patch: UserPatch) -> AppResult<User>;

    /// Remove the first user with `id` and return it
    async fn delete_user(&self, id: UserId) -> AppResult<User>;

    /// Number of users in the directory
    async fn count_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self, sorted_by: Option<String>) -> AppResult<Vec<User>> {
        let mut users = self.repo.list().await?;

        if let Some(attribute) = sorted_by {
            if !is_sortable_field(&attribute) {
                tracing::debug!(attribute = %attribute, "Sorting by unknown attribute");
            }
            sort_users(&mut users, &attribute);
        }

        Ok(users)
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let id = new_user.id;
        let user = self.repo.create(User::from(new_user)).await.map_err(|e| {
            tracing::warn!(user_id = id, error = %e, "User rejected");
            e
        })?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, patch: UserPatch) -> AppResult<User> {
        let user = self
            .repo
            .update(id, patch)
            .await
            .map_err(|e| {
                tracing::warn!(user_id = id, error = %e, "User update rejected");
                e
            })?
            .ok_or_else(|| DomainError::not_found(USER_ENTITY))?;

        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<User> {
        let user = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_ENTITY))?;

        tracing::info!(user_id = id, "User deleted");
        Ok(user)
    }

    async fn count_users(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}
