//! In-memory user directory.

use async_trait::async_trait;
use tokio::sync::Mutex;

use common::AppResult;
use domain::{ensure_phones_available, seed_users, User, UserId, UserPatch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every method runs as one atomic step: checks and the mutation they
/// guard happen under the same lock.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of all users in directory order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;

    /// Append a user unless one of its phones is already taken
    async fn create(&self, user: User) -> AppResult<User>;

    /// Merge `patch` into the first user with `id`; `None` if there is none
    async fn update(&self, id: UserId, patch: UserPatch) -> AppResult<Option<User>>;

    /// Remove the first user with `id`; `None` if there is none
    async fn delete(&self, id: UserId) -> AppResult<Option<User>>;
}

/// Vector-backed implementation of UserRepository
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    /// Create a store holding `users` in the given order
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Create a store preloaded with the seed records
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn position_of(users: &[User], id: UserId) -> Option<usize> {
    users.iter().position(|u| u.id == id)
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().await.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.lock().await.len())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.lock().await;

        ensure_phones_available(users.iter(), &user.phone)?;

        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> AppResult<Option<User>> {
        let mut users = self.users.lock().await;

        let Some(index) = position_of(&users, id) else {
            return Ok(None);
        };

        if let Some(phones) = &patch.phone {
            let others = users
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, other)| other);
            ensure_phones_available(others, phones)?;
        }

        let user = &mut users[index];
        user.apply(patch);
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: UserId) -> AppResult<Option<User>> {
        let mut users = self.users.lock().await;
        Ok(position_of(&users, id).map(|index| users.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use domain::PHONE_CONFLICT_MESSAGE;
    use tokio_test::{assert_err, assert_ok};

    fn user(id: UserId, phone: &[&str]) -> User {
        User {
            id,
            email: None,
            name: None,
            phone: phone.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn store() -> UserStore {
        UserStore::new(vec![user(1, &["123"]), user(2, &["456"])])
    }

    #[tokio::test]
    async fn test_create_appends_in_order() {
        let store = store();

        let created = assert_ok!(store.create(user(3, &["789"])).await);
        assert_eq!(created, user(3, &["789"]));

        let ids: Vec<_> = store.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_create_rejects_any_shared_phone() {
        let store = store();
        let before = store.list().await.unwrap();

        let err = assert_err!(store.create(user(3, &["000", "456"])).await);
        assert_eq!(err, AppError::conflict(PHONE_CONFLICT_MESSAGE));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_create_allows_duplicate_ids() {
        let store = store();
        assert_ok!(store.create(user(1, &["999"])).await);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_merges_in_place() {
        let store = store();
        let patch = UserPatch {
            name: Some("x".to_string()),
            ..Default::default()
        };

        let updated = store.update(2, patch).await.unwrap().unwrap();
        assert_eq!(updated.name.as_deref(), Some("x"));
        assert_eq!(updated.phone, vec!["456".to_string()]);

        let users = store.list().await.unwrap();
        assert_eq!(users[0], user(1, &["123"]));
        assert_eq!(users[1], updated);
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_none() {
        let store = store();
        let before = store.list().await.unwrap();

        let result = store.update(9, UserPatch::default()).await.unwrap();
        assert!(result.is_none());
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_rejects_phone_of_another_user() {
        let store = store();
        let before = store.list().await.unwrap();
        let patch = UserPatch {
            name: Some("x".to_string()),
            phone: Some(vec!["123".to_string()]),
            ..Default::default()
        };

        let err = assert_err!(store.update(2, patch).await);
        assert_eq!(err, AppError::conflict(PHONE_CONFLICT_MESSAGE));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_may_keep_own_phone() {
        let store = store();
        let patch = UserPatch {
            phone: Some(vec!["456".to_string(), "457".to_string()]),
            ..Default::default()
        };

        let updated = store.update(2, patch).await.unwrap().unwrap();
        assert_eq!(updated.phone.len(), 2);
    }

    #[tokio::test]
    async fn test_update_touches_first_match_only() {
        let store = UserStore::new(vec![user(7, &["1"]), user(7, &["2"])]);
        let patch = UserPatch {
            name: Some("first".to_string()),
            ..Default::default()
        };

        store.update(7, patch).await.unwrap();

        let users = store.list().await.unwrap();
        assert_eq!(users[0].name.as_deref(), Some("first"));
        assert_eq!(users[1].name, None);
    }

    #[tokio::test]
    async fn test_delete_removes_first_match() {
        let store = UserStore::new(vec![user(1, &["1"]), user(2, &["2"]), user(1, &["3"])]);

        let removed = store.delete(1).await.unwrap();
        assert_eq!(removed, Some(user(1, &["1"])));

        let users = store.list().await.unwrap();
        assert_eq!(users, vec![user(2, &["2"]), user(1, &["3"])]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_returns_none() {
        let store = store();
        assert_eq!(store.delete(42).await.unwrap(), None);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seeded_store_is_not_empty() {
        assert_eq!(
            UserStore::seeded().count().await.unwrap(),
            seed_users().len()
        );
        assert_eq!(UserStore::default().count().await.unwrap(), 0);
    }
}
