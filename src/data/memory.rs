use crate::domain::repository::UserRepository;
use crate::domain::user::User;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, trace};

/// Read-only user store kept in insertion order. When seed data repeats a
/// `user_id`, the later row replaces the earlier one in place.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    storage: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let mut storage = Vec::with_capacity(users.len());
        for user in users {
            insert_or_replace(&mut storage, user);
        }
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }

    /// Seeds a store from a JSON array of user objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read users file {}", path.display()))?;
        let users: Vec<User> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse users file {}", path.display()))?;
        info!(path = %path.display(), count = users.len(), "Loaded users from file");
        Ok(Self::with_users(users))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_or_replace(storage: &mut Vec<User>, user: User) {
    match storage.iter_mut().find(|u| u.user_id == user.user_id) {
        Some(existing) => *existing = user,
        None => storage.push(user),
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>> {
        let storage = self.storage.read().await;
        debug!(count = storage.len(), "Listing users from memory storage");
        Ok(storage.clone())
    }

    #[instrument(skip(self))]
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let storage = self.storage.read().await;
        let user = storage.iter().find(|u| u.user_id == user_id).cloned();
        match &user {
            Some(u) => debug!(user_id = %u.user_id, "User found in storage"),
            None => trace!(user_id, "User not found in storage"),
        }
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_users_by_name(&self, name: &str) -> Result<Vec<User>> {
        let needle = name.to_lowercase();
        let storage = self.storage.read().await;
        let users: Vec<User> = storage
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        debug!(matches = users.len(), "Name search completed");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_id: &str, name: &str) -> User {
        User {
            user_id: user_id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", user_id),
            signup_date: "2024-01-01".to_string(),
            age: 30,
            height_cm: 180.0,
            weight_kg: 75.0,
            activity_level: "active".to_string(),
            health_goals: "stay fit".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_users_keeps_insertion_order() {
        let repo = InMemoryUserRepository::with_users(vec![
            user("b", "Bob"),
            user("a", "Alice"),
            user("c", "Carol"),
        ]);

        let ids: Vec<_> = repo
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.user_id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_replaces_earlier_row_in_place() {
        let repo = InMemoryUserRepository::with_users(vec![
            user("1", "First"),
            user("2", "Second"),
            user("1", "Renamed"),
        ]);

        let users = repo.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Renamed");
        assert_eq!(users[1].name, "Second");
    }

    #[tokio::test]
    async fn test_find_user_by_id() {
        let repo = InMemoryUserRepository::with_users(vec![user("123", "John Doe")]);

        let found = repo.find_user_by_id("123").await.unwrap();
        assert_eq!(found.unwrap().name, "John Doe");
        assert!(repo.find_user_by_id("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_users_by_name_is_case_insensitive_substring() {
        let repo = InMemoryUserRepository::with_users(vec![
            user("1", "John Doe"),
            user("2", "Jane Smith"),
            user("3", "Mary Jane Watson"),
        ]);

        let found = repo.find_users_by_name("jane").await.unwrap();
        let ids: Vec<_> = found.iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);

        assert!(repo.find_users_by_name("NoMatch").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_reads() {
        let repo = InMemoryUserRepository::with_users(vec![user("user-6", "Concurrent")]);

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let repo_clone = repo.clone();
                tokio::spawn(async move { repo_clone.find_user_by_id("user-6").await })
            })
            .collect();

        for handle in handles {
            let result = handle.await.unwrap().unwrap();
            assert_eq!(result.unwrap().user_id, "user-6");
        }
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("users-{}.json", uuid::Uuid::new_v4()));
        let users = vec![user("123", "John Doe"), user("456", "Jane Smith")];
        std::fs::write(&path, serde_json::to_string(&users).unwrap()).unwrap();

        let repo = InMemoryUserRepository::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let storage = repo.storage.try_read().unwrap();
        assert_eq!(*storage, users);
    }

    #[test]
    fn test_from_json_file_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("does-not-exist-users.json");
        assert!(InMemoryUserRepository::from_json_file(&path).is_err());
    }
}
