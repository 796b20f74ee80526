//! Process-local store
//!
//! Keeps users and cards in insertion order behind a single `RwLock`.
//! Used when no `DATABASE_URL` is configured and by the test suite.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Card, NewCard, NewUser, ProfileUpdate, Repository, StoreError, User};

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    cards: Vec<Card>,
}

/// In-memory repository; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("email".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
            name: user.name,
            about: user.about,
            avatar: user.avatar,
            created_at: now,
            updated_at: now,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn update_user_profile(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Option<User>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(about) = update.about {
            user.about = about;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn update_user_avatar(
        &self,
        id: Uuid,
        avatar: String,
    ) -> Result<Option<User>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.avatar = avatar;
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn create_card(&self, card: NewCard) -> Result<Card, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.users.iter().any(|u| u.id == card.owner) {
            return Err(StoreError::NotFound);
        }

        let card = Card {
            id: Uuid::new_v4(),
            name: card.name,
            link: card.link,
            owner: card.owner,
            likes: Vec::new(),
            created_at: Utc::now(),
        };
        inner.cards.push(card.clone());
        Ok(card)
    }

    async fn list_cards(&self) -> Result<Vec<Card>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.cards.iter().rev().cloned().collect())
    }

    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.cards.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_card(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.cards.len();
        inner.cards.retain(|c| c.id != id);
        Ok(inner.cards.len() != before)
    }

    async fn add_like(&self, card_id: Uuid, user_id: Uuid) -> Result<Option<Card>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(card) = inner.cards.iter_mut().find(|c| c.id == card_id) else {
            return Ok(None);
        };
        if !card.likes.contains(&user_id) {
            card.likes.push(user_id);
        }
        Ok(Some(card.clone()))
    }

    async fn remove_like(
        &self,
        card_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Card>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(card) = inner.cards.iter_mut().find(|c| c.id == card_id) else {
            return Ok(None);
        };
        card.likes.retain(|id| *id != user_id);
        Ok(Some(card.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn new_user(email: &str) -> NewUser {
        NewUser::new(email.to_string(), "$2b$04$hash".to_string(), None, None, None)
    }

    fn new_card(owner: Uuid, name: &str) -> NewCard {
        NewCard {
            name: name.to_string(),
            link: "https://example.com/a.jpg".to_string(),
            owner,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        store.create_user(new_user("a@b.com")).await.unwrap();
        let result = store.create_user(new_user("a@b.com")).await;
        assert_matches!(result, Err(StoreError::Duplicate(field)) if field == "email");
    }

    #[tokio::test]
    async fn test_find_user_by_email_and_id() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user("a@b.com")).await.unwrap();

        let by_email = store.find_user_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);
        let by_id = store.find_user_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@b.com");
        assert!(store.find_user_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_profile_update_keeps_missing_fields() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user("a@b.com")).await.unwrap();

        let update = ProfileUpdate {
            name: Some("Alice".to_string()),
            about: None,
        };
        let updated = store.update_user_profile(user.id, update).await.unwrap().unwrap();
        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.about, user.about);

        let missing = store
            .update_user_profile(Uuid::new_v4(), ProfileUpdate::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_likes_behave_as_a_set() {
        let store = MemoryStore::new();
        let owner = store.create_user(new_user("owner@b.com")).await.unwrap().id;
        let fan = Uuid::new_v4();
        let card = store.create_card(new_card(owner, "Baikal")).await.unwrap();

        store.add_like(card.id, fan).await.unwrap();
        let liked = store.add_like(card.id, fan).await.unwrap().unwrap();
        assert_eq!(liked.likes, vec![fan]);

        let unliked = store.remove_like(card.id, fan).await.unwrap().unwrap();
        assert!(unliked.likes.is_empty());
        let again = store.remove_like(card.id, fan).await.unwrap().unwrap();
        assert!(again.likes.is_empty());

        assert!(store.add_like(Uuid::new_v4(), fan).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cards_listed_newest_first_and_deleted() {
        let store = MemoryStore::new();
        let owner = store.create_user(new_user("owner@b.com")).await.unwrap().id;
        let first = store.create_card(new_card(owner, "First")).await.unwrap();
        let second = store.create_card(new_card(owner, "Second")).await.unwrap();

        let ids: Vec<Uuid> = store.list_cards().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        assert!(store.delete_card(first.id).await.unwrap());
        assert!(!store.delete_card(first.id).await.unwrap());
        assert_eq!(store.list_cards().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_card_for_unknown_owner_is_rejected() {
        let store = MemoryStore::new();
        let result = store.create_card(new_card(Uuid::new_v4(), "Orphan")).await;
        assert_matches!(result, Err(StoreError::NotFound));
        assert!(store.list_cards().await.unwrap().is_empty());
    }
}
