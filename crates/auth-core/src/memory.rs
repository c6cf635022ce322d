//! 인메모리 사용자 저장소.
//!
//! 데이터베이스가 설정되지 않은 환경과 테스트에서 사용합니다.
//! 중복 검사와 삽입을 하나의 쓰기 잠금 안에서 수행하므로
//! 동시 회원가입에서도 활성 사용자 이름의 유일성이 유지됩니다.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{NewUser, User, UserStore};
use crate::error::StoreError;

/// 인메모리 사용자 저장소.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    // 식별자는 index + 1 (물리 삭제가 없으므로 안정적)
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 탈퇴 사용자를 포함한 전체 사용자 수.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// 식별자로 조회 (탈퇴 사용자 포함).
    pub async fn get(&self, id: i64) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_active_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.is_active() && u.username == username)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users
            .iter()
            .any(|u| u.is_active() && u.username == user.username)
        {
            return Err(StoreError::Conflict);
        }

        let id = users.len() as i64 + 1;
        let user = user.into_user(id);
        users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|u| u.id == user.id && u.is_active())
            .ok_or(StoreError::NotFound)?;

        stored.password_hash = user.password_hash.clone();
        stored.updated_at = user.updated_at;
        stored.removed_at = user.removed_at;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryUserStore::new();
        let now = Utc::now();

        let a = store.insert(NewUser::new("alpha", "h1".into(), now)).await.unwrap();
        let b = store.insert(NewUser::new("bravo", "h2".into(), now)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_active_username_conflicts() {
        let store = InMemoryUserStore::new();
        let now = Utc::now();

        store.insert(NewUser::new("dupuser", "h".into(), now)).await.unwrap();
        let result = store.insert(NewUser::new("dupuser", "h".into(), now)).await;

        assert_eq!(result.unwrap_err(), StoreError::Conflict);
    }

    #[tokio::test]
    async fn test_removed_user_hidden_and_name_reusable() {
        let store = InMemoryUserStore::new();
        let now = Utc::now();

        let mut user = store.insert(NewUser::new("leaver", "h".into(), now)).await.unwrap();
        user.remove(now);
        store.update(&user).await.unwrap();

        assert!(store.find_active_by_username("leaver").await.unwrap().is_none());

        let again = store.insert(NewUser::new("leaver", "h2".into(), now)).await.unwrap();
        assert_eq!(again.id, 2);
        assert!(store.get(1).await.unwrap().removed_at.is_some());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = InMemoryUserStore::new();
        let ghost = NewUser::new("ghost", "h".into(), Utc::now()).into_user(42);

        assert_eq!(store.update(&ghost).await.unwrap_err(), StoreError::NotFound);
    }

    #[tokio::test]
    async fn test_stale_update_does_not_revive_removed_user() {
        let store = InMemoryUserStore::new();
        let now = Utc::now();

        let original = store.insert(NewUser::new("victim", "h1".into(), now)).await.unwrap();
        let mut stale = original.clone();

        let mut removed = original;
        removed.remove(now);
        store.update(&removed).await.unwrap();
        store.insert(NewUser::new("victim", "h2".into(), now)).await.unwrap();

        stale.update_password("h3".into(), now);
        assert_eq!(store.update(&stale).await.unwrap_err(), StoreError::NotFound);

        let first = store.get(1).await.unwrap();
        assert!(first.removed_at.is_some());
        assert_eq!(first.password_hash, "h1");

        let active = store.find_active_by_username("victim").await.unwrap().unwrap();
        assert_eq!(active.id, 2);
        assert_eq!(active.password_hash, "h2");
    }

    #[tokio::test]
    async fn test_concurrent_inserts_single_winner() {
        let store = Arc::new(InMemoryUserStore::new());
        let now = Utc::now();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.insert(NewUser::new("racer", "h".into(), now)).await
                })
            })
            .collect();

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }

        assert_eq!(ok, 1);
        assert_eq!(store.len().await, 1);
    }
}
