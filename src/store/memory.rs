//! In-process `AccountStore`, for tests and `memory://` runs.

use super::AccountStore;
use crate::error::AppError;
use crate::model::{Account, AccountPayload};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryAccountStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Last id handed out; ids start at 1 and are never reused.
    last_id: i64,
    rows: BTreeMap<i64, Account>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, payload: AccountPayload) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let account = Account::from_payload(inner.last_id, payload);
        inner.rows.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find(&self, id: i64) -> Result<Option<Account>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, account: &Account) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        if let Some(row) = inner.rows.get_mut(&account.id) {
            *row = account.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> AccountPayload {
        AccountPayload {
            name: name.into(),
            email: format!("{}@example.com", name),
            address: "1 Main St".into(),
            phone_number: None,
            date_joined: None,
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_once_and_never_reused() -> Result<(), AppError> {
        let store = MemoryAccountStore::new();
        let a = store.create(payload("a")).await?;
        let b = store.create(payload("b")).await?;
        assert_eq!((a.id, b.id), (1, 2));
        store.delete(b.id).await?;
        let c = store.create(payload("c")).await?;
        assert_eq!(c.id, 3);
        Ok(())
    }

    #[tokio::test]
    async fn find_missing_is_none() -> Result<(), AppError> {
        let store = MemoryAccountStore::new();
        assert_eq!(store.find(0).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_and_ignores_unknown_ids() -> Result<(), AppError> {
        let store = MemoryAccountStore::new();
        let mut a = store.create(payload("a")).await?;
        a.name = "renamed".into();
        store.update(&a).await?;
        assert_eq!(store.find(a.id).await?.map(|x| x.name), Some("renamed".to_string()));

        let ghost = Account { id: 42, ..a };
        store.update(&ghost).await?;
        assert_eq!(store.find(42).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent_and_all_lists_everything() -> Result<(), AppError> {
        let store = MemoryAccountStore::new();
        for name in ["a", "b", "c"] {
            store.create(payload(name)).await?;
        }
        store.delete(2).await?;
        store.delete(2).await?;
        store.delete(0).await?;
        let names: Vec<String> = store.all().await?.into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["a", "c"]);
        Ok(())
    }
}
