//! In-process account storage.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::account::{Account, AccountRepository};
use crate::error::Result;

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Account>,
}

/// Account repository kept in memory, used when no database is configured.
///
/// Identifiers start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryAccountRepository {
    table: RwLock<Table>,
}

impl MemoryAccountRepository {
    /// Create an empty [`MemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn save(&self, mut account: Account) -> Result<Account> {
        let mut table = self.table.write().await;

        let id = match account.id {
            Some(id) => {
                table.last_id = table.last_id.max(id);
                id
            },
            None => {
                table.last_id += 1;
                table.last_id
            },
        };
        account.id = Some(id);
        table.rows.insert(id, account.clone());

        Ok(account)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_document(&self, document: &str) -> Result<Option<Account>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|account| account.document == document)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn delete_by_document(&self, document: &str) -> Result<()> {
        self.table
            .write()
            .await
            .rows
            .retain(|_, account| account.document != document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "05623514658";
    const PHONE: &str = "93988562536";

    #[tokio::test]
    async fn test_save_assigns_ids() {
        let repo = MemoryAccountRepository::new();

        let first = repo.save(Account::new("First", DOCUMENT, PHONE)).await.unwrap();
        let second = repo.save(Account::new("Second", DOCUMENT, PHONE)).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        // Ids are not reused after a deletion.
        repo.delete_by_id(2).await.unwrap();
        let third = repo.save(Account::new("Third", DOCUMENT, PHONE)).await.unwrap();
        assert_eq!(third.id, Some(3));

        assert_eq!(repo.find_all().await.unwrap(), vec![first, third]);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_row() {
        let repo = MemoryAccountRepository::new();

        let saved = repo.save(Account::new("Test", DOCUMENT, PHONE)).await.unwrap();
        let replaced = repo
            .save(Account {
                name: "update".into(),
                ..saved.clone()
            })
            .await
            .unwrap();

        assert_eq!(replaced.id, saved.id);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        assert_eq!(
            repo.find_by_id(1).await.unwrap().map(|a| a.name),
            Some("update".to_owned())
        );
    }

    #[tokio::test]
    async fn test_find_and_delete_by_document() {
        let repo = MemoryAccountRepository::new();

        let first = repo.save(Account::new("First", DOCUMENT, PHONE)).await.unwrap();
        repo.save(Account::new("Second", DOCUMENT, PHONE)).await.unwrap();
        let other = repo.save(Account::new("Other", "11568954823", PHONE)).await.unwrap();

        assert_eq!(repo.find_by_document(DOCUMENT).await.unwrap(), Some(first));

        repo.delete_by_document(DOCUMENT).await.unwrap();
        assert_eq!(repo.find_by_document(DOCUMENT).await.unwrap(), None);
        assert_eq!(repo.find_all().await.unwrap(), vec![other]);

        repo.delete_by_document("00000000000").await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_id() {
        let repo = MemoryAccountRepository::new();

        repo.delete_by_id(7).await.unwrap();
        assert_eq!(repo.find_by_id(7).await.unwrap(), None);
    }
}
