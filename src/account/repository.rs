//! Handle database requests.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::account::Account;
use crate::error::Result;

/// Port for account persistence.
///
/// The store assigns identifiers and owns durability. `document` is not
/// unique.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert `account`, or replace the row holding its `id`.
    async fn save(&self, account: Account) -> Result<Account>;

    /// Find an account by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>>;

    /// Find the oldest account holding `document`.
    async fn find_by_document(&self, document: &str) -> Result<Option<Account>>;

    /// Every account, oldest first.
    async fn find_all(&self) -> Result<Vec<Account>>;

    /// Delete an account. Missing rows are ignored.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Delete every account holding `document`.
    async fn delete_by_document(&self, document: &str) -> Result<()>;
}

/// PostgreSQL account repository.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new [`PgAccountRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn save(&self, account: Account) -> Result<Account> {
        let saved = match account.id {
            Some(id) => {
                sqlx::query_as::<_, Account>(
                    r#"
                    INSERT INTO accounts (id, name, document, phone)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE
                    SET name = EXCLUDED.name,
                        document = EXCLUDED.document,
                        phone = EXCLUDED.phone
                    RETURNING id, name, document, phone
                    "#,
                )
                .bind(id)
                .bind(&account.name)
                .bind(&account.document)
                .bind(&account.phone)
                .fetch_one(&self.pool)
                .await?
            },
            None => {
                sqlx::query_as::<_, Account>(
                    r#"
                    INSERT INTO accounts (name, document, phone)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, document, phone
                    "#,
                )
                .bind(&account.name)
                .bind(&account.document)
                .bind(&account.phone)
                .fetch_one(&self.pool)
                .await?
            },
        };

        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"SELECT id, name, document, phone FROM accounts WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_by_document(&self, document: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, document, phone
            FROM accounts
            WHERE document = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(document)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_all(&self) -> Result<Vec<Account>> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"SELECT id, name, document, phone FROM accounts ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query(r#"DELETE FROM accounts WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_document(&self, document: &str) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM accounts WHERE document = $1"#)
            .bind(document)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            deleted = result.rows_affected(),
            "accounts deleted by document"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::{Pool, Postgres};

    use super::*;

    const DOCUMENT: &str = "05623514658";
    const PHONE: &str = "93988562536";

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL server behind DATABASE_URL"]
    async fn test_save_and_find(pool: Pool<Postgres>) {
        let repo = PgAccountRepository::new(pool);

        let saved = repo
            .save(Account::new("Test create", DOCUMENT, PHONE))
            .await
            .unwrap();
        let id = saved.id.expect("store must assign an id");

        let found = repo.find_by_id(id).await.unwrap();
        assert_eq!(found, Some(saved.clone()));

        let replaced = repo
            .save(Account {
                name: "update".into(),
                ..saved
            })
            .await
            .unwrap();
        assert_eq!(replaced.id, Some(id));
        assert_eq!(repo.find_all().await.unwrap(), vec![replaced]);
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL server behind DATABASE_URL"]
    async fn test_delete_by_document(pool: Pool<Postgres>) {
        let repo = PgAccountRepository::new(pool);

        let first = repo
            .save(Account::new("First holder", DOCUMENT, PHONE))
            .await
            .unwrap();
        repo.save(Account::new("Second holder", DOCUMENT, PHONE))
            .await
            .unwrap();
        let other = repo
            .save(Account::new("Other holder", "11568954823", PHONE))
            .await
            .unwrap();

        assert_eq!(repo.find_by_document(DOCUMENT).await.unwrap(), Some(first));

        repo.delete_by_document(DOCUMENT).await.unwrap();
        assert_eq!(repo.find_by_document(DOCUMENT).await.unwrap(), None);
        assert_eq!(repo.find_all().await.unwrap(), vec![other]);

        // Nothing left to match.
        repo.delete_by_document(DOCUMENT).await.unwrap();
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL server behind DATABASE_URL"]
    async fn test_delete_missing_id(pool: Pool<Postgres>) {
        let repo = PgAccountRepository::new(pool);

        repo.delete_by_id(42).await.unwrap();
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }
}
