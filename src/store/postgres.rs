//! `AccountStore` over a PostgreSQL pool. Each write runs in its own transaction.

use super::schema::ACCOUNTS_TABLE;
use super::AccountStore;
use crate::error::AppError;
use crate::model::{Account, AccountPayload};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, email, address, phone_number, date_joined";

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PgAccountStore { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, payload: AccountPayload) -> Result<Account, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, email, address, phone_number, date_joined) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            ACCOUNTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let date_joined = payload.date_joined_or_today();
        let mut tx = self.pool.begin().await?;
        let account = sqlx::query_as::<_, Account>(&sql)
            .bind(payload.name)
            .bind(payload.email)
            .bind(payload.address)
            .bind(payload.phone_number)
            .bind(date_joined)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(account)
    }

    async fn find(&self, id: i64) -> Result<Option<Account>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, ACCOUNTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn all(&self) -> Result<Vec<Account>, AppError> {
        let sql = format!("SELECT {} FROM {}", COLUMNS, ACCOUNTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Account>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, account: &Account) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET name = $1, email = $2, address = $3, phone_number = $4, date_joined = $5 WHERE id = $6",
            ACCOUNTS_TABLE
        );
        tracing::debug!(sql = %sql, id = account.id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        sqlx::query(&sql)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.address)
            .bind(&account.phone_number)
            .bind(account.date_joined)
            .bind(account.id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", ACCOUNTS_TABLE);
        tracing::debug!(sql = %sql, id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
