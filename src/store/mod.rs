//! Persistence gateway for accounts. Handlers only see `AccountStore`; the
//! PostgreSQL and in-memory backends are interchangeable behind it.

mod memory;
mod postgres;
pub mod schema;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;
pub use schema::{ensure_accounts_table, ensure_database_exists};

use crate::error::AppError;
use crate::model::{Account, AccountPayload};
use async_trait::async_trait;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account and return it with its freshly assigned id.
    async fn create(&self, payload: AccountPayload) -> Result<Account, AppError>;

    /// Look up one account. A missing id is `Ok(None)`, never an error.
    async fn find(&self, id: i64) -> Result<Option<Account>, AppError>;

    /// Every stored account, in whatever order the backend yields them.
    async fn all(&self) -> Result<Vec<Account>, AppError>;

    /// Overwrite the stored fields of an existing account. Callers check existence with `find` first.
    async fn update(&self, account: &Account) -> Result<(), AppError>;

    /// Remove an account if present; absent ids are a no-op.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Cheap round-trip to the backend, used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    /// Release backend resources at shutdown.
    async fn close(&self) {}
}
