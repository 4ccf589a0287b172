//! Account service: REST CRUD over a single Account resource backed by PostgreSQL.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError};
pub use model::{Account, AccountPayload};
pub use routes::{account_routes, app_router, common_routes};
pub use settings::ServiceConfig;
pub use state::AppState;
pub use store::{
    ensure_accounts_table, ensure_database_exists, AccountStore, MemoryAccountStore, PgAccountStore,
};
