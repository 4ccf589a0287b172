//! Startup DDL: create the target database and the `accounts` table if missing.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const ACCOUNTS_TABLE: &str = "accounts";

/// Create the `accounts` table if it does not exist. `BIGSERIAL` ids are never reused after delete.
pub async fn ensure_accounts_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(64) NOT NULL,
            email VARCHAR(64) NOT NULL,
            address VARCHAR(256) NOT NULL,
            phone_number VARCHAR(32),
            date_joined DATE NOT NULL DEFAULT CURRENT_DATE
        )
        "#,
        ACCOUNTS_TABLE
    );
    tracing::debug!(sql = %ddl, "ddl");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Connect to the `postgres` admin database and create the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Internal(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a URL into the `postgres` admin URL and the target database name.
/// The database name is the path after the authority; it is empty when the URL has no path.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let authority_start = url
        .find("://")
        .map(|i| i + 3)
        .ok_or_else(|| AppError::Internal("DATABASE_URL: missing scheme".into()))?;
    let after_scheme = url.get(authority_start..).unwrap_or("");
    let authority_end = after_scheme
        .find(|c: char| c == '/' || c == '?')
        .map(|i| authority_start + i)
        .unwrap_or(url.len());
    let base = url.get(..authority_end).unwrap_or(url);
    let rest = url.get(authority_end..).unwrap_or("");
    let (path, query) = match rest.find('?') {
        Some(i) => (rest.get(..i).unwrap_or(""), rest.get(i..).unwrap_or("")),
        None => (rest, ""),
    };
    let db_name = path.trim_start_matches('/').trim();
    Ok((format!("{}/postgres{}", base, query), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
