use async_trait::async_trait;
use keyhole_core::repository::{Repository, Result, ShortUrlRecord};
use keyhole_core::{ShortId, StorageError};
use sqlx::{MySqlPool, Row};

/// MySQL implementation of the repository contract.
///
/// Records live in a single `short_urls` table with required string
/// columns `hash` and `url`. The primary key on `hash` backs the
/// conflict signal the record store retries on; records are never
/// updated or deleted.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn insert(&self, record: &ShortUrlRecord) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_urls (hash, url)
            VALUES (?, ?)
            "#,
        )
        .bind(record.id.as_str())
        .bind(record.target_url.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(record.id.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn get(&self, id: &ShortId) -> Result<Option<ShortUrlRecord>> {
        let row = sqlx::query(
            r#"
            SELECT url
            FROM short_urls
            WHERE hash = ?
            LIMIT 1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let target_url: String = row.try_get("url").map_err(map_sqlx_error)?;
        if target_url.is_empty() {
            return Err(StorageError::InvalidData(format!(
                "record '{}' has an empty url",
                id
            )));
        }

        Ok(Some(ShortUrlRecord {
            id: id.clone(),
            target_url,
        }))
    }
}
