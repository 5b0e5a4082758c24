use crate::{CommissionStore, PoolConfig, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use plexdi_types::{Commission, CommissionId, CommissionStatus, NewCommission};
use sqlx::FromRow;
use sqlx::postgres::{PgPool, PgPoolOptions};

// Older deployments created `id` as INTEGER and left text columns nullable.
macro_rules! commission_columns {
    () => {
        "id::BIGINT AS id, name, email, COALESCE(discord, '') AS discord, \
         COALESCE(details, '') AS details, type, COALESCE(status, 'queued') AS status, \
         created_at, COALESCE(designers, '') AS designers"
    };
}

const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS commissions (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        discord TEXT NOT NULL DEFAULT '',
        details TEXT NOT NULL DEFAULT '',
        type TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'queued',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        designers TEXT NOT NULL DEFAULT ''
    )
    "#,
    "ALTER TABLE commissions ADD COLUMN IF NOT EXISTS status TEXT NOT NULL DEFAULT 'queued'",
    "ALTER TABLE commissions ADD COLUMN IF NOT EXISTS created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()",
    "ALTER TABLE commissions ADD COLUMN IF NOT EXISTS designers TEXT NOT NULL DEFAULT ''",
];

/// Row shape of the `commissions` table
#[derive(Debug, FromRow)]
struct CommissionRow {
    id: i64,
    name: String,
    email: String,
    discord: String,
    details: String,
    #[sqlx(rename = "type")]
    kind: String,
    status: String,
    created_at: DateTime<Utc>,
    designers: String,
}

impl From<CommissionRow> for Commission {
    fn from(row: CommissionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            discord: row.discord,
            details: row.details,
            kind: row.kind,
            status: CommissionStatus::from(row.status),
            created_at: row.created_at,
            designers: row.designers,
        }
    }
}

/// PostgreSQL-backed commission store
#[derive(Clone)]
pub struct PgCommissionStore {
    pool: PgPool,
}

impl PgCommissionStore {
    /// Connect to PostgreSQL and initialize the schema
    pub async fn connect(database_url: &str, config: PoolConfig) -> StoreResult<Self> {
        config
            .validate()
            .map_err(|e| StoreError::Persistence(format!("invalid pool config: {e}")))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Persistence(format!("failed to connect postgres: {e}")))?;

        tracing::info!(
            max_connections = config.max_connections,
            "Connected to commission database"
        );
        Self::from_pool(pool).await
    }

    /// Create a store from an existing pool
    pub async fn from_pool(pool: PgPool) -> StoreResult<Self> {
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the table and backfill columns missing from older schemas
    async fn init_schema(&self) -> StoreResult<()> {
        for stmt in SCHEMA {
            sqlx::query(stmt)
                .execute(&self.pool)
                .await
                .map_err(|e| StoreError::Persistence(format!("schema init failed: {e}")))?;
        }
        Ok(())
    }
}

#[async_trait]
impl CommissionStore for PgCommissionStore {
    async fn create(&self, fields: NewCommission) -> StoreResult<Commission> {
        let row = sqlx::query_as::<_, CommissionRow>(concat!(
            "INSERT INTO commissions (name, email, discord, type, details, status, designers) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING ",
            commission_columns!()
        ))
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.discord)
        .bind(&fields.kind)
        .bind(&fields.details)
        .bind(CommissionStatus::QUEUED)
        .bind(&fields.designers)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = row.id, "Inserted commission");
        Ok(row.into())
    }

    async fn list(&self) -> StoreResult<Vec<Commission>> {
        let rows = sqlx::query_as::<_, CommissionRow>(concat!(
            "SELECT ",
            commission_columns!(),
            " FROM commissions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch(&self, id: CommissionId) -> StoreResult<Commission> {
        sqlx::query_as::<_, CommissionRow>(concat!(
            "SELECT ",
            commission_columns!(),
            " FROM commissions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Into::into)
        .ok_or(StoreError::NotFound(id))
    }

    async fn update_status(
        &self,
        id: CommissionId,
        status: &CommissionStatus,
    ) -> StoreResult<Commission> {
        let row = sqlx::query_as::<_, CommissionRow>(concat!(
            "UPDATE commissions SET status = $1 WHERE id = $2 RETURNING ",
            commission_columns!()
        ))
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        tracing::debug!(id, status = %status, "Updated commission status");
        Ok(row.into())
    }

    async fn delete(&self, id: CommissionId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM commissions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!(id, "Deleted commission");
        Ok(())
    }
}
