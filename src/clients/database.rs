use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use sqlx::{
    PgPool, Row,
    postgres::{PgPoolOptions, PgRow},
};
use tracing::{debug, error, info};

use crate::models::{
    audit::CreateDispatchLog,
    entity::{Entity, EntityKind},
};

/// Lookup of domain entities by kind and numeric id.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Returns `Ok(None)` when no record exists; errors are reserved for
    /// infrastructure failures.
    async fn get_by_id(&self, kind: EntityKind, id: i64) -> Result<Option<Entity>, Error>;
}

pub struct DatabaseClient {
    pool: PgPool,
}

impl DatabaseClient {
    pub async fn connect(database_url: &str) -> Result<Self, Error> {
        info!("Connecting to PostgreSQL database");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

        info!("PostgreSQL connection established");

        Ok(Self { pool })
    }

    pub async fn log_dispatch(&self, log: CreateDispatchLog) -> Result<(), Error> {
        let status_str = log.status.to_string();

        sqlx::query(
            r#"
            INSERT INTO dispatch_logs (
                trace_id,
                reseller_id,
                target,
                event,
                status,
                error_message
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&log.trace_id)
        .bind(log.reseller_id)
        .bind(&log.target)
        .bind(&log.event)
        .bind(&status_str)
        .bind(&log.error_message)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                trace_id = %log.trace_id,
                "Failed to write dispatch log to database"
            );
            anyhow!("Database write failed: {}", e)
        })?;

        debug!(
            trace_id = %log.trace_id,
            target = %log.target,
            status = %status_str,
            "Dispatch log written to database"
        );

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!("Database health check failed: {}", e))?;

        Ok(())
    }
}

#[async_trait]
impl EntityStore for DatabaseClient {
    async fn get_by_id(&self, kind: EntityKind, id: i64) -> Result<Option<Entity>, Error> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_type, name, email, role, expertise_area
            FROM entities
            WHERE kind = $1 AND id = $2
            "#,
        )
        .bind(kind.to_string())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Entity lookup failed: {}", e))?;

        match row {
            Some(row) => {
                debug!(kind = %kind, id, "Entity resolved");
                Ok(Some(entity_from_row(kind, &row)?))
            }
            None => Ok(None),
        }
    }
}

fn entity_from_row(kind: EntityKind, row: &PgRow) -> Result<Entity, Error> {
    Ok(Entity {
        id: row.try_get("id")?,
        kind,
        customer_type: row.try_get("customer_type")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        role: row.try_get("role")?,
        expertise_area: row.try_get("expertise_area")?,
    })
}
