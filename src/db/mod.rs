//! Database connection pool, migrations, and health check.

pub mod products;

use crate::config::ConnectionDescriptor;
use crate::error::Result;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::str::FromStr;

/// Database handle. Owns the connection pool.
pub struct Db {
    pool: PgPool,
    migrations_owner: &'static str,
}

impl Db {
    /// Connect to Postgres using a resolved descriptor.
    ///
    /// The migrations-ownership tag is reported to the server as the
    /// connection's `application_name`.
    pub async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self> {
        let options = PgConnectOptions::from_str(descriptor.connection_string.expose_secret())?
            .application_name(descriptor.migrations_owner);
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await?;
        Ok(Self {
            pool,
            migrations_owner: descriptor.migrations_owner,
        })
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!(owner = self.migrations_owner, "applying migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Simple health check: run a SELECT 1.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn migrations_owner(&self) -> &'static str {
        self.migrations_owner
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
