//! Product repository.
//!
//! The HTTP layer depends on [`ProductRepository`] only; the Postgres-backed
//! implementation wraps a shared [`Db`].

use crate::db::Db;
use crate::error::Result;
use crate::model::Product;
use crate::telemetry::{lookup, metrics};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Zero-or-one lookup by id. `Ok(None)` means not found.
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>>;
}

pub struct PgProductRepository {
    db: Arc<Db>,
}

impl PgProductRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>> {
        let span = lookup::start_lookup_span(id);
        let start = Instant::now();

        let result = self.db.get_product(id).instrument(span.clone()).await;

        let outcome = match &result {
            Ok(Some(_)) => "found",
            Ok(None) => "not_found",
            Err(_) => "error",
        };
        lookup::record_outcome(&span, outcome);
        metrics::product_lookups().add(1, &[KeyValue::new("result", outcome)]);
        metrics::lookup_duration_ms().record(
            start.elapsed().as_secs_f64() * 1000.0,
            &[KeyValue::new("result", outcome)],
        );

        result
    }
}
