//! HTTP surface: product lookup by id plus a liveness check.

use crate::model::Product;
use crate::repository::ProductRepository;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type SharedRepository = Arc<dyn ProductRepository>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn router(repository: SharedRepository) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/products/{id}", get(get_product))
        .with_state(repository)
}

/// Liveness endpoint.
async fn health() -> &'static str {
    "OK"
}

async fn get_product(
    Path(id): Path<i32>,
    State(repository): State<SharedRepository>,
) -> Result<Json<Product>, ApiError> {
    match repository.get_by_id(id).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err(not_found(id)),
        Err(e) => Err(internal_error(e)),
    }
}

fn not_found(id: i32) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("product {id} not found"),
        }),
    )
}

fn internal_error<E: std::fmt::Display>(e: E) -> ApiError {
    tracing::error!(error = %e, "product lookup failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal error".into(),
        }),
    )
}
