//! HTTP endpoint tests against a live server backed by an in-memory repository.

use async_trait::async_trait;
use product_api::error::{Error, Result};
use product_api::http::{ErrorResponse, router};
use product_api::model::Product;
use product_api::repository::ProductRepository;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

struct InMemoryRepository {
    products: HashMap<i32, Product>,
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>> {
        Ok(self.products.get(&id).cloned())
    }
}

struct FailingRepository;

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn get_by_id(&self, _id: i32) -> Result<Option<Product>> {
        Err(Error::Database(sqlx::Error::PoolTimedOut))
    }
}

fn chai() -> Product {
    Product {
        id: 1,
        product_name: Some("Chai".into()),
        unit_price: Decimal::new(1000, 2),
    }
}

/// Spawn the router on an ephemeral port and return its base URL.
async fn spawn(repository: Arc<dyn ProductRepository>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(repository)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn seeded() -> String {
    let products = HashMap::from([(1, chai())]);
    spawn(Arc::new(InMemoryRepository { products })).await
}

#[tokio::test]
async fn found_product_returns_camel_case_json() {
    let base = seeded().await;
    let resp = reqwest::get(format!("{base}/api/products/1")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert_eq!(body, r#"{"id":1,"productName":"Chai","unitPrice":10.00}"#);

    let product: Product = serde_json::from_str(&body).unwrap();
    assert_eq!(product, chai());
}

#[tokio::test]
async fn large_price_is_returned_exactly() {
    let price = Decimal::new(123_456_789_012_345_678, 2);
    let products = HashMap::from([(
        9,
        Product {
            id: 9,
            product_name: None,
            unit_price: price,
        },
    )]);
    let base = spawn(Arc::new(InMemoryRepository { products })).await;

    let resp = reqwest::get(format!("{base}/api/products/9")).await.unwrap();
    let product: Product = resp.json().await.unwrap();
    assert_eq!(product.unit_price, price);
}

#[tokio::test]
async fn missing_product_returns_not_found() {
    let base = seeded().await;
    let resp = reqwest::get(format!("{base}/api/products/2")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let body: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(body.error, "product 2 not found");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let base = seeded().await;
    let resp = reqwest::get(format!("{base}/api/products/chai")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_failure_is_internal_error() {
    let base = spawn(Arc::new(FailingRepository)).await;
    let resp = reqwest::get(format!("{base}/api/products/1")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(body.error, "internal error");
}

#[tokio::test]
async fn health_is_ok() {
    let base = seeded().await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "OK");
}
