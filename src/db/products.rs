//! Product queries.

use crate::error::Result;
use crate::model::{Product, ProductRow};

impl super::Db {
    /// Fetch the product with `id`, or `None` if no row matches.
    pub async fn get_product(&self, id: i32) -> Result<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT id, product_name, unit_price
             FROM products
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(Product::from))
    }
}
