//! Core data model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalogue product. Identity is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,

    pub product_name: Option<String>,

    /// Fixed-precision price; non-negative by convention, not enforced.
    /// Serialized as a JSON number carrying every stored digit.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub unit_price: Decimal,
}

/// Raw `products` row.
#[derive(sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: i32,
    pub product_name: Option<String>,
    pub unit_price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            product_name: row.product_name,
            unit_price: row.unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, name: Option<&str>, price: Decimal) -> Product {
        Product {
            id,
            product_name: name.map(str::to_string),
            unit_price: price,
        }
    }

    #[test]
    fn serializes_with_camel_case_fields_and_stored_scale() {
        let chai = product(1, Some("Chai"), Decimal::new(1000, 2));
        assert_eq!(
            serde_json::to_string(&chai).unwrap(),
            r#"{"id":1,"productName":"Chai","unitPrice":10.00}"#
        );
    }

    #[test]
    fn missing_name_serializes_as_null() {
        let unnamed = product(7, None, Decimal::new(250, 2));
        assert_eq!(
            serde_json::to_string(&unnamed).unwrap(),
            r#"{"id":7,"productName":null,"unitPrice":2.50}"#
        );
    }

    #[test]
    fn large_price_keeps_every_digit() {
        let price = Decimal::new(123_456_789_012_345_678, 2);
        let expensive = product(3, Some("Gold"), price);

        let json = serde_json::to_string(&expensive).unwrap();
        assert!(json.contains(r#""unitPrice":1234567890123456.78"#), "{json}");

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit_price, price);
        assert_eq!(back.unit_price.to_string(), "1234567890123456.78");
    }
}
