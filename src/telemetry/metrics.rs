//! Metric instrument factories for product-api.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! All instruments are created lazily from the `"product-api"` meter.

use opentelemetry::metrics::{Counter, Histogram, Meter};

/// Returns the shared meter for product-api instruments.
fn meter() -> Meter {
    opentelemetry::global::meter("product-api")
}

/// Counter: product lookups.
/// Labels: `result` ("found" | "not_found" | "error").
pub fn product_lookups() -> Counter<u64> {
    meter()
        .u64_counter("products.lookups")
        .with_description("Number of product lookups by id")
        .build()
}

/// Histogram: lookup duration in milliseconds.
/// Labels: `result`.
pub fn lookup_duration_ms() -> Histogram<f64> {
    meter()
        .f64_histogram("products.lookup.duration_ms")
        .with_description("Product lookup duration in milliseconds")
        .with_unit("ms")
        .build()
}
