//! Integration tests for telemetry initialization and span helpers.

use product_api::config::TelemetrySettings;
use product_api::telemetry::{TelemetryConfig, init_telemetry, lookup, metrics};

#[test]
fn telemetry_initializes_without_endpoint() {
    // The global subscriber can only be set once per process, so a second
    // initialization in the same binary may return Err; that is acceptable.
    let config = TelemetryConfig::from_settings(&TelemetrySettings::default(), "product-api-test");
    assert!(config.endpoint.is_none());
    let _guard = init_telemetry(config);
}

#[test]
fn lookup_span_records_outcome() {
    let span = lookup::start_lookup_span(42);
    lookup::record_outcome(&span, "not_found");
}

#[test]
fn instruments_record_without_provider() {
    metrics::product_lookups().add(1, &[opentelemetry::KeyValue::new("result", "found")]);
    metrics::lookup_duration_ms().record(1.5, &[]);
}
