//! Product lookup span helpers.

use tracing::Span;

/// Start a span for a product lookup.
///
/// The `product.result` field is declared empty and filled by
/// [`record_outcome`].
pub fn start_lookup_span(id: i32) -> Span {
    tracing::info_span!(
        "product.lookup",
        "product.id" = id,
        "product.result" = tracing::field::Empty,
    )
}

/// Record the lookup outcome ("found" | "not_found" | "error") on the span.
pub fn record_outcome(span: &Span, outcome: &str) {
    span.record("product.result", outcome);
    span.in_scope(|| {
        tracing::debug!(outcome, "lookup_finished");
    });
}
