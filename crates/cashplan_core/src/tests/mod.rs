//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `projection` - Month stepping, balance chaining, loans and one-off items
//! - `tax_calendar` - Quarterly payments and the annual settlement inside projections
//! - `house_sale` - Loan cancellation and proceeds sync
//! - `queries` - Single-point queries (monthly result, month overview, summaries)
//! - `builder_dsl` - Builder DSL for fluent snapshot setup
//! - `serialization` - Snapshot data file compatibility

mod builder_dsl;

#[track_caller]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "Expected {expected}, got {actual}"
    );
}
