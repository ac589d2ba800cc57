//! Normalizer Contract Tests
//!
//! Tests for the normalization guarantees:
//! - Normalization is total: every body yields a complete descriptor
//! - Each field degrades to its default independently of the others
//! - Only the boolean `true` selects single mode
//! - Missing paging values take limit 1000 and skip 0
//! - An unusable sort falls back to sheet/row order

use serde_json::{json, Value};
use sheetstore::query::{default_sort, normalize, QueryBody, QueryMode, SortSpec, DEFAULT_LIMIT};

// =============================================================================
// Helper Functions
// =============================================================================

fn descriptor_for(raw: Value) -> sheetstore::query::QueryDescriptor {
    let body: QueryBody = serde_json::from_value(raw).unwrap();
    normalize(&body)
}

/// Bodies covering every wrong-type combination the endpoint sees.
fn junk_bodies() -> Vec<Value> {
    vec![
        json!({}),
        json!({"one": "true", "query": "name", "fields": 7, "limit": "many", "skip": [], "sort": {}}),
        json!({"one": [], "query": null, "fields": null, "limit": null, "skip": null, "sort": null}),
        json!({"one": 1, "query": 12, "fields": true, "limit": -1, "skip": -1, "sort": -1}),
        json!({"one": {"a": 1}, "query": [{"a": 1}], "fields": [[]], "limit": {}, "skip": "x", "sort": [1, 2, 3]}),
        json!({"unrelated": "keys", "only": true}),
    ]
}

// =============================================================================
// Totality
// =============================================================================

/// Every body, however malformed, normalizes to a complete descriptor.
#[test]
fn test_every_body_yields_a_complete_descriptor() {
    for raw in junk_bodies() {
        let descriptor = descriptor_for(raw.clone());

        assert!(descriptor.limit > 0, "body = {}", raw);
        assert!(!descriptor.sort.is_empty(), "body = {}", raw);
        assert!(
            descriptor.mode == QueryMode::Single || descriptor.mode == QueryMode::Many,
            "body = {}",
            raw
        );
    }
}

/// Normalization is pure: the same body always yields the same descriptor.
#[test]
fn test_same_body_normalizes_identically() {
    for raw in junk_bodies() {
        let body: QueryBody = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(normalize(&body), normalize(&body), "body = {}", raw);
    }
}

/// A fully junk body lands exactly on the documented defaults.
#[test]
fn test_junk_body_lands_on_defaults() {
    let descriptor = descriptor_for(json!({
        "one": "yes", "query": 9, "fields": [], "limit": "soon", "skip": {}, "sort": false
    }));

    assert_eq!(descriptor.mode, QueryMode::Many);
    assert!(descriptor.filter.is_empty());
    assert!(descriptor.projection.is_none());
    assert_eq!(descriptor.limit, DEFAULT_LIMIT);
    assert_eq!(descriptor.skip, 0);
    assert_eq!(descriptor.sort, default_sort());
}

// =============================================================================
// Field Independence
// =============================================================================

/// One malformed field never degrades the well-formed ones.
#[test]
fn test_malformed_field_degrades_alone() {
    let descriptor = descriptor_for(json!({
        "one": "almost true",
        "query": {"letter": "A"},
        "fields": {"letter": 1},
        "limit": 10,
        "skip": "bad",
        "sort": [["letter", "desc"]]
    }));

    // only `one` and `skip` fell back
    assert_eq!(descriptor.mode, QueryMode::Many);
    assert_eq!(descriptor.skip, 0);

    assert_eq!(descriptor.filter["letter"], json!("A"));
    assert_eq!(descriptor.projection.unwrap()["letter"], json!(1));
    assert_eq!(descriptor.limit, 10);
    assert_eq!(descriptor.sort, vec![SortSpec::desc("letter")]);
}

// =============================================================================
// Mode Selection
// =============================================================================

/// Exactly the boolean `true` selects single mode.
#[test]
fn test_only_boolean_true_selects_single() {
    assert_eq!(descriptor_for(json!({"one": true})).mode, QueryMode::Single);

    for one in [
        json!(false),
        json!("true"),
        json!("TRUE"),
        json!(1),
        json!(1.0),
        json!(null),
        json!([true]),
        json!({"one": true}),
    ] {
        let descriptor = descriptor_for(json!({ "one": one }));
        assert_eq!(descriptor.mode, QueryMode::Many, "one = {}", one);
    }
}

// =============================================================================
// Paging Defaults
// =============================================================================

/// Numeric strings count; anything else falls back.
#[test]
fn test_limit_parse_table() {
    let cases = [
        (json!(50), 50),
        (json!("50"), 50),
        (json!(" 7 "), 7),
        (json!(2.9), 2),
        (json!(0), DEFAULT_LIMIT),
        (json!(-10), DEFAULT_LIMIT),
        (json!("ten"), DEFAULT_LIMIT),
        (json!(true), DEFAULT_LIMIT),
    ];

    for (limit, expected) in cases {
        let descriptor = descriptor_for(json!({ "limit": limit }));
        assert_eq!(descriptor.limit, expected, "limit = {}", limit);
    }
}

/// Skip parses like limit but defaults to zero.
#[test]
fn test_skip_parse_table() {
    let cases = [
        (json!(3), 3),
        (json!("12"), 12),
        (json!(0), 0),
        (json!(-4), 0),
        (json!("nope"), 0),
    ];

    for (skip, expected) in cases {
        let descriptor = descriptor_for(json!({ "skip": skip }));
        assert_eq!(descriptor.skip, expected, "skip = {}", skip);
    }
}

// =============================================================================
// Sort Parsing
// =============================================================================

/// Valid pairs survive, unusable entries are dropped.
#[test]
fn test_sort_keeps_only_usable_pairs() {
    let descriptor = descriptor_for(json!({
        "sort": [["name", -1], [17, 1], ["age"], "junk", ["tier", "Desc"]]
    }));

    assert_eq!(
        descriptor.sort,
        vec![
            SortSpec::desc("name"),
            SortSpec::asc("age"),
            SortSpec::desc("tier"),
        ]
    );
}

/// With nothing usable the sheet/row order applies.
#[test]
fn test_sort_fallback_is_sheet_then_row() {
    for sort in [json!([]), json!([[1], [2]]), json!("name"), json!({"name": 1})] {
        let descriptor = descriptor_for(json!({ "sort": sort }));
        assert_eq!(descriptor.sort, default_sort(), "sort = {}", sort);
        assert_eq!(descriptor.sort[0].field, "_sheet");
        assert_eq!(descriptor.sort[1].field, "_row");
    }
}
