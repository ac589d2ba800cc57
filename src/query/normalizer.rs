//! Query normalizer
//!
//! Maps a raw body onto a `QueryDescriptor`. Nothing in this module
//! returns an error: a field the caller got wrong falls back to its
//! default instead of rejecting the request.
//!
//! Defaulting rules:
//! - `one`: the boolean `true` selects single mode, anything else many
//! - `query`: used as the filter only when it is a JSON object
//! - `fields`: used as the projection only when it is a JSON object
//! - `limit`: positive integer (number or numeric string), default 1000
//! - `skip`: positive integer (number or numeric string), default 0
//! - `sort`: array of `[field, direction]` pairs; a negative number or
//!   the string "desc" sorts descending; unusable entries are skipped;
//!   when nothing usable remains, the sheet/row order applies

use serde_json::{Map, Value};

use super::body::QueryBody;
use super::descriptor::{
    default_sort, QueryDescriptor, QueryMode, SortDirection, SortSpec, DEFAULT_LIMIT,
};

/// Normalize a raw body into a descriptor.
///
/// Total over all bodies: every `QueryBody`, however malformed, maps to
/// a complete descriptor.
pub fn normalize(body: &QueryBody) -> QueryDescriptor {
    QueryDescriptor {
        mode: normalize_mode(body.one.as_ref()),
        filter: normalize_filter(body.query.as_ref()),
        projection: normalize_projection(body.fields.as_ref()),
        limit: normalize_count(body.limit.as_ref(), DEFAULT_LIMIT),
        skip: normalize_count(body.skip.as_ref(), 0),
        sort: normalize_sort(body.sort.as_ref()),
    }
}

/// Only the boolean `true` selects single mode. Truthy look-alikes such
/// as `"true"` or `1` stay in many mode.
fn normalize_mode(one: Option<&Value>) -> QueryMode {
    match one {
        Some(Value::Bool(true)) => QueryMode::Single,
        _ => QueryMode::Many,
    }
}

fn normalize_filter(query: Option<&Value>) -> Map<String, Value> {
    match query {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

fn normalize_projection(fields: Option<&Value>) -> Option<Map<String, Value>> {
    match fields {
        Some(Value::Object(map)) => Some(map.clone()),
        _ => None,
    }
}

/// Parse a count-like value (limit, skip). Numbers are truncated toward
/// zero; strings must hold a decimal integer after trimming. Anything
/// unusable, zero or negative yields the default.
fn normalize_count(value: Option<&Value>, default: u64) -> u64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n > 0 => n as u64,
        _ => default,
    }
}

fn normalize_sort(sort: Option<&Value>) -> Vec<SortSpec> {
    let entries = match sort {
        Some(Value::Array(entries)) => entries,
        _ => return default_sort(),
    };

    let mut specs = Vec::new();
    for entry in entries {
        if let Some(spec) = parse_sort_entry(entry) {
            specs.push(spec);
        }
    }

    if specs.is_empty() {
        default_sort()
    } else {
        specs
    }
}

/// One `[field, direction]` pair. The field must be a string; the
/// direction element is optional and defaults to ascending.
fn parse_sort_entry(entry: &Value) -> Option<SortSpec> {
    let pair = entry.as_array()?;
    let field = pair.first()?.as_str()?;

    let direction = match pair.get(1) {
        Some(Value::Number(n)) if n.as_f64().map_or(false, |f| f < 0.0) => SortDirection::Desc,
        Some(Value::String(s)) if s.eq_ignore_ascii_case("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    };

    Some(SortSpec {
        field: field.to_string(),
        direction,
    })
}
