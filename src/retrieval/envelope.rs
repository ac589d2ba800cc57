//! Result envelope
//!
//! The uniform shape every successful retrieval returns: the effective
//! filter echoed back, the mode, the documents, and a count of what was
//! actually returned.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::query::{QueryDescriptor, QueryMode};

/// Documents carried by an envelope.
///
/// Serializes untagged: a single lookup yields the document itself (or
/// `null` when nothing matched), a page lookup yields an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultSet {
    Single(Option<Value>),
    Many(Vec<Value>),
}

impl ResultSet {
    /// Documents in the set: 1 or 0 for a single lookup, the page
    /// length for a page lookup. Never the total matching the filter.
    pub fn count(&self) -> usize {
        match self {
            ResultSet::Single(Some(_)) => 1,
            ResultSet::Single(None) => 0,
            ResultSet::Many(documents) => documents.len(),
        }
    }
}

/// Envelope wrapping one retrieval's outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEnvelope {
    /// The filter that was actually executed, after normalization.
    pub query: Map<String, Value>,
    /// Single or many.
    pub mode: QueryMode,
    /// Document or page, per mode.
    pub result: ResultSet,
    /// Size of `result`.
    pub count: usize,
}

impl ResultEnvelope {
    /// Wraps a result set produced for a descriptor.
    pub fn new(descriptor: &QueryDescriptor, result: ResultSet) -> Self {
        Self {
            query: descriptor.filter.clone(),
            mode: descriptor.mode,
            count: result.count(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{normalize, QueryBody};
    use serde_json::json;

    fn descriptor_from(value: Value) -> QueryDescriptor {
        let body: QueryBody = serde_json::from_value(value).unwrap();
        normalize(&body)
    }

    #[test]
    fn test_count_per_result_shape() {
        assert_eq!(ResultSet::Single(Some(json!({"a": 1}))).count(), 1);
        assert_eq!(ResultSet::Single(None).count(), 0);
        assert_eq!(ResultSet::Many(vec![]).count(), 0);
        assert_eq!(ResultSet::Many(vec![json!(1), json!(2)]).count(), 2);
    }

    #[test]
    fn test_single_hit_serializes_as_document() {
        let descriptor = descriptor_from(json!({"one": true, "query": {"letter": "A"}}));
        let envelope =
            ResultEnvelope::new(&descriptor, ResultSet::Single(Some(json!({"letter": "A"}))));

        let encoded = serde_json::to_value(&envelope).unwrap();
        assert_eq!(encoded["mode"], json!("single"));
        assert_eq!(encoded["result"], json!({"letter": "A"}));
        assert_eq!(encoded["count"], json!(1));
        assert_eq!(encoded["query"], json!({"letter": "A"}));
    }

    #[test]
    fn test_single_miss_serializes_as_null() {
        let descriptor = descriptor_from(json!({"one": true}));
        let envelope = ResultEnvelope::new(&descriptor, ResultSet::Single(None));

        let encoded = serde_json::to_value(&envelope).unwrap();
        assert!(encoded["result"].is_null());
        assert_eq!(encoded["count"], json!(0));
    }

    #[test]
    fn test_many_serializes_as_array() {
        let descriptor = descriptor_from(json!({}));
        let envelope = ResultEnvelope::new(
            &descriptor,
            ResultSet::Many(vec![json!({"n": 1}), json!({"n": 2})]),
        );

        let encoded = serde_json::to_value(&envelope).unwrap();
        assert_eq!(encoded["mode"], json!("many"));
        assert_eq!(encoded["result"], json!([{"n": 1}, {"n": 2}]));
        assert_eq!(encoded["count"], json!(2));
    }

    #[test]
    fn test_query_echo_is_the_normalized_filter() {
        // A non-object query normalizes to {}, and that is what the
        // envelope echoes.
        let descriptor = descriptor_from(json!({"query": "junk"}));
        let envelope = ResultEnvelope::new(&descriptor, ResultSet::Many(vec![]));

        let encoded = serde_json::to_value(&envelope).unwrap();
        assert_eq!(encoded["query"], json!({}));
    }
}
