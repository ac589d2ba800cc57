//! Raw query request body
//!
//! The shape callers actually send: every key optional, every value
//! untyped. The normalizer decides what each value means; unknown keys
//! are ignored on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a query request, before normalization.
///
/// Fields are deliberately `Value` rather than typed: callers send
/// whatever their client library produced, and defaulting happens in
/// one place (the normalizer) instead of during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryBody {
    /// Single-document switch; only boolean `true` selects single mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one: Option<Value>,

    /// Filter document; only a JSON object is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,

    /// Projection document; only a JSON object is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Page size; number or numeric string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,

    /// Documents to pass over; number or numeric string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<Value>,

    /// Sort order as an array of `[field, direction]` pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Value>,
}
