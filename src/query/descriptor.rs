//! Normalized query descriptor
//!
//! The fully-defaulted form a query takes after normalization. Every
//! field is concrete: downstream layers never see an absent limit or an
//! empty sort order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page size used when the caller supplies no usable limit.
pub const DEFAULT_LIMIT: u64 = 1000;

/// Whether a query returns at most one document or a bounded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// First matching document, or nothing.
    Single,
    /// Page of matching documents.
    Many,
}

impl QueryMode {
    /// Returns the string representation used in envelopes and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::Single => "single",
            QueryMode::Many => "many",
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, QueryMode::Single)
    }
}

/// Sort direction for one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One sort key: a field path and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// The default sort order: natural spreadsheet reading order, sheet
/// first, then row within the sheet.
pub fn default_sort() -> Vec<SortSpec> {
    vec![SortSpec::asc("_sheet"), SortSpec::asc("_row")]
}

/// A normalized query, ready for execution.
///
/// Built exclusively by `normalize`; constructing one by hand is only
/// done in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    /// Single-document or page lookup.
    pub mode: QueryMode,
    /// Filter document; empty means match everything.
    pub filter: Map<String, Value>,
    /// Field projection; `None` means no projection at all.
    pub projection: Option<Map<String, Value>>,
    /// Page size, always positive.
    pub limit: u64,
    /// Matching documents to pass over before collecting.
    pub skip: u64,
    /// Sort order, never empty.
    pub sort: Vec<SortSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&QueryMode::Single).unwrap(), "\"single\"");
        assert_eq!(serde_json::to_string(&QueryMode::Many).unwrap(), "\"many\"");
    }

    #[test]
    fn test_mode_as_str() {
        assert_eq!(QueryMode::Single.as_str(), "single");
        assert_eq!(QueryMode::Many.as_str(), "many");
        assert!(QueryMode::Single.is_single());
        assert!(!QueryMode::Many.is_single());
    }

    #[test]
    fn test_default_sort_is_sheet_then_row() {
        let sort = default_sort();
        assert_eq!(sort.len(), 2);
        assert_eq!(sort[0], SortSpec::asc("_sheet"));
        assert_eq!(sort[1], SortSpec::asc("_row"));
    }

    #[test]
    fn test_sort_spec_constructors() {
        let spec = SortSpec::desc("age");
        assert_eq!(spec.field, "age");
        assert_eq!(spec.direction, SortDirection::Desc);
    }
}
