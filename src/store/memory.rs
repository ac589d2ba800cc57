//! In-memory document store
//!
//! Collections are vectors of JSON documents behind one lock. A lookup
//! walks filter -> sort -> skip -> limit -> project; the single-document
//! shape stops after the first survivor, so sort and skip still decide
//! which document that is.
//!
//! The filter language is the subset the query endpoint promises:
//! direct per-field equality plus the comparison operators $eq, $ne,
//! $gt, $gte, $lt, $lte and $in. Field paths may be dotted to reach
//! nested objects. A filter using an operator outside this set is
//! refused with a rejected-query error.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::{Map, Value};

use crate::query::{SortDirection, SortSpec};

use super::errors::{StoreError, StoreResult};
use super::interface::{DocumentStore, FindOptions};

/// Comparison operators the backend understands.
const OPERATORS: [&str; 7] = ["$eq", "$ne", "$gt", "$gte", "$lt", "$lte", "$in"];

/// In-memory backend holding whole collections.
#[derive(Debug)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Appends a document to a collection, creating it on first use.
    pub fn insert(&self, collection: &str, document: Value) -> StoreResult<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::unavailable("collection lock poisoned"))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(())
    }

    /// Appends a batch of documents to a collection.
    pub fn insert_many(&self, collection: &str, documents: Vec<Value>) -> StoreResult<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::unavailable("collection lock poisoned"))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .extend(documents);

        Ok(())
    }

    /// Validates the filter, then clones out every matching document.
    fn collect_matches(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
    ) -> StoreResult<Vec<Value>> {
        validate_filter(filter)?;

        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::unavailable("collection lock poisoned"))?;

        // A collection never written to is just empty.
        let documents = match collections.get(collection) {
            Some(documents) => documents,
            None => return Ok(Vec::new()),
        };

        Ok(documents
            .iter()
            .filter(|doc| matches_filter(doc, filter))
            .cloned()
            .collect())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn find_one(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        options: &FindOptions,
    ) -> StoreResult<Option<Value>> {
        let mut matches = self.collect_matches(collection, filter)?;
        sort_documents(&mut matches, &options.sort);

        Ok(matches
            .into_iter()
            .nth(options.skip as usize)
            .map(|doc| project(doc, options.projection.as_ref())))
    }

    fn find(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        options: &FindOptions,
    ) -> StoreResult<Vec<Value>> {
        let mut matches = self.collect_matches(collection, filter)?;
        sort_documents(&mut matches, &options.sort);

        Ok(matches
            .into_iter()
            .skip(options.skip as usize)
            .take(options.limit as usize)
            .map(|doc| project(doc, options.projection.as_ref()))
            .collect())
    }
}

/// Refuses filters using operators outside the supported set.
fn validate_filter(filter: &Map<String, Value>) -> StoreResult<()> {
    for (path, condition) in filter {
        if let Some(operators) = condition.as_object() {
            for op in operators.keys() {
                if op.starts_with('$') && !OPERATORS.contains(&op.as_str()) {
                    return Err(StoreError::rejected_query(format!(
                        "unknown operator '{}' on field '{}'",
                        op, path
                    )));
                }
            }
        }
    }
    Ok(())
}

/// True when every filter entry matches the document.
fn matches_filter(document: &Value, filter: &Map<String, Value>) -> bool {
    filter
        .iter()
        .all(|(path, condition)| matches_condition(lookup_path(document, path), condition))
}

/// Resolves a dotted field path through nested objects.
fn lookup_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Applies one condition: an object whose keys start with '$' is an
/// operator set, anything else is a direct equality value.
fn matches_condition(field: Option<&Value>, condition: &Value) -> bool {
    if let Some(operators) = condition.as_object() {
        if operators.keys().any(|key| key.starts_with('$')) {
            return operators
                .iter()
                .all(|(op, operand)| matches_operator(field, op, operand));
        }
    }

    field.map_or(false, |value| value == condition)
}

/// One operator against one field value. A missing field fails every
/// operator except $ne, which treats absence as "not equal".
fn matches_operator(field: Option<&Value>, op: &str, operand: &Value) -> bool {
    match op {
        "$eq" => field.map_or(false, |value| value == operand),
        "$ne" => field.map_or(true, |value| value != operand),
        "$gt" => compares(field, operand, |o| o == Ordering::Greater),
        "$gte" => compares(field, operand, |o| o != Ordering::Less),
        "$lt" => compares(field, operand, |o| o == Ordering::Less),
        "$lte" => compares(field, operand, |o| o != Ordering::Greater),
        "$in" => match (field, operand.as_array()) {
            (Some(value), Some(candidates)) => candidates.contains(value),
            _ => false,
        },
        // validate_filter rejects anything else up front
        _ => false,
    }
}

fn compares(field: Option<&Value>, operand: &Value, accept: fn(Ordering) -> bool) -> bool {
    field.map_or(false, |value| accept(compare_values(value, operand)))
}

/// Stable multi-key sort. An empty key list leaves input order alone.
fn sort_documents(documents: &mut [Value], sort: &[SortSpec]) {
    if sort.is_empty() {
        return;
    }

    documents.sort_by(|a, b| {
        for spec in sort {
            let ordering = compare_fields(lookup_path(a, &spec.field), lookup_path(b, &spec.field));
            let ordering = match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

/// Missing fields sort before present ones.
fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_values(a, b),
    }
}

/// Total order over JSON values. Mixed types order by type rank:
/// null < bool < number < string < array < object. Arrays compare
/// elementwise then by length; objects compare by entry count.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }

    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                let ordering = compare_values(x, y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            a.len().cmp(&b.len())
        }
        (Value::Object(a), Value::Object(b)) => a.len().cmp(&b.len()),
        _ => Ordering::Equal,
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Applies a projection to one document.
///
/// Any truthy value in the projection switches it to include mode,
/// which keeps only the flagged fields; otherwise every listed field is
/// dropped. Non-object documents pass through untouched.
fn project(document: Value, projection: Option<&Map<String, Value>>) -> Value {
    let projection = match projection {
        Some(projection) if !projection.is_empty() => projection,
        _ => return document,
    };

    let fields = match document {
        Value::Object(fields) => fields,
        other => return other,
    };

    let include = projection.values().any(is_truthy);
    let kept: Map<String, Value> = fields
        .into_iter()
        .filter(|(key, _)| {
            if include {
                projection.get(key).map_or(false, is_truthy)
            } else {
                !projection.contains_key(key)
            }
        })
        .collect();

    Value::Object(kept)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
