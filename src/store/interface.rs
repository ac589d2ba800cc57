//! Store interface consumed by the retrieval executor.

use serde_json::{Map, Value};

use crate::query::{QueryDescriptor, SortSpec};

use super::errors::StoreResult;

/// Options forwarded with every lookup.
///
/// Both lookup shapes receive the full set: a single-document lookup
/// still honors sort and skip, which decide *which* document comes back
/// when several match.
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Field projection; `None` applies no projection at all.
    pub projection: Option<Map<String, Value>>,
    /// Sort order applied before skip and limit.
    pub sort: Vec<SortSpec>,
    /// Matching documents to pass over before collecting.
    pub skip: u64,
    /// Page size for multi-document lookups.
    pub limit: u64,
}

impl FindOptions {
    /// Build the options a normalized descriptor implies.
    pub fn from_descriptor(descriptor: &QueryDescriptor) -> Self {
        Self {
            projection: descriptor.projection.clone(),
            sort: descriptor.sort.clone(),
            skip: descriptor.skip,
            limit: descriptor.limit,
        }
    }
}

/// Read access to named document collections.
///
/// Implementations must be shareable across concurrent requests; the
/// retrieval layer never writes through this trait.
pub trait DocumentStore: Send + Sync {
    /// Returns the first document selected by `filter` and `options`,
    /// or `None` when nothing matches.
    fn find_one(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        options: &FindOptions,
    ) -> StoreResult<Option<Value>>;

    /// Returns the page of documents selected by `filter` and `options`.
    fn find(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        options: &FindOptions,
    ) -> StoreResult<Vec<Value>>;
}
