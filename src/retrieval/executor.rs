//! Retrieval executor
//!
//! Stateless bridge between a normalized descriptor and the store. Mode
//! picks the lookup shape, the options travel whole either way, and the
//! outcome is wrapped in an envelope. Retry and timeout policy belong to
//! the store implementation, never here.

use crate::query::{QueryDescriptor, QueryMode};
use crate::store::{DocumentStore, FindOptions};

use super::envelope::{ResultEnvelope, ResultSet};
use super::errors::{RetrievalError, RetrievalResult};

/// Executes descriptors against a document store.
pub struct RetrievalExecutor<'a, S: DocumentStore> {
    store: &'a S,
}

impl<'a, S: DocumentStore> RetrievalExecutor<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Runs one lookup against a collection.
    ///
    /// Steps:
    /// 1. Derive the find options the descriptor implies
    /// 2. Issue the single- or multi-document lookup per mode
    /// 3. Wrap the outcome in an envelope
    ///
    /// A store failure aborts the whole lookup; the error carries the
    /// collection name and the store's cause.
    pub fn fetch(
        &self,
        collection: &str,
        descriptor: &QueryDescriptor,
    ) -> RetrievalResult<ResultEnvelope> {
        let options = FindOptions::from_descriptor(descriptor);

        let result = match descriptor.mode {
            QueryMode::Single => {
                let document = self
                    .store
                    .find_one(collection, &descriptor.filter, &options)
                    .map_err(|e| RetrievalError::new(collection, e))?;
                ResultSet::Single(document)
            }
            QueryMode::Many => {
                let documents = self
                    .store
                    .find(collection, &descriptor.filter, &options)
                    .map_err(|e| RetrievalError::new(collection, e))?;
                ResultSet::Many(documents)
            }
        };

        Ok(ResultEnvelope::new(descriptor, result))
    }
}
