//! Document store
//!
//! The store is the retrieval layer's only I/O dependency, passed in
//! explicitly as a `DocumentStore` trait object or generic. It answers
//! find-one / find-many lookups with projection, sort, skip and limit
//! options. `MemoryStore` is the bundled backend: collections held in a
//! shared in-memory map, seeded from a data file or by tests.

mod errors;
mod interface;
mod memory;

pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use interface::{DocumentStore, FindOptions};
pub use memory::MemoryStore;
