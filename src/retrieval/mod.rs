//! Retrieval
//!
//! Runs normalized query descriptors against a document store and wraps
//! the outcome in a uniform result envelope. A lookup either produces a
//! complete envelope or fails whole with the store-level cause; nothing
//! is retried and no partial envelope ever leaves this layer.

mod envelope;
mod errors;
mod executor;

pub use envelope::{ResultEnvelope, ResultSet};
pub use errors::{RetrievalError, RetrievalResult};
pub use executor::RetrievalExecutor;
