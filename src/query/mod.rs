//! Query normalization
//!
//! Turns the loosely-typed body of a query request into a fully-defaulted
//! `QueryDescriptor`. Normalization is pure and total: a malformed field
//! degrades to its documented default, the request is never rejected here.

mod body;
mod descriptor;
mod normalizer;

pub use body::QueryBody;
pub use descriptor::{
    default_sort, QueryDescriptor, QueryMode, SortDirection, SortSpec, DEFAULT_LIMIT,
};
pub use normalizer::normalize;
