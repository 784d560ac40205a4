//! Applies parsed filters and sorts to a query.
//!
//! Field names are resolved against the columns of the tables a query reads
//! from, raw filter values are coerced to the column's type, and the
//! resulting predicates and ordering terms are added to the query.

pub mod apply;
pub mod coercion;
pub mod error;
pub mod policy;
pub mod predicate;
pub mod resolve;
pub mod target;

pub use apply::SearchQueryExt;
pub use error::{QueryError, Result};
pub use policy::{ExclusionPolicy, SearchOptions};
pub use target::QueryTarget;
