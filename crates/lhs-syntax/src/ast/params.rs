use crate::{
    ast::{filter::Filter, sort::Sort},
    error::SyntaxError,
    parser, serializer,
};
use serde::{Deserialize, Serialize};

/// Filters in encounter order and sorts ordered by ascending priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub filters: Vec<Filter>,
    pub sorts: Vec<Sort>,
}

impl SearchParams {
    pub fn new(filters: Vec<Filter>, sorts: Vec<Sort>) -> Self {
        Self { filters, sorts }
    }

    pub fn parse<I, K, V>(pairs: I) -> Result<Self, SyntaxError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        parser::parse(pairs)
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        serializer::serialize(self)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.sorts.is_empty()
    }
}
