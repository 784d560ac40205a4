use crate::ast::operator::Operator;
use serde::{Deserialize, Serialize};

/// A single `field operator value` condition.
///
/// `value` is kept as raw text; it is only interpreted once the filter is
/// applied against a column of a known type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field_name: String,
    pub operator: Operator,
    pub value: String,
}

impl Filter {
    pub fn new(field_name: &str, operator: Operator, value: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            operator,
            value: value.to_string(),
        }
    }

    /// Elements of a list value. The raw value is split on every `,` with no
    /// trimming, so `"a, b"` yields `"a"` and `" b"`.
    pub fn values(&self) -> Vec<&str> {
        self.value.split(',').collect()
    }
}
