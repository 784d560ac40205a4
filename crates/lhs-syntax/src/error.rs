use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Invalid syntax in query parameter '{key}': expected `field[operator]` or `sort[index]`")]
    InvalidSyntax { key: String },

    #[error("Operator not found: '{0}'")]
    OperatorNotFound(String),

    #[error("Invalid sort priority in query parameter '{key}': {source}")]
    InvalidSortPriority {
        key: String,
        #[source]
        source: ParseIntError,
    },
}
