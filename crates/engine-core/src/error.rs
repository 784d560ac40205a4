use lhs_syntax::SyntaxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Unsupported field: no column named '{0}' in the query")]
    UnsupportedField(String),

    #[error("Column {0} is excluded")]
    ExcludedField(String),

    #[error("Unsupported column type {data_type} for column '{column}'")]
    UnsupportedColumnType { column: String, data_type: String },

    #[error("Failed to coerce value '{value}' for column '{column}' as {expected}: {reason}")]
    InvalidValue {
        column: String,
        value: String,
        expected: String,
        reason: String,
    },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

pub type Result<T> = std::result::Result<T, QueryError>;
