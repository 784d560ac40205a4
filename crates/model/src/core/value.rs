use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// A literal already coerced to the native type of the column it targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Value {
    SmallInt(i16),
    Int32(i32),
    Int(i64),
    Decimal(BigDecimal),
    String(String),
    /// Enumerated value as `(enum name, variant label)`.
    Enum(String, String),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::SmallInt(v) => Some(*v as i64),
            Value::Int32(v) => Some(*v as i64),
            Value::Int(v) => Some(*v),
            Value::Decimal(_) | Value::String(_) | Value::Enum(_, _) => None,
        }
    }

    pub fn as_big_decimal(&self) -> Option<BigDecimal> {
        match self {
            Value::Decimal(v) => Some(v.clone()),
            other => other.as_i64().map(BigDecimal::from),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            Value::Enum(_, v) => Some(v),
            _ => None,
        }
    }

    /// Natural ordering between two values of compatible kinds.
    ///
    /// Integers of any width compare numerically with each other and with
    /// decimals. Enumerated values are only comparable within the same enum
    /// and fall back to their labels; callers that know the declaration order
    /// should compare ordinals instead.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (String(a), String(b)) => Some(a.cmp(b)),
            (Enum(ea, a), Enum(eb, b)) if ea == eb => Some(a.cmp(b)),
            (Decimal(_), _) | (_, Decimal(_)) => {
                let a = self.as_big_decimal()?;
                let b = other.as_big_decimal()?;
                Some(a.cmp(&b))
            }
            _ => {
                let a = self.as_i64()?;
                let b = other.as_i64()?;
                Some(a.cmp(&b))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::SmallInt(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "'{}'", v.replace('\'', "''")),
            Value::Enum(_, v) => write!(f, "'{}'", v.replace('\'', "''")),
        }
    }
}
