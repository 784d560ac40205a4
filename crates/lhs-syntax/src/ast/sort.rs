use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Reads the direction part of a sort value. Anything other than
    /// `asc` or `desc`, including a missing token, means ascending.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordering term. Lower `priority` values are applied first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field_name: String,
    pub direction: SortDirection,
    pub priority: i32,
}

impl Sort {
    pub fn new(field_name: &str, direction: SortDirection, priority: i32) -> Self {
        Self {
            field_name: field_name.to_string(),
            direction,
            priority,
        }
    }
}
