use model::core::table::{ColumnDef, QualCol};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Columns that filters or sorts must not touch.
///
/// By default a filter or sort on an excluded column is dropped. In strict
/// mode it fails the whole call with [`QueryError::ExcludedField`].
///
/// In configuration the excluded columns are written as `table.column`:
///
/// ```json
/// { "excluded": ["user.password_hash"], "strict": true }
/// ```
///
/// [`QueryError::ExcludedField`]: crate::QueryError::ExcludedField
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionPolicy {
    pub excluded: HashSet<QualCol>,
    pub strict: bool,
}

impl ExclusionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude(mut self, column: QualCol) -> Self {
        self.excluded.insert(column);
        self
    }

    pub fn excluding(mut self, columns: impl IntoIterator<Item = QualCol>) -> Self {
        self.excluded.extend(columns);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_excluded(&self, column: &ColumnDef) -> bool {
        self.excluded.contains(&column.qualified())
    }
}

/// Per-call settings for applying a full set of search parameters. Filters
/// and sorts carry independent exclusion policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub filters: ExclusionPolicy,
    pub sorts: ExclusionPolicy,
}

impl SearchOptions {
    /// The same policy for filters and sorts.
    pub fn uniform(policy: ExclusionPolicy) -> Self {
        Self {
            filters: policy.clone(),
            sorts: policy,
        }
    }
}
