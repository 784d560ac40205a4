use crate::{
    error::{QueryError, Result},
    policy::ExclusionPolicy,
};
use model::core::table::{ColumnDef, TableDef};
use tracing::debug;

/// Finds the column `field` refers to.
///
/// Tables are searched in the order given and the first exact, case-sensitive
/// name match wins. Returns `Ok(None)` when that column is excluded and the
/// policy isn't strict.
///
/// # Errors
///
/// - [`QueryError::UnsupportedField`] if no table has a matching column.
/// - [`QueryError::ExcludedField`] if the column is excluded in strict mode.
pub fn resolve_column<'a>(
    field: &str,
    targets: &[&'a TableDef],
    policy: &ExclusionPolicy,
) -> Result<Option<&'a ColumnDef>> {
    let column = targets
        .iter()
        .copied()
        .find_map(|table| table.get(field))
        .ok_or_else(|| QueryError::UnsupportedField(field.to_string()))?;

    if policy.is_excluded(column) {
        if policy.strict {
            return Err(QueryError::ExcludedField(field.to_string()));
        }
        debug!(field, column = %column.qualified(), "dropping term on excluded column");
        return Ok(None);
    }

    Ok(Some(column))
}
