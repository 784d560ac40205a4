use crate::{ast::SearchParams, parser::SORT_KEY};

/// Builds bracket-syntax query parameters from [`SearchParams`].
///
/// Filters come first as `("field[operator]", value)`, then sorts as
/// `("sort[priority]", "field:direction")`, each in stored order. The output
/// parses back to the same `SearchParams`.
pub fn serialize(params: &SearchParams) -> Vec<(String, String)> {
    let filters = params.filters.iter().map(|filter| {
        (
            format!("{}[{}]", filter.field_name, filter.operator),
            filter.value.clone(),
        )
    });

    let sorts = params.sorts.iter().map(|sort| {
        (
            format!("{SORT_KEY}[{}]", sort.priority),
            format!("{}:{}", sort.field_name, sort.direction),
        )
    });

    filters.chain(sorts).collect()
}
