use crate::{
    ast::{Filter, Operator, SearchParams, Sort, SortDirection},
    error::SyntaxError,
};
use tracing::{debug, trace};

/// Key prefix that marks a parameter as a sort rather than a filter.
pub const SORT_KEY: &str = "sort";

/// Parses bracket-syntax query parameters into [`SearchParams`].
///
/// Filters are `("field[operator]", "value")`, e.g. `("field3[eq]", "whatever3")`.
/// Sorts are `("sort[index]", "field:direction")`, e.g. `("sort[1]", "field1:asc")`.
///
/// Every pair is kept, duplicates included. Filters keep their encounter
/// order; sorts are stably ordered by their bracket index.
///
/// # Errors
///
/// - [`SyntaxError::InvalidSyntax`] if a key has no bracket or no field name.
/// - [`SyntaxError::OperatorNotFound`] for an unknown filter operator.
/// - [`SyntaxError::InvalidSortPriority`] if a sort index isn't an integer.
pub fn parse<I, K, V>(pairs: I) -> Result<SearchParams, SyntaxError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut filters = Vec::new();
    let mut sorts = Vec::new();

    for (key, value) in pairs {
        let (key, value) = (key.as_ref(), value.as_ref());
        trace!(key, value, "parsing query parameter");

        let tokens: Vec<&str> = key.split(['[', ']']).collect();
        if tokens.len() < 2 || tokens[0].is_empty() {
            return Err(SyntaxError::InvalidSyntax {
                key: key.to_string(),
            });
        }

        if tokens[0] == SORT_KEY {
            sorts.push(parse_sort(key, tokens[1], value)?);
        } else {
            let operator = tokens[1].parse::<Operator>()?;
            filters.push(Filter::new(tokens[0], operator, value));
        }
    }

    // `sort_by_key` is stable, so duplicated priorities keep parse order.
    sorts.sort_by_key(|sort: &Sort| sort.priority);

    debug!(
        filters = filters.len(),
        sorts = sorts.len(),
        "parsed search parameters"
    );
    Ok(SearchParams { filters, sorts })
}

fn parse_sort(key: &str, index: &str, value: &str) -> Result<Sort, SyntaxError> {
    let priority = index
        .parse::<i32>()
        .map_err(|source| SyntaxError::InvalidSortPriority {
            key: key.to_string(),
            source,
        })?;

    let (field_name, direction) = match value.split_once(':') {
        Some((field, direction)) => (field, Some(direction)),
        None => (value, None),
    };

    if field_name.is_empty() {
        return Err(SyntaxError::InvalidSyntax {
            key: key.to_string(),
        });
    }

    Ok(Sort::new(
        field_name,
        SortDirection::from_token(direction),
        priority,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_without_direction() {
        let params = parse([("sort[0]", "name")]).unwrap();
        assert_eq!(params.sorts, vec![Sort::new("name", SortDirection::Asc, 0)]);
    }

    #[test]
    fn test_sort_value_split_once() {
        let params = parse([("sort[0]", "name:desc:extra")]).unwrap();
        assert_eq!(params.sorts, vec![Sort::new("name", SortDirection::Asc, 0)]);
    }

    #[test]
    fn test_sort_with_empty_field() {
        assert_eq!(
            parse([("sort[0]", ":desc")]),
            Err(SyntaxError::InvalidSyntax {
                key: "sort[0]".into()
            })
        );
    }

    #[test]
    fn test_negative_sort_priority() {
        let params = parse([("sort[0]", "a"), ("sort[-1]", "b")]).unwrap();
        assert_eq!(params.sorts[0], Sort::new("b", SortDirection::Asc, -1));
    }

    #[test]
    fn test_empty_field_name() {
        assert!(matches!(
            parse([("[eq]", "x")]),
            Err(SyntaxError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let params = parse(Vec::<(String, String)>::new()).unwrap();
        assert!(params.is_empty());
    }
}
