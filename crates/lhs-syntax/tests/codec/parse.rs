//! Tests for parsing query parameter pairs into `SearchParams`

use lhs_syntax::{Filter, Operator, SearchParams, Sort, SortDirection, SyntaxError, parse};

#[test]
fn test_parse_happy_path() {
    let params = parse([
        ("sort[1]", "field1:asc"),
        ("sort[0]", "field2:desc"),
        ("field3[eq]", "whatever3"),
        ("field4[neq]", "whatever4"),
        ("field9[gt]", "whatever9"),
        ("field5[gte]", "whatever5"),
        ("field10[lt]", "whatever10"),
        ("field6[lte]", "whatever6"),
        ("field7[in]", "whatever7"),
        ("field8[notin]", "whatever8"),
    ])
    .unwrap();

    assert_eq!(
        params,
        SearchParams {
            filters: vec![
                Filter::new("field3", Operator::Eq, "whatever3"),
                Filter::new("field4", Operator::Neq, "whatever4"),
                Filter::new("field9", Operator::Gt, "whatever9"),
                Filter::new("field5", Operator::Gte, "whatever5"),
                Filter::new("field10", Operator::Lt, "whatever10"),
                Filter::new("field6", Operator::Lte, "whatever6"),
                Filter::new("field7", Operator::In, "whatever7"),
                Filter::new("field8", Operator::NotIn, "whatever8"),
            ],
            sorts: vec![
                Sort::new("field2", SortDirection::Desc, 0),
                Sort::new("field1", SortDirection::Asc, 1),
            ],
        }
    );
}

#[test]
fn test_parse_end_to_end_scenario() {
    let params = parse([
        ("sort[1]", "field1:asc"),
        ("sort[0]", "field2:desc"),
        ("field3[eq]", "whatever3"),
    ])
    .unwrap();

    assert_eq!(
        params,
        SearchParams::new(
            vec![Filter::new("field3", Operator::Eq, "whatever3")],
            vec![
                Sort::new("field2", SortDirection::Desc, 0),
                Sort::new("field1", SortDirection::Asc, 1),
            ],
        )
    );
}

#[test]
fn test_parse_owned_pairs() {
    let pairs: Vec<(String, String)> = vec![("id[gte]".to_string(), "3".to_string())];
    let params = SearchParams::parse(pairs).unwrap();
    assert_eq!(params.filters, vec![Filter::new("id", Operator::Gte, "3")]);
}

#[test]
fn test_parse_keeps_duplicates_in_order() {
    let params = parse([
        ("id[gt]", "1"),
        ("name[eq]", "Chad"),
        ("id[gt]", "2"),
    ])
    .unwrap();

    let values: Vec<_> = params.filters.iter().map(|f| f.value.as_str()).collect();
    assert_eq!(values, vec!["1", "Chad", "2"]);
}

#[test]
fn test_parse_equal_priorities_keep_parse_order() {
    let params = parse([
        ("sort[1]", "c"),
        ("sort[0]", "a:desc"),
        ("sort[1]", "b"),
    ])
    .unwrap();

    let fields: Vec<_> = params.sorts.iter().map(|s| s.field_name.as_str()).collect();
    assert_eq!(fields, vec!["a", "c", "b"]);
}

#[test]
fn test_parse_priorities_need_not_be_contiguous() {
    let params = parse([("sort[10]", "b"), ("sort[3]", "a")]).unwrap();
    assert_eq!(params.sorts[0].priority, 3);
    assert_eq!(params.sorts[1].priority, 10);
}

#[test]
fn test_parse_unknown_direction_defaults_to_asc() {
    let params = parse([("sort[0]", "name:sideways"), ("sort[1]", "id")]).unwrap();
    assert!(params.sorts.iter().all(|s| s.direction == SortDirection::Asc));
}

#[test]
fn test_parse_list_value_is_kept_raw() {
    let params = parse([("type[in]", "RARE,LEGENDARY")]).unwrap();
    assert_eq!(params.filters[0].value, "RARE,LEGENDARY");
    assert_eq!(params.filters[0].values(), vec!["RARE", "LEGENDARY"]);
}

#[test]
fn test_operator_not_found() {
    let result = parse([("field8[nottin]", "whatever8")]);
    assert_eq!(
        result,
        Err(SyntaxError::OperatorNotFound("nottin".to_string()))
    );
}

#[test]
fn test_operator_tokens_are_case_sensitive() {
    assert!(matches!(
        parse([("field[EQ]", "x")]),
        Err(SyntaxError::OperatorNotFound(_))
    ));
}

#[test]
fn test_invalid_syntax() {
    let result = parse([("field8", "whatever8")]);
    assert_eq!(
        result,
        Err(SyntaxError::InvalidSyntax {
            key: "field8".to_string()
        })
    );
}

#[test]
fn test_error_stops_at_first_bad_pair() {
    let result = parse([("id[eq]", "1"), ("bad", "x"), ("id[zz]", "2")]);
    assert!(matches!(result, Err(SyntaxError::InvalidSyntax { .. })));
}

#[test]
fn test_invalid_sort_priority() {
    let err = parse([("sort[first]", "name:asc")]).unwrap_err();
    assert!(matches!(err, SyntaxError::InvalidSortPriority { ref key, .. } if key == "sort[first]"));
    assert!(err.to_string().contains("sort[first]"));
}

#[test]
fn test_sort_key_is_reserved() {
    assert!(matches!(
        parse([("sort[eq]", "x")]),
        Err(SyntaxError::InvalidSortPriority { .. })
    ));
}

#[test]
fn test_stray_closing_bracket_counts_as_delimiter() {
    // No escaping: both brackets are plain delimiters.
    let params = parse([("a]eq", "1"), ("b[lt", "2")]).unwrap();
    assert_eq!(
        params.filters,
        vec![
            Filter::new("a", Operator::Eq, "1"),
            Filter::new("b", Operator::Lt, "2"),
        ]
    );
}
