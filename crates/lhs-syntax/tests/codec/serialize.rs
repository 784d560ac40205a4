//! Tests for turning `SearchParams` back into query parameter pairs

use lhs_syntax::{Filter, Operator, SearchParams, Sort, SortDirection, parse, serialize};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_serialize_filters_then_sorts() {
    let params = SearchParams::new(
        vec![
            Filter::new("property_type", Operator::Eq, "PARKING"),
            Filter::new("deposit_amount", Operator::Lte, "604.75"),
            Filter::new("type", Operator::NotIn, "RARE,EPIC"),
        ],
        vec![
            Sort::new("auction_value", SortDirection::Asc, 0),
            Sort::new("name", SortDirection::Desc, 1),
        ],
    );

    assert_eq!(
        serialize(&params),
        pairs(&[
            ("property_type[eq]", "PARKING"),
            ("deposit_amount[lte]", "604.75"),
            ("type[notin]", "RARE,EPIC"),
            ("sort[0]", "auction_value:asc"),
            ("sort[1]", "name:desc"),
        ])
    );
}

#[test]
fn test_serialize_empty() {
    assert!(SearchParams::default().to_query_pairs().is_empty());
}

#[test]
fn test_parse_of_serialized_reproduces_params() {
    let params = SearchParams::new(
        Operator::ALL
            .iter()
            .enumerate()
            .map(|(i, op)| Filter::new(&format!("field{i}"), *op, &format!("v{i}")))
            .collect(),
        vec![
            Sort::new("a", SortDirection::Desc, -2),
            Sort::new("b", SortDirection::Asc, 0),
            Sort::new("c", SortDirection::Desc, 7),
        ],
    );

    assert_eq!(parse(serialize(&params)).unwrap(), params);
}

#[test]
fn test_serialized_params_keep_priorities_verbatim() {
    let params = parse([("sort[5]", "b:desc"), ("sort[2]", "a")]).unwrap();
    assert_eq!(
        params.to_query_pairs(),
        pairs(&[("sort[2]", "a:asc"), ("sort[5]", "b:desc")])
    );
}
