use crate::error::{QueryError, Result};
use bigdecimal::BigDecimal;
use model::core::{data_type::DataType, table::ColumnDef, value::Value};
use std::{fmt::Display, str::FromStr};

/// Converts a raw filter value to the native type of `column`.
///
/// # Errors
///
/// - [`QueryError::UnsupportedColumnType`] if the column's type has no
///   coercion rule.
/// - [`QueryError::InvalidValue`] if `raw` can't be read as that type.
pub fn coerce(raw: &str, column: &ColumnDef) -> Result<Value> {
    match &column.data_type {
        DataType::Char | DataType::VarChar | DataType::String => Ok(Value::String(raw.to_string())),
        DataType::Short => parse_as(raw, column, Value::SmallInt),
        DataType::Int => parse_as(raw, column, Value::Int32),
        DataType::Long => parse_as(raw, column, Value::Int),
        DataType::Decimal => parse_as::<BigDecimal, _>(raw, column, Value::Decimal),
        DataType::Enum(def) => {
            if def.contains(raw) {
                Ok(Value::Enum(def.name.clone(), raw.to_string()))
            } else {
                Err(invalid(
                    raw,
                    column,
                    format!("expected one of [{}]", def.variants.join(", ")),
                ))
            }
        }
        DataType::Float
        | DataType::Double
        | DataType::Boolean
        | DataType::Date
        | DataType::Timestamp
        | DataType::Json
        | DataType::Bytea => Err(QueryError::UnsupportedColumnType {
            column: column.qualified().to_string(),
            data_type: column.data_type.to_string(),
        }),
    }
}

/// Coerces every element of a list value with [`coerce`], failing on the
/// first element that doesn't convert.
pub fn coerce_list<'a, I>(items: I, column: &ColumnDef) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().map(|item| coerce(item, column)).collect()
}

fn parse_as<T, F>(raw: &str, column: &ColumnDef, wrap: F) -> Result<Value>
where
    T: FromStr,
    T::Err: Display,
    F: FnOnce(T) -> Value,
{
    raw.parse::<T>()
        .map(wrap)
        .map_err(|e| invalid(raw, column, e.to_string()))
}

fn invalid(raw: &str, column: &ColumnDef, reason: String) -> QueryError {
    QueryError::InvalidValue {
        column: column.qualified().to_string(),
        value: raw.to_string(),
        expected: column.data_type.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::{data_type::EnumDef, table::TableDef};

    fn table() -> TableDef {
        TableDef::new("t")
            .column("name", DataType::VarChar)
            .column("small", DataType::Short)
            .column("priority", DataType::Int)
            .column("id", DataType::Long)
            .column("amount", DataType::Decimal)
            .column(
                "type",
                DataType::Enum(EnumDef::new("user_type", ["COMMON", "RARE", "LEGENDARY"])),
            )
            .column("created_at", DataType::Timestamp)
    }

    fn coerce_on(column: &str, raw: &str) -> Result<Value> {
        let table = table();
        coerce(raw, table.get(column).unwrap())
    }

    #[test]
    fn test_text_passes_through() {
        assert_eq!(
            coerce_on("name", " Chad ").unwrap(),
            Value::String(" Chad ".into())
        );
        assert_eq!(coerce_on("name", "").unwrap(), Value::String(String::new()));
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(coerce_on("small", "-7").unwrap(), Value::SmallInt(-7));
        assert_eq!(coerce_on("priority", "3").unwrap(), Value::Int32(3));
        assert_eq!(
            coerce_on("id", "9000000000").unwrap(),
            Value::Int(9_000_000_000)
        );
    }

    #[test]
    fn test_integer_out_of_range() {
        assert!(matches!(
            coerce_on("priority", "9000000000"),
            Err(QueryError::InvalidValue { .. })
        ));
        assert!(coerce_on("small", "40000").is_err());
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let err = coerce_on("id", "three").unwrap_err();
        match err {
            QueryError::InvalidValue {
                column,
                value,
                expected,
                ..
            } => {
                assert_eq!(column, "t.id");
                assert_eq!(value, "three");
                assert_eq!(expected, "BIGINT");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_values_are_not_trimmed() {
        assert!(coerce_on("id", " 3").is_err());
    }

    #[test]
    fn test_decimal() {
        assert_eq!(
            coerce_on("amount", "100000.01").unwrap(),
            Value::Decimal(BigDecimal::from_str("100000.01").unwrap())
        );
        assert!(coerce_on("amount", "1,000").is_err());
    }

    #[test]
    fn test_enum_lookup() {
        assert_eq!(
            coerce_on("type", "RARE").unwrap(),
            Value::Enum("user_type".into(), "RARE".into())
        );
        let err = coerce_on("type", "rare").unwrap_err();
        assert!(err.to_string().contains("COMMON, RARE, LEGENDARY"));
    }

    #[test]
    fn test_unsupported_column_type() {
        let err = coerce_on("created_at", "2024-01-01").unwrap_err();
        assert!(matches!(
            err,
            QueryError::UnsupportedColumnType { ref column, ref data_type }
                if column == "t.created_at" && data_type == "TIMESTAMP"
        ));
    }

    #[test]
    fn test_coerce_list() {
        let table = table();
        let column = table.get("type").unwrap();
        assert_eq!(
            coerce_list(["RARE", "LEGENDARY"], column).unwrap(),
            vec![
                Value::Enum("user_type".into(), "RARE".into()),
                Value::Enum("user_type".into(), "LEGENDARY".into()),
            ]
        );

        let id = table.get("id").unwrap();
        assert_eq!(
            coerce_list(["1", "2", "3"], id).unwrap(),
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
        assert!(coerce_list(["1", "", "3"], id).is_err());
    }
}
