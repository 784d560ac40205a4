use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::HashMap, fmt};

/// Semantic type of a column as seen by filters and sorts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    Short,
    Int,
    Long,
    Decimal,
    Float,
    Double,
    Boolean,
    Date,
    Timestamp,
    Char,
    VarChar,
    String,
    Json,
    Bytea,
    Enum(EnumDef),
}

/// Declared mapping for an enumerated column.
///
/// The order of `variants` is the declaration order, which is also the
/// ordering used when enumerated values are compared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumDef {
    pub name: String,
    pub variants: Vec<String>,
}

impl EnumDef {
    pub fn new<I, S>(name: &str, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    /// Declaration ordinal of `label`, matched case-sensitively.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.variants.iter().position(|v| v == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }
}

lazy_static! {
    static ref SQL_TYPE_MAP: HashMap<&'static str, DataType> = build_sql_type_map();
}

impl DataType {
    /// Maps an introspected SQL type name (MySQL or PostgreSQL spelling) to a
    /// `DataType`. Length and precision suffixes such as `(255)` or `(10,2)`
    /// are ignored.
    ///
    /// Enumerations carry their own variant list and can't be derived from a
    /// type name, so `ENUM` is reported as unknown.
    pub fn from_sql_type(type_name: &str) -> Result<Self, String> {
        let normalized = Self::normalize_type_name(type_name);
        SQL_TYPE_MAP
            .get(normalized.as_str())
            .cloned()
            .ok_or_else(|| format!("Unknown column type: {type_name}"))
    }

    pub fn name(&self) -> Cow<'_, str> {
        match self {
            DataType::Short => Cow::Borrowed("SMALLINT"),
            DataType::Int => Cow::Borrowed("INTEGER"),
            DataType::Long => Cow::Borrowed("BIGINT"),
            DataType::Decimal => Cow::Borrowed("DECIMAL"),
            DataType::Float => Cow::Borrowed("REAL"),
            DataType::Double => Cow::Borrowed("DOUBLE PRECISION"),
            DataType::Boolean => Cow::Borrowed("BOOLEAN"),
            DataType::Date => Cow::Borrowed("DATE"),
            DataType::Timestamp => Cow::Borrowed("TIMESTAMP"),
            DataType::Char => Cow::Borrowed("CHAR"),
            DataType::VarChar => Cow::Borrowed("VARCHAR"),
            DataType::String => Cow::Borrowed("TEXT"),
            DataType::Json => Cow::Borrowed("JSON"),
            DataType::Bytea => Cow::Borrowed("BYTEA"),
            DataType::Enum(def) => Cow::Owned(format!("ENUM {}", def.name)),
        }
    }

    fn normalize_type_name(type_name: &str) -> String {
        let base = match type_name.find('(') {
            Some(open) => {
                let close = type_name[open..]
                    .find(')')
                    .map(|i| open + i + 1)
                    .unwrap_or(type_name.len());
                format!("{}{}", &type_name[..open], &type_name[close..])
            }
            None => type_name.to_string(),
        };

        base.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn build_sql_type_map() -> HashMap<&'static str, DataType> {
    use DataType::*;

    let entries = [
        ("BOOLEAN", Boolean),
        ("BOOL", Boolean),
        ("TINYINT", Short),
        ("SMALLINT", Short),
        ("INT2", Short),
        ("TINYINT UNSIGNED", Short),
        ("SMALLINT UNSIGNED", Int),
        ("MEDIUMINT", Int),
        ("MEDIUMINT UNSIGNED", Int),
        ("INT", Int),
        ("INTEGER", Int),
        ("INT4", Int),
        ("INT UNSIGNED", Long),
        ("INTEGER UNSIGNED", Long),
        ("BIGINT", Long),
        ("INT8", Long),
        ("FLOAT", Float),
        ("FLOAT4", Float),
        ("REAL", Float),
        ("DOUBLE", Double),
        ("FLOAT8", Double),
        ("DOUBLE PRECISION", Double),
        ("DECIMAL", Decimal),
        ("NUMERIC", Decimal),
        ("NEWDECIMAL", Decimal),
        ("DATE", Date),
        ("TIMESTAMP", Timestamp),
        ("DATETIME", Timestamp),
        ("TIMESTAMPTZ", Timestamp),
        ("TIMESTAMP WITHOUT TIME ZONE", Timestamp),
        ("TIMESTAMP WITH TIME ZONE", Timestamp),
        ("CHAR", Char),
        ("CHARACTER", Char),
        ("BPCHAR", Char),
        ("VARCHAR", VarChar),
        ("CHARACTER VARYING", VarChar),
        ("TEXT", String),
        ("TINYTEXT", String),
        ("MEDIUMTEXT", String),
        ("LONGTEXT", String),
        ("NAME", String),
        ("JSON", Json),
        ("JSONB", Json),
        ("BYTEA", Bytea),
        ("BLOB", Bytea),
        ("BINARY", Bytea),
        ("VARBINARY", Bytea),
    ];

    let mut map = HashMap::new();
    for (name, data_type) in entries {
        map.insert(name, data_type);
    }
    map
}
