use crate::core::data_type::DataType;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A table-qualified column handle, written `table.column`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct QualCol {
    pub table: String,
    pub column: String,
}

impl QualCol {
    pub fn new(table: &str, column: &str) -> Self {
        Self {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}

impl FromStr for QualCol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((table, column))
                if !table.is_empty() && !column.is_empty() && !column.contains('.') =>
            {
                Ok(QualCol::new(table, column))
            }
            _ => Err(format!("Expected a qualified column `table.column`, got `{s}`")),
        }
    }
}

impl TryFrom<String> for QualCol {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<QualCol> for String {
    fn from(col: QualCol) -> Self {
        col.to_string()
    }
}

impl fmt::Display for QualCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Name of the table that owns the column.
    pub table: String,
    pub name: String,
    pub data_type: DataType,
}

impl ColumnDef {
    pub fn qualified(&self) -> QualCol {
        QualCol::new(&self.table, &self.name)
    }
}

/// A named table and its typed columns, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

impl TableDef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    /// Builds a table from introspected `(column, SQL type name)` pairs, in
    /// order. Enumerated columns can't be described by a type name alone and
    /// are added afterwards with [`TableDef::column`].
    pub fn from_sql_columns<'a, I>(name: &str, columns: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        columns
            .into_iter()
            .try_fold(Self::new(name), |table, (column, sql_type)| -> Result<Self, String> {
                let data_type = DataType::from_sql_type(sql_type)
                    .map_err(|e| format!("{name}.{column}: {e}"))?;
                Ok(table.column(column, data_type))
            })
    }

    pub fn column(mut self, name: &str, data_type: DataType) -> Self {
        self.columns.push(ColumnDef {
            table: self.name.clone(),
            name: name.to_string(),
            data_type,
        });
        self
    }

    /// Looks a column up by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn col(&self, name: &str) -> QualCol {
        QualCol::new(&self.name, name)
    }
}
