//! A small in-memory executor for `Select` queries.
//!
//! It runs the AST the engine produces against rows held in memory, so the
//! effect of added predicates and ordering terms can be checked by the rows
//! they select rather than by the SQL they render to.

use model::core::{
    data_type::{DataType, EnumDef},
    table::{QualCol, TableDef},
    value::Value,
};
use planner::query::ast::{
    common::{JoinKind, OrderDir},
    expr::{BinaryOp, BinaryOperator, Expr, Ident},
    select::Select,
};
use std::{cmp::Ordering, collections::HashMap};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Table '{table}' has {expected} columns, got {actual} values")]
    Arity {
        table: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Unsupported join kind: {0:?}")]
    UnsupportedJoin(JoinKind),

    #[error("Query has no FROM clause")]
    MissingFrom,

    #[error("Cannot compare {left} with {right}")]
    Incomparable { left: String, right: String },

    #[error("Expression is not a condition: {0:?}")]
    NotACondition(Expr),

    #[error("Expression is not a value: {0:?}")]
    NotAValue(Expr),
}

pub type Result<T> = std::result::Result<T, ExecError>;

pub type Row = Vec<Value>;

struct StoredTable {
    def: TableDef,
    rows: Vec<Row>,
}

/// Tables keyed by name, each row holding one value per declared column.
#[derive(Default)]
pub struct MemoryDb {
    tables: HashMap<String, StoredTable>,
}

/// One result row, keyed by the table-qualified column each value came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<(QualCol, Value)>,
}

impl Record {
    pub fn get(&self, column: &QualCol) -> Option<&Value> {
        self.values
            .iter()
            .find(|(col, _)| col == column)
            .map(|(_, value)| value)
    }
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_table(&mut self, def: TableDef) {
        self.tables.insert(
            def.name.clone(),
            StoredTable {
                def,
                rows: Vec::new(),
            },
        );
    }

    pub fn insert(&mut self, table: &str, row: Row) -> Result<()> {
        let stored = self
            .tables
            .get_mut(table)
            .ok_or_else(|| ExecError::UnknownTable(table.to_string()))?;

        if row.len() != stored.def.columns.len() {
            return Err(ExecError::Arity {
                table: table.to_string(),
                expected: stored.def.columns.len(),
                actual: row.len(),
            });
        }

        stored.rows.push(row);
        Ok(())
    }

    /// Runs `select` with inner nested-loop joins. Rows keep their insertion
    /// order, outer table first, unless the query orders them; ordering is
    /// stable.
    pub fn query(&self, select: &Select) -> Result<Vec<Record>> {
        let from = select.from.as_ref().ok_or(ExecError::MissingFrom)?;
        let mut scope = Scope::default();

        let base = self.table(&from.table.name)?;
        scope.push(from.alias.as_deref(), base);
        let mut rows: Vec<Vec<&Row>> = base.rows.iter().map(|row| vec![row]).collect();

        for join in &select.joins {
            if join.kind != JoinKind::Inner {
                return Err(ExecError::UnsupportedJoin(join.kind));
            }

            let table = self.table(&join.table.name)?;
            scope.push(join.alias.as_deref(), table);

            let mut joined = Vec::new();
            for left in &rows {
                for right in &table.rows {
                    let mut candidate = left.clone();
                    candidate.push(right);
                    if scope.test(&join.on, &candidate)? {
                        joined.push(candidate);
                    }
                }
            }
            rows = joined;
        }

        if let Some(condition) = &select.where_clause {
            let mut kept = Vec::with_capacity(rows.len());
            for row in rows {
                if scope.test(condition, &row)? {
                    kept.push(row);
                }
            }
            rows = kept;
        }

        if !select.order_by.is_empty() {
            rows = scope.order(select, rows)?;
        }

        let records = rows
            .iter()
            .map(|row| scope.project(&select.columns, row))
            .collect::<Result<Vec<_>>>()?;

        debug!(rows = records.len(), "executed in-memory query");
        Ok(records)
    }

    fn table(&self, name: &str) -> Result<&StoredTable> {
        self.tables
            .get(name)
            .ok_or_else(|| ExecError::UnknownTable(name.to_string()))
    }
}

/// Tables visible while evaluating a row, aligned with the row's parts.
#[derive(Default)]
struct Scope<'a> {
    sources: Vec<(&'a str, &'a StoredTable)>,
    enums: HashMap<&'a str, &'a EnumDef>,
}

impl<'a> Scope<'a> {
    fn push(&mut self, alias: Option<&'a str>, table: &'a StoredTable) {
        for column in &table.def.columns {
            if let DataType::Enum(def) = &column.data_type {
                self.enums.insert(&def.name, def);
            }
        }
        self.sources.push((alias.unwrap_or(&table.def.name), table));
    }

    fn resolve(&self, ident: &Ident) -> Result<(usize, usize)> {
        for (i, (qualifier, table)) in self.sources.iter().enumerate() {
            if ident.qualifier.as_deref().is_some_and(|q| q != *qualifier) {
                continue;
            }
            if let Some(pos) = table.def.columns.iter().position(|c| c.name == ident.name) {
                return Ok((i, pos));
            }
        }

        let name = match &ident.qualifier {
            Some(qualifier) => format!("{qualifier}.{}", ident.name),
            None => ident.name.clone(),
        };
        Err(ExecError::UnknownColumn(name))
    }

    fn eval(&self, expr: &Expr, row: &[&Row]) -> Result<Value> {
        match expr {
            Expr::Identifier(ident) => {
                let (source, pos) = self.resolve(ident)?;
                Ok(row[source][pos].clone())
            }
            Expr::Value(value) => Ok(value.clone()),
            other => Err(ExecError::NotAValue(other.clone())),
        }
    }

    fn test(&self, expr: &Expr, row: &[&Row]) -> Result<bool> {
        match expr {
            Expr::BinaryOp(op) => match op.op {
                BinaryOperator::And => Ok(self.test(&op.left, row)? && self.test(&op.right, row)?),
                BinaryOperator::Or => Ok(self.test(&op.left, row)? || self.test(&op.right, row)?),
                BinaryOperator::Eq => Ok(self.compare_operands(op, row)?.is_eq()),
                BinaryOperator::NotEq => Ok(self.compare_operands(op, row)?.is_ne()),
                BinaryOperator::Lt => Ok(self.compare_operands(op, row)?.is_lt()),
                BinaryOperator::LtEq => Ok(self.compare_operands(op, row)?.is_le()),
                BinaryOperator::Gt => Ok(self.compare_operands(op, row)?.is_gt()),
                BinaryOperator::GtEq => Ok(self.compare_operands(op, row)?.is_ge()),
            },
            Expr::InList {
                expr,
                list,
                negated,
            } => {
                let value = self.eval(expr, row)?;
                let mut found = false;
                for item in list {
                    if self.compare(&value, &self.eval(item, row)?)?.is_eq() {
                        found = true;
                        break;
                    }
                }
                Ok(found != *negated)
            }
            other => Err(ExecError::NotACondition(other.clone())),
        }
    }

    fn compare_operands(&self, op: &BinaryOp, row: &[&Row]) -> Result<Ordering> {
        let left = self.eval(&op.left, row)?;
        let right = self.eval(&op.right, row)?;
        self.compare(&left, &right)
    }

    /// Enumerated values of a known enum compare by declaration order.
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering> {
        let ordering = match (left, right) {
            (Value::Enum(a_name, a), Value::Enum(b_name, b)) if a_name == b_name => self
                .enums
                .get(a_name.as_str())
                .and_then(|def| Some(def.position(a)?.cmp(&def.position(b)?))),
            _ => left.compare(right),
        };

        ordering.ok_or_else(|| ExecError::Incomparable {
            left: left.to_string(),
            right: right.to_string(),
        })
    }

    fn order<'r>(&self, select: &Select, rows: Vec<Vec<&'r Row>>) -> Result<Vec<Vec<&'r Row>>> {
        let mut keyed = rows
            .into_iter()
            .map(|row| {
                let keys = select
                    .order_by
                    .iter()
                    .map(|term| self.eval(&term.expr, &row))
                    .collect::<Result<Vec<_>>>()?;
                Ok((keys, row))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut failure = None;
        keyed.sort_by(|(a, _), (b, _)| {
            for ((left, right), term) in a.iter().zip(b).zip(&select.order_by) {
                match self.compare(left, right) {
                    Ok(Ordering::Equal) => continue,
                    Ok(ordering) if term.direction == Some(OrderDir::Desc) => {
                        return ordering.reverse();
                    }
                    Ok(ordering) => return ordering,
                    Err(err) => {
                        failure.get_or_insert(err);
                        return Ordering::Equal;
                    }
                }
            }
            Ordering::Equal
        });

        match failure {
            Some(err) => Err(err),
            None => Ok(keyed.into_iter().map(|(_, row)| row).collect()),
        }
    }

    fn project(&self, columns: &[Expr], row: &[&Row]) -> Result<Record> {
        let mut values = Vec::new();

        if columns.is_empty() {
            for ((_, table), part) in self.sources.iter().zip(row) {
                for (column, value) in table.def.columns.iter().zip(part.iter()) {
                    values.push((column.qualified(), value.clone()));
                }
            }
        }

        for column in columns {
            let Expr::Identifier(ident) = column else {
                return Err(ExecError::NotAValue(column.clone()));
            };
            let (source, pos) = self.resolve(ident)?;
            let table = &self.sources[source].1.def;
            values.push((table.col(&table.columns[pos].name), row[source][pos].clone()));
        }

        Ok(Record { values })
    }
}
