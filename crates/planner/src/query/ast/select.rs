//! Defines the Abstract Syntax Tree (AST) for a SELECT query.

use crate::query::ast::{
    common::{JoinKind, OrderDir},
    expr::Expr,
};
use model::core::table::TableDef;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The list of columns or expressions to be returned.
    /// An empty list selects every column (`*`).
    pub columns: Vec<Expr>,

    /// The primary table for the query.
    /// e.g., `FROM users`
    pub from: Option<FromClause>,

    /// A list of JOIN clauses, in the order they were added.
    pub joins: Vec<JoinClause>,

    /// The WHERE clause condition.
    pub where_clause: Option<Expr>,

    /// The ORDER BY clause.
    pub order_by: Vec<OrderByExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableDef,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub table: TableDef,
    pub alias: Option<String>,
    /// The join condition, e.g., `ON users.id = posts.user_id`.
    pub on: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Option<OrderDir>,
}

impl Select {
    /// Tables the query reads from: the FROM table first, then joined
    /// tables in join order.
    pub fn targets(&self) -> Vec<&TableDef> {
        self.sources().map(|(table, _)| table).collect()
    }

    /// The name a table is addressed by within this query: its alias when it
    /// has one, otherwise its own name.
    pub fn qualifier_for<'a>(&'a self, table: &'a str) -> &'a str {
        self.sources()
            .find(|(t, _)| t.name == table)
            .and_then(|(_, alias)| alias)
            .unwrap_or(table)
    }

    /// Conjoins `condition` with the existing WHERE clause, if any.
    pub fn and_where(&mut self, condition: Expr) {
        self.where_clause = Some(match self.where_clause.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
    }

    /// Appends ordering terms after any already present.
    pub fn add_order_by(&mut self, terms: impl IntoIterator<Item = OrderByExpr>) {
        self.order_by.extend(terms);
    }

    fn sources(&self) -> impl Iterator<Item = (&TableDef, Option<&str>)> {
        self.from
            .iter()
            .map(|f| (&f.table, f.alias.as_deref()))
            .chain(self.joins.iter().map(|j| (&j.table, j.alias.as_deref())))
    }
}
