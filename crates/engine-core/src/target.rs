use model::core::table::{ColumnDef, TableDef};
use planner::query::{
    ast::{
        expr::Expr,
        select::{OrderByExpr, Select},
    },
    qualified,
};

/// The capabilities the engine needs from a query.
///
/// Implementors own the query; the engine only looks columns up and appends
/// to it. A single call mutates the query from one thread, so callers sharing
/// a query across threads must serialize access themselves.
pub trait QueryTarget {
    /// Tables the query reads from, in the order they were added or joined.
    fn targets(&self) -> Vec<&TableDef>;

    /// How the query refers to `column` in predicates and ordering terms.
    fn column_expr(&self, column: &ColumnDef) -> Expr;

    /// Appends ordering terms after any already present.
    fn add_order_by(&mut self, terms: Vec<OrderByExpr>);

    /// Conjoins `predicate` with the existing filter condition.
    fn and_where(&mut self, predicate: Expr);
}

impl QueryTarget for Select {
    fn targets(&self) -> Vec<&TableDef> {
        Select::targets(self)
    }

    fn column_expr(&self, column: &ColumnDef) -> Expr {
        qualified(self.qualifier_for(&column.table), &column.name)
    }

    fn add_order_by(&mut self, terms: Vec<OrderByExpr>) {
        Select::add_order_by(self, terms);
    }

    fn and_where(&mut self, predicate: Expr) {
        Select::and_where(self, predicate);
    }
}
