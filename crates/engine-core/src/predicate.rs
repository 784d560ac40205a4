use crate::{
    coercion::{coerce, coerce_list},
    error::Result,
};
use lhs_syntax::{Filter, Operator, SortDirection};
use model::core::table::ColumnDef;
use planner::query::{
    ast::{
        common::OrderDir,
        expr::{BinaryOperator, Expr},
        select::OrderByExpr,
    },
    value,
};

/// Builds the boolean condition for `column_expr operator value` of `filter`.
///
/// List operators coerce every element of [`Filter::values`] on its own.
pub fn filter_predicate(column_expr: Expr, column: &ColumnDef, filter: &Filter) -> Result<Expr> {
    let compare = |op: BinaryOperator| -> Result<Expr> {
        Ok(Expr::binary(
            column_expr.clone(),
            op,
            value(coerce(&filter.value, column)?),
        ))
    };
    let membership = |negated: bool| -> Result<Expr> {
        let list = coerce_list(filter.values(), column)?
            .into_iter()
            .map(value)
            .collect();
        Ok(column_expr.clone().in_list(list, negated))
    };

    match filter.operator {
        Operator::Eq => compare(BinaryOperator::Eq),
        Operator::Neq => compare(BinaryOperator::NotEq),
        Operator::Gt => compare(BinaryOperator::Gt),
        Operator::Gte => compare(BinaryOperator::GtEq),
        Operator::Lt => compare(BinaryOperator::Lt),
        Operator::Lte => compare(BinaryOperator::LtEq),
        Operator::In => membership(false),
        Operator::NotIn => membership(true),
    }
}

pub fn order_term(column_expr: Expr, direction: SortDirection) -> OrderByExpr {
    let direction = match direction {
        SortDirection::Asc => OrderDir::Asc,
        SortDirection::Desc => OrderDir::Desc,
    };
    OrderByExpr {
        expr: column_expr,
        direction: Some(direction),
    }
}
