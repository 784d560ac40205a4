use crate::{
    error::Result,
    policy::{ExclusionPolicy, SearchOptions},
    predicate::{filter_predicate, order_term},
    resolve::resolve_column,
    target::QueryTarget,
};
use lhs_syntax::{Filter, SearchParams, Sort};
use planner::query::ast::{expr::Expr, select::OrderByExpr};
use tracing::debug;

/// Adds filters and sorts to any [`QueryTarget`].
///
/// Every call is all-or-nothing: all terms are resolved and built before the
/// query is touched, so on error the query is left as it was.
pub trait SearchQueryExt: QueryTarget {
    /// Appends one ordering term per sort, lowest priority first. Sorts on
    /// excluded columns are skipped unless `policy` is strict.
    fn add_order_by_from_sorts(
        &mut self,
        sorts: &[Sort],
        policy: &ExclusionPolicy,
    ) -> Result<&mut Self> {
        let terms = build_order_terms(&*self, sorts, policy)?;
        if !terms.is_empty() {
            self.add_order_by(terms);
        }
        Ok(self)
    }

    /// Conjoins one predicate per filter, in the given order. Filters on
    /// excluded columns are skipped unless `policy` is strict.
    fn add_where_from_filters(
        &mut self,
        filters: &[Filter],
        policy: &ExclusionPolicy,
    ) -> Result<&mut Self> {
        let predicates = build_predicates(&*self, filters, policy)?;
        for predicate in predicates {
            self.and_where(predicate);
        }
        Ok(self)
    }

    /// Applies both the filters and the sorts of `params`.
    fn apply_search_params(
        &mut self,
        params: &SearchParams,
        options: &SearchOptions,
    ) -> Result<&mut Self> {
        let predicates = build_predicates(&*self, &params.filters, &options.filters)?;
        let terms = build_order_terms(&*self, &params.sorts, &options.sorts)?;

        for predicate in predicates {
            self.and_where(predicate);
        }
        if !terms.is_empty() {
            self.add_order_by(terms);
        }
        Ok(self)
    }

    /// Parses bracket-syntax query parameters and applies them.
    fn apply_query_pairs<I, K, V>(&mut self, pairs: I, options: &SearchOptions) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params = lhs_syntax::parse(pairs)?;
        self.apply_search_params(&params, options)
    }
}

impl<T: QueryTarget + ?Sized> SearchQueryExt for T {}

fn build_order_terms<Q: QueryTarget + ?Sized>(
    query: &Q,
    sorts: &[Sort],
    policy: &ExclusionPolicy,
) -> Result<Vec<OrderByExpr>> {
    let mut sorts: Vec<&Sort> = sorts.iter().collect();
    sorts.sort_by_key(|sort| sort.priority);

    let targets = query.targets();
    let mut terms = Vec::with_capacity(sorts.len());
    for sort in sorts {
        if let Some(column) = resolve_column(&sort.field_name, &targets, policy)? {
            terms.push(order_term(query.column_expr(column), sort.direction));
        }
    }

    debug!(terms = terms.len(), "built ordering terms");
    Ok(terms)
}

fn build_predicates<Q: QueryTarget + ?Sized>(
    query: &Q,
    filters: &[Filter],
    policy: &ExclusionPolicy,
) -> Result<Vec<Expr>> {
    let targets = query.targets();
    let mut predicates = Vec::with_capacity(filters.len());
    for filter in filters {
        if let Some(column) = resolve_column(&filter.field_name, &targets, policy)? {
            predicates.push(filter_predicate(query.column_expr(column), column, filter)?);
        }
    }

    debug!(predicates = predicates.len(), "built filter predicates");
    Ok(predicates)
}
