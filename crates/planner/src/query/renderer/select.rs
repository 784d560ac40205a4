use crate::query::{
    ast::{
        common::{JoinKind, OrderDir},
        select::{FromClause, JoinClause, OrderByExpr, Select},
    },
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        if self.columns.is_empty() {
            r.sql.push('*');
        }
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r);
        }

        // 2. FROM
        if let Some(from) = &self.from {
            r.sql.push(' ');
            from.render(r);
        }

        // 3. JOIN
        for join in &self.joins {
            r.sql.push(' ');
            join.render(r);
        }

        // 4. WHERE
        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }

        // 5. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                order.render(r);
            }
        }
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        r.sql.push_str(&r.dialect.quote_identifier(&self.table.name));
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(&r.dialect.quote_identifier(alias));
        }
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) {
        let join_str = match self.kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL OUTER JOIN",
        };
        r.sql.push_str(&format!("{join_str} "));
        r.sql.push_str(&r.dialect.quote_identifier(&self.table.name));
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(&r.dialect.quote_identifier(alias));
        }
        r.sql.push_str(" ON ");
        self.on.render(r);
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(dir) = &self.direction {
            let dir_str = match dir {
                OrderDir::Asc => "ASC",
                OrderDir::Desc => "DESC",
            };
            r.sql.push(' ');
            r.sql.push_str(dir_str);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::{
            common::{JoinKind, OrderDir},
            expr::{BinaryOperator, Expr},
            select::{FromClause, OrderByExpr, Select},
        },
        builder::select::SelectBuilder,
        dialect::{MySql, Postgres},
        ident, qualified,
        renderer::{Render, Renderer},
        value,
    };
    use model::core::{data_type::DataType, table::TableDef, value::Value};

    fn users() -> TableDef {
        TableDef::new("users")
            .column("id", DataType::Long)
            .column("name", DataType::VarChar)
    }

    #[test]
    fn test_simple_select_postgres() {
        let ast = Select {
            columns: vec![ident("id"), ident("name")],
            from: Some(FromClause {
                table: users(),
                alias: None,
            }),
            where_clause: Some(Expr::binary(
                ident("id"),
                BinaryOperator::Eq,
                value(Value::Int(123)),
            )),
            ..Default::default()
        };

        let dialect = Postgres;
        let mut renderer = Renderer::new(&dialect);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, r#"SELECT "id", "name" FROM "users" WHERE ("id" = $1)"#);
        assert_eq!(params, vec![Value::Int(123)]);
    }

    #[test]
    fn test_simple_select_mysql() {
        let ast = Select {
            columns: vec![ident("id"), ident("name")],
            from: Some(FromClause {
                table: users(),
                alias: None,
            }),
            where_clause: Some(Expr::binary(
                ident("name"),
                BinaryOperator::NotEq,
                value(Value::String("abc".to_string())),
            )),
            ..Default::default()
        };

        let dialect = MySql;
        let mut renderer = Renderer::new(&dialect);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, "SELECT `id`, `name` FROM `users` WHERE (`name` <> ?)");
        assert_eq!(params, vec![Value::String("abc".to_string())]);
    }

    #[test]
    fn test_select_star_with_join_and_order() {
        let posts = TableDef::new("posts").column("user_id", DataType::Long);
        let mut ast = SelectBuilder::new()
            .select(vec![])
            .from(users(), Some("u"))
            .join(
                JoinKind::Inner,
                posts,
                None,
                Expr::binary(
                    qualified("u", "id"),
                    BinaryOperator::Eq,
                    qualified("posts", "user_id"),
                ),
            )
            .build();
        ast.add_order_by([
            OrderByExpr {
                expr: qualified("u", "name"),
                direction: Some(OrderDir::Desc),
            },
            OrderByExpr {
                expr: qualified("u", "id"),
                direction: None,
            },
        ]);

        let dialect = Postgres;
        let mut renderer = Renderer::new(&dialect);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(
            sql,
            r#"SELECT * FROM "users" AS "u" INNER JOIN "posts" ON ("u"."id" = "posts"."user_id") ORDER BY "u"."name" DESC, "u"."id""#
        );
        assert!(params.is_empty());
    }
}
