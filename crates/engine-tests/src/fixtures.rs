//! The `user` and `transaction` tables and the rows the integration
//! scenarios run against.

use crate::memory::MemoryDb;
use bigdecimal::BigDecimal;
use model::core::{
    data_type::{DataType, EnumDef},
    table::TableDef,
    value::Value,
};
use planner::query::{
    ast::{common::JoinKind, expr::BinaryOperator, expr::Expr, select::Select},
    builder::select::SelectBuilder,
    qualified,
};
use std::str::FromStr;

pub const USER_TYPE: &str = "user_type";

pub fn user_type() -> EnumDef {
    EnumDef::new(USER_TYPE, ["COMMON", "RARE", "EPIC", "LEGENDARY"])
}

pub fn user_table() -> TableDef {
    TableDef::from_sql_columns("user", [("id", "bigint"), ("name", "varchar(255)")])
        .expect("user columns")
        .column("type", DataType::Enum(user_type()))
}

pub fn transaction_table() -> TableDef {
    TableDef::from_sql_columns(
        "transaction",
        [
            ("id", "bigint"),
            ("user_id", "bigint"),
            ("transaction_amount", "decimal(10,2)"),
            ("priority", "int"),
        ],
    )
    .expect("transaction columns")
}

/// `(id, name, type)`
pub const USERS: [(i64, &str, &str); 6] = [
    (1, "John", "COMMON"),
    (2, "Lucas", "COMMON"),
    (3, "David", "COMMON"),
    (4, "Frank", "RARE"),
    (5, "Julio", "EPIC"),
    (6, "Chad", "LEGENDARY"),
];

/// `(id, user_id, transaction_amount, priority)`
pub const TRANSACTIONS: [(i64, i64, &str, i32); 5] = [
    (1, 1, "1000", 0),
    (2, 6, "100000.01", 10),
    (3, 2, "10", 0),
    (4, 2, "10", 0),
    (5, 5, "10000", 5),
];

pub fn seeded_db() -> MemoryDb {
    let mut db = MemoryDb::new();
    db.create_table(user_table());
    db.create_table(transaction_table());

    for (id, name, kind) in USERS {
        db.insert(
            "user",
            vec![
                Value::Int(id),
                Value::String(name.to_string()),
                Value::Enum(USER_TYPE.to_string(), kind.to_string()),
            ],
        )
        .expect("insert user");
    }

    for (id, user_id, amount, priority) in TRANSACTIONS {
        let amount = BigDecimal::from_str(amount).expect("valid amount");
        db.insert(
            "transaction",
            vec![
                Value::Int(id),
                Value::Int(user_id),
                Value::Decimal(amount),
                Value::Int32(priority),
            ],
        )
        .expect("insert transaction");
    }

    db
}

/// `SELECT * FROM user`
pub fn users_query() -> Select {
    SelectBuilder::new()
        .select(vec![])
        .from(user_table(), None)
        .build()
}

/// `SELECT * FROM user INNER JOIN transaction ON user.id = transaction.user_id`
pub fn users_with_transactions_query() -> Select {
    SelectBuilder::new()
        .select(vec![])
        .from(user_table(), None)
        .join(
            JoinKind::Inner,
            transaction_table(),
            None,
            Expr::binary(
                qualified("user", "id"),
                BinaryOperator::Eq,
                qualified("transaction", "user_id"),
            ),
        )
        .build()
}
