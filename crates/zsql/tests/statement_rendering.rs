//! Rendering through the public API: wire format and placeholder bookkeeping.

use serde_json::json;
use zsql::prelude::*;
use zsql::{SetValue, StatementKind, quote_identifier};

fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count()
}

#[test]
fn insert_columns_placeholders_and_params_agree() {
    for n in 1..=12usize {
        let mut q = qb::insert().into("t");
        for i in 0..n {
            q = q.value(format!("c{i}"), i as i64);
        }
        let built = q.build().unwrap();
        assert_eq!(built.params.len(), n);
        assert_eq!(placeholder_count(&built.sql), n);
        let columns = built.sql.split(" VALUES ").next().unwrap().matches('`').count() / 2;
        // first pair of backticks is the table
        assert_eq!(columns - 1, n);
    }
}

#[test]
fn where_and_limit_placeholders_agree_for_every_kind() {
    let lists: Vec<Vec<i64>> = vec![vec![], vec![1], vec![1, 2, 3], (0..20).collect()];
    for list in &lists {
        let select = qb::select()
            .table("t")
            .and_where("a", 1)
            .and_in("b", list.clone())
            .limit_offset(10, 5)
            .build()
            .unwrap();
        let update = qb::update()
            .table("t")
            .set("x", 1)
            .set("y", expr("y + 1"))
            .and_in("b", list.clone())
            .limit(1)
            .build()
            .unwrap();
        let delete = qb::delete()
            .from("t")
            .and_in("b", list.clone())
            .and_where("c", "z")
            .offset_limit(3, 4)
            .build()
            .unwrap();
        for built in [select, update, delete] {
            assert_eq!(placeholder_count(&built.sql), built.params.len(), "{}", built.sql);
        }
    }
}

#[test]
fn call_wire_format() {
    let call = qb::update()
        .table("db.t")
        .set("a", 1)
        .and_where("id", "x")
        .to_call()
        .unwrap();
    assert_eq!(
        serde_json::to_value(&call).unwrap(),
        json!(["UPDATE `db`.`t` SET `a` = ? WHERE `id` = ?", [1, "x"]])
    );

    let call = qb::delete().from("t").to_call().unwrap();
    assert_eq!(serde_json::to_value(&call).unwrap(), json!(["DELETE FROM `t`"]));
}

#[test]
fn params_are_none_when_empty() {
    assert_eq!(qb::select().table("t").params().unwrap(), None);
    assert_eq!(
        qb::select().table("t").limit(1).params().unwrap(),
        Some(vec![json!(1)])
    );
}

#[test]
fn render_errors_are_returned_not_panicked() {
    assert!(qb::select().to_sql().unwrap_err().is_precondition());
    assert!(qb::insert().into("t").to_call().unwrap_err().is_precondition());
    assert!(qb::update().set("a", 1).params().unwrap_err().is_precondition());
    assert!(qb::delete().build().unwrap_err().is_precondition());
}

#[test]
fn empty_table_name_counts_as_unset() {
    let err = qb::select().table("").to_sql().unwrap_err();
    assert!(matches!(err, ZsqlError::MissingTable(StatementKind::Select)));

    let err = qb::insert().into("").value("a", 1).to_sql().unwrap_err();
    assert!(matches!(err, ZsqlError::MissingTable(StatementKind::Insert)));

    let err = qb::update().table("").set("a", 1).to_sql().unwrap_err();
    assert!(matches!(err, ZsqlError::MissingTable(StatementKind::Update)));

    let err = qb::delete().from("").to_call().unwrap_err();
    assert!(matches!(err, ZsqlError::MissingTable(StatementKind::Delete)));

    // raw table expressions are taken as given
    assert_eq!(qb::delete().from(expr("t")).to_sql().unwrap(), "DELETE FROM t");
}

#[test]
fn insert_accepts_mixed_value_maps() {
    let values: Vec<(&str, SetValue)> = vec![
        ("a", 1.into()),
        ("b", "two".into()),
        ("c", expr("NOW()").into()),
        ("d", json!({"k": "v"}).into()),
    ];
    let built = qb::insert().into("t").values(values).build().unwrap();
    assert_eq!(
        built.sql,
        "INSERT INTO `t` (`a`, `b`, `c`, `d`) VALUES (?, ?, NOW(), ?)"
    );
    assert_eq!(built.params, vec![json!(1), json!("two"), json!({"k": "v"})]);
}

#[test]
fn identifier_quoting_is_single_substitution() {
    assert_eq!(quote_identifier("db.table"), "`db`.`table`");
    assert_eq!(quote_identifier("a.b.c"), "`a`.`b.c`");
    assert_eq!(
        qb::select().table("a.b.c").to_sql().unwrap(),
        "SELECT * FROM `a`.`b.c`"
    );
}
