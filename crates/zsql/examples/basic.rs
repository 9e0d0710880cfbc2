//! Basic usage example for zsql
//!
//! Run with: cargo run --example basic -p zsql
//!
//! Builds a few statements, prints their SQL and parameters, and runs them
//! through an in-memory driver that echoes what it receives.

use serde_json::{Map, json};
use std::sync::Arc;
use zsql::prelude::*;

/// A stand-in for a real database driver.
struct EchoDriver;

#[async_trait::async_trait]
impl Driver for EchoDriver {
    async fn get_one(&self, call: &Call) -> ZsqlResult<Option<Row>> {
        println!("get_one  {}  {:?}", call.sql, call.params());
        let mut row = Map::new();
        row.insert("id".to_string(), json!(1));
        row.insert("username".to_string(), json!("alice"));
        Ok(Some(row))
    }

    async fn get_all(&self, call: &Call) -> ZsqlResult<Vec<Row>> {
        println!("get_all  {}  {:?}", call.sql, call.params());
        Ok(Vec::new())
    }

    async fn execute(&self, call: &Call) -> ZsqlResult<ExecOutcome> {
        println!("execute  {}  {:?}", call.sql, call.params());
        Ok(ExecOutcome {
            affected_rows: 1,
            insert_id: None,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), ZsqlError> {
    let driver = Arc::new(EchoDriver);

    // Render only
    let q = qb::select()
        .from("app.users")
        .columns(["id", "username"])
        .and_where("status", "active")
        .and_in("role", ["admin", "editor"])
        .order_by_desc("created_at")
        .limit_offset(20, 40);
    let built = q.build()?;
    println!("{}", built.sql);
    println!("{:?}", built.params);
    println!("{}", serde_json::to_string(&q.to_call()?).unwrap_or_default());

    // Through a driver
    let name = qb::select()
        .from("users")
        .columns("username")
        .and_where("id", 1)
        .attach(driver.clone())
        .get_column()
        .await?;
    println!("first column: {name:?}");

    qb::insert()
        .into("users")
        .value("username", "bob")
        .value("created_at", expr("NOW()"))
        .attach(driver.clone())
        .execute()
        .await?;

    qb::update()
        .table("users")
        .set("logins", expr("logins + 1"))
        .and_where("username", "bob")
        .attach(driver.clone())
        .execute()
        .await?;

    qb::delete()
        .from("sessions")
        .and_raw("expires_at < NOW()")
        .attach(driver)
        .execute()
        .await?;

    // Without a driver the error comes back through the result
    match qb::select().from("users").get_all().await {
        Err(err) => println!("expected: {err}"),
        Ok(_) => println!("unexpected success"),
    }

    Ok(())
}
