//! # zsql
//!
//! A fluent builder for parameterized SQL statements.
//!
//! ## Features
//!
//! - **Placeholders stay in sync**: every render yields the SQL text and the
//!   bind parameters for its `?`s, in order
//! - **MySQL-style quoting**: identifiers are backtick-quoted, `db.table` aware
//! - **Raw escape hatch**: [`Expr`] values are emitted verbatim
//! - **Driver agnostic**: execute-style calls forward to an attached [`Driver`]
//! - **SQL logging**: `tracing` events for every dispatched call (feature `tracing`)
//!
//! ## Query Builder (qb)
//!
//! ```ignore
//! use zsql::prelude::*;
//!
//! // SELECT
//! let users = qb::select()
//!     .from("users")
//!     .columns(["id", "username"])
//!     .and_where("status", "active")
//!     .order_by_desc("created_at")
//!     .limit(10)
//!     .attach(driver.clone())
//!     .get_all()
//!     .await?;
//!
//! // INSERT
//! qb::insert()
//!     .into("users")
//!     .value("username", "alice")
//!     .value("created_at", expr("NOW()"))
//!     .attach(driver.clone())
//!     .execute()
//!     .await?;
//!
//! // UPDATE
//! qb::update()
//!     .table("users")
//!     .set("status", "inactive")
//!     .and_where("id", user_id)
//!     .to_sql()?;
//!
//! // DELETE
//! qb::delete()
//!     .from("users")
//!     .and_in("id", [1, 2, 3])
//!     .to_call()?;
//! ```

pub mod driver;
pub mod error;
pub mod expr;
pub mod ident;
pub mod prelude;
pub mod qb;

#[cfg(feature = "tracing")]
pub mod monitor;

pub use driver::{Call, Driver, DriverHandle, ExecOutcome, Row};
pub use error::{StatementKind, ZsqlError, ZsqlResult};
pub use expr::{Expr, expr};
pub use ident::{Ident, quote_identifier};

#[cfg(feature = "tracing")]
pub use monitor::TracingDriver;

// Re-export qb module for easy access
pub use qb::{
    BuiltQuery, Columns, Condition, Delete, Direction, Filterable, HintMode, Insert, Select,
    SetValue, SqlStatement, Update, del, delete, insert, select, update,
};
