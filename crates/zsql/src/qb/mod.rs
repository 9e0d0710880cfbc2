//! Statement builders.
//!
//! Every builder renders MySQL-flavoured SQL with backtick-quoted identifiers
//! and positional `?` placeholders, together with the parameters for those
//! placeholders in left-to-right order.
//!
//! # Features
//!
//! - **Quoted identifiers**: `db.table` renders as `` `db`.`table` ``
//! - **Raw expressions**: [`Expr`](crate::Expr) values pass through untouched
//! - **Shared clause logic**: SELECT, UPDATE and DELETE share WHERE/ORDER/LIMIT via [`Filter`]
//! - **Driver delegation**: execute-style calls forward `[sql, params]` to an attached [`Driver`](crate::Driver)
//!
//! # Usage
//!
//! ```ignore
//! use zsql::prelude::*;
//!
//! // SELECT
//! let q = qb::select()
//!     .from("users")
//!     .and_where("status", "active")
//!     .order_by_desc("created_at")
//!     .limit(10);
//! assert_eq!(
//!     q.to_sql()?,
//!     "SELECT * FROM `users` WHERE `status` = ? ORDER BY `created_at` DESC LIMIT ?"
//! );
//!
//! // INSERT
//! qb::insert().into("users").value("username", "alice").value("created_at", expr("NOW()"));
//!
//! // UPDATE
//! qb::update().table("users").set("status", "inactive").and_where("id", 7);
//!
//! // DELETE
//! qb::delete().from("users").and_in("id", [1, 2, 3]);
//! ```

mod delete;
mod filter;
mod insert;
mod param;
mod parts;
mod select;
mod traits;
mod update;

pub use delete::Delete;
pub use filter::{Condition, Direction, Filter};
pub use insert::Insert;
pub use param::{ParamList, SetValue, ValueMap};
pub use select::{Columns, HintMode, Select};
pub use traits::{Base, BuiltQuery, Filterable, SqlStatement};
pub use update::Update;

/// Create a SELECT builder.
///
/// # Example
/// ```ignore
/// let q = zsql::qb::select().table("users").and_where("id", 1);
/// ```
pub fn select() -> Select {
    Select::new()
}

/// Create an INSERT builder.
///
/// # Example
/// ```ignore
/// let q = zsql::qb::insert().into("users").value("username", "alice");
/// ```
pub fn insert() -> Insert {
    Insert::new()
}

/// Create an UPDATE builder.
///
/// # Example
/// ```ignore
/// let q = zsql::qb::update().table("users").set("status", "inactive");
/// ```
pub fn update() -> Update {
    Update::new()
}

/// Create a DELETE builder.
///
/// # Example
/// ```ignore
/// let q = zsql::qb::delete().from("users").and_where("id", 1);
/// ```
pub fn delete() -> Delete {
    Delete::new()
}

/// Alias for `delete`.
pub fn del() -> Delete {
    Delete::new()
}
