//! SQL identifier handling.
//!
//! This module provides [`quote_identifier`] and [`Ident`], the value used
//! wherever a table, column or ORDER BY target is expected.
//!
//! - Plain names are backtick-quoted: `db.table` becomes `` `db`.`table` ``
//! - Raw expressions ([`Expr`]) are emitted untouched
//!
//! # Example
//! ```ignore
//! use zsql::ident::{quote_identifier, Ident};
//! use zsql::expr;
//!
//! assert_eq!(quote_identifier("db.users"), "`db`.`users`");
//! assert_eq!(Ident::from(expr("NOW()")).to_sql(), "NOW()");
//! ```

use crate::expr::Expr;

/// Backtick-quote an identifier.
///
/// Only the first backtick is doubled and only the first `.` splits the name,
/// so `a.b.c` renders as `` `a`.`b.c` ``. Qualified names deeper than
/// `schema.table` / `table.column` should be passed as an [`Expr`].
pub fn quote_identifier(identifier: &str) -> String {
    let escaped = identifier.replacen('`', "``", 1).replacen('.', "`.`", 1);
    let mut out = String::with_capacity(escaped.len() + 2);
    out.push('`');
    out.push_str(&escaped);
    out.push('`');
    out
}

/// Either a plain identifier (quoted on render) or a raw expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ident {
    /// Plain name, possibly dotted (`db.table`, `table.column`).
    Name(String),
    /// Raw SQL, rendered verbatim.
    Raw(Expr),
}

impl Ident {
    /// Create a plain identifier.
    pub fn name(name: impl Into<String>) -> Self {
        Ident::Name(name.into())
    }

    /// Create a raw identifier.
    pub fn raw(sql: impl Into<String>) -> Self {
        Ident::Raw(Expr::new(sql))
    }

    /// Whether this identifier is a raw expression.
    pub fn is_raw(&self) -> bool {
        matches!(self, Ident::Raw(_))
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        match self {
            Ident::Name(name) => quote_identifier(name),
            Ident::Raw(expr) => expr.as_str().to_string(),
        }
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::Name(name.to_string())
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::Name(name)
    }
}

impl From<&String> for Ident {
    fn from(name: &String) -> Self {
        Ident::Name(name.clone())
    }
}

impl From<Expr> for Ident {
    fn from(expr: Expr) -> Self {
        Ident::Raw(expr)
    }
}

impl From<&Expr> for Ident {
    fn from(expr: &Expr) -> Self {
        Ident::Raw(expr.clone())
    }
}
