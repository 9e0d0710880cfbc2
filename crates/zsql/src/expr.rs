//! Raw SQL expressions.

use std::fmt;

/// A fragment of SQL that is emitted verbatim.
///
/// Expressions are never quoted and never parameterized. They can stand in for
/// a table name, a column list entry, an ORDER BY target, a WHERE condition or
/// an INSERT/UPDATE value.
///
/// # Example
/// ```ignore
/// use zsql::{expr, qb};
///
/// let q = qb::insert().into("users").value("created_at", expr("NOW()"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr(String);

impl Expr {
    /// Wrap a SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Expr(sql.into())
    }

    /// The wrapped SQL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the SQL text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shorthand for [`Expr::new`].
pub fn expr(sql: impl Into<String>) -> Expr {
    Expr::new(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_verbatim() {
        let e = expr("COUNT(*) as `count`");
        assert_eq!(e.to_string(), "COUNT(*) as `count`");
        assert_eq!(e.as_str(), "COUNT(*) as `count`");
    }
}
