//! DELETE statement builder.

use crate::driver::DriverHandle;
use crate::error::{StatementKind, ZsqlResult};
use crate::qb::filter::Filter;
use crate::qb::parts::SqlParts;
use crate::qb::traits::{Base, BuiltQuery, Filterable, SqlStatement};

/// DELETE statement builder.
///
/// A DELETE without conditions affects every row of the table.
#[derive(Clone, Debug, Default)]
pub struct Delete {
    base: Base,
    filter: Filter,
}

impl Delete {
    /// Create an empty DELETE.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty DELETE with a driver attached.
    pub fn with_driver(driver: impl Into<DriverHandle>) -> Self {
        Self {
            base: Base::with_driver(driver.into()),
            filter: Filter::new(),
        }
    }
}

impl SqlStatement for Delete {
    const KIND: StatementKind = StatementKind::Delete;

    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn build(&self) -> ZsqlResult<BuiltQuery> {
        let table = self.base.require_target(Self::KIND)?;

        let mut parts = SqlParts::new();
        parts.push("DELETE").push("FROM").push_ident(table);
        self.filter.write_tail(&mut parts);

        Ok(parts.finish())
    }
}

impl Filterable for Delete {
    fn filter(&self) -> &Filter {
        &self.filter
    }

    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZsqlError;
    use crate::expr::expr;
    use serde_json::json;

    #[test]
    fn test_delete_tables() {
        assert_eq!(Delete::new().from("t").to_sql().unwrap(), "DELETE FROM `t`");
        assert_eq!(Delete::new().from("db.t").to_sql().unwrap(), "DELETE FROM `db`.`t`");
        assert_eq!(Delete::new().from(expr("t")).to_sql().unwrap(), "DELETE FROM t");
    }

    #[test]
    fn test_delete_with_clauses() {
        let built = Delete::new()
            .table("t")
            .and_where("c1", 3)
            .and_where("c2", 4)
            .order_by_asc("c3")
            .limit(5)
            .offset(10)
            .build()
            .unwrap();
        assert_eq!(
            built.sql,
            "DELETE FROM `t` WHERE `c1` = ? && `c2` = ? ORDER BY `c3` ASC LIMIT ?, ?"
        );
        assert_eq!(built.params, vec![json!(3), json!(4), json!(10), json!(5)]);
    }

    #[test]
    fn test_delete_without_table() {
        let err = Delete::new().build().unwrap_err();
        assert!(err.is_precondition());
        assert!(matches!(err, ZsqlError::MissingTable(_)));
    }
}
