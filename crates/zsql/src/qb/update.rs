//! UPDATE statement builder.

use crate::driver::DriverHandle;
use crate::error::{StatementKind, ZsqlError, ZsqlResult};
use crate::ident::quote_identifier;
use crate::qb::filter::Filter;
use crate::qb::param::{SetValue, ValueMap};
use crate::qb::parts::SqlParts;
use crate::qb::traits::{Base, BuiltQuery, Filterable, SqlStatement};

/// UPDATE statement builder.
///
/// SET entries render as `` `col` = ? `` separated by ` , `, followed by
/// WHERE, ORDER BY and LIMIT.
#[derive(Clone, Debug, Default)]
pub struct Update {
    base: Base,
    filter: Filter,
    values: ValueMap,
}

impl Update {
    /// Create an empty UPDATE.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty UPDATE with a driver attached.
    pub fn with_driver(driver: impl Into<DriverHandle>) -> Self {
        Self {
            base: Base::with_driver(driver.into()),
            ..Self::default()
        }
    }

    /// Replace all values.
    pub fn values<K, V>(mut self, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<SetValue>,
    {
        self.values = values.into_iter().collect();
        self
    }

    /// Set one column value.
    pub fn value(mut self, column: impl Into<String>, value: impl Into<SetValue>) -> Self {
        self.values.set(column, value);
        self
    }

    /// Alias for `value`.
    pub fn set(self, column: impl Into<String>, value: impl Into<SetValue>) -> Self {
        self.value(column, value)
    }
}

impl SqlStatement for Update {
    const KIND: StatementKind = StatementKind::Update;

    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn build(&self) -> ZsqlResult<BuiltQuery> {
        let table = self.base.require_target(Self::KIND)?;
        if self.values.is_empty() {
            return Err(ZsqlError::MissingValues(Self::KIND));
        }

        let mut parts = SqlParts::new();
        parts.push("UPDATE").push_ident(table).push("SET");
        for (i, (column, value)) in self.values.iter().enumerate() {
            if i > 0 {
                parts.push(",");
            }
            parts.push(quote_identifier(column)).push("=");
            match value {
                SetValue::Raw(expr) => {
                    parts.push(expr.as_str());
                }
                SetValue::Param(value) => {
                    parts.push("?").bind(value.clone());
                }
            }
        }
        self.filter.write_tail(&mut parts);

        Ok(parts.finish())
    }
}

impl Filterable for Update {
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
    use crate::expr::expr;
    use serde_json::json;

    #[test]
    fn test_update_set() {
        let built = Update::new().table("t").set("a", 1).set("b", 2).build().unwrap();
        assert_eq!(built.sql, "UPDATE `t` SET `a` = ? , `b` = ?");
        assert_eq!(built.params, vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_update_expr_value() {
        let built = Update::new()
            .table("t")
            .set("c", expr("c + 2"))
            .build()
            .unwrap();
        assert_eq!(built.sql, "UPDATE `t` SET `c` = c + 2");
        assert!(built.params.is_empty());
    }

    #[test]
    fn test_update_values_with_where_and_limit() {
        let built = Update::new()
            .table("t")
            .values([
                ("c1", SetValue::from(4)),
                ("c2", SetValue::from("value")),
                ("c3", SetValue::from(expr("UUID()"))),
            ])
            .and_where("c4 = ?", "1337")
            .limit(1)
            .build()
            .unwrap();
        assert_eq!(
            built.sql,
            "UPDATE `t` SET `c1` = ? , `c2` = ? , `c3` = UUID() WHERE c4 = ? LIMIT ?"
        );
        assert_eq!(built.params, vec![json!(4), json!("value"), json!("1337"), json!(1)]);
    }

    #[test]
    fn test_update_preconditions() {
        let err = Update::new().set("a", 1).build().unwrap_err();
        assert!(matches!(err, ZsqlError::MissingTable(StatementKind::Update)));

        let err = Update::new().table("t").and_where("a", 1).build().unwrap_err();
        assert!(matches!(err, ZsqlError::MissingValues(StatementKind::Update)));
    }
}
