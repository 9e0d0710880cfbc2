//! INSERT statement builder.

use crate::driver::DriverHandle;
use crate::error::{StatementKind, ZsqlError, ZsqlResult};
use crate::ident::{Ident, quote_identifier};
use crate::qb::param::{ParamList, SetValue, ValueMap};
use crate::qb::traits::{Base, BuiltQuery, SqlStatement};

/// INSERT statement builder.
///
/// Columns render in the order they were first assigned.
#[derive(Clone, Debug, Default)]
pub struct Insert {
    base: Base,
    values: ValueMap,
}

impl Insert {
    /// Create an empty INSERT.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty INSERT with a driver attached.
    pub fn with_driver(driver: impl Into<DriverHandle>) -> Self {
        Self {
            base: Base::with_driver(driver.into()),
            values: ValueMap::new(),
        }
    }

    /// Alias for `table`.
    pub fn into(self, table: impl Into<Ident>) -> Self {
        self.table(table)
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

impl SqlStatement for Insert {
    const KIND: StatementKind = StatementKind::Insert;

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

        let mut params = ParamList::new();
        let mut columns = Vec::with_capacity(self.values.len());
        let mut placeholders = Vec::with_capacity(self.values.len());
        for (column, value) in self.values.iter() {
            columns.push(quote_identifier(column));
            match value {
                SetValue::Raw(expr) => placeholders.push(expr.as_str().to_string()),
                SetValue::Param(value) => {
                    placeholders.push("?".to_string());
                    params.push(value.clone());
                }
            }
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table.to_sql(),
            columns.join(", "),
            placeholders.join(", ")
        );
        Ok(BuiltQuery::new(sql, params.into_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::expr;
    use serde_json::json;

    #[test]
    fn test_insert_one_value() {
        let q = Insert::new().table("tableName").value("columnName", 1);
        let built = q.build().unwrap();
        assert_eq!(built.sql, "INSERT INTO `tableName` (`columnName`) VALUES (?)");
        assert_eq!(built.params, vec![json!(1)]);
    }

    #[test]
    fn test_insert_into_alias_and_dotted_table() {
        let q = Insert::new().into("db.t").value("c", "v");
        assert_eq!(q.to_sql().unwrap(), "INSERT INTO `db`.`t` (`c`) VALUES (?)");
    }

    #[test]
    fn test_insert_expr_table() {
        let q = Insert::new().table(expr("t")).value("c", 1);
        assert_eq!(q.to_sql().unwrap(), "INSERT INTO t (`c`) VALUES (?)");
    }

    #[test]
    fn test_insert_values_with_expr() {
        let q = Insert::new()
            .table("t")
            .values([("a", SetValue::from(1)), ("b", SetValue::from(expr("NOW()")))]);
        let built = q.build().unwrap();
        assert_eq!(built.sql, "INSERT INTO `t` (`a`, `b`) VALUES (?, NOW())");
        assert_eq!(built.params, vec![json!(1)]);
    }

    #[test]
    fn test_values_replaces_map() {
        let q = Insert::new().table("t").value("old", 1).values([("new", 2)]);
        assert_eq!(q.to_sql().unwrap(), "INSERT INTO `t` (`new`) VALUES (?)");
    }

    #[test]
    fn test_insert_preconditions() {
        let err = Insert::new().value("a", 1).build().unwrap_err();
        assert!(matches!(err, ZsqlError::MissingTable(StatementKind::Insert)));

        let err = Insert::new().table("t").build().unwrap_err();
        assert!(matches!(err, ZsqlError::MissingValues(StatementKind::Insert)));
    }
}
