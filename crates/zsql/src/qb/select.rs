//! SELECT statement builder.

use crate::driver::{DriverHandle, Row};
use crate::error::{StatementKind, ZsqlError, ZsqlResult};
use crate::expr::Expr;
use crate::ident::{Ident, quote_identifier};
use crate::qb::filter::Filter;
use crate::qb::parts::SqlParts;
use crate::qb::traits::{Base, BuiltQuery, Filterable, SqlStatement, prepare_call};
use serde_json::Value;

/// The SELECT column list.
#[derive(Debug, Clone, PartialEq)]
pub enum Columns {
    /// A single column name or expression.
    One(Ident),
    /// Several columns, comma-joined.
    List(Vec<Ident>),
}

impl Columns {
    /// Convert a dynamically typed column spec.
    ///
    /// Accepts a non-empty string or an array of strings. Anything else
    /// (booleans, numbers, null, objects, empty strings) is rejected.
    pub fn try_from_value(value: Value) -> ZsqlResult<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Ok(Columns::One(Ident::Name(s))),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(Ident::Name(s)),
                    other => Err(ZsqlError::invalid_columns(format!(
                        "column list entries must be strings, got {other}"
                    ))),
                })
                .collect::<ZsqlResult<Vec<_>>>()
                .map(Columns::List),
            other => Err(ZsqlError::invalid_columns(format!(
                "expected a column name, a list of names or an expression, got {other}"
            ))),
        }
    }

    fn to_sql(&self) -> String {
        match self {
            Columns::One(ident) => ident.to_sql(),
            Columns::List(idents) => idents
                .iter()
                .map(Ident::to_sql)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<&str> for Columns {
    fn from(name: &str) -> Self {
        Columns::One(Ident::from(name))
    }
}

impl From<String> for Columns {
    fn from(name: String) -> Self {
        Columns::One(Ident::from(name))
    }
}

impl From<Expr> for Columns {
    fn from(expr: Expr) -> Self {
        Columns::One(Ident::Raw(expr))
    }
}

impl From<Ident> for Columns {
    fn from(ident: Ident) -> Self {
        Columns::One(ident)
    }
}

impl<T: Into<Ident>> From<Vec<T>> for Columns {
    fn from(cols: Vec<T>) -> Self {
        Columns::List(cols.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Ident>, const N: usize> From<[T; N]> for Columns {
    fn from(cols: [T; N]) -> Self {
        Columns::List(cols.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for Columns {
    fn from(cols: &[&str]) -> Self {
        Columns::List(cols.iter().map(|c| Ident::from(*c)).collect())
    }
}

/// Index hint mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintMode {
    #[default]
    Use,
    Force,
}

impl HintMode {
    pub fn as_str(self) -> &'static str {
        match self {
            HintMode::Use => "USE",
            HintMode::Force => "FORCE",
        }
    }
}

/// SELECT statement builder.
#[derive(Clone, Debug, Default)]
pub struct Select {
    base: Base,
    filter: Filter,
    columns: Option<Columns>,
    distinct: bool,
    hint: Option<(String, HintMode)>,
}

impl Select {
    /// Create an empty SELECT.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty SELECT with a driver attached.
    pub fn with_driver(driver: impl Into<DriverHandle>) -> Self {
        Self {
            base: Base::with_driver(driver.into()),
            ..Self::default()
        }
    }

    /// Set the column list. Without one, `*` is selected.
    ///
    /// An empty single name also selects `*`; use [`Select::try_columns`] to
    /// reject it instead.
    pub fn columns(mut self, columns: impl Into<Columns>) -> Self {
        self.columns = match columns.into() {
            Columns::One(Ident::Name(name)) if name.is_empty() => None,
            columns => Some(columns),
        };
        self
    }

    /// Set the column list from a dynamically typed value.
    ///
    /// Fails immediately with [`ZsqlError::InvalidColumns`] for anything that
    /// is not a name or a list of names.
    pub fn try_columns(mut self, columns: Value) -> ZsqlResult<Self> {
        self.columns = Some(Columns::try_from_value(columns)?);
        Ok(self)
    }

    /// `SELECT DISTINCT`.
    pub fn distinct(self) -> Self {
        self.distinct_if(true)
    }

    /// Toggle `SELECT DISTINCT`.
    pub fn distinct_if(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// Add an index hint.
    pub fn hint(mut self, index: impl Into<String>, mode: HintMode) -> Self {
        self.hint = Some((index.into(), mode));
        self
    }

    /// `USE INDEX (index)`.
    pub fn use_index(self, index: impl Into<String>) -> Self {
        self.hint(index, HintMode::Use)
    }

    /// `FORCE INDEX (index)`.
    pub fn force_index(self, index: impl Into<String>) -> Self {
        self.hint(index, HintMode::Force)
    }

    /// Set GROUP BY (a single column).
    pub fn group_by(mut self, column: impl Into<String>) -> Self {
        self.filter.set_group(column);
        self
    }

    // ==================== Driver delegation ====================

    /// Run through the driver's `get_one`.
    pub async fn get_one(&self) -> ZsqlResult<Option<Row>> {
        let driver = self.base.require_driver(Self::KIND)?;
        let call = prepare_call(self, "get_one")?;
        driver.driver().get_one(&call).await
    }

    /// Run through the driver's `get_all`.
    pub async fn get_all(&self) -> ZsqlResult<Vec<Row>> {
        let driver = self.base.require_driver(Self::KIND)?;
        let call = prepare_call(self, "get_all")?;
        driver.driver().get_all(&call).await
    }

    /// Run `get_one` and return the first column of the row.
    pub async fn get_column(&self) -> ZsqlResult<Option<Value>> {
        let row = self.get_one().await?;
        Ok(row.and_then(|row| row.into_iter().next().map(|(_, value)| value)))
    }

    /// Alias for `get_one`.
    pub async fn fetch_row(&self) -> ZsqlResult<Option<Row>> {
        self.get_one().await
    }

    /// Alias for `get_all`.
    pub async fn fetch_all(&self) -> ZsqlResult<Vec<Row>> {
        self.get_all().await
    }

    /// Alias for `get_column`.
    pub async fn fetch_column(&self) -> ZsqlResult<Option<Value>> {
        self.get_column().await
    }
}

impl SqlStatement for Select {
    const KIND: StatementKind = StatementKind::Select;

    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn build(&self) -> ZsqlResult<BuiltQuery> {
        let table = self.base.require_target(Self::KIND)?;

        let mut parts = SqlParts::new();
        parts.push("SELECT");
        if self.distinct {
            parts.push("DISTINCT");
        }
        match &self.columns {
            Some(columns) => parts.push(columns.to_sql()),
            None => parts.push("*"),
        };
        parts.push("FROM").push_ident(table);
        if let Some((index, mode)) = &self.hint {
            parts
                .push(mode.as_str())
                .push("INDEX")
                .push(format!("({})", quote_identifier(index)));
        }
        self.filter.write_where(&mut parts);
        self.filter.write_group(&mut parts);
        self.filter.write_order(&mut parts);
        self.filter.write_limit(&mut parts);

        Ok(parts.finish())
    }
}

impl Filterable for Select {
    fn filter(&self) -> &Filter {
        &self.filter
    }

    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}
