//! Trait definitions for statement builders.

use crate::driver::{Call, DriverHandle, ExecOutcome};
use crate::error::{StatementKind, ZsqlError, ZsqlResult};
use crate::expr::Expr;
use crate::ident::Ident;
use crate::qb::filter::{Condition, Direction, Filter};
use serde_json::Value;

/// The result of rendering a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    /// Number of `?` placeholders in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// Convert into the positional form handed to drivers.
    pub fn into_call(self) -> Call {
        Call::new(self.sql, self.params)
    }
}

/// State common to every statement: target table and attached driver.
#[derive(Debug, Clone, Default)]
pub struct Base {
    pub(crate) target: Option<Ident>,
    pub(crate) driver: Option<DriverHandle>,
}

impl Base {
    pub(crate) fn with_driver(driver: DriverHandle) -> Self {
        Self {
            target: None,
            driver: Some(driver),
        }
    }

    /// The target table, required before rendering. An empty name counts as unset.
    pub(crate) fn require_target(&self, kind: StatementKind) -> ZsqlResult<&Ident> {
        match &self.target {
            Some(Ident::Name(name)) if name.is_empty() => Err(ZsqlError::MissingTable(kind)),
            Some(target) => Ok(target),
            None => Err(ZsqlError::MissingTable(kind)),
        }
    }

    /// The attached driver, or `NoDriver`.
    pub(crate) fn require_driver(&self, kind: StatementKind) -> ZsqlResult<&DriverHandle> {
        match &self.driver {
            Some(driver) => Ok(driver),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "zsql.sql", kind = kind.as_str(), "no driver attached");
                #[cfg(not(feature = "tracing"))]
                let _ = kind;
                Err(ZsqlError::NoDriver)
            }
        }
    }
}

/// Render the call for a statement and log the dispatch.
pub(crate) fn prepare_call<S: SqlStatement>(stmt: &S, method: &'static str) -> ZsqlResult<Call> {
    let call = stmt.to_call()?;
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "zsql.sql",
        kind = S::KIND.as_str(),
        method,
        sql = %call.sql,
        params = call.params().len(),
        "dispatching to driver"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = method;
    Ok(call)
}

/// Base trait for all statement builders.
///
/// Configuration methods consume and return the builder so calls chain.
pub trait SqlStatement: Sized + Sync {
    /// Statement kind, used in errors and logs.
    const KIND: StatementKind;

    fn base(&self) -> &Base;

    fn base_mut(&mut self) -> &mut Base;

    /// Render SQL text and parameters.
    ///
    /// Each call starts from scratch, so the result reflects the current
    /// configuration only.
    fn build(&self) -> ZsqlResult<BuiltQuery>;

    /// Set the target table (a plain, possibly dotted, name or an [`Expr`]).
    fn table(mut self, table: impl Into<Ident>) -> Self {
        self.base_mut().target = Some(table.into());
        self
    }

    /// Alias for `table`.
    fn from(self, table: impl Into<Ident>) -> Self {
        self.table(table)
    }

    /// Attach (or replace) the driver used by execute-style calls.
    fn attach(mut self, driver: impl Into<DriverHandle>) -> Self {
        self.base_mut().driver = Some(driver.into());
        self
    }

    /// Remove the attached driver.
    fn detach(mut self) -> Self {
        self.base_mut().driver = None;
        self
    }

    fn has_driver(&self) -> bool {
        self.base().driver.is_some()
    }

    /// Render the SQL text.
    fn to_sql(&self) -> ZsqlResult<String> {
        Ok(self.build()?.sql)
    }

    /// Render the parameters, `None` when there are none.
    fn params(&self) -> ZsqlResult<Option<Vec<Value>>> {
        Ok(self.to_call()?.params)
    }

    /// Render the positional `[sql, params?]` form.
    fn to_call(&self) -> ZsqlResult<Call> {
        Ok(self.build()?.into_call())
    }

    /// Forward the statement to the driver's `execute`.
    fn execute(&self) -> impl std::future::Future<Output = ZsqlResult<ExecOutcome>> + Send {
        async move {
            let driver = self.base().require_driver(Self::KIND)?;
            let call = prepare_call(self, "execute")?;
            driver.driver().execute(&call).await
        }
    }
}

/// WHERE / ORDER BY / LIMIT configuration shared by SELECT, UPDATE and DELETE.
pub trait Filterable: SqlStatement {
    fn filter(&self) -> &Filter;

    fn filter_mut(&mut self) -> &mut Filter;

    /// Add `` `column` = ? ``, or the column text as-is when it contains `?`.
    fn and_where(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filter_mut().push(Condition::compare(column, value));
        self
    }

    /// Add a bare column condition, rendered as the quoted identifier.
    fn and_column(mut self, column: &str) -> Self {
        self.filter_mut().push(Condition::Column(column.to_string()));
        self
    }

    /// Add a raw expression condition.
    fn and_expr(mut self, expr: Expr) -> Self {
        self.filter_mut().push(Condition::Raw(expr));
        self
    }

    /// Add a raw SQL condition.
    fn and_raw(mut self, sql: impl Into<String>) -> Self {
        self.filter_mut().push(Condition::Raw(Expr::new(sql)));
        self
    }

    /// Add `` `column` IN (?, ...) ``; an empty list adds `FALSE`.
    fn and_in<V: Into<Value>>(mut self, column: &str, values: impl IntoIterator<Item = V>) -> Self {
        self.filter_mut().push(Condition::in_list(column, values));
        self
    }

    /// Add a prebuilt condition.
    fn and_condition(mut self, condition: Condition) -> Self {
        self.filter_mut().push(condition);
        self
    }

    /// Set ORDER BY; only the exact token `DESC` sorts descending.
    fn order_by(mut self, target: impl Into<Ident>, direction: impl Into<Direction>) -> Self {
        self.filter_mut().set_order(target.into(), direction.into());
        self
    }

    fn order_by_asc(self, target: impl Into<Ident>) -> Self {
        self.order_by(target, Direction::Asc)
    }

    fn order_by_desc(self, target: impl Into<Ident>) -> Self {
        self.order_by(target, Direction::Desc)
    }

    /// Set LIMIT.
    fn limit(mut self, limit: u64) -> Self {
        self.filter_mut().set_limit(limit);
        self
    }

    /// Set LIMIT and OFFSET together.
    fn limit_offset(mut self, limit: u64, offset: u64) -> Self {
        self.filter_mut().set_limit(limit).set_offset(offset);
        self
    }

    /// Set OFFSET; it only renders once a limit is set.
    fn offset(mut self, offset: u64) -> Self {
        self.filter_mut().set_offset(offset);
        self
    }

    /// Set OFFSET and LIMIT together.
    fn offset_limit(mut self, offset: u64, limit: u64) -> Self {
        self.filter_mut().set_offset(offset).set_limit(limit);
        self
    }
}
