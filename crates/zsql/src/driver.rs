//! Driver capability contract.
//!
//! zsql never talks to a database itself. Statements render a [`Call`] and hand
//! it to whatever [`Driver`] is attached; the driver owns connections, retries,
//! timeouts and result decoding.

use crate::error::ZsqlResult;
use async_trait::async_trait;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A result row: column name -> value, in the order the driver returned them.
pub type Row = Map<String, Value>;

/// Outcome of a statement executed for its side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Rows changed by the statement.
    pub affected_rows: u64,
    /// Auto-increment id generated by an INSERT, when the driver reports one.
    pub insert_id: Option<u64>,
}

/// The positional form of a rendered statement handed to a driver.
///
/// Serializes as `[sql]` or `[sql, [params...]]`; the parameter slot is
/// present only when the statement produced parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Rendered SQL text.
    pub sql: String,
    /// Bind parameters, `None` when there are none.
    pub params: Option<Vec<Value>>,
}

impl Call {
    /// Build a call, dropping an empty parameter list.
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params: if params.is_empty() { None } else { Some(params) },
        }
    }

    /// Parameters as a slice (empty when absent).
    pub fn params(&self) -> &[Value] {
        self.params.as_deref().unwrap_or(&[])
    }
}

impl Serialize for Call {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.params.is_some() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.sql)?;
        if let Some(params) = &self.params {
            seq.serialize_element(params)?;
        }
        seq.end()
    }
}

/// An external executor of rendered statements.
///
/// Implemented for `Arc<D>` so a shared driver can be attached to many
/// statements.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Run a query and return its first row, if any.
    async fn get_one(&self, call: &Call) -> ZsqlResult<Option<Row>>;

    /// Run a query and return all rows.
    async fn get_all(&self, call: &Call) -> ZsqlResult<Vec<Row>>;

    /// Run a statement for its side effects.
    async fn execute(&self, call: &Call) -> ZsqlResult<ExecOutcome>;
}

#[async_trait]
impl<D: Driver + ?Sized> Driver for Arc<D> {
    async fn get_one(&self, call: &Call) -> ZsqlResult<Option<Row>> {
        (**self).get_one(call).await
    }

    async fn get_all(&self, call: &Call) -> ZsqlResult<Vec<Row>> {
        (**self).get_all(call).await
    }

    async fn execute(&self, call: &Call) -> ZsqlResult<ExecOutcome> {
        (**self).execute(call).await
    }
}

/// A driver attached to a statement.
///
/// The driver is shared, not owned: cloning a statement clones the handle.
#[derive(Clone)]
pub struct DriverHandle(Arc<dyn Driver>);

impl DriverHandle {
    /// Wrap a driver.
    pub fn new<D: Driver + 'static>(driver: D) -> Self {
        DriverHandle(Arc::new(driver))
    }

    /// Borrow the underlying driver.
    pub fn driver(&self) -> &dyn Driver {
        &*self.0
    }
}

impl<D: Driver + 'static> From<D> for DriverHandle {
    fn from(driver: D) -> Self {
        DriverHandle::new(driver)
    }
}

impl fmt::Debug for DriverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DriverHandle").field(&"<dyn Driver>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_without_params_serializes_sql_only() {
        let call = Call::new("SELECT * FROM `t`", Vec::new());
        assert_eq!(call.params, None);
        assert!(call.params().is_empty());
        assert_eq!(serde_json::to_value(&call).ok(), Some(json!(["SELECT * FROM `t`"])));
    }

    #[test]
    fn call_with_params_serializes_positionally() {
        let call = Call::new("SELECT * FROM `t` WHERE `c` = ?", vec![json!(1)]);
        assert_eq!(
            serde_json::to_value(&call).ok(),
            Some(json!(["SELECT * FROM `t` WHERE `c` = ?", [1]]))
        );
    }
}
