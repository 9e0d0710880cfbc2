//! Logging decorator for drivers.
//!
//! Enable via the crate feature: `zsql = { features = ["tracing"] }` (on by default).

use crate::driver::{Call, Driver, ExecOutcome, Row};
use crate::error::ZsqlResult;
use async_trait::async_trait;
use tracing::Level;

/// Truncate to at most `max_bytes`, backing off to a char boundary.
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// A `tracing`-based driver wrapper that emits every call before forwarding it.
///
/// Driver failures are logged at `WARN` and returned unchanged.
#[derive(Debug, Clone)]
pub struct TracingDriver<D> {
    inner: D,
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl<D: Driver> TracingDriver<D> {
    /// Wrap a driver with the default settings (`DEBUG`, 200 bytes).
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }

    /// Override the tracing event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// The wrapped driver.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    fn truncate_sql(&self, sql: &str) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    fn emit(&self, method: &'static str, call: &Call) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = self.truncate_sql(&call.sql);
        emit_at_level!(
            self.level,
            target: "zsql.sql",
            method,
            params = call.params().len(),
            "{}",
            sql
        );
    }

    fn observe<T>(method: &'static str, result: ZsqlResult<T>) -> ZsqlResult<T> {
        if let Err(err) = &result {
            tracing::warn!(target: "zsql.sql", method, error = %err, "driver call failed");
        }
        result
    }
}

#[async_trait]
impl<D: Driver> Driver for TracingDriver<D> {
    async fn get_one(&self, call: &Call) -> ZsqlResult<Option<Row>> {
        self.emit("get_one", call);
        Self::observe("get_one", self.inner.get_one(call).await)
    }

    async fn get_all(&self, call: &Call) -> ZsqlResult<Vec<Row>> {
        self.emit("get_all", call);
        Self::observe("get_all", self.inner.get_all(call).await)
    }

    async fn execute(&self, call: &Call) -> ZsqlResult<ExecOutcome> {
        self.emit("execute", call);
        Self::observe("execute", self.inner.execute(call).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZsqlError;

    struct FailingDriver;

    #[async_trait]
    impl Driver for FailingDriver {
        async fn get_one(&self, _call: &Call) -> ZsqlResult<Option<Row>> {
            Ok(None)
        }

        async fn get_all(&self, _call: &Call) -> ZsqlResult<Vec<Row>> {
            Ok(Vec::new())
        }

        async fn execute(&self, _call: &Call) -> ZsqlResult<ExecOutcome> {
            Err(ZsqlError::driver("connection lost"))
        }
    }

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_sql_bytes("SELECT", 10), "SELECT");
        assert_eq!(truncate_sql_bytes("SELECT", 3), "SEL");
        assert_eq!(truncate_sql_bytes("é", 1), "");
    }

    #[test]
    fn truncate_sql_appends_ellipsis() {
        let d = TracingDriver::new(FailingDriver).max_sql_length(6);
        assert_eq!(d.truncate_sql("SELECT * FROM `t`"), "SELECT...");
        let d = d.no_truncate();
        assert_eq!(d.truncate_sql("SELECT * FROM `t`"), "SELECT * FROM `t`");
    }

    #[tokio::test]
    async fn forwards_results_and_errors() {
        let d = TracingDriver::new(FailingDriver).level(Level::INFO);
        let call = Call::new("DELETE FROM `t`", Vec::new());
        assert_eq!(d.get_one(&call).await.unwrap(), None);
        assert!(d.get_all(&call).await.unwrap().is_empty());
        let err = d.execute(&call).await.unwrap_err();
        assert!(matches!(err, ZsqlError::Driver(_)));
    }
}
