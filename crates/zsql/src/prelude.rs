//! Convenient imports for typical `zsql` usage.
//!
//! Brings the builder traits into scope so chained calls resolve:
//!
//! ```ignore
//! use zsql::prelude::*;
//! ```

pub use crate::qb::{self, Filterable, SqlStatement};
pub use crate::{Call, Driver, DriverHandle, ExecOutcome, Row, ZsqlError, ZsqlResult};
pub use crate::{Expr, Ident, expr};
