//! Error types for zsql

use std::fmt;
use thiserror::Error;

/// Result type alias for zsql operations
pub type ZsqlResult<T> = Result<T, ZsqlError>;

/// The kind of statement an error or log event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// SELECT query
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Delete,
}

impl StatementKind {
    /// Keyword used in log output and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for statement building and driver delegation
#[derive(Debug, Error)]
pub enum ZsqlError {
    /// A column specification that is not a name, a list of names or an expression
    #[error("Invalid columns spec: {0}")]
    InvalidColumns(String),

    /// Rendering was attempted before a table was set
    #[error("No table set in {0} statement")]
    MissingTable(StatementKind),

    /// Rendering an INSERT/UPDATE with an empty value map
    #[error("No values set in {0} statement")]
    MissingValues(StatementKind),

    /// An execute-style call was made without an attached driver
    #[error("No driver provided")]
    NoDriver,

    /// The attached driver reported a failure
    #[error("Driver error: {0}")]
    Driver(String),
}

impl ZsqlError {
    /// Create an invalid columns error
    pub fn invalid_columns(message: impl Into<String>) -> Self {
        Self::InvalidColumns(message.into())
    }

    /// Create a driver error
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver(message.into())
    }

    /// Check if this is a render precondition error (missing table or values)
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingTable(_) | Self::MissingValues(_))
    }

    /// Check if this is a configuration error raised while building
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidColumns(_))
    }

    /// Check if this is a missing driver error
    pub fn is_no_driver(&self) -> bool {
        matches!(self, Self::NoDriver)
    }
}
