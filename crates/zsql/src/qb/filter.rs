//! WHERE / GROUP BY / ORDER BY / LIMIT state shared by SELECT, UPDATE and DELETE.
//!
//! Conditions are joined with `&&` and every `?` written by this module is
//! matched by exactly one parameter, appended in the order the placeholders
//! appear.

use crate::expr::Expr;
use crate::ident::{Ident, quote_identifier};
use crate::qb::parts::SqlParts;
use serde_json::Value;
use std::fmt;

/// One WHERE contribution.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Raw SQL, no parameters.
    Raw(Expr),
    /// A bare column name, rendered as its quoted identifier.
    Column(String),
    /// `` `column` = ? `` with one parameter.
    Eq { column: String, value: Value },
    /// A fragment with inline `?` placeholders and a single parameter.
    ///
    /// The placeholder count is not checked against the single value.
    Template { sql: String, value: Value },
    /// `` `column` IN (?, ?, ...) `` with one parameter per value.
    In {
        column: String,
        values: Vec<Value>,
        op: &'static str,
    },
}

impl Condition {
    /// Column/value condition; a column containing `?` is kept as a template.
    pub fn compare(column: impl Into<String>, value: impl Into<Value>) -> Self {
        let column = column.into();
        let value = value.into();
        if column.contains('?') {
            Condition::Template { sql: column, value }
        } else {
            Condition::Eq { column, value }
        }
    }

    /// IN-list condition; an empty list becomes the literal `FALSE`.
    pub fn in_list<V: Into<Value>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Condition::Raw(Expr::new("FALSE"));
        }
        Condition::In {
            column: column.into(),
            values,
            op: "IN",
        }
    }

    fn write(&self, parts: &mut SqlParts) {
        match self {
            Condition::Raw(expr) => {
                parts.push(expr.as_str());
            }
            Condition::Column(column) => {
                parts.push(quote_identifier(column));
            }
            Condition::Eq { column, value } => {
                parts.push(format!("{} = ?", quote_identifier(column)));
                parts.bind(value.clone());
            }
            Condition::Template { sql, value } => {
                parts.push(sql.as_str());
                parts.bind(value.clone());
            }
            Condition::In { column, values, op } => {
                let placeholders = vec!["?"; values.len()].join(", ");
                parts.push(format!("{} {} ({})", quote_identifier(column), op, placeholders));
                parts.bind_all(values.iter().cloned());
            }
        }
    }
}

/// ORDER BY direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parse a direction token: exactly `DESC` is descending, anything else ascending.
    pub fn parse(token: &str) -> Self {
        if token == "DESC" {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl From<&str> for Direction {
    fn from(token: &str) -> Self {
        Direction::parse(token)
    }
}

impl From<Option<&str>> for Direction {
    fn from(token: Option<&str>) -> Self {
        token.map(Direction::parse).unwrap_or_default()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clause state shared by the filterable statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
    group: Option<String>,
    order: Option<(Ident, Direction)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition.
    pub fn push(&mut self, condition: Condition) -> &mut Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn set_group(&mut self, column: impl Into<String>) -> &mut Self {
        self.group = Some(column.into());
        self
    }

    pub fn set_order(&mut self, target: Ident, direction: Direction) -> &mut Self {
        self.order = Some((target, direction));
        self
    }

    pub fn set_limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn set_offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub(crate) fn write_where(&self, parts: &mut SqlParts) {
        if self.conditions.is_empty() {
            return;
        }
        parts.push("WHERE");
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                parts.push("&&");
            }
            condition.write(parts);
        }
    }

    pub(crate) fn write_group(&self, parts: &mut SqlParts) {
        if let Some(group) = &self.group {
            parts.push("GROUP BY").push(quote_identifier(group));
        }
    }

    pub(crate) fn write_order(&self, parts: &mut SqlParts) {
        if let Some((target, direction)) = &self.order {
            parts
                .push("ORDER BY")
                .push_ident(target)
                .push(direction.as_str());
        }
    }

    /// An offset without a limit renders nothing.
    pub(crate) fn write_limit(&self, parts: &mut SqlParts) {
        let Some(limit) = self.limit else {
            return;
        };
        match self.offset {
            Some(offset) => {
                parts.push("LIMIT ?, ?").bind(offset).bind(limit);
            }
            None => {
                parts.push("LIMIT ?").bind(limit);
            }
        }
    }

    /// WHERE, ORDER BY and LIMIT, the tail used by UPDATE and DELETE.
    pub(crate) fn write_tail(&self, parts: &mut SqlParts) {
        self.write_where(parts);
        self.write_order(parts);
        self.write_limit(parts);
    }
}
