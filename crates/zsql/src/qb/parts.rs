//! Per-render accumulator for SQL fragments and their parameters.

use crate::ident::Ident;
use crate::qb::param::ParamList;
use crate::qb::traits::BuiltQuery;
use serde_json::Value;

/// Fragments joined by single spaces, plus the parameters for their `?`s.
///
/// A fresh `SqlParts` is created by every `build()` call, so rendering never
/// depends on a previous render.
#[derive(Debug, Default)]
pub(crate) struct SqlParts {
    parts: Vec<String>,
    params: ParamList,
}

impl SqlParts {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.parts.push(fragment.into());
        self
    }

    pub(crate) fn push_ident(&mut self, ident: &Ident) -> &mut Self {
        self.parts.push(ident.to_sql());
        self
    }

    pub(crate) fn bind(&mut self, value: impl Into<Value>) -> &mut Self {
        self.params.push(value);
        self
    }

    pub(crate) fn bind_all(&mut self, values: impl IntoIterator<Item = Value>) -> &mut Self {
        self.params.extend(values);
        self
    }

    pub(crate) fn finish(self) -> BuiltQuery {
        BuiltQuery::new(self.parts.join(" "), self.params.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_with_spaces() {
        let mut parts = SqlParts::new();
        parts
            .push("SELECT")
            .push("*")
            .push("FROM")
            .push_ident(&Ident::from("t"))
            .push("LIMIT ?")
            .bind(5);
        let built = parts.finish();
        assert_eq!(built.sql, "SELECT * FROM `t` LIMIT ?");
        assert_eq!(built.params, vec![json!(5)]);
    }
}
