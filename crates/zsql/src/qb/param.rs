//! Bind values and the per-render parameter list.

use crate::expr::Expr;
use serde_json::Value;

/// A value assigned to a column by INSERT or UPDATE.
///
/// Plain values become `?` placeholders with the value appended to the
/// parameter list; expressions are inlined.
#[derive(Debug, Clone, PartialEq)]
pub enum SetValue {
    /// Bound as a positional parameter.
    Param(Value),
    /// Emitted verbatim.
    Raw(Expr),
}

impl From<Expr> for SetValue {
    fn from(expr: Expr) -> Self {
        SetValue::Raw(expr)
    }
}

impl From<Value> for SetValue {
    fn from(value: Value) -> Self {
        SetValue::Param(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for SetValue {
    fn from(value: Option<T>) -> Self {
        SetValue::Param(value.map_or(Value::Null, Into::into))
    }
}

macro_rules! impl_set_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SetValue {
                fn from(value: $ty) -> Self {
                    SetValue::Param(Value::from(value))
                }
            }
        )*
    };
}

impl_set_value_from!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, &str
);

/// Ordered column -> value map used by INSERT and UPDATE.
///
/// Columns keep the position of their first assignment; assigning an existing
/// column again replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
    entries: Vec<(String, SetValue)>,
}

impl ValueMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<SetValue>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SetValue)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<SetValue>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (column, value) in iter {
            map.set(column, value);
        }
        map
    }
}

/// Parameters collected while rendering one statement.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    params: Vec<Value>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Append a parameter for the next `?`.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.params.push(value.into());
    }

    /// Extend this list with parameters from an iterator.
    pub fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.params.extend(values);
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Consume the list.
    pub fn into_vec(self) -> Vec<Value> {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::expr;
    use serde_json::json;

    #[test]
    fn value_map_keeps_first_position() {
        let mut map = ValueMap::new();
        map.set("a", 1);
        map.set("b", "x");
        map.set("a", 2);
        let cols: Vec<_> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(cols, vec!["a", "b"]);
        assert_eq!(map.iter().next().map(|(_, v)| v.clone()), Some(SetValue::Param(json!(2))));
    }

    #[test]
    fn set_value_conversions() {
        assert_eq!(SetValue::from(3u8), SetValue::Param(json!(3)));
        assert_eq!(SetValue::from("s"), SetValue::Param(json!("s")));
        assert_eq!(SetValue::from(None::<i32>), SetValue::Param(Value::Null));
        assert_eq!(SetValue::from(expr("NOW()")), SetValue::Raw(expr("NOW()")));
    }

    #[test]
    fn param_list_keeps_push_order() {
        let mut params = ParamList::new();
        assert!(params.is_empty());
        params.push(10);
        params.push("x");
        assert_eq!(params.len(), 2);
        params.extend(vec![json!(true)]);
        assert_eq!(params.len(), 3);
        assert_eq!(params.into_vec(), vec![json!(10), json!("x"), json!(true)]);
    }
}
