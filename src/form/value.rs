use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Number, Value};

use super::EncodingError;

/// A value the form encoder knows how to walk.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Null,
    Text(String),
    Number(Number),
    Bool(bool),
    Date(DateTime<Utc>),
    Sequence(Vec<FormValue>),
    /// Keyed entries, encoded in insertion order.
    Mapping(Vec<(String, FormValue)>),
    /// A value with no form representation, described by its kind.
    Unsupported(String),
}

impl FormValue {
    /// Convert any serializable value through its JSON representation.
    ///
    /// Struct fields keep their declaration order.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, EncodingError> {
        Ok(serde_json::to_value(value)?.into())
    }

    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<FormValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        FormValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &str {
        match self {
            FormValue::Null => "null",
            FormValue::Text(_) => "text",
            FormValue::Number(_) => "number",
            FormValue::Bool(_) => "bool",
            FormValue::Date(_) => "date",
            FormValue::Sequence(_) => "sequence",
            FormValue::Mapping(_) => "mapping",
            FormValue::Unsupported(kind) => kind,
        }
    }
}

impl From<Value> for FormValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FormValue::Null,
            Value::Bool(b) => FormValue::Bool(b),
            Value::Number(n) => FormValue::Number(n),
            Value::String(s) => FormValue::Text(s),
            Value::Array(items) => {
                FormValue::Sequence(items.into_iter().map(FormValue::from).collect())
            }
            Value::Object(map) => {
                FormValue::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Number(value.into())
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(n) => FormValue::Number(n),
            None => FormValue::Unsupported("non-finite number".to_string()),
        }
    }
}

impl From<DateTime<Utc>> for FormValue {
    fn from(value: DateTime<Utc>) -> Self {
        FormValue::Date(value)
    }
}

impl<T: Into<FormValue>> From<Option<T>> for FormValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FormValue::Null, Into::into)
    }
}

impl<T: Into<FormValue>> From<Vec<T>> for FormValue {
    fn from(items: Vec<T>) -> Self {
        FormValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}
