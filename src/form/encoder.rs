use std::fmt;

use chrono::SecondsFormat;

use super::{EncodingError, FormValue};

/// Namespace for top-level values that are not mappings.
pub const MODEL_NAMESPACE: &str = "model";

/// One `name=value` entry of a form body, both sides already percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPair {
    pub name: String,
    pub value: String,
}

impl FormPair {
    fn at(path: &FormPath, raw: &str) -> Self {
        Self {
            name: urlencoding::encode(&path.render()).into_owned(),
            value: urlencoding::encode(raw).into_owned(),
        }
    }
}

impl fmt::Display for FormPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Stack of path segments leading to the value being encoded.
///
/// Callers push a segment before descending and pop it afterwards; the
/// encoder keeps that discipline on every path, including errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPath {
    segments: Vec<String>,
}

impl FormPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Join segments with `.`, attaching index segments directly: `items[0].sku`.
    pub fn render(&self) -> String {
        self.segments.join(".").replace(".[", "[")
    }
}

/// Flatten `value` into form pairs.
///
/// Fails without returning any pairs if an unsupported value is found.
pub fn encode(value: &FormValue) -> Result<Vec<FormPair>, EncodingError> {
    let mut path = FormPath::new();
    let namespaced = !matches!(value, FormValue::Mapping(_) | FormValue::Null);
    if namespaced {
        path.push(MODEL_NAMESPACE);
    }

    let mut pairs = Vec::new();
    let result = encode_into(value, &mut path, &mut pairs);
    if namespaced {
        path.pop();
    }
    debug_assert!(path.is_empty());

    result.map(|()| pairs)
}

/// Encode `value` below `path`, appending to `pairs`.
///
/// `path` is left exactly as it was passed in. On error `pairs` may hold the
/// entries produced before the failure.
pub fn encode_into(
    value: &FormValue,
    path: &mut FormPath,
    pairs: &mut Vec<FormPair>,
) -> Result<(), EncodingError> {
    match value {
        FormValue::Null => pairs.push(FormPair::at(path, "")),
        FormValue::Text(text) => pairs.push(FormPair::at(path, text)),
        FormValue::Number(n) => pairs.push(FormPair::at(path, &n.to_string())),
        FormValue::Bool(b) => pairs.push(FormPair::at(path, &b.to_string())),
        FormValue::Date(date) => pairs.push(FormPair::at(
            path,
            &date.to_rfc3339_opts(SecondsFormat::Millis, true),
        )),
        FormValue::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(format!("[{index}]"));
                let result = encode_into(item, path, pairs);
                path.pop();
                result?;
            }
        }
        FormValue::Mapping(entries) => {
            for (key, item) in entries {
                path.push(key.as_str());
                let result = encode_into(item, path, pairs);
                path.pop();
                result?;
            }
        }
        FormValue::Unsupported(kind) => {
            return Err(EncodingError::UnsupportedValue {
                path: path.render(),
                kind: kind.clone(),
            });
        }
    }
    Ok(())
}

/// Join pairs into a request body.
pub fn to_body(pairs: &[FormPair]) -> String {
    pairs
        .iter()
        .map(FormPair::to_string)
        .collect::<Vec<_>>()
        .join("&")
}
