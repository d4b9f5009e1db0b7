//! Resolved content values.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Structural type a caller expects at a content path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    RecordList,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => f.write_str("scalar"),
            Shape::RecordList => f.write_str("record-list"),
        }
    }
}

/// A string or number leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl Scalar {
    /// Numeric view of the scalar. Numeric strings ("2.41") count.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Number(_) => None,
        }
    }

    fn from_json(value: &Value) -> Option<Scalar> {
        match value {
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(Scalar::Number),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One entry of a record list.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Named-field record, e.g. `{name, score, peak, status}`
    Fields(BTreeMap<String, Scalar>),
    /// Plain value entry, e.g. a tech stack name
    Value(Scalar),
}

impl Record {
    pub fn field(&self, name: &str) -> Option<&Scalar> {
        match self {
            Record::Fields(fields) => fields.get(name),
            Record::Value(_) => None,
        }
    }

    pub fn value(&self) -> Option<&Scalar> {
        match self {
            Record::Value(scalar) => Some(scalar),
            Record::Fields(_) => None,
        }
    }
}

/// A resolved piece of locale-specific content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Scalar(Scalar),
    RecordList(Vec<Record>),
}

impl ContentNode {
    pub fn shape(&self) -> Shape {
        match self {
            ContentNode::Scalar(_) => Shape::Scalar,
            ContentNode::RecordList(_) => Shape::RecordList,
        }
    }

    /// Classify a raw dictionary value.
    ///
    /// Returns the node, or a short description of the unsupported structure
    /// found (used in shape mismatch errors).
    pub(crate) fn from_json(value: &Value) -> Result<ContentNode, String> {
        if let Some(scalar) = Scalar::from_json(value) {
            return Ok(ContentNode::Scalar(scalar));
        }

        match value {
            Value::Array(items) => {
                let records = items
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        record_from_json(item).map_err(|e| format!("{} at [{}]", e, idx))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let named = records
                    .iter()
                    .filter(|r| matches!(r, Record::Fields(_)))
                    .count();
                if named != 0 && named != records.len() {
                    return Err("array mixing records and plain values".to_string());
                }

                Ok(ContentNode::RecordList(records))
            }
            other => Err(describe(other).to_string()),
        }
    }
}

fn record_from_json(value: &Value) -> Result<Record, String> {
    if let Some(scalar) = Scalar::from_json(value) {
        return Ok(Record::Value(scalar));
    }

    match value {
        Value::Object(map) => {
            let mut fields = BTreeMap::new();
            for (key, field) in map {
                let scalar = Scalar::from_json(field)
                    .ok_or_else(|| format!("{} in field '{}'", describe(field), key))?;
                fields.insert(key.clone(), scalar);
            }
            Ok(Record::Fields(fields))
        }
        other => Err(describe(other).to_string()),
    }
}

pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
