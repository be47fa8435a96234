//! Dataset records and their review metadata

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// Review state of a record
///
/// Stored as an integer tag. Values outside the three known states are kept
/// as-is so exports never rewrite them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurationStatus {
    #[default]
    Unreviewed,
    Approved,
    Deleted,
    Other(i64),
}

impl CurationStatus {
    pub fn as_i64(self) -> i64 {
        match self {
            CurationStatus::Unreviewed => 0,
            CurationStatus::Approved => 1,
            CurationStatus::Deleted => -1,
            CurationStatus::Other(v) => v,
        }
    }

    pub fn is_deleted(self) -> bool {
        self == CurationStatus::Deleted
    }

    /// Status a plain save writes: anything but a deletion becomes approved
    pub fn saved(self) -> Self {
        if self.is_deleted() {
            CurationStatus::Deleted
        } else {
            CurationStatus::Approved
        }
    }
}

impl From<i64> for CurationStatus {
    fn from(value: i64) -> Self {
        match value {
            0 => CurationStatus::Unreviewed,
            1 => CurationStatus::Approved,
            -1 => CurationStatus::Deleted,
            v => CurationStatus::Other(v),
        }
    }
}

impl fmt::Display for CurationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl Serialize for CurationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

impl<'de> Deserialize<'de> for CurationStatus {
    /// Lenient: falsy values (`null`, `false`, `0`, `""`) are unreviewed and
    /// numeric strings are accepted, so files touched by older tooling load.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let status = match &value {
            Value::Null | Value::Bool(false) => CurationStatus::Unreviewed,
            Value::Number(n) => match n.as_i64() {
                Some(v) => CurationStatus::from(v),
                None => n
                    .as_f64()
                    .map(|f| CurationStatus::from(f.trunc() as i64))
                    .unwrap_or_default(),
            },
            Value::String(s) if s.trim().is_empty() => CurationStatus::Unreviewed,
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(CurationStatus::from)
                .map_err(|_| {
                    serde::de::Error::custom(format!("invalid curationStatus {:?}", s))
                })?,
            other => {
                return Err(serde::de::Error::custom(format!(
                    "invalid curationStatus {}",
                    other
                )))
            }
        };
        Ok(status)
    }
}

/// Sampling weight of a record
///
/// Numbers keep their JSON form so an integer weight is written back as an
/// integer. Edits are not validated, so the weight may hold arbitrary text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Number(Number),
    Text(String),
}

impl Weight {
    /// Numeric weight from a float; non-finite values are kept as text
    pub fn number(value: f64) -> Self {
        Number::from_f64(value)
            .map(Weight::Number)
            .unwrap_or_else(|| Weight::Text(value.to_string()))
    }

    /// Parse user input: JSON numbers stay numeric, anything else is kept as text
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<Number>() {
            Ok(n) => Weight::Number(n),
            Err(_) => Weight::Text(input.to_string()),
        }
    }

    /// Whether this weight counts as unset (zero or empty)
    pub fn is_unset(&self) -> bool {
        match self {
            Weight::Number(n) => n.as_f64() == Some(0.0),
            Weight::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Number(n) => write!(f, "{}", n),
            Weight::Text(s) => f.write_str(s),
        }
    }
}

/// One instruction/output pair under curation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub instruction: String,
    pub output: String,
    #[serde(rename = "curationStatus", default)]
    pub curation_status: CurationStatus,
    #[serde(
        rename = "curationMessage",
        default,
        deserialize_with = "lenient_message"
    )]
    pub curation_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<Weight>,
    /// Any other keys, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Falsy values (`null`, `false`) are an empty message; other scalars keep
/// their JSON text.
fn lenient_message<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let message = match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    };
    Ok(message)
}

impl Record {
    pub fn new(instruction: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            output: output.into(),
            curation_status: CurationStatus::Unreviewed,
            curation_message: String::new(),
            p: None,
            extra: Map::new(),
        }
    }

    /// Whether `p` is absent, zero or empty
    pub fn weight_is_unset(&self) -> bool {
        self.p.as_ref().map_or(true, Weight::is_unset)
    }

    /// Copy of this record as the editor shows it: an unset weight becomes
    /// an even share of the collection.
    pub fn working_copy(&self, record_count: usize) -> Self {
        let mut copy = self.clone();
        if copy.weight_is_unset() {
            copy.p = Some(Weight::number(default_weight(record_count)));
        }
        copy
    }
}

/// Even share of the collection, `1 / count`
pub fn default_weight(record_count: usize) -> f64 {
    1.0 / record_count.max(1) as f64
}
