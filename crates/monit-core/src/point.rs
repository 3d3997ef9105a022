//! Data points: one timestamped, tagged measurement.

use std::collections::BTreeMap;
use std::time::SystemTime;

/// Tag set attached to a point. Keys are unique; iteration is sorted.
pub type Tags = BTreeMap<String, String>;

/// Value stored under the point's single `value` field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Integer(i64),
    UInteger(u64),
    Boolean(bool),
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(f64::from(v))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Integer(i64::from(v))
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::UInteger(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::UInteger(u64::from(v))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Boolean(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

/// A single measurement. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    measurement: String,
    value: FieldValue,
    tags: Tags,
    timestamp: SystemTime,
}

impl DataPoint {
    pub fn new(
        measurement: impl Into<String>,
        value: impl Into<FieldValue>,
        tags: Tags,
        timestamp: SystemTime,
    ) -> Self {
        Self {
            measurement: measurement.into(),
            value: value.into(),
            tags,
            timestamp,
        }
    }

    /// Build a point stamped with the current wall-clock time.
    pub fn now(measurement: impl Into<String>, value: impl Into<FieldValue>, tags: Tags) -> Self {
        Self::new(measurement, value, tags, SystemTime::now())
    }

    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}
