//! Literal values and their SQL rendering.
//!
//! Identifiers are never quoted here; only literal operands such as column
//! defaults are turned into SQL text.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Date, time and timestamp values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temporal {
    /// Calendar date.
    Date(NaiveDate),
    /// Time of day.
    Time(NaiveTime),
    /// Date and time without a zone.
    DateTime(NaiveDateTime),
}

/// Numeric values, rendered unquoted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// 64-bit signed integer.
    Integer(i64),
    /// Unsigned integer beyond `i64::MAX`.
    Unsigned(u64),
    /// Double precision float.
    Float(f64),
}

/// A literal operand that can be embedded in DDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    /// Date/time/datetime, rendered as `'<value>'`.
    Temporal(Temporal),
    /// Text, rendered single-quoted with embedded quotes doubled.
    String(String),
    /// Bytes, rendered as single-quoted lowercase hex.
    Binary(Vec<u8>),
    /// Boolean, rendered as `1` or `0`.
    Bool(bool),
    /// Number, rendered as its decimal text.
    Number(Number),
}

impl LiteralValue {
    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates an integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Number(Number::Integer(value))
    }

    /// Creates a float literal. NaN and infinities have no SQL literal form.
    pub fn try_float(value: f64) -> Result<Self, SchemaError> {
        let literal = Self::Number(Number::Float(value));
        literal.validate()?;
        Ok(literal)
    }

    /// Checks that this value has a literal form.
    pub fn validate(&self) -> Result<(), SchemaError> {
        match self {
            Self::Number(Number::Float(f)) if !f.is_finite() => Err(
                SchemaError::UnsupportedLiteralKind(format!("non-finite float {f}")),
            ),
            _ => Ok(()),
        }
    }

    /// Renders this value as SQL literal text.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Temporal(Temporal::Date(d)) => format!("'{d}'"),
            Self::Temporal(Temporal::Time(t)) => format!("'{t}'"),
            Self::Temporal(Temporal::DateTime(dt)) => format!("'{dt}'"),
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Binary(bytes) => format!("'{}'", hex::encode(bytes)),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
            Self::Number(Number::Integer(i)) => i.to_string(),
            Self::Number(Number::Unsigned(u)) => u.to_string(),
            Self::Number(Number::Float(f)) => f.to_string(),
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl TryFrom<f64> for LiteralValue {
    type Error = SchemaError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_float(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for LiteralValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(value)
    }
}

impl From<NaiveDate> for LiteralValue {
    fn from(value: NaiveDate) -> Self {
        Self::Temporal(Temporal::Date(value))
    }
}

impl From<NaiveTime> for LiteralValue {
    fn from(value: NaiveTime) -> Self {
        Self::Temporal(Temporal::Time(value))
    }
}

impl From<NaiveDateTime> for LiteralValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Temporal(Temporal::DateTime(value))
    }
}

/// Converts a bare JSON scalar. `null`, arrays and objects have no literal form.
impl TryFrom<&serde_json::Value> for LiteralValue {
    type Error = SchemaError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::integer(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::Number(Number::Unsigned(u)))
                } else {
                    n.as_f64()
                        .ok_or_else(|| SchemaError::UnsupportedLiteralKind(format!("number {n}")))
                        .and_then(Self::try_float)
                }
            }
            Value::Null => Err(SchemaError::UnsupportedLiteralKind("null".to_string())),
            Value::Array(_) => Err(SchemaError::UnsupportedLiteralKind("array".to_string())),
            Value::Object(_) => Err(SchemaError::UnsupportedLiteralKind("object".to_string())),
        }
    }
}

/// Default value for a column. Absence of a default is `Option::None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    /// NULL default.
    Null,
    /// Literal default.
    Value(LiteralValue),
}

impl DefaultValue {
    /// Returns the SQL representation of this default value.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Value(value) => value.to_sql(),
        }
    }

    /// Checks that this default has a literal form.
    pub fn validate(&self) -> Result<(), SchemaError> {
        match self {
            Self::Null => Ok(()),
            Self::Value(value) => value.validate(),
        }
    }

    /// Returns true for the NULL default.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<LiteralValue> for DefaultValue {
    fn from(value: LiteralValue) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}
