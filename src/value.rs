//! The scalar and composite value types a parsed key can hold.

use crate::datetime::DateTime;
use crate::error::TomlError;
use crate::key::Key;

/// A parsed floating-point value, plus enough of its original spelling to
/// re-emit it faithfully on dump.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatValue {
    pub value: f64,
    /// Number of significant fractional digits present in the source.
    pub precision: usize,
    /// True if the source used exponent notation (`1e10`, `1.5E-3`).
    pub scientific: bool,
    /// The source literal with underscores removed, used verbatim on dump
    /// so the emitted text always re-parses to the same `value`.
    text: String,
}

impl FloatValue {
    pub fn new(value: f64, precision: usize, scientific: bool, text: impl Into<String>) -> Self {
        Self { value, precision, scientific, text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        &self.text
    }
}

/// A parsed TOML value.
///
/// One variant per grammar production in the value position: the five
/// scalar kinds (integer, float, boolean, string, datetime-in-four-shapes)
/// plus the two composites (array, inline table).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(FloatValue),
    Boolean(bool),
    String(String),
    Array(Vec<Value>),
    InlineTable(Box<Key>),
    OffsetDateTime(DateTime),
    LocalDateTime(DateTime),
    LocalDate(DateTime),
    LocalTime(DateTime),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::InlineTable(_) => "inline table",
            Value::OffsetDateTime(_) => "datetime",
            Value::LocalDateTime(_) => "datetime-local",
            Value::LocalDate(_) => "date-local",
            Value::LocalTime(_) => "time-local",
        }
    }

    /// The `"type"` tag used in the canonical dump format, which spells
    /// booleans as `bool` rather than `boolean`.
    pub fn dump_type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "bool",
            other => other.type_name(),
        }
    }

    pub fn as_integer(&self) -> Result<i64, TomlError> {
        match self {
            Value::Integer(v) => Ok(*v),
            other => Err(TomlError::cast(crate::error::messages::wrong_type("integer", other.type_name()))),
        }
    }

    pub fn as_float(&self) -> Result<f64, TomlError> {
        match self {
            Value::Float(v) => Ok(v.value),
            other => Err(TomlError::cast(crate::error::messages::wrong_type("float", other.type_name()))),
        }
    }

    pub fn as_bool(&self) -> Result<bool, TomlError> {
        match self {
            Value::Boolean(v) => Ok(*v),
            other => Err(TomlError::cast(crate::error::messages::wrong_type("boolean", other.type_name()))),
        }
    }

    pub fn as_str(&self) -> Result<&str, TomlError> {
        match self {
            Value::String(v) => Ok(v.as_str()),
            other => Err(TomlError::cast(crate::error::messages::wrong_type("string", other.type_name()))),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], TomlError> {
        match self {
            Value::Array(v) => Ok(v.as_slice()),
            other => Err(TomlError::cast(crate::error::messages::wrong_type("array", other.type_name()))),
        }
    }

    pub fn as_datetime(&self) -> Result<&DateTime, TomlError> {
        match self {
            Value::OffsetDateTime(v) | Value::LocalDateTime(v) | Value::LocalDate(v) | Value::LocalTime(v) => Ok(v),
            other => Err(TomlError::cast(crate::error::messages::wrong_type("datetime", other.type_name()))),
        }
    }

    pub fn as_inline_table(&self) -> Result<&Key, TomlError> {
        match self {
            Value::InlineTable(key) => Ok(key),
            other => Err(TomlError::cast(crate::error::messages::wrong_type("inline table", other.type_name()))),
        }
    }

    /// Renders the value's textual form the way it appears inside a
    /// canonical dump's `"value"` field.
    pub fn to_canonical_text(&self) -> String {
        match self {
            Value::Integer(v) => v.to_string(),
            Value::Float(v) => v.as_text().to_string(),
            Value::Boolean(v) => v.to_string(),
            Value::String(v) => v.clone(),
            Value::OffsetDateTime(dt) => {
                let mut out = String::new();
                dt.write_date(&mut out);
                out.push('T');
                dt.write_time(&mut out);
                dt.write_offset(&mut out);
                out
            }
            Value::LocalDateTime(dt) => {
                let mut out = String::new();
                dt.write_date(&mut out);
                out.push('T');
                dt.write_time(&mut out);
                out
            }
            Value::LocalDate(dt) => {
                let mut out = String::new();
                dt.write_date(&mut out);
                out
            }
            Value::LocalTime(dt) => {
                let mut out = String::new();
                dt.write_time(&mut out);
                out
            }
            Value::Array(_) | Value::InlineTable(_) => {
                unreachable!("composite values are dumped structurally, not as text")
            }
        }
    }
}
