//! Values of element options.
//!
//! Options of a map element are heterogeneous: numbers, flags, text, small
//! lists, and label formatters all occur. [`Value`] covers them with one sum
//! type so an element payload can be kept as a single uniform mapping. The
//! rendering stage, not this crate, interprets the values; the special
//! [`Value::Auto`] variant marks an option whose concrete value is resolved
//! down there.

use serde::{Deserialize, Serialize};


//------------ Value ---------------------------------------------------------

/// The value of a single element option.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    /// The value is to be resolved by the rendering stage.
    Auto,

    /// A boolean flag.
    Bool(bool),

    /// An integer value, also used for projection codes.
    Int(i64),

    /// A floating point value.
    Float(f64),

    /// A text value.
    Text(String),

    /// A list of values, e.g. a position pair or a set of break points.
    List(Vec<Value>),

    /// A label format description.
    Format(LabelFormat),
}

impl Value {
    /// Creates a list value from a sequence of convertible items.
    pub fn list<I, T>(items: I) -> Self
    where I: IntoIterator<Item = T>, T: Into<Value> {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns whether the value is the auto marker.
    pub fn is_auto(&self) -> bool {
        matches!(self, Value::Auto)
    }

    /// Returns the boolean if the value is a flag.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(value) => Some(value),
            _ => None
        }
    }

    /// Returns the value as a float if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(value) => Some(value as f64),
            Value::Float(value) => Some(value),
            _ => None
        }
    }

    /// Returns the text if the value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match *self {
            Value::Text(ref value) => Some(value),
            _ => None
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<LabelFormat> for Value {
    fn from(value: LabelFormat) -> Self {
        Value::Format(value)
    }
}


//------------ LabelFormat ---------------------------------------------------

/// Instructions for formatting coordinate labels.
///
/// Only the shape is defined here; the rendering stage applies it. All
/// fields are optional so a format can state only what it cares about.
#[derive(
    Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize
)]
pub struct LabelFormat {
    /// The thousands separator.
    #[serde(default)]
    pub big_mark: Option<String>,

    /// A suffix appended to every label.
    #[serde(default)]
    pub suffix: Option<String>,

    /// The number of decimal digits to show.
    #[serde(default)]
    pub digits: Option<u8>,
}

impl LabelFormat {
    /// Creates a format with the given thousands separator.
    pub fn with_big_mark(mark: impl Into<String>) -> Self {
        LabelFormat { big_mark: Some(mark.into()), .. Default::default() }
    }

    /// Creates the format for degree coordinates.
    ///
    /// Appends the degree sign to every label.
    pub fn degrees() -> Self {
        LabelFormat { suffix: Some("\u{b0}".into()), .. Default::default() }
    }
}


//============ Tests =========================================================
