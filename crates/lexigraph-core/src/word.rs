//! Raw input terms and their normalized word form

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{Error, Result};
use crate::limits::{validate_word, ValidationError};

/// A raw value supplied by a caller, before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
    Text(String),
    Number(Number),
}

impl Term {
    /// Build a term from an optional JSON value.
    ///
    /// `None` and `null` are both treated as a missing field.
    pub fn from_json(field: &'static str, value: Option<Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Err(Error::invalid(field, ValidationError::Missing)),
            Some(Value::String(s)) => Ok(Self::Text(s)),
            Some(Value::Number(n)) => Ok(Self::Number(n)),
            Some(other) => Err(Error::invalid(
                field,
                ValidationError::UnsupportedType {
                    found: json_type_name(&other),
                },
            )),
        }
    }

    /// Normalize into a graph key, labelling failures with `field`
    pub fn normalize(&self, field: &'static str) -> Result<Word> {
        let folded = match self {
            Self::Text(s) => s.to_lowercase(),
            Self::Number(n) => number_to_string(n),
        };
        validate_word(&folded).map_err(|reason| Error::invalid(field, reason))?;
        Ok(Word(folded))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&number_to_string(n)),
        }
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Term {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for Term {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Number> for Term {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

/// Integral values drop the fractional part so `5`, `5.0` and `"5"` agree.
fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A normalized word: the case-folded string form of a term
///
/// Only [`Term::normalize`] constructs one, so every `Word` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub(crate) fn from_normalized(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
