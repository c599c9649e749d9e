//! Typed setting values and the rules for inferring a type from raw text.
//!
//! # How type inference works (for beginners)
//!
//! The settings file stores every value as text, so `10`, `1.5`, `True` and
//! `OpenGL` all look alike on disk.  When loading, each raw value is offered
//! to a fixed list of parsers, in order, and the first parser that accepts it
//! decides the type:
//!
//! | Step | Kind              | Accepts                                   |
//! |------|-------------------|-------------------------------------------|
//! | 1    | [`ValueKind::Int`]   | optional sign followed by digits (`i64`) |
//! | 2    | [`ValueKind::Float`] | finite decimal literals (`f32`)          |
//! | 3    | [`ValueKind::Bool`]  | exactly `True` or `False`                |
//! | 4    | [`ValueKind::Str`]   | anything                                 |
//!
//! Forms some float parsers accept, such as `1f` / `2.5d` suffixes, hex floats,
//! `NaN` and `Infinity`, deliberately stay strings: every value typed as a
//! float re-serializes to a token that reloads as the same float.
//!
//! Because integers are tried first, `10` is always an integer and never the
//! float `10.0`.  Boolean literals are case-sensitive: `true` is a string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal written for, and recognised as, boolean `true`.
pub const TRUE_LITERAL: &str = "True";

/// Literal written for, and recognised as, boolean `false`.
pub const FALSE_LITERAL: &str = "False";

/// The order in which [`SettingValue::infer`] tries each value kind.
pub const INFERENCE_ORDER: [ValueKind; 4] = [
    ValueKind::Int,
    ValueKind::Float,
    ValueKind::Bool,
    ValueKind::Str,
];

/// The type tag of a [`SettingValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Int,
    Float,
    Bool,
    #[serde(rename = "string")]
    Str,
}

impl ValueKind {
    /// Attempts to read `raw` as this kind.
    ///
    /// Returns `None` when `raw` is not a valid literal for the kind.
    /// [`ValueKind::Str`] accepts every input.
    pub fn try_parse(self, raw: &str) -> Option<SettingValue> {
        match self {
            ValueKind::Int => raw.parse::<i64>().ok().map(SettingValue::Int),
            ValueKind::Float => parse_float(raw).map(SettingValue::Float),
            ValueKind::Bool => match raw {
                TRUE_LITERAL => Some(SettingValue::Bool(true)),
                FALSE_LITERAL => Some(SettingValue::Bool(false)),
                _ => None,
            },
            ValueKind::Str => Some(SettingValue::Str(raw.to_owned())),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Str => "string",
        };
        f.write_str(name)
    }
}

/// A single typed setting value.
///
/// The [`Display`](fmt::Display) output is the exact token written to disk,
/// and it parses back to an equal value through [`SettingValue::infer`] for
/// every value the loader can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SettingValue {
    Int(i64),
    Float(f32),
    Bool(bool),
    #[serde(rename = "string")]
    Str(String),
}

impl SettingValue {
    /// Infers a typed value from already-trimmed raw text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use settings_core::SettingValue;
    ///
    /// assert_eq!(SettingValue::infer("10"), SettingValue::Int(10));
    /// assert_eq!(SettingValue::infer("0.5"), SettingValue::Float(0.5));
    /// assert_eq!(SettingValue::infer("True"), SettingValue::Bool(true));
    /// assert_eq!(SettingValue::infer("true"), SettingValue::Str("true".into()));
    /// ```
    pub fn infer(raw: &str) -> Self {
        INFERENCE_ORDER
            .iter()
            .find_map(|kind| kind.try_parse(raw))
            .unwrap_or_else(|| SettingValue::Str(raw.to_owned()))
    }

    /// Returns the type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            SettingValue::Int(_) => ValueKind::Int,
            SettingValue::Float(_) => ValueKind::Float,
            SettingValue::Bool(_) => ValueKind::Bool,
            SettingValue::Str(_) => ValueKind::Str,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            SettingValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Int(v) => write!(f, "{v}"),
            // `Debug` keeps a `.0` or an exponent on whole floats, so the token
            // never reloads as an integer.
            SettingValue::Float(v) => write!(f, "{v:?}"),
            SettingValue::Bool(true) => f.write_str(TRUE_LITERAL),
            SettingValue::Bool(false) => f.write_str(FALSE_LITERAL),
            SettingValue::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Int(v)
    }
}

impl From<f32> for SettingValue {
    fn from(v: f32) -> Self {
        SettingValue::Float(v)
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Str(v.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::Str(v)
    }
}

/// Parses a finite decimal float literal.
///
/// Only digits, signs, `.` and `e`/`E` are allowed, so words that `f32`
/// would otherwise accept (`inf`, `NaN`, `infinity`) stay strings.
fn parse_float(raw: &str) -> Option<f32> {
    let is_decimal_literal = raw.bytes().any(|b| b.is_ascii_digit())
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal_literal {
        return None;
    }
    raw.parse::<f32>().ok().filter(|v| v.is_finite())
}
