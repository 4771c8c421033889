//! The nested value model shared by every engine operation.
//!
//! A [`Value`] is either a [`Scalar`] leaf or a sequence of values tagged
//! with a container [`Kind`]. All engine algorithms pattern-match on this
//! tag; classification of foreign data happens once, at the boundary, in
//! the `From<serde_json::Value>` conversion.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ── Scalars ─────────────────────────────────────────────────

/// An atomic, non-decomposable value. Strings are always scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// An identifier such as a control name (`\freq`).
    Symbol(String),
    /// Any structured object the engine carries but never looks into.
    Opaque(serde_json::Value),
}

impl Scalar {
    pub fn truthy(&self) -> bool {
        match self {
            Scalar::Nil => false,
            Scalar::Bool(b) => *b,
            Scalar::Int(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Str(s) | Scalar::Symbol(s) => !s.is_empty(),
            Scalar::Opaque(json) => !json.is_null(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Scalar::Nil => serde_json::Value::Null,
            Scalar::Bool(b) => serde_json::Value::Bool(*b),
            Scalar::Int(i) => serde_json::Value::from(*i),
            // NaN and infinities have no JSON form.
            Scalar::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Scalar::Str(s) | Scalar::Symbol(s) => serde_json::Value::String(s.clone()),
            Scalar::Opaque(json) => json.clone(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Nil => write!(f, "nil"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Str(s) => write!(f, "{s:?}"),
            Scalar::Symbol(s) => write!(f, "\\{s}"),
            Scalar::Opaque(json) => write!(f, "{json}"),
        }
    }
}

// ── Container kind ──────────────────────────────────────────

/// Container flavor of a sequence.
///
/// `Fixed` behaves exactly like `Plain` inside the algorithms; it only
/// marks tuple-like specs so the flavor survives through results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Generic ordered list.
    Plain,
    /// Tuple-like record.
    Fixed,
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Plain
    }
}

impl Kind {
    /// Combined kind of a broadcast result level: `Fixed` wins.
    pub fn join(self, other: Kind) -> Kind {
        if self == Kind::Fixed || other == Kind::Fixed {
            Kind::Fixed
        } else {
            Kind::Plain
        }
    }
}

// ── Value ───────────────────────────────────────────────────

/// A scalar or an arbitrarily nested sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Seq(Kind, Vec<Value>),
}

impl Value {
    pub fn nil() -> Self {
        Value::Scalar(Scalar::Nil)
    }

    /// An empty plain sequence, the placeholder for degenerate lookups.
    pub fn empty() -> Self {
        Value::Seq(Kind::Plain, Vec::new())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::Seq(Kind::Plain, items)
    }

    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Seq(Kind::Fixed, items)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Symbol(name.into()))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(..))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Seq(..) => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(_, items) => Some(items),
            Value::Scalar(_) => None,
        }
    }

    /// Consume the value into its elements; a scalar yields itself.
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Value::Seq(_, items) => items,
            scalar => vec![scalar],
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        match self {
            Value::Seq(kind, _) => Some(*kind),
            Value::Scalar(_) => None,
        }
    }

    /// Number of elements, `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        self.as_seq().map(<[Value]>::len)
    }

    /// Nesting rank: 0 for a scalar, 1 + deepest element for a sequence.
    pub fn depth(&self) -> usize {
        match self {
            Value::Scalar(_) => 0,
            Value::Seq(_, items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
        }
    }

    /// Truth value of a comparison result. Non-empty sequences are true.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Scalar(s) => s.truthy(),
            Value::Seq(_, items) => !items.is_empty(),
        }
    }

    /// JSON form of the value. Both container kinds become arrays.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Scalar(s) => s.to_json(),
            Value::Seq(_, items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Seq(kind, items) => {
                let (open, close) = match kind {
                    Kind::Plain => ("[", "]"),
                    Kind::Fixed => ("(", ")"),
                };
                write!(f, "{open}")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "{close}")
            }
        }
    }
}

// ── Conversions ─────────────────────────────────────────────

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Scalar(Scalar::Int(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Scalar(Scalar::Int(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::Str(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

/// Boundary classification: arrays become plain sequences, objects are
/// carried as opaque scalars, everything else maps to its scalar.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::nil(),
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::from(i),
                None => Value::from(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(items) => {
                Value::list(items.into_iter().map(Value::from).collect())
            }
            object @ serde_json::Value::Object(_) => Value::Scalar(Scalar::Opaque(object)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(Value::from(json))
    }
}

/// Build a plain sequence: `list![1, 2.5, "a", list![3]]`.
#[macro_export]
macro_rules! list {
    () => {
        $crate::value::Value::list(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::value::Value::list(::std::vec![$($crate::value::Value::from($item)),+])
    };
}

/// Build a fixed (tuple-like) sequence: `tuple![1, list![2, 3]]`.
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::value::Value::tuple(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::value::Value::tuple(::std::vec![$($crate::value::Value::from($item)),+])
    };
}
