//! The value tree produced by the parser.
//!
//! Scalars keep their raw source lexeme: strings are not unescaped and numbers
//! are not converted, so callers decide how (and whether) to interpret them.
//! Containers exclusively own their children, and dropping a [`Value`]
//! releases its whole subtree.

use bstr::{BStr, BString, ByteSlice};

use crate::{
    collections::{Array, Map},
    scanner::Keyword,
};

/// The type tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `false`
    False,
    /// `null`
    Null,
    /// `true`
    True,
    /// `[...]`
    Array,
    /// `{...}`
    Object,
    /// A string literal.
    String,
    /// A number without a decimal point.
    Int,
    /// A number with a decimal point.
    Double,
}

/// A node in the parsed JSON tree.
///
/// # Examples
///
/// ```
/// use jsonc_tree::{Value, ValueKind, parse};
///
/// let root = parse(br#"{"ratio": 2.5, "list": [1, "two"]}"#).unwrap();
/// let ratio = root.as_object().unwrap().get("ratio").unwrap();
/// assert_eq!(ratio.kind(), ValueKind::Double);
/// assert_eq!(ratio.as_lexeme().unwrap(), "2.5");
/// assert_eq!(ratio.as_f64(), Some(2.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// Integer lexeme, e.g. `-12` or `3e5`.
    Int(BString),
    /// Decimal lexeme, e.g. `0.5` or `1.5E-3`.
    Double(BString),
    /// Raw string contents between the quotes, escapes intact.
    String(BString),
    /// Ordered, possibly sparse, sequence of children.
    Array(Array<Value>),
    /// Children keyed by raw key lexeme.
    Object(Map<Value>),
}

impl Keyword {
    pub(crate) fn value(self) -> Value {
        match self {
            Keyword::True => Value::True,
            Keyword::False => Value::False,
            Keyword::Null => Value::Null,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Value::True } else { Value::False }
    }
}

impl From<Array<Value>> for Value {
    fn from(v: Array<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map<Value>> for Value {
    fn from(v: Map<Value>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns the type tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::False => ValueKind::False,
            Value::True => ValueKind::True,
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`True`] or [`False`].
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is [`Int`] or [`Double`].
    ///
    /// [`Int`]: Value::Int
    /// [`Double`]: Value::Double
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(..) | Self::Double(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    /// The raw lexeme of a string or number.
    #[must_use]
    pub fn as_lexeme(&self) -> Option<&BStr> {
        match self {
            Self::Int(v) | Self::Double(v) | Self::String(v) => Some(v.as_bstr()),
            _ => None,
        }
    }

    /// The raw string lexeme, if it is valid UTF-8. Escapes are not decoded.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => v.to_str().ok(),
            _ => None,
        }
    }

    /// Parses an [`Int`] lexeme as `i64`. Fails for exponent forms and for
    /// values out of range.
    ///
    /// [`Int`]: Value::Int
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => v.to_str().ok()?.parse().ok(),
            _ => None,
        }
    }

    /// Parses any number lexeme as `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) | Self::Double(v) => v.to_str().ok()?.parse().ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Array<Value>> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array<Value>> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Map<Value>> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map<Value>> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

/// Releases a tree.
///
/// Takes the tree by value, so the same tree cannot be released twice.
/// Passing `None` does nothing.
///
/// # Examples
///
/// ```
/// let root = jsonc_tree::parse(b"[1, [2, [3]]]").unwrap();
/// jsonc_tree::free(root);
/// jsonc_tree::free(None::<jsonc_tree::Value>);
/// ```
pub fn free(tree: impl Into<Option<Value>>) {
    drop(tree.into());
}
