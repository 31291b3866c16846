use alloc::string::String;

use bstr::BString;

use crate::Value;

/// One step of a path into a [`Value`] tree.
///
/// Paths are sequences of keys or indices (for objects and arrays,
/// respectively). Build them with the [`path!`](crate::path) macro.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathItem {
    /// Look up an object member by its raw key lexeme.
    Key(BString),
    /// Look up an array slot.
    Index(usize),
}

#[doc(hidden)]
pub trait PathItemFrom<T> {
    fn from_path_item(value: T) -> PathItem;
}

// Negative indices wrap to values no array can reach, so they resolve to
// nothing.
macro_rules! impl_integer_as_path_item {
    ($($t:ty),+) => {
        $(
            impl PathItemFrom<$t> for PathItem {
                fn from_path_item(value: $t) -> Self {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    PathItem::Index(value as usize)
                }
            }
        )+
    };
}
impl_integer_as_path_item!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl PathItemFrom<&str> for PathItem {
    fn from_path_item(value: &str) -> Self {
        PathItem::Key(value.into())
    }
}

impl PathItemFrom<String> for PathItem {
    fn from_path_item(value: String) -> Self {
        PathItem::Key(value.into())
    }
}

impl PathItemFrom<PathItem> for PathItem {
    fn from_path_item(value: PathItem) -> Self {
        value
    }
}

// Custom (de)serialization so that a `Vec<PathItem>` becomes e.g.
// `["foo", 0, "bar"]` instead of the default tagged representation. Keys that
// are not UTF-8 are written as byte sequences.
#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use alloc::{string::String, vec::Vec};
    use core::fmt;

    use bstr::ByteSlice;
    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{Error, SeqAccess, Unexpected, Visitor},
    };

    use super::PathItem;

    impl Serialize for PathItem {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                PathItem::Key(k) => match k.to_str() {
                    Ok(s) => serializer.serialize_str(s),
                    Err(_) => serializer.serialize_bytes(k),
                },
                PathItem::Index(i) => serializer.serialize_u64(*i as u64),
            }
        }
    }

    struct PathItemVisitor;

    impl<'de> Visitor<'de> for PathItemVisitor {
        type Value = PathItem;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, byte sequence or unsigned integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(PathItem::Key(value.into()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(PathItem::Key(value.into()))
        }

        fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(PathItem::Key(value.into()))
        }

        fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(PathItem::Key(value.into()))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut key = Vec::new();
            while let Some(byte) = seq.next_element::<u8>()? {
                key.push(byte);
            }
            Ok(PathItem::Key(key.into()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            usize::try_from(value)
                .map(PathItem::Index)
                .map_err(|_| Error::invalid_value(Unexpected::Unsigned(value), &"an index"))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            usize::try_from(value).map(PathItem::Index).map_err(|_| {
                Error::invalid_value(Unexpected::Signed(value), &"non-negative index")
            })
        }
    }

    impl<'de> Deserialize<'de> for PathItem {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(PathItemVisitor)
        }
    }
}

impl PathItem {
    #[must_use]
    /// Returns the index if this item is an index, otherwise `None`.
    pub fn as_index(&self) -> Option<usize> {
        if let Self::Index(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    #[must_use]
    /// Returns the key if this item is a key, otherwise `None`.
    pub fn as_key(&self) -> Option<&BString> {
        if let Self::Key(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl Value {
    /// Follows `path` from this value.
    ///
    /// Each [`PathItem::Key`] step requires an object and each
    /// [`PathItem::Index`] step an array. A type mismatch, a missing key or
    /// an unset index yields `None`. An empty path resolves to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonc_tree::{parse, path};
    ///
    /// let root = parse(br#"{"a": [10, {"b": true}]}"#).unwrap();
    /// assert!(root.get_path(&path!["a", 1, "b"]).unwrap().as_bool().unwrap());
    /// assert!(root.get_path(&path!["a", "b"]).is_none());
    /// ```
    #[must_use]
    pub fn get_path(&self, path: &[PathItem]) -> Option<&Value> {
        path.iter().try_fold(self, |current, step| match (step, current) {
            (PathItem::Key(key), Value::Object(map)) => map.get(key),
            (PathItem::Index(index), Value::Array(array)) => array.get(*index),
            _ => None,
        })
    }

    /// Mutable version of [`Value::get_path`].
    pub fn get_path_mut(&mut self, path: &[PathItem]) -> Option<&mut Value> {
        path.iter().try_fold(self, |current, step| match (step, current) {
            (PathItem::Key(key), Value::Object(map)) => map.get_mut(key),
            (PathItem::Index(index), Value::Array(array)) => array.get_mut(*index),
            _ => None,
        })
    }
}

/// Free-function form of [`Value::get_path`].
#[must_use]
pub fn path_get<'a>(root: &'a Value, path: &[PathItem]) -> Option<&'a Value> {
    root.get_path(path)
}
