//! Parser for JSON with `//` line comments and `/* */` block comments.
//!
//! [`parse`] turns a complete byte buffer into an owned [`Value`] tree. The
//! root must be an object or an array. Strings and numbers keep their raw
//! source lexemes; objects are stored in a fixed-bucket [`Map`] and arrays in
//! a sparse, geometrically growing [`Array`].
//!
//! ```rust
//! use jsonc_tree::{ErrorCode, parse, path};
//!
//! let root = parse(
//!     br#"{
//!         // service settings
//!         "name": "api",
//!         "ports": [8080, 8443] /* tls last */
//!     }"#,
//! )
//! .unwrap();
//! assert_eq!(root.get_path(&path!["name"]).unwrap().as_str(), Some("api"));
//! assert_eq!(root.get_path(&path!["ports", 1]).unwrap().as_i64(), Some(8443));
//!
//! let err = parse(b"[1, 2,]").unwrap_err();
//! assert_eq!(err.code, ErrorCode::UnexpectedToken);
//! assert_eq!((err.line, err.position), (1, 6));
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod path;
mod scanner;
mod value;

pub mod collections;

pub use collections::{Array, BUCKET_COUNT, Map};
pub use error::{CollectionError, ErrorCode, ParseError};
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options};
pub use path::{PathItem, PathItemFrom, path_get};
pub use value::{Value, ValueKind, free};

#[doc(hidden)]
pub use alloc::vec;

/// Macro to build a `Vec<PathItem>` from a heterogeneous list of keys and
/// indices.
///
/// ```rust
/// extern crate alloc;
/// # use jsonc_tree::{path, PathItem};
/// let p = path![0, "foo", 2];
/// assert_eq!(
///     p,
///     vec![
///         PathItem::Index(0),
///         PathItem::Key("foo".into()),
///         PathItem::Index(2)
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        use $crate::PathItemFrom;
        $crate::vec![$($crate::PathItem::from_path_item($elem)),*]
    }};
}
