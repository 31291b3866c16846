//! Owned containers backing [`Value::Object`] and [`Value::Array`].
//!
//! [`Value::Object`]: crate::Value::Object
//! [`Value::Array`]: crate::Value::Array

pub mod array;
pub mod map;

pub use array::Array;
pub use map::{BUCKET_COUNT, Map};
