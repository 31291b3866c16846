//! A fixed-bucket, separately chained hash map keyed by raw byte strings.
//!
//! The bucket count never changes. Each bucket holds its entries in insertion
//! order, so iteration is deterministic for a given set of keys.

use alloc::vec::Vec;
use core::fmt;

use bstr::{BStr, BString, ByteSlice};

use crate::error::CollectionError;

/// Number of buckets in every [`Map`].
pub const BUCKET_COUNT: usize = 100;

#[derive(Clone)]
struct Entry<V> {
    key: BString,
    value: V,
}

/// Associative map from byte-string keys to owned values.
///
/// # Examples
///
/// ```rust
/// use jsonc_tree::Map;
///
/// let mut map = Map::new();
/// assert_eq!(map.insert("a", 1).unwrap(), None);
/// assert_eq!(map.insert("a", 2).unwrap(), Some(1));
/// assert_eq!(map.get("a"), Some(&2));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone)]
pub struct Map<V> {
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
}

/// Jenkins one-at-a-time hash, reduced to a bucket index.
pub(crate) fn bucket_index(key: &[u8]) -> usize {
    let mut hash: u32 = 0;
    for &byte in key {
        hash = hash.wrapping_add(u32::from(byte));
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash = hash.wrapping_add(hash << 15);

    hash as usize % BUCKET_COUNT
}

impl<V> Default for Map<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Map<V> {
    /// Creates an empty map, aborting on allocation failure like `Vec`.
    #[must_use]
    pub fn new() -> Self {
        let mut buckets = Vec::with_capacity(BUCKET_COUNT);
        buckets.resize_with(BUCKET_COUNT, Vec::new);
        Self { buckets, len: 0 }
    }

    /// Creates an empty map, reporting allocation failure instead of
    /// aborting.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfMemory`] if the bucket table cannot be
    /// allocated.
    pub fn try_new() -> Result<Self, CollectionError> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(BUCKET_COUNT)?;
        buckets.resize_with(BUCKET_COUNT, Vec::new);
        Ok(Self { buckets, len: 0 })
    }

    /// Number of distinct keys in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets `key` to `value`.
    ///
    /// If the key was already present its value is replaced and the previous
    /// value is handed back to the caller; otherwise the entry is appended to
    /// its bucket chain and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfMemory`] if the bucket chain cannot
    /// grow. The map is left unchanged and `value` is dropped.
    pub fn insert(&mut self, key: impl Into<BString>, value: V) -> Result<Option<V>, CollectionError> {
        let key = key.into();
        let chain = &mut self.buckets[bucket_index(&key)];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            return Ok(Some(core::mem::replace(&mut entry.value, value)));
        }

        chain.try_reserve(1)?;
        chain.push(Entry { key, value });
        self.len += 1;
        Ok(None)
    }

    /// Returns the value stored under exactly `key`.
    pub fn get<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> Option<&V> {
        let key = key.as_ref();
        self.buckets[bucket_index(key)]
            .iter()
            .find(|entry| entry.key.as_slice() == key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored under exactly `key`.
    pub fn get_mut<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) -> Option<&mut V> {
        let key = key.as_ref();
        self.buckets[bucket_index(key)]
            .iter_mut()
            .find(|entry| entry.key.as_slice() == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Unlinks the entry for `key` and returns its key and value.
    pub fn remove_entry<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) -> Option<(BString, V)> {
        let key = key.as_ref();
        let chain = &mut self.buckets[bucket_index(key)];
        let pos = chain.iter().position(|entry| entry.key.as_slice() == key)?;
        let Entry { key, value } = chain.remove(pos);
        self.len -= 1;
        Some((key, value))
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Iterates over entries in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&BStr, &V)> {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (entry.key.as_bstr(), &entry.value))
    }

    /// Iterates over the keys, in the same order as [`Map::iter`].
    pub fn keys(&self) -> impl Iterator<Item = &BStr> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over the values, in the same order as [`Map::iter`].
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<V: fmt::Debug> fmt::Debug for Map<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for Map<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}
