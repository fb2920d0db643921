// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Batch` type: an ordered key→value grouping of elements.
//!
//! A batch is what bulk operations exchange with callers: merge sources,
//! `slice` results, `get_array_copy` snapshots and the seed data of a new
//! collection. It keeps entries in insertion order and never reorders them on
//! its own. Lookups are linear in the number of entries.

// Crate imports
use crate::{
    error::{Error, Result},
    iter::{IntoIter, Iter},
    key::Key,
};

/// An ordered key→value grouping of elements.
///
/// - Keys are unique; writing to an existing key replaces the value in place.
/// - [`push`](Batch::push) appends under the next free integer key: one past
///   the largest integer key the batch has held since it was built or last
///   renumbered, or `0`. Removing that key does not free it again.
/// - Removing an entry does not renumber the others.
///
/// # Examples
///
/// ```rust
/// use typed_collection::{Batch, Key};
///
/// let mut b: Batch<&str> = Batch::from(vec!["a", "b"]);
/// b.insert("label", "c");
/// assert_eq!(b.push("d")?, Key::Int(2));
/// assert_eq!(b.values().copied().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
/// # Ok::<(), typed_collection::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Batch<V> {
    pub(crate) entries: Vec<(Key, V)>,
    /// Key of the next push; `None` once `i64::MAX` has been used.
    next_index: Option<i64>,
}

/// One past the largest integer key in `entries`, or `0`.
fn next_free<V>(entries: &[(Key, V)]) -> Option<i64> {
    entries
        .iter()
        .filter_map(|(k, _)| k.as_int())
        .try_fold(0i64, |next, key| Some(next.max(key.checked_add(1)?)))
}

impl<V: PartialEq> PartialEq for Batch<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V> Default for Batch<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Batch<V> {
    /// Constructs an empty batch.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_index: Some(0),
        }
    }

    /// Constructs an empty batch with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Wraps entries whose keys are already unique.
    pub(crate) fn from_entries(entries: Vec<(Key, V)>) -> Self {
        let next_index = next_free(&entries);
        Self {
            entries,
            next_index,
        }
    }

    /// Constructs a batch keyed `0..n` from `values`.
    pub fn from_values<I: IntoIterator<Item = V>>(values: I) -> Self {
        Self::from(values.into_iter().collect::<Vec<_>>())
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the key the next [`push`](Batch::push) will use, or `None` once
    /// the integer key space is exhausted.
    #[inline]
    pub fn next_index(&self) -> Option<i64> {
        self.next_index
    }

    fn advance_past(&mut self, key: &Key) {
        if let Key::Int(used) = key {
            self.next_index = self
                .next_index
                .and_then(|next| Some(next.max(used.checked_add(1)?)));
        }
    }

    pub(crate) fn position(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns `true` if an entry is stored under `key`.
    #[inline]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the value stored under `key` mutably.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the first entry, if any.
    #[inline]
    pub fn first(&self) -> Option<(&Key, &V)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    /// Returns the last entry, if any.
    #[inline]
    pub fn last(&self) -> Option<(&Key, &V)> {
        self.entries.last().map(|(k, v)| (k, v))
    }

    /// Appends `value` under the next free integer key and returns that key.
    ///
    /// # Errors
    /// [`Error::NextKeyOccupied`] once `i64::MAX` has been used as a key.
    pub fn push(&mut self, value: V) -> Result<Key> {
        let index = self.next_index.ok_or(Error::NextKeyOccupied)?;
        self.entries.push((Key::Int(index), value));
        self.next_index = index.checked_add(1);
        Ok(Key::Int(index))
    }

    /// Stores `value` under `key`.
    ///
    /// An existing entry is overwritten in place and its old value returned;
    /// a new key is appended at the end.
    pub fn insert<K: Into<Key>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key.into();
        match self.position(&key) {
            Some(i) => Some(core::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.advance_past(&key);
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes the entry stored under `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &Key) -> Option<V> {
        let i = self.position(key)?;
        Some(self.entries.remove(i).1)
    }

    /// Removes every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_index = Some(0);
    }

    /// Iterates over `(key, value)` pairs in order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.entries)
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates over the values in order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Consumes the batch and returns its values in order.
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }

    /// Borrows the entries as a slice of `(key, value)` pairs.
    #[inline]
    pub fn as_entries(&self) -> &[(Key, V)] {
        &self.entries
    }

    /// Rekeys every entry `0..n`, discarding string keys.
    pub fn reindex(&mut self) {
        for (i, (key, _)) in self.entries.iter_mut().enumerate() {
            *key = Key::position(i);
        }
        self.next_index = next_free(&self.entries);
    }

    /// Renumbers integer keys `0..` in order and leaves string keys alone.
    pub(crate) fn renumber(&mut self) {
        let mut next = 0i64;
        for (key, _) in &mut self.entries {
            if key.is_int() {
                *key = Key::Int(next);
                next += 1;
            }
        }
        self.next_index = next_free(&self.entries);
    }

    /// Appends `other` after the current entries.
    ///
    /// Integer keys of both sides are renumbered into one sequence; a string
    /// key already present takes the incoming value without moving.
    pub(crate) fn merge(&mut self, other: Batch<V>) {
        self.entries.reserve(other.len());
        for (key, value) in other.entries {
            match key {
                Key::Int(_) => self.entries.push((key, value)),
                Key::Str(_) => {
                    self.insert(key, value);
                }
            }
        }
        self.renumber();
    }
}

impl<V: Clone> Batch<V> {
    /// Returns the entries from `offset` for up to `length` entries.
    ///
    /// Follows array-slice semantics:
    /// - a negative `offset` counts from the end (clamped at the start);
    /// - `None` for `length` runs to the end;
    /// - a negative `length` stops that many entries before the end;
    /// - an empty range yields an empty batch.
    ///
    /// Without `preserve_keys`, integer keys are renumbered from `0`; string
    /// keys are always kept.
    pub fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Self {
        let len = self.len();
        let start = resolve_offset(offset, len);
        let end = match length {
            None => len,
            Some(l) if l >= 0 => start.saturating_add(l.unsigned_abs()).min(len),
            Some(l) => len.saturating_sub(l.unsigned_abs()),
        };
        if end <= start {
            return Self::new();
        }
        let mut out = Self::from_entries(self.entries[start..end].to_vec());
        if !preserve_keys {
            out.renumber();
        }
        out
    }
}

/// Resolves an offset that may count from the end into a position in `0..=len`.
pub(crate) fn resolve_offset(offset: isize, len: usize) -> usize {
    if offset >= 0 {
        offset.unsigned_abs().min(len)
    } else {
        len.saturating_sub(offset.unsigned_abs())
    }
}

impl<V> From<Vec<V>> for Batch<V> {
    fn from(values: Vec<V>) -> Self {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::position(i), v))
            .collect();
        Self::from_entries(entries)
    }
}

impl<V, const N: usize> From<[V; N]> for Batch<V> {
    fn from(values: [V; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<V> From<Vec<(Key, V)>> for Batch<V> {
    fn from(entries: Vec<(Key, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<V> FromIterator<(Key, V)> for Batch<V> {
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        let mut batch = Self::new();
        batch.extend(iter);
        batch
    }
}

impl<V> Extend<(Key, V)> for Batch<V> {
    fn extend<I: IntoIterator<Item = (Key, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for Batch<V> {
    type Item = (Key, V);
    type IntoIter = IntoIter<V>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries)
    }
}

impl<'a, V> IntoIterator for &'a Batch<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
