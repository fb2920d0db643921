// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Batch`](crate::Batch) and [`Collection`](crate::Collection).
//!
//! - [`Iter`] yields `(&Key, &V)` and [`IntoIter`] yields `(Key, V)`; both
//!   support `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - [`Cursor`] is the explicit rewind/valid/current/key/next protocol. Each
//!   cursor owns its position, so independent cursors over the same
//!   collection never disturb each other, and the borrow keeps the collection
//!   from being mutated while a cursor is alive.

// Crate imports
use crate::key::Key;

// Core imports
use core::iter::FusedIterator;

/// Borrowing iterator over `(key, value)` pairs.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: core::slice::Iter<'a, (Key, V)>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(entries: &'a [(Key, V)]) -> Self {
        Self {
            inner: entries.iter(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).map(|(k, v)| (k, v))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}
impl<V> FusedIterator for Iter<'_, V> {}
impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Owned iterator over `(key, value)` pairs.
#[derive(Debug)]
pub struct IntoIter<V> {
    inner: std::vec::IntoIter<(Key, V)>,
}

impl<V> IntoIter<V> {
    pub(crate) fn new(entries: Vec<(Key, V)>) -> Self {
        Self {
            inner: entries.into_iter(),
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (Key, V);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}
impl<V> FusedIterator for IntoIter<V> {}
impl<V> ExactSizeIterator for IntoIter<V> {}

/// Explicit iteration cursor.
///
/// Starts on the first entry. [`valid`](Cursor::valid) is `true` while the
/// cursor references an entry; once [`next`](Cursor::next) moves past the last
/// entry it turns `false` until [`rewind`](Cursor::rewind).
///
/// ```rust
/// use typed_collection::Collection;
///
/// let mut c: Collection<i64> = Collection::new();
/// c.append(1)?.append(2)?;
///
/// let mut cursor = c.cursor();
/// let mut seen = Vec::new();
/// while cursor.valid() {
///     seen.push(*cursor.current().unwrap());
///     cursor.next();
/// }
/// assert_eq!(seen, [1, 2]);
/// # Ok::<(), typed_collection::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a, V> {
    entries: &'a [(Key, V)],
    position: usize,
}

impl<'a, V> Cursor<'a, V> {
    pub(crate) fn new(entries: &'a [(Key, V)]) -> Self {
        Self {
            entries,
            position: 0,
        }
    }

    /// Moves back to the first entry.
    #[inline]
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Returns `true` if the cursor references an entry.
    #[inline]
    pub fn valid(&self) -> bool {
        self.position < self.entries.len()
    }

    /// Returns the value under the cursor.
    #[inline]
    pub fn current(&self) -> Option<&'a V> {
        self.entries.get(self.position).map(|(_, v)| v)
    }

    /// Returns the key under the cursor.
    #[inline]
    pub fn key(&self) -> Option<&'a Key> {
        self.entries.get(self.position).map(|(k, _)| k)
    }

    /// Moves to the next entry. Does nothing once past the end.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.valid() {
            self.position += 1;
        }
    }
}
