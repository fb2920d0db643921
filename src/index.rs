// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`Batch`](crate::Batch) and [`Collection`](crate::Collection).
//!
//! `c[key]` mirrors slice indexing and panics when the key is absent. Use
//! [`Collection::get`](crate::Collection::get) for the fallible lookup.
//! There is no `IndexMut`: writes go through
//! [`Collection::set`](crate::Collection::set) so the constraint is checked.

// Crate imports
use crate::{batch::Batch, collection::Collection, key::Key};

// Core imports
use core::ops::Index;

impl<V, K: Into<Key>> Index<K> for Batch<V> {
    type Output = V;
    fn index(&self, key: K) -> &Self::Output {
        let key = key.into();
        match self.get(&key) {
            Some(value) => value,
            None => panic!("no entry found for key {key}"),
        }
    }
}

impl<V, K: Into<Key>> Index<K> for Collection<V> {
    type Output = V;
    fn index(&self, key: K) -> &Self::Output {
        &self.elements[key]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Batch, Collection, Key};

    #[test]
    fn test_index_by_int_and_str() {
        let mut b = Batch::from(vec![10, 20]);
        b.insert("k", 30);
        assert_eq!(b[1], 20);
        assert_eq!(b["k"], 30);
        assert_eq!(b[Key::Int(0)], 10);

        let c: Collection<i64> = Collection::builder().elements(b).build().unwrap();
        assert_eq!(c[0], 10);
        assert_eq!(c["k"], 30);
    }

    #[test]
    #[should_panic(expected = "no entry found for key 2")]
    fn test_missing_key_panics() {
        let b = Batch::from(vec![1u8]);
        let _missing: u8 = b[2];
    }
}
