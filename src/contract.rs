// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`TypedCollection`] capability contract.
//!
//! Code that only needs "some constrained, ordered, indexable, iterable,
//! countable, serializable collection" can depend on this trait instead of on
//! [`Collection`]. The methods forward to the inherent API of the same name,
//! where the full semantics are documented.

// Crate imports
use crate::{
    batch::Batch,
    collection::Collection,
    constraint::Element,
    error::Result,
    iter::Cursor,
    key::Key,
};

// Core imports
use core::{cmp::Ordering, fmt::Display};

// External imports - serde
use serde::{Serialize, de::DeserializeOwned};

/// Operation set of a type-constrained ordered collection.
pub trait TypedCollection<V: Element>: Sized {
    /// See [`Collection::prepend`].
    fn prepend(&mut self, value: V) -> Result<&mut Self>;
    /// See [`Collection::append`].
    fn append(&mut self, value: V) -> Result<&mut Self>;
    /// See [`Collection::insert`].
    fn insert(&mut self, offset: isize, value: V) -> Result<&mut Self>;
    /// See [`Collection::merge`].
    fn merge<I>(&mut self, sources: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Batch<V>>;
    /// See [`Collection::split`].
    fn split(&self, size: usize, preserve_keys: bool) -> Result<Vec<Self>>
    where
        V: Clone;
    /// See [`Collection::slice`].
    fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Batch<V>
    where
        V: Clone;
    /// See [`Collection::join`].
    fn join(&self, glue: &str) -> String
    where
        V: Display;
    /// See [`Collection::exchange_array`].
    fn exchange_array(&mut self, batch: Batch<V>) -> Result<Batch<V>>;
    /// See [`Collection::get_array_copy`].
    fn get_array_copy(&self) -> Batch<V>
    where
        V: Clone;
    /// Number of entries.
    fn count(&self) -> usize;

    /// See [`Collection::asort`].
    fn asort(&mut self) -> &mut Self
    where
        V: PartialOrd;
    /// See [`Collection::arsort`].
    fn arsort(&mut self) -> &mut Self
    where
        V: PartialOrd;
    /// See [`Collection::ksort`].
    fn ksort(&mut self) -> &mut Self;
    /// See [`Collection::krsort`].
    fn krsort(&mut self) -> &mut Self;
    /// See [`Collection::usort`].
    fn usort<F: FnMut(&V, &V) -> Ordering>(&mut self, compare: F) -> &mut Self;
    /// See [`Collection::uasort`].
    fn uasort<F: FnMut(&V, &V) -> Ordering>(&mut self, compare: F) -> &mut Self;
    /// See [`Collection::uksort`].
    fn uksort<F: FnMut(&Key, &Key) -> Ordering>(&mut self, compare: F) -> &mut Self;

    /// See [`Collection::exists`].
    fn exists(&self, offset: &Key) -> bool;
    /// See [`Collection::get`].
    fn get(&self, offset: &Key) -> Result<&V>;
    /// See [`Collection::offset_set`].
    fn set(&mut self, offset: Option<Key>, value: V) -> Result<&mut Self>;
    /// See [`Collection::unset`].
    fn unset(&mut self, offset: &Key) -> Option<V>;

    /// See [`Collection::cursor`].
    fn cursor(&self) -> Cursor<'_, V>;

    /// See [`Collection::encode`].
    fn encode(&self) -> Result<Vec<u8>>
    where
        V: Serialize;
    /// See [`Collection::decode`].
    fn decode(bytes: &[u8]) -> Result<Self>
    where
        V: DeserializeOwned;
}

impl<V: Element> TypedCollection<V> for Collection<V> {
    fn prepend(&mut self, value: V) -> Result<&mut Self> {
        Collection::prepend(self, value)
    }
    fn append(&mut self, value: V) -> Result<&mut Self> {
        Collection::append(self, value)
    }
    fn insert(&mut self, offset: isize, value: V) -> Result<&mut Self> {
        Collection::insert(self, offset, value)
    }
    fn merge<I>(&mut self, sources: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Batch<V>>,
    {
        Collection::merge(self, sources)
    }
    fn split(&self, size: usize, preserve_keys: bool) -> Result<Vec<Self>>
    where
        V: Clone,
    {
        Collection::split(self, size, preserve_keys)
    }
    fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Batch<V>
    where
        V: Clone,
    {
        Collection::slice(self, offset, length, preserve_keys)
    }
    fn join(&self, glue: &str) -> String
    where
        V: Display,
    {
        Collection::join(self, glue)
    }
    fn exchange_array(&mut self, batch: Batch<V>) -> Result<Batch<V>> {
        Collection::exchange_array(self, batch)
    }
    fn get_array_copy(&self) -> Batch<V>
    where
        V: Clone,
    {
        Collection::get_array_copy(self)
    }
    fn count(&self) -> usize {
        self.len()
    }

    fn asort(&mut self) -> &mut Self
    where
        V: PartialOrd,
    {
        Collection::asort(self)
    }
    fn arsort(&mut self) -> &mut Self
    where
        V: PartialOrd,
    {
        Collection::arsort(self)
    }
    fn ksort(&mut self) -> &mut Self {
        Collection::ksort(self)
    }
    fn krsort(&mut self) -> &mut Self {
        Collection::krsort(self)
    }
    fn usort<F: FnMut(&V, &V) -> Ordering>(&mut self, compare: F) -> &mut Self {
        Collection::usort(self, compare)
    }
    fn uasort<F: FnMut(&V, &V) -> Ordering>(&mut self, compare: F) -> &mut Self {
        Collection::uasort(self, compare)
    }
    fn uksort<F: FnMut(&Key, &Key) -> Ordering>(&mut self, compare: F) -> &mut Self {
        Collection::uksort(self, compare)
    }

    fn exists(&self, offset: &Key) -> bool {
        Collection::exists(self, offset)
    }
    fn get(&self, offset: &Key) -> Result<&V> {
        Collection::get(self, offset)
    }
    fn set(&mut self, offset: Option<Key>, value: V) -> Result<&mut Self> {
        Collection::offset_set(self, offset, value)
    }
    fn unset(&mut self, offset: &Key) -> Option<V> {
        Collection::unset(self, offset)
    }

    fn cursor(&self) -> Cursor<'_, V> {
        Collection::cursor(self)
    }

    fn encode(&self) -> Result<Vec<u8>>
    where
        V: Serialize,
    {
        Collection::encode(self)
    }
    fn decode(bytes: &[u8]) -> Result<Self>
    where
        V: DeserializeOwned,
    {
        Collection::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::TypedCollection;
    use crate::{
        Batch, Key, Value,
        test_support::{ISAMPLE, ext_sample, sample, sample_collection},
    };
    use pretty_assertions::assert_eq;

    /// Exercises a collection only through the contract.
    fn fill<C: TypedCollection<Value>>(c: &mut C) -> crate::Result<()> {
        c.append(sample())?
            .prepend(ext_sample())?
            .insert(1, sample())?
            .merge([vec![sample()]])?;
        c.set(None, ext_sample())?;
        c.set(Some(Key::from("label")), sample())?;
        Ok(())
    }

    #[test]
    fn test_generic_code_through_contract() {
        let mut c = sample_collection(vec![], ISAMPLE);
        fill(&mut c).unwrap();
        assert_eq!(TypedCollection::count(&c), 6);
        assert!(TypedCollection::exists(&c, &Key::from("label")));
        assert_eq!(TypedCollection::get(&c, &Key::Int(0)), Ok(&ext_sample()));
        assert_eq!(TypedCollection::unset(&mut c, &Key::from("label")), Some(sample()));
        assert_eq!(TypedCollection::count(&c), 5);
    }

    #[test]
    fn test_contract_rejects_through_same_rules() {
        let mut c = sample_collection(vec![], ISAMPLE);
        assert!(TypedCollection::append(&mut c, Value::Int(1)).is_err());
        assert!(TypedCollection::set(&mut c, None, Value::Int(1)).is_err());
        assert!(TypedCollection::exchange_array(&mut c, Batch::from(vec![Value::Null])).is_err());
        assert_eq!(TypedCollection::count(&c), 0);
    }

    #[test]
    fn test_contract_round_trip() {
        let c = sample_collection(vec![sample(), Value::from("x")], "");
        let bytes = TypedCollection::encode(&c).unwrap();
        let back = <crate::Collection<Value> as TypedCollection<Value>>::decode(&bytes).unwrap();
        assert_eq!(TypedCollection::get_array_copy(&back), c.get_array_copy());
        let mut cursor = TypedCollection::cursor(&back);
        cursor.next();
        assert_eq!(cursor.current(), Some(&Value::from("x")));
    }
}
