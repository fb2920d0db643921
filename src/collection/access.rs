// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    collection::Collection,
    constraint::Element,
    error::{Error, Result},
    key::Key,
};

impl<V> Collection<V> {
    /// Returns `true` if an entry is stored under `offset`.
    #[inline]
    pub fn exists(&self, offset: impl Into<Key>) -> bool {
        self.elements.contains_key(&offset.into())
    }

    /// Returns the value stored under `offset`.
    ///
    /// # Errors
    /// [`Error::NotFound`] if there is no such entry.
    pub fn get(&self, offset: impl Into<Key>) -> Result<&V> {
        let key = offset.into();
        match self.elements.get(&key) {
            Some(value) => Ok(value),
            None => Err(Error::NotFound { key }),
        }
    }

    /// Removes the entry stored under `offset` and returns its value.
    ///
    /// Absent keys are a no-op. Other keys are not renumbered.
    #[inline]
    pub fn unset(&mut self, offset: impl Into<Key>) -> Option<V> {
        self.elements.remove(&offset.into())
    }
}

impl<V: Element> Collection<V> {
    /// Stores `value` under `offset`, or appends it when `offset` is `None`.
    ///
    /// An existing entry is overwritten in place; a new key goes to the end.
    /// No other entry moves.
    ///
    /// # Errors
    /// [`Error::ConstraintViolation`] if `value` fails the constraint. The
    /// collection is left unchanged.
    pub fn offset_set(&mut self, offset: Option<Key>, value: V) -> Result<&mut Self> {
        match offset {
            None => self.append(value),
            Some(key) => {
                self.check(&value)?;
                self.elements.insert(key, value);
                Ok(self)
            }
        }
    }

    /// Stores `value` under `offset`. See [`offset_set`](Collection::offset_set).
    ///
    /// # Errors
    /// [`Error::ConstraintViolation`] if `value` fails the constraint.
    #[inline]
    pub fn set(&mut self, offset: impl Into<Key>, value: V) -> Result<&mut Self> {
        self.offset_set(Some(offset.into()), value)
    }
}
