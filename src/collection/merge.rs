// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{batch::Batch, collection::Collection, constraint::Element, error::Result};

impl<V: Element> Collection<V> {
    /// Appends the entries of every source, in argument order.
    ///
    /// A source is anything convertible into a [`Batch`]: another batch, a
    /// collection, a `Vec<V>`, or a `Vec<(Key, V)>`. For each source:
    /// 1. it is validated in full against the constraint;
    /// 2. its entries are appended in order. Integer keys continue the
    ///    collection's sequence (all integer keys end up renumbered from `0`);
    ///    a string key that is already present takes the new value in place.
    ///
    /// # Errors
    /// [`Error::ConstraintViolation`](crate::Error::ConstraintViolation) for the
    /// first source that fails. Nothing from that source or later sources is
    /// merged; sources before it stay merged.
    pub fn merge<I>(&mut self, sources: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Batch<V>>,
    {
        for (index, source) in sources.into_iter().enumerate() {
            let batch = source.into();
            self.check_batch(&batch)?;
            tracing::debug!(
                message = "Merging source.",
                collection = %self.name,
                source = index,
                entries = batch.len()
            );
            self.elements.merge(batch);
        }
        Ok(self)
    }

    /// Replaces the contents with `batch` and returns the previous contents.
    ///
    /// # Errors
    /// [`Error::ConstraintViolation`](crate::Error::ConstraintViolation) if any
    /// entry of `batch` fails the constraint. The collection is left unchanged.
    pub fn exchange_array(&mut self, batch: impl Into<Batch<V>>) -> Result<Batch<V>> {
        let batch = batch.into();
        self.check_batch(&batch)?;
        tracing::debug!(
            message = "Exchanging contents.",
            collection = %self.name,
            old_entries = self.elements.len(),
            new_entries = batch.len()
        );
        Ok(core::mem::replace(&mut self.elements, batch))
    }
}
