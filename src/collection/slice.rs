// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    batch::Batch,
    collection::Collection,
    error::{Error, Result},
};

// Core imports
use core::fmt::{self, Write};

impl<V: Clone> Collection<V> {
    /// Returns an independent copy of the entries.
    #[inline]
    pub fn get_array_copy(&self) -> Batch<V> {
        self.elements.clone()
    }

    /// Returns the entries from `offset` for up to `length` entries.
    ///
    /// See [`Batch::slice`] for the handling of negative offsets and lengths.
    /// Without `preserve_keys`, integer keys are renumbered from `0`.
    #[inline]
    pub fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Batch<V> {
        self.elements.slice(offset, length, preserve_keys)
    }

    /// Splits the entries into consecutive collections of at most `size`
    /// entries each. Every chunk keeps this collection's name and constraint.
    ///
    /// Without `preserve_keys`, each chunk is keyed `0..len`.
    ///
    /// # Errors
    /// [`Error::InvalidChunkSize`] if `size == 0`.
    pub fn split(&self, size: usize, preserve_keys: bool) -> Result<Vec<Self>> {
        if size == 0 {
            return Err(Error::InvalidChunkSize);
        }
        let chunks = self
            .elements
            .entries
            .chunks(size)
            .map(|chunk| {
                let mut elements = Batch::from_entries(chunk.to_vec());
                if !preserve_keys {
                    elements.reindex();
                }
                Self {
                    elements,
                    constraint: self.constraint.clone(),
                    name: self.name.clone(),
                }
            })
            .collect();
        Ok(chunks)
    }
}

impl<V: fmt::Display> Collection<V> {
    /// Joins the string form of every value with `glue`.
    pub fn join(&self, glue: &str) -> String {
        let mut out = String::new();
        for (i, value) in self.elements.values().enumerate() {
            if i > 0 {
                out.push_str(glue);
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{value}");
        }
        out
    }
}
