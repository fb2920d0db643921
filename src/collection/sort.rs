// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordering operations. All sorts are stable: entries that compare equal keep
//! their relative order.
//!
//! The value sorts ([`asort`](Collection::asort), [`arsort`](Collection::arsort))
//! need a total order apart from values that are not comparable with
//! themselves, such as `f64::NAN`. Those sort after every other value and
//! equal to each other.

// Crate imports
use crate::{collection::Collection, key::Key};

// Core imports
use core::cmp::Ordering;

fn compare_values<V: PartialOrd>(a: &V, b: &V) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => is_unordered(a).cmp(&is_unordered(b)),
    }
}

fn is_unordered<V: PartialOrd>(value: &V) -> bool {
    value.partial_cmp(value).is_none()
}

impl<V> Collection<V> {
    /// Sorts by value, ascending, keeping each value's key.
    pub fn asort(&mut self) -> &mut Self
    where
        V: PartialOrd,
    {
        self.elements
            .entries
            .sort_by(|(_, a), (_, b)| compare_values(a, b));
        self
    }

    /// Sorts by value, descending, keeping each value's key.
    pub fn arsort(&mut self) -> &mut Self
    where
        V: PartialOrd,
    {
        self.elements
            .entries
            .sort_by(|(_, a), (_, b)| compare_values(b, a));
        self
    }

    /// Sorts by key, ascending. Integer keys come before string keys.
    pub fn ksort(&mut self) -> &mut Self {
        self.elements.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        self
    }

    /// Sorts by key, descending.
    pub fn krsort(&mut self) -> &mut Self {
        self.elements.entries.sort_by(|(a, _), (b, _)| b.cmp(a));
        self
    }

    /// Sorts by value with `compare` and rekeys the result `0..n`.
    pub fn usort<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.elements
            .entries
            .sort_by(|(_, a), (_, b)| compare(a, b));
        self.elements.reindex();
        self
    }

    /// Sorts by value with `compare`, keeping each value's key.
    pub fn uasort<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.elements
            .entries
            .sort_by(|(_, a), (_, b)| compare(a, b));
        self
    }

    /// Sorts by key with `compare`.
    pub fn uksort<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        self.elements
            .entries
            .sort_by(|(a, _), (b, _)| compare(a, b));
        self
    }
}
