// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Collection` type, its builder, and its inherent API.
//!
//! `Collection<V>` is an ordered key→value container that can be configured
//! with a [`Constraint`]. Every value that enters the collection is checked
//! against the constraint first; a rejected value leaves the collection
//! untouched.

mod access;
mod insert;
mod merge;
mod slice;
mod sort;

// Crate imports
use crate::{
    batch::Batch,
    constraint::{self, Constraint, Element},
    error::Result,
    iter::{Cursor, IntoIter, Iter},
    key::Key,
};

// Core imports
use core::fmt;

const DEFAULT_NAME: &str = "Collection";

/// An ordered, optionally constrained collection of elements.
///
/// `Collection<V>` stores `(key, value)` entries in order. Keys are integers
/// or strings ([`Key`]); positional operations keep integer keys dense while
/// string keys survive them.
///
/// # Constraint
///
/// A collection built with a [`Constraint`] only ever holds values for which
/// [`Element::is_instance_of`] is `true`. Values that are themselves batches
/// ([`Element::as_batch`]) are checked element by element.
///
/// - **Single-value mutations** ([`prepend`](Collection::prepend),
///   [`append`](Collection::append), [`insert`](Collection::insert),
///   [`set`](Collection::set)) are all-or-nothing.
/// - **[`exchange_array`](Collection::exchange_array)** validates the whole
///   replacement before swapping it in.
/// - **[`merge`](Collection::merge)** is all-or-nothing *per source*: each
///   source is validated in full before it is appended, and sources merged
///   earlier in the same call stay merged when a later one is rejected.
///
/// # Keys
///
/// - [`append`](Collection::append) uses the next free integer key.
/// - [`prepend`](Collection::prepend), [`insert`](Collection::insert) and
///   [`merge`](Collection::merge) renumber integer keys from `0`.
/// - [`set`](Collection::set) and [`unset`](Collection::unset) touch exactly
///   one key and never renumber.
///
/// # Examples
///
/// ```rust
/// use typed_collection::{Collection, Error, Object, Value};
///
/// let sample = || Value::from(Object::new("Sample").implements("ISample"));
///
/// let mut c = Collection::builder()
///     .name("SampleCollection")
///     .constraint("ISample")
///     .elements(vec![sample()])
///     .build()?;
///
/// c.prepend(sample())?;
/// assert_eq!(c.len(), 2);
///
/// let err = c.append(Value::Int(1)).unwrap_err();
/// assert!(matches!(err, Error::ConstraintViolation { .. }));
/// assert_eq!(c.len(), 2);
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct Collection<V> {
    pub(crate) elements: Batch<V>,
    pub(crate) constraint: Option<Constraint>,
    pub(crate) name: String,
}

/// Builder for [`Collection`]: diagnostic name, constraint and seed entries.
#[derive(Debug, Clone)]
pub struct CollectionBuilder<V> {
    name: Option<String>,
    constraint: Option<Constraint>,
    elements: Batch<V>,
}

impl<V> Default for CollectionBuilder<V> {
    fn default() -> Self {
        Self {
            name: None,
            constraint: None,
            elements: Batch::new(),
        }
    }
}

impl<V> CollectionBuilder<V> {
    /// Starts an unnamed, unconstrained, empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name reported in constraint violations. Defaults to `Collection`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Constraint every element must satisfy. An empty name means no constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: impl Into<Constraint>) -> Self {
        let constraint = constraint.into();
        self.constraint = (!constraint.is_empty()).then_some(constraint);
        self
    }

    /// Initial entries.
    #[must_use]
    pub fn elements(mut self, elements: impl Into<Batch<V>>) -> Self {
        self.elements = elements.into();
        self
    }

    /// Validates the seed entries against the constraint and builds the collection.
    ///
    /// # Errors
    /// [`Error::ConstraintViolation`](crate::Error::ConstraintViolation) if any
    /// seed entry fails the constraint.
    pub fn build(self) -> Result<Collection<V>>
    where
        V: Element,
    {
        let mut collection = Collection {
            elements: Batch::new(),
            constraint: self.constraint,
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_owned()),
        };
        collection.exchange_array(self.elements)?;
        Ok(collection)
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Collection<V> {
    /// Starts a [`CollectionBuilder`].
    #[inline]
    #[must_use]
    pub fn builder() -> CollectionBuilder<V> {
        CollectionBuilder::new()
    }

    /// Constructs an empty, unconstrained collection.
    #[inline]
    pub fn new() -> Self {
        Self {
            elements: Batch::new(),
            constraint: None,
            name: DEFAULT_NAME.to_owned(),
        }
    }

    /// Constructs an empty collection that only accepts instances of `constraint`.
    pub fn constrained(constraint: impl Into<Constraint>) -> Self {
        let constraint = constraint.into();
        Self {
            elements: Batch::new(),
            constraint: (!constraint.is_empty()).then_some(constraint),
            name: DEFAULT_NAME.to_owned(),
        }
    }

    /// Returns the diagnostic name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the active constraint, if any.
    #[inline]
    pub fn constraint(&self) -> Option<&Constraint> {
        self.constraint.as_ref()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the first entry, if any.
    #[inline]
    pub fn first(&self) -> Option<(&Key, &V)> {
        self.elements.first()
    }

    /// Returns the last entry, if any.
    #[inline]
    pub fn last(&self) -> Option<(&Key, &V)> {
        self.elements.last()
    }

    /// Removes every entry. The constraint stays.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Borrows the entries as a batch.
    #[inline]
    pub fn as_batch(&self) -> &Batch<V> {
        &self.elements
    }

    /// Consumes the collection and returns its entries.
    #[inline]
    pub fn into_batch(self) -> Batch<V> {
        self.elements
    }

    // iterators
    /// Iterates over `(key, value)` pairs in current order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        self.elements.iter()
    }

    /// Iterates over the keys in current order.
    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator + '_ {
        self.elements.keys()
    }

    /// Iterates over the values in current order.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.elements.values()
    }

    /// Returns a new [`Cursor`] positioned on the first entry.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, V> {
        Cursor::new(&self.elements.entries)
    }
}

impl<V: Element> Collection<V> {
    /// Checks one value against the constraint.
    pub(crate) fn check(&self, value: &V) -> Result<()> {
        constraint::check(self.constraint.as_ref(), &self.name, value).inspect_err(|err| {
            tracing::debug!(
                message = "Rejected element.",
                collection = %self.name,
                error = %err
            );
        })
    }

    /// Checks every value of `batch` against the constraint.
    pub(crate) fn check_batch(&self, batch: &Batch<V>) -> Result<()> {
        constraint::check_batch(self.constraint.as_ref(), &self.name, batch).inspect_err(|err| {
            tracing::debug!(
                message = "Rejected batch.",
                collection = %self.name,
                entries = batch.len(),
                error = %err
            );
        })
    }
}

impl<V: fmt::Debug> fmt::Debug for Collection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("constraint", &self.constraint)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<V> From<Collection<V>> for Batch<V> {
    fn from(collection: Collection<V>) -> Self {
        collection.elements
    }
}

impl<V: Clone> From<&Collection<V>> for Batch<V> {
    fn from(collection: &Collection<V>) -> Self {
        collection.elements.clone()
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = IntoIter<V>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
