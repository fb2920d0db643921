// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `typed-collection`
//!
//! An ordered key→value collection whose elements can be held to a runtime
//! *instance-of* constraint.
//!
//! The core type, [`Collection<V>`], keeps entries in insertion order under
//! integer or string [`Key`]s and supports insertion at arbitrary positions,
//! merging, slicing, chunked splitting, several sort strategies, keyed access,
//! cursor iteration, and a self-describing byte encoding.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You need array-like storage whose elements must all be instances of a
//!   type or interface chosen at construction time, not at compile time.
//! - Keys matter: entries can be addressed by position or by label, and
//!   positional operations keep integer keys dense.
//! - You want an operation set that other components can depend on through a
//!   trait ([`TypedCollection`]) instead of a concrete type.
//!
//! It may not be the best fit if:
//!
//! - You need fast keyed lookups on large collections (lookups are linear).
//! - The element type alone already expresses the constraint; a `Vec<T>` or a
//!   map is simpler.
//!
//! ## Constraints and elements
//!
//! Elements implement [`Element`], which reports a type name and answers
//! [`Element::is_instance_of`] for a [`Constraint`]. Common scalars implement
//! it against their Rust type name. [`Value`] is a dynamic element that also
//! carries class-like [`Object`]s with declared ancestors and interfaces.
//!
//! - A constrained collection never holds a non-conforming value: a rejected
//!   single-value mutation leaves it unchanged and returns
//!   [`Error::ConstraintViolation`].
//! - [`Collection::merge`] validates each source in full before merging it;
//!   sources merged earlier in the same call stay merged if a later one fails.
//! - Values that are themselves arrays are validated element by element.
//!
//! ## Iteration
//!
//! [`Collection::cursor`] hands out an independent [`Cursor`] with the
//! `rewind`/`valid`/`current`/`key`/`next` protocol; [`Collection::iter`] and
//! `IntoIterator` provide the usual Rust iterators. Both borrow the
//! collection, so it cannot change underneath them.
//!
//! ## Serialization
//!
//! [`Collection::encode`] and [`Collection::decode`] round-trip the name, the
//! constraint and the ordered entries through JSON. `Collection`, [`Batch`],
//! [`Key`] and [`Value`] implement `serde`'s traits directly as well.
//! [`Value::Float`] keeps NaN and infinities by writing them as strings;
//! a plain `f32`/`f64` element that is not finite makes `encode` fail instead.
//!
//! ## Logging
//!
//! Rejections, merges and exchanges are reported as `tracing` events at
//! `debug` level; encoding and decoding at `trace`. No subscriber is installed.
//!
//! ## Example
//!
//! ```rust
//! use typed_collection::{Collection, Object, Value};
//!
//! let sample = Value::from(Object::new("Sample").implements("ISample"));
//!
//! let mut c: Collection<Value> = Collection::constrained("ISample");
//! c.append(sample.clone())?
//!     .prepend(sample.clone())?
//!     .insert(1, sample)?;
//! assert_eq!(c.len(), 3);
//! assert!(c.append(Value::from("not a sample")).is_err());
//!
//! let back: Collection<Value> = Collection::decode(&c.encode()?)?;
//! assert_eq!(back, c);
//! # Ok::<(), typed_collection::Error>(())
//! ```

#![forbid(unsafe_code)]

// Modules
mod batch;
mod collection;
mod constraint;
mod contract;
mod error;
mod index;
mod iter;
mod key;
mod serde;
#[cfg(test)]
mod test_support;
mod value;

// Public exports (crate API surface)
pub use batch::Batch;
pub use collection::{Collection, CollectionBuilder};
pub use constraint::{Constraint, Element};
pub use contract::TypedCollection;
pub use error::{Error, Result};
pub use iter::{Cursor, IntoIter, Iter};
pub use key::Key;
pub use value::{Object, Value};
