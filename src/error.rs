// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for [`Collection`](crate::Collection).
//!
//! Every fallible operation returns [`Result`], so callers decide whether a
//! rejected element or a missing key is fatal. Errors are `Clone` and
//! `PartialEq` so they can be compared directly in tests.

// Crate imports
use crate::key::Key;

/// Errors returned by operations on [`Collection`](crate::Collection).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A value (or an element nested inside a value) does not satisfy the
    /// collection's constraint. The mutation was not applied.
    #[error("element of type {found} in collection {collection} must be instance of {required}")]
    ConstraintViolation {
        /// Diagnostic name of the collection that rejected the value.
        collection: String,
        /// Concrete type name of the offending element.
        found: String,
        /// The constraint the element failed.
        required: String,
    },
    /// No entry is stored under the requested key.
    #[error("requested offset {key} does not exist")]
    NotFound {
        /// The missing key.
        key: Key,
    },
    /// An append needs the next integer key, but the key space after the
    /// largest integer key ever used is exhausted.
    #[error("cannot append: the next integer key is already occupied")]
    NextKeyOccupied,
    /// [`Collection::split`](crate::Collection::split) was asked for chunks of size zero.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
    /// The collection could not be encoded.
    #[error("failed to encode collection: {0}")]
    Encode(String),
    /// The bytes handed to [`Collection::decode`](crate::Collection::decode) are
    /// not a valid encoding.
    #[error("failed to decode collection: {0}")]
    Decode(String),
}

/// Shorthand for `Result<T, typed_collection::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
