// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element constraints.
//!
//! A [`Constraint`] names a type or capability. A collection configured with
//! one only accepts values whose [`Element::is_instance_of`] answers `true`
//! for it. Values that are themselves batches are checked element by element,
//! depth-first, stopping at the first failure.

// Crate imports
use crate::{
    batch::Batch,
    error::{Error, Result},
};

// Std imports
use std::borrow::Cow;

// External imports - serde
use serde::{Deserialize, Serialize};

/// Name of a required type or capability.
///
/// Matching ignores a leading `\` and ASCII case, so `\Common\ISample` and
/// `common\isample` denote the same constraint. The name as given is kept
/// for messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constraint(String);

impl Constraint {
    /// Constructs a constraint from a type or capability name.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as it was given.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `name` denotes this constraint.
    pub fn matches(&self, name: &str) -> bool {
        normalize(&self.0).eq_ignore_ascii_case(normalize(name))
    }

    /// Returns `true` for a constraint with an empty name, which accepts everything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        normalize(&self.0).is_empty()
    }
}

fn normalize(name: &str) -> &str {
    name.trim_start_matches('\\')
}

impl core::fmt::Display for Constraint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Constraint {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
impl From<String> for Constraint {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Capability every collection element exposes to constraint checks.
pub trait Element {
    /// Concrete type name, used in [`Error::ConstraintViolation`].
    fn type_name(&self) -> Cow<'_, str>;

    /// Returns `true` if this value is an instance of `constraint`.
    fn is_instance_of(&self, constraint: &Constraint) -> bool;

    /// Returns `false` for values the byte encoding cannot represent, such as
    /// non-finite `f32`/`f64` scalars. [`Collection::encode`](crate::Collection::encode)
    /// refuses collections holding one.
    fn is_encodable(&self) -> bool {
        true
    }

    /// Returns the nested batch when this value is itself a batch of elements.
    ///
    /// Nested batches are validated element by element instead of as a whole.
    fn as_batch(&self) -> Option<&Batch<Self>>
    where
        Self: Sized,
    {
        None
    }
}

/// Checks `value` against `constraint` on behalf of the collection `collection`.
pub(crate) fn check<V: Element>(
    constraint: Option<&Constraint>,
    collection: &str,
    value: &V,
) -> Result<()> {
    match constraint {
        Some(c) if !c.is_empty() => check_value(c, collection, value),
        _ => Ok(()),
    }
}

/// Checks every value of `batch`, stopping at the first failure.
pub(crate) fn check_batch<V: Element>(
    constraint: Option<&Constraint>,
    collection: &str,
    batch: &Batch<V>,
) -> Result<()> {
    match constraint {
        Some(c) if !c.is_empty() => batch
            .values()
            .try_for_each(|value| check_value(c, collection, value)),
        _ => Ok(()),
    }
}

fn check_value<V: Element>(constraint: &Constraint, collection: &str, value: &V) -> Result<()> {
    if let Some(nested) = value.as_batch() {
        return nested
            .values()
            .try_for_each(|inner| check_value(constraint, collection, inner));
    }
    if value.is_instance_of(constraint) {
        return Ok(());
    }
    Err(Error::ConstraintViolation {
        collection: collection.to_owned(),
        found: value.type_name().into_owned(),
        required: constraint.as_str().to_owned(),
    })
}

macro_rules! scalar_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn type_name(&self) -> Cow<'_, str> {
                    Cow::Borrowed(stringify!($t))
                }

                fn is_instance_of(&self, constraint: &Constraint) -> bool {
                    constraint.matches(stringify!($t))
                }
            }
        )*
    };
}

scalar_element!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String);

macro_rules! float_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn type_name(&self) -> Cow<'_, str> {
                    Cow::Borrowed(stringify!($t))
                }

                fn is_instance_of(&self, constraint: &Constraint) -> bool {
                    constraint.matches(stringify!($t))
                }

                fn is_encodable(&self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

float_element!(f32, f64);
