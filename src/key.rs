// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entry keys.
//!
//! A key is either an integer position or a string label. Integer keys are
//! renumbered by positional operations (prepend, insert, merge, sorts that
//! discard keys); string keys survive them.

// Core imports
use core::{fmt, num::TryFromIntError};

// External imports - serde
use serde::{Deserialize, Serialize};

/// Key of an entry in a [`Batch`](crate::Batch) or [`Collection`](crate::Collection).
///
/// The derived ordering places every integer key before every string key,
/// which is the order used by [`ksort`](crate::Collection::ksort).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Positional key.
    Int(i64),
    /// Associative key.
    Str(String),
}

impl Key {
    /// Returns the integer value if this is a positional key.
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }

    /// Returns the label if this is an associative key.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }

    /// Returns `true` for positional keys.
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Positional key for an index into a `Vec`.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) const fn position(index: usize) -> Self {
        // Vec indices never exceed isize::MAX.
        Self::Int(index as i64)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}
impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}
impl From<u32> for Key {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}
impl TryFrom<usize> for Key {
    type Error = TryFromIntError;
    fn try_from(i: usize) -> Result<Self, Self::Error> {
        i64::try_from(i).map(Self::Int)
    }
}
impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}
impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Key;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_int_keys_order_before_string_keys() {
        let mut keys = vec![Key::from("b"), Key::from(2), Key::from("a"), Key::from(-1)];
        keys.sort();
        assert_eq!(
            keys,
            vec![Key::Int(-1), Key::Int(2), Key::from("a"), Key::from("b")]
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Key::try_from(7usize).map(|k| k.as_int()), Ok(Some(7)));
        assert_eq!(Key::position(3), Key::Int(3));
        assert_eq!(Key::from("x").as_int(), None);
        assert_eq!(Key::from("x").as_str(), Some("x"));
        assert!(Key::from(0).is_int());
        assert!(!Key::from(String::from("0")).is_int());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_usize_is_rejected() {
        assert!(Key::try_from(usize::MAX).is_err());
        assert_eq!(
            Key::try_from(i64::MAX as usize),
            Ok(Key::Int(i64::MAX))
        );
    }

    #[test]
    fn test_untagged_json_form() {
        assert_eq!(serde_json::to_string(&Key::Int(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&Key::from("k")).unwrap(), "\"k\"");
        let back: Key = serde_json::from_str("\"k\"").unwrap();
        assert_eq!(back, Key::from("k"));
        let back: Key = serde_json::from_str("-3").unwrap();
        assert_eq!(back, Key::Int(-3));
    }
}
