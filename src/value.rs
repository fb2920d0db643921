// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamic element values.
//!
//! [`Value`] lets one collection type hold heterogeneous payloads: scalars,
//! nested arrays and class-like [`Object`]s that declare which types and
//! interfaces they are instances of.

// Crate imports
use crate::{
    batch::Batch,
    constraint::{Constraint, Element},
    key::Key,
};

// Core imports
use core::{cmp::Ordering, fmt};

// Std imports
use std::borrow::Cow;

// External imports - serde
use serde::{Deserialize, Serialize};

/// A class-like value: a class name, the types it is also an instance of
/// (ancestors and implemented interfaces), and ordered fields.
///
/// ```rust
/// use typed_collection::{Constraint, Element, Object};
///
/// let sample = Object::new("ExtSample").implements("Sample").implements("ISample");
/// assert!(sample.is_instance_of(&Constraint::from("ISample")));
/// assert!(!sample.is_instance_of(&Constraint::from("ArrayAccess")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    class: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    implements: Vec<String>,
    #[serde(default, skip_serializing_if = "Batch::is_empty")]
    fields: Batch<Value>,
}

impl Object {
    /// Constructs an object of class `class` with no fields.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            implements: Vec::new(),
            fields: Batch::new(),
        }
    }

    /// Declares that this object is also an instance of `name`.
    #[must_use]
    pub fn implements(mut self, name: impl Into<String>) -> Self {
        self.implements.push(name.into());
        self
    }

    /// Sets field `key` to `value`.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.fields.insert(key, value.into());
        self
    }

    /// Returns the class name.
    #[inline]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the fields.
    #[inline]
    pub fn fields(&self) -> &Batch<Value> {
        &self.fields
    }
}

impl Element for Object {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.class)
    }

    fn is_instance_of(&self, constraint: &Constraint) -> bool {
        constraint.matches(&self.class) || self.implements.iter().any(|i| constraint.matches(i))
    }
}

/// A dynamically typed element.
///
/// Values are totally ordered, and equality follows the same order:
/// - different kinds order as null, bool, number, string, array, object;
/// - integers and floats compare numerically, an integer before an equal
///   float, and NaN after every other number (all NaNs are equal, as are
///   `0.0` and `-0.0`);
/// - arrays compare by length, then entry by entry;
/// - objects compare by class, then declared types, then fields.
///
/// Non-finite floats serialize as the strings `"NaN"`, `"inf"` and `"-inf"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(#[serde(with = "float_repr")] f64),
    /// String.
    String(String),
    /// Nested ordered key→value array.
    Array(Batch<Value>),
    /// Class-like value.
    Object(Object),
}

impl Value {
    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::String(_) => 3,
            Self::Array(_) => 4,
            Self::Object(_) => 5,
        }
    }

    /// Returns the object payload, if any.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// Orders NaN after every number and equal to any other NaN.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[allow(clippy::cast_precision_loss)]
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => cmp_f64(*a, *b),
            (Self::Int(a), Self::Float(b)) => cmp_f64(*a as f64, *b).then(Ordering::Less),
            (Self::Float(a), Self::Int(b)) => cmp_f64(*a, *b as f64).then(Ordering::Greater),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Array(a), Self::Array(b)) => a
                .len()
                .cmp(&b.len())
                .then_with(|| a.entries.cmp(&b.entries)),
            (Self::Object(a), Self::Object(b)) => a
                .class
                .cmp(&b.class)
                .then_with(|| a.implements.cmp(&b.implements))
                .then_with(|| a.fields.entries.cmp(&b.fields.entries)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Element for Value {
    fn type_name(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed("null"),
            Self::Bool(_) => Cow::Borrowed("bool"),
            Self::Int(_) => Cow::Borrowed("int"),
            Self::Float(_) => Cow::Borrowed("float"),
            Self::String(_) => Cow::Borrowed("string"),
            Self::Array(_) => Cow::Borrowed("array"),
            Self::Object(o) => o.type_name(),
        }
    }

    fn is_instance_of(&self, constraint: &Constraint) -> bool {
        match self {
            Self::Object(o) => o.is_instance_of(constraint),
            other => constraint.matches(&other.type_name()),
        }
    }

    fn as_batch(&self) -> Option<&Batch<Self>> {
        match self {
            Self::Array(batch) => Some(batch),
            _ => None,
        }
    }
}

/// JSON numbers cannot hold NaN or infinities, so those travel as strings.
mod float_repr {
    // Core imports
    use core::fmt;

    // External imports - serde
    use serde::{Deserializer, Serializer, de};

    const NAN: &str = "NaN";
    const INF: &str = "inf";
    const NEG_INF: &str = "-inf";

    pub(super) fn serialize<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
        if x.is_nan() {
            s.serialize_str(NAN)
        } else if x.is_infinite() {
            s.serialize_str(if x.is_sign_positive() { INF } else { NEG_INF })
        } else {
            s.serialize_f64(*x)
        }
    }

    struct FloatVisitor;

    #[allow(clippy::cast_precision_loss)]
    impl de::Visitor<'_> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, \"NaN\", \"inf\" or \"-inf\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                NAN => Ok(f64::NAN),
                INF => Ok(f64::INFINITY),
                NEG_INF => Ok(f64::NEG_INFINITY),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        d.deserialize_any(FloatVisitor)
    }
}

/// String conversion used by [`Collection::join`](crate::Collection::join):
/// `true` is `1`, `false` and null are empty, arrays print as `Array` and
/// objects as their class name.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Bool(false) => Ok(()),
            Self::Bool(true) => f.write_str("1"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Array(_) => f.write_str("Array"),
            Self::Object(o) => f.write_str(&o.class),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}
impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}
impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}
impl From<Batch<Value>> for Value {
    fn from(b: Batch<Value>) -> Self {
        Self::Array(b)
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
