// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support and the byte encoding of [`Collection`](crate::Collection).
//!
//! - **`Batch`**: a sequence of `[key, value]` pairs, so order and key types
//!   survive formats whose maps only allow string keys. Duplicate keys on
//!   input keep the position of the first occurrence and the last value.
//! - **`Collection`**: a struct with `name`, `constraint` and `elements`.
//!   Deserializing revalidates `elements` against `constraint`.
//! - **`encode` / `decode`**: the collection as self-describing JSON bytes.
//!   `encode` refuses elements that report [`Element::is_encodable`] as
//!   `false`, so every byte string it produces decodes again.

// Crate imports
use crate::{
    batch::Batch,
    collection::Collection,
    constraint::{Constraint, Element},
    error::{Error, Result},
    key::Key,
};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<V: Serialize> Serialize for Batch<V> {
    fn serialize<S: Serializer>(&self, s: S) -> core::result::Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for (key, value) in &self.entries {
            seq.serialize_element(&(key, value))?;
        }
        seq.end()
    }
}

struct BatchVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> de::Visitor<'de> for BatchVisitor<V> {
    type Value = Batch<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("sequence of [key, value] pairs")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> core::result::Result<Self::Value, A::Error> {
        let mut out = Batch::with_capacity(a.size_hint().unwrap_or(0));
        while let Some((key, value)) = a.next_element::<(Key, V)>()? {
            out.insert(key, value);
        }
        Ok(out)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Batch<V> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> core::result::Result<Self, D::Error> {
        d.deserialize_seq(BatchVisitor(PhantomData))
    }
}

#[derive(Serialize)]
struct Encoded<'a, V> {
    name: &'a str,
    constraint: Option<&'a Constraint>,
    elements: &'a Batch<V>,
}

#[derive(Deserialize)]
struct Decoded<V> {
    name: String,
    #[serde(default)]
    constraint: Option<Constraint>,
    elements: Batch<V>,
}

impl<V: Element> Decoded<V> {
    fn into_collection(self) -> Result<Collection<V>> {
        let mut builder = Collection::builder().name(self.name).elements(self.elements);
        if let Some(constraint) = self.constraint {
            builder = builder.constraint(constraint);
        }
        builder.build()
    }
}

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, s: S) -> core::result::Result<S::Ok, S::Error> {
        Encoded {
            name: &self.name,
            constraint: self.constraint.as_ref(),
            elements: &self.elements,
        }
        .serialize(s)
    }
}

impl<'de, V> Deserialize<'de> for Collection<V>
where
    V: Deserialize<'de> + Element,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> core::result::Result<Self, D::Error> {
        Decoded::deserialize(d)?
            .into_collection()
            .map_err(de::Error::custom)
    }
}

impl<V> Collection<V> {
    /// Encodes name, constraint and entries as self-describing bytes.
    ///
    /// # Errors
    /// [`Error::Encode`] if a value cannot be serialized, or has no JSON form
    /// that decodes back to it (a non-finite `f32`/`f64` element).
    pub fn encode(&self) -> Result<Vec<u8>>
    where
        V: Serialize + Element,
    {
        if let Some((key, _)) = self.elements.iter().find(|(_, value)| !value.is_encodable()) {
            return Err(Error::Encode(format!(
                "element under key {key} has no JSON representation"
            )));
        }
        let bytes = serde_json::to_vec(self).map_err(|e| Error::Encode(e.to_string()))?;
        tracing::trace!(
            message = "Encoded collection.",
            collection = %self.name,
            entries = self.len(),
            bytes = bytes.len()
        );
        Ok(bytes)
    }

    /// Restores a collection produced by [`encode`](Collection::encode).
    ///
    /// # Errors
    /// - [`Error::Decode`] if `bytes` are not a valid encoding.
    /// - [`Error::ConstraintViolation`] if an entry fails the decoded constraint.
    pub fn decode(bytes: &[u8]) -> Result<Self>
    where
        V: de::DeserializeOwned + Element,
    {
        let decoded: Decoded<V> =
            serde_json::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))?;
        let collection = decoded.into_collection()?;
        tracing::trace!(
            message = "Decoded collection.",
            collection = %collection.name,
            entries = collection.len()
        );
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        Batch, Collection, Error, Key, Object, Value,
        test_support::{ext_sample, sample, sample_collection},
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_batch_json_form() {
        let mut b = Batch::from(vec![1, 2]);
        b.insert("k", 3);
        let s = serde_json::to_string(&b).unwrap();
        assert_eq!(s, r#"[[0,1],[1,2],["k",3]]"#);
        let back: Batch<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn test_batch_duplicate_keys_keep_last_value() {
        let b: Batch<i32> = serde_json::from_str(r#"[[0,1],["a",2],[0,3]]"#).unwrap();
        assert_eq!(b.as_entries(), &[(Key::Int(0), 3), (Key::from("a"), 2)]);
    }

    #[test]
    fn test_batch_expecting_message() {
        let err = serde_json::from_str::<Batch<i32>>(r#"{"not":"a sequence"}"#).unwrap_err();
        assert!(
            err.to_string().contains("sequence of [key, value] pairs"),
            "unexpected error message: {err}"
        );
    }

    #[test]
    fn test_round_trip_keeps_contents_and_constraint() {
        let mut c = sample_collection(vec![sample(), ext_sample()], "\\Common\\Collection\\ISample");
        c.set("named", sample()).unwrap();
        c.unset(0);

        let bytes = c.encode().unwrap();
        let mut back: Collection<Value> = Collection::decode(&bytes).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.get_array_copy(), c.get_array_copy());
        assert_eq!(back.name(), "SampleCollection");
        assert!(matches!(
            back.append(Value::Int(1)),
            Err(Error::ConstraintViolation { .. })
        ));
    }

    #[test]
    fn test_round_trip_unconstrained() {
        let c = sample_collection(vec![Value::Int(1), Value::Null], "");
        let back: Collection<Value> = Collection::decode(&c.encode().unwrap()).unwrap();
        assert_eq!(back.constraint(), None);
        assert_eq!(back, c);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = Collection::<Value>::decode(b"not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_decode_revalidates_contents() {
        let bytes = br#"{"name":"C","constraint":"ISample","elements":[[0,{"type":"int","value":1}]]}"#;
        let err = Collection::<Value>::decode(bytes).unwrap_err();
        assert_eq!(
            err,
            Error::ConstraintViolation {
                collection: "C".into(),
                found: "int".into(),
                required: "ISample".into(),
            }
        );
    }

    #[test]
    fn test_deserialize_surfaces_violation_as_serde_error() {
        let json = r#"{"name":"C","constraint":"String","elements":[[0,5]]}"#;
        let err = serde_json::from_str::<Collection<i64>>(json).unwrap_err();
        assert!(err.to_string().contains("must be instance of String"));
    }

    #[test]
    fn test_round_trip_fractional_and_non_finite_values() {
        let nested = Value::from(Batch::from(vec![Value::Float(f64::NEG_INFINITY), Value::Float(0.1)]));
        let object = Value::from(Object::new("Point").with_field("x", f64::NAN).with_field("y", -2.75));
        let c = sample_collection(
            vec![
                Value::Float(1.0 / 3.0),
                Value::Float(f64::NAN),
                Value::Float(f64::INFINITY),
                Value::Float(-0.0),
                nested,
                object,
            ],
            "",
        );
        let back: Collection<Value> = Collection::decode(&c.encode().unwrap()).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.get(0), Ok(&Value::Float(1.0 / 3.0)));
    }

    #[test]
    fn test_encode_refuses_non_finite_scalars() {
        let mut c: Collection<f64> = Collection::new();
        c.append(0.5).unwrap();
        let back: Collection<f64> = Collection::decode(&c.encode().unwrap()).unwrap();
        assert_eq!(back, c);

        c.set("bad", f64::INFINITY).unwrap();
        assert_eq!(
            c.encode().unwrap_err(),
            Error::Encode("element under key bad has no JSON representation".into())
        );
        c.unset("bad");
        c.append(f64::NAN).unwrap();
        assert!(matches!(c.encode(), Err(Error::Encode(_))));

        let mut single: Collection<f32> = Collection::new();
        single.append(f32::NEG_INFINITY).unwrap();
        assert!(matches!(single.encode(), Err(Error::Encode(_))));
    }

    fn float_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<i32>().prop_map(|i| Value::Float(f64::from(i) / 7.0)),
            Just(Value::Float(f64::NAN)),
            Just(Value::Float(f64::INFINITY)),
            Just(Value::Float(f64::NEG_INFINITY)),
            any::<i64>().prop_map(Value::Int),
            "[a-z]{0,3}".prop_map(Value::String),
        ]
    }

    proptest! {
        #[test]
        fn prop_value_round_trip_with_non_finite_floats(values in prop::collection::vec(float_value(), 0..30)) {
            let c = sample_collection(values, "");
            let back: Collection<Value> = Collection::decode(&c.encode().unwrap()).unwrap();
            prop_assert_eq!(back, c);
        }

        #[test]
        fn prop_finite_floats_round_trip(values in prop::collection::vec(-1.0e12f64..1.0e12, 0..30)) {
            let c: Collection<f64> = Collection::builder().elements(values).build().unwrap();
            let back: Collection<f64> = Collection::decode(&c.encode().unwrap()).unwrap();
            prop_assert_eq!(back, c);
        }

        #[test]
        fn prop_encode_decode_round_trip(values in prop::collection::vec(any::<i64>(), 0..20), labels in prop::collection::vec("[a-z]{1,4}", 0..5)) {
            let mut c: Collection<i64> = Collection::constrained("i64");
            for v in &values {
                c.append(*v).unwrap();
            }
            for (i, label) in labels.iter().enumerate() {
                c.set(label.as_str(), i as i64).unwrap();
            }
            let back: Collection<i64> = Collection::decode(&c.encode().unwrap()).unwrap();
            prop_assert_eq!(back, c);
        }
    }
}
