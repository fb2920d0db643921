// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    batch::resolve_offset, collection::Collection, constraint::Element, error::Result, key::Key,
};

impl<V: Element> Collection<V> {
    /// Inserts `value` in front of every other entry.
    ///
    /// Integer keys are renumbered from `0`; string keys are kept.
    ///
    /// # Errors
    /// [`Error::ConstraintViolation`](crate::Error::ConstraintViolation) if
    /// `value` fails the constraint. The collection is left unchanged.
    pub fn prepend(&mut self, value: V) -> Result<&mut Self> {
        self.check(&value)?;
        self.elements.entries.insert(0, (Key::Int(0), value));
        self.elements.renumber();
        Ok(self)
    }

    /// Appends `value` under the next free integer key.
    ///
    /// The next free key is one past the largest integer key used since the
    /// last renumbering; unsetting that key does not free it.
    ///
    /// # Errors
    /// - [`Error::ConstraintViolation`](crate::Error::ConstraintViolation) if
    ///   `value` fails the constraint.
    /// - [`Error::NextKeyOccupied`](crate::Error::NextKeyOccupied) once
    ///   `i64::MAX` has been used as a key.
    ///
    /// On error the collection is left unchanged.
    pub fn append(&mut self, value: V) -> Result<&mut Self> {
        self.check(&value)?;
        self.elements.push(value)?;
        Ok(self)
    }

    /// Inserts `value` at position `offset`, shifting later entries right.
    ///
    /// - `offset` past the end appends.
    /// - A negative `offset` counts from the end (clamped at the start).
    /// - Integer keys are renumbered from `0`; string keys are kept.
    ///
    /// # Errors
    /// [`Error::ConstraintViolation`](crate::Error::ConstraintViolation) if
    /// `value` fails the constraint. The collection is left unchanged.
    pub fn insert(&mut self, offset: isize, value: V) -> Result<&mut Self> {
        self.check(&value)?;
        let at = resolve_offset(offset, self.len());
        self.elements.entries.insert(at, (Key::Int(0), value));
        self.elements.renumber();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        Batch, Collection, Error, Key, Value,
        test_support::{ISAMPLE, elements, ext_sample, sample, sample_collection},
    };
    use pretty_assertions::assert_eq;

    const ARRAY_ACCESS: &str = "\\ArrayAccess";

    fn expected_violation() -> Error {
        Error::ConstraintViolation {
            collection: "SampleCollection".into(),
            found: "Common\\Collection\\Sample".into(),
            required: ARRAY_ACCESS.into(),
        }
    }

    #[test]
    fn test_prepend_unrestricted() {
        for element in elements() {
            let existing = sample();
            let mut c = sample_collection(vec![existing.clone()], "");
            c.prepend(element.clone()).unwrap();
            assert_eq!(c.get_array_copy(), Batch::from(vec![element, existing]));
        }
    }

    #[test]
    fn test_prepend_restricted() {
        for element in elements() {
            let existing = sample();
            let mut c = sample_collection(vec![existing.clone()], ISAMPLE);
            c.prepend(element.clone()).unwrap();
            assert_eq!(c.get_array_copy(), Batch::from(vec![element, existing]));
        }
    }

    #[test]
    fn test_prepend_invalid_instance() {
        let mut c = sample_collection(vec![], ARRAY_ACCESS);
        assert_eq!(c.prepend(sample()).unwrap_err(), expected_violation());
        assert!(c.is_empty());
    }

    #[test]
    fn test_append_unrestricted() {
        for element in elements() {
            let existing = sample();
            let mut c = sample_collection(vec![existing.clone()], "");
            c.append(element.clone()).unwrap();
            assert_eq!(c.get_array_copy(), Batch::from(vec![existing, element]));
        }
    }

    #[test]
    fn test_append_restricted() {
        for element in elements() {
            let mut c = sample_collection(vec![sample()], ISAMPLE);
            let before = c.len();
            c.append(element.clone()).unwrap();
            assert_eq!(c.len(), before + 1);
            assert_eq!(c.last(), Some((&Key::Int(1), &element)));
        }
    }

    #[test]
    fn test_append_invalid_instance() {
        let mut c = sample_collection(vec![], ARRAY_ACCESS);
        assert_eq!(c.append(sample()).unwrap_err(), expected_violation());
        assert!(c.is_empty());
    }

    #[test]
    fn test_append_after_unset_uses_next_free_key() {
        let mut c = sample_collection(vec![Value::Int(1), Value::Int(2)], "");
        c.unset(0);
        c.append(Value::Int(3)).unwrap();
        assert_eq!(c.keys().cloned().collect::<Vec<_>>(), [Key::Int(1), Key::Int(2)]);
    }

    #[test]
    fn test_append_after_unsetting_last_key_does_not_reuse_it() {
        let mut c = sample_collection(vec![Value::Int(0), Value::Int(1), Value::Int(2)], "");
        assert_eq!(c.unset(2), Some(Value::Int(2)));
        c.append(Value::Int(3)).unwrap();
        assert_eq!(
            c.keys().cloned().collect::<Vec<_>>(),
            [Key::Int(0), Key::Int(1), Key::Int(3)]
        );
        c.offset_set(None, Value::Int(4)).unwrap();
        assert_eq!(c.last(), Some((&Key::Int(4), &Value::Int(4))));
    }

    #[test]
    fn test_append_after_max_key_is_refused() {
        let mut c: Collection<i64> = Collection::new();
        c.set(i64::MAX, 1).unwrap();
        assert_eq!(c.append(2).unwrap_err(), Error::NextKeyOccupied);
        assert_eq!(c.offset_set(None, 3).unwrap_err(), Error::NextKeyOccupied);
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(i64::MAX), Ok(&1));
        c.set("label", 4).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_insert_unrestricted() {
        for element in elements() {
            let (a, b) = (sample(), sample());
            let mut c = sample_collection(vec![a.clone(), b.clone()], "");
            c.insert(1, element.clone()).unwrap();
            assert_eq!(c.get_array_copy(), Batch::from(vec![a, element, b]));
        }
    }

    #[test]
    fn test_insert_restricted() {
        for element in elements() {
            let (a, b) = (sample(), ext_sample());
            let mut c = sample_collection(vec![a.clone(), b.clone()], ISAMPLE);
            c.insert(1, element.clone()).unwrap();
            assert_eq!(c.get_array_copy(), Batch::from(vec![a, element, b]));
        }
    }

    #[test]
    fn test_insert_invalid_instance() {
        let mut c = sample_collection(vec![], ARRAY_ACCESS);
        assert_eq!(c.insert(1, sample()).unwrap_err(), expected_violation());
        assert!(c.is_empty());
    }

    #[test]
    fn test_insert_offsets() {
        let mut c = sample_collection(vec![Value::Int(1), Value::Int(2)], "");
        c.insert(10, Value::Int(3)).unwrap();
        c.insert(-1, Value::Int(9)).unwrap();
        c.insert(-10, Value::Int(0)).unwrap();
        assert_eq!(
            c.get_array_copy().into_values(),
            [Value::Int(0), Value::Int(1), Value::Int(2), Value::Int(9), Value::Int(3)]
        );
    }

    #[test]
    fn test_prepend_keeps_string_keys() {
        let mut c = sample_collection(vec![], "");
        c.set("name", Value::from("x")).unwrap();
        c.append(Value::Int(1)).unwrap();
        c.prepend(Value::Int(0)).unwrap();
        assert_eq!(
            c.keys().cloned().collect::<Vec<_>>(),
            [Key::Int(0), Key::from("name"), Key::Int(1)]
        );
    }

    #[test]
    fn test_chaining() {
        let mut c = sample_collection(vec![], "");
        c.append(Value::Int(2))
            .and_then(|c| c.prepend(Value::Int(1)))
            .and_then(|c| c.insert(2, Value::Int(3)))
            .unwrap();
        assert_eq!(c.join(","), "1,2,3");
    }
}
