// This file is part of typed-collection.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixtures shared by the unit tests: a small class hierarchy
//! (`ISample` <- `Sample` <- `ExtSample`) and a named collection of it.

// Crate imports
use crate::{Collection, Object, Value};

pub(crate) const ISAMPLE: &str = "\\Common\\Collection\\iSample";

pub(crate) fn sample() -> Value {
    Value::from(Object::new("Common\\Collection\\Sample").implements("Common\\Collection\\ISample"))
}

pub(crate) fn ext_sample() -> Value {
    Value::from(
        Object::new("Common\\Collection\\ExtSample")
            .implements("Common\\Collection\\Sample")
            .implements("Common\\Collection\\ISample"),
    )
}

/// Every element kind the insertion tests run against.
pub(crate) fn elements() -> Vec<Value> {
    vec![sample(), ext_sample()]
}

pub(crate) fn sample_collection(elements: Vec<Value>, constraint: &str) -> Collection<Value> {
    Collection::builder()
        .name("SampleCollection")
        .constraint(constraint)
        .elements(elements)
        .build()
        .unwrap()
}
