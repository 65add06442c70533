// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ReadConfig` views over standard maps.
//!
//! A borrowed map is already a view: `&HashMap` and `&BTreeMap` implement
//! `ReadConfig` through the reference impl, so nothing is copied.

use crate::ports::ReadConfig;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

impl<S: BuildHasher> ReadConfig for HashMap<String, String, S> {
    fn contains_key(&self, key: &str) -> bool {
        HashMap::contains_key(self, key)
    }

    fn raw_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl ReadConfig for BTreeMap<String, String> {
    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn raw_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}
