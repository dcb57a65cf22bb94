// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Dictionary accessors.
//!
//! Iteration order is whatever the underlying table yields; it is not stable
//! across mutation. Using a non-dictionary handle here is a contract
//! violation and panics.

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::object::Payload;
use crate::ObjectRef;

impl ObjectRef {
    fn dict_entries(&self) -> &Mutex<HashMap<String, ObjectRef>> {
        match &self.0.payload {
            Payload::Dictionary(entries) => entries,
            _ => panic!("{} object used as a dictionary", self.tag()),
        }
    }

    /// Number of key/value pairs.
    pub fn dict_len(&self) -> usize {
        self.dict_entries().lock().len()
    }

    /// Value for `key`, or `None` when the key is unset.
    pub fn dict_get(&self, key: &str) -> Option<ObjectRef> {
        self.dict_entries().lock().get(key).cloned()
    }

    /// Set or remove a key: `Some` stores the value, `None` removes the key.
    pub fn dict_set(&self, key: &str, value: Option<ObjectRef>) {
        let mut entries = self.dict_entries().lock();
        match value {
            Some(v) => {
                entries.insert(key.to_owned(), v);
            }
            None => {
                entries.remove(key);
            }
        }
    }

    /// Unordered traversal with early stop.
    ///
    /// The callback receives each `(key, value)` pair until it returns
    /// `false`. Iterates over a snapshot, so the callback may touch the same
    /// handle. Returns `false` when the callback stopped early.
    pub fn dict_apply(&self, mut f: impl FnMut(&str, &ObjectRef) -> bool) -> bool {
        let entries: Vec<(String, ObjectRef)> = self
            .dict_entries()
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (key, value) in &entries {
            if !f(key, value) {
                return false;
            }
        }
        true
    }
}
