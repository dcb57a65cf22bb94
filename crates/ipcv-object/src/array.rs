// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Array accessors.
//!
//! Indices are not range-checked beyond what the underlying storage enforces:
//! an out-of-range access panics. Using a non-array handle here is a contract
//! violation and panics as well.

use parking_lot::Mutex;

use crate::object::Payload;
use crate::ObjectRef;

impl ObjectRef {
    fn array_items(&self) -> &Mutex<Vec<ObjectRef>> {
        match &self.0.payload {
            Payload::Array(items) => items,
            _ => panic!("{} object used as an array", self.tag()),
        }
    }

    /// Number of elements.
    pub fn array_len(&self) -> usize {
        self.array_items().lock().len()
    }

    /// Element at `index`; panics when out of range.
    pub fn array_get(&self, index: usize) -> ObjectRef {
        self.array_items().lock()[index].clone()
    }

    /// Replace the element at `index`; panics when out of range.
    pub fn array_set(&self, index: usize, value: ObjectRef) {
        self.array_items().lock()[index] = value;
    }

    /// Append one element; the count grows by one.
    pub fn array_push(&self, value: ObjectRef) {
        self.array_items().lock().push(value);
    }

    /// Left-to-right traversal with early stop.
    ///
    /// The callback receives each `(index, element)` pair in order until it
    /// returns `false`. Iterates over a snapshot, so the callback may touch
    /// the same handle. Returns `false` when the callback stopped early.
    pub fn array_apply(&self, mut f: impl FnMut(usize, &ObjectRef) -> bool) -> bool {
        let items = self.array_items().lock().clone();
        for (index, value) in items.iter().enumerate() {
            if !f(index, value) {
                return false;
            }
        }
        true
    }
}
