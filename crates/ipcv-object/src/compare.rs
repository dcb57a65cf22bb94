// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Identity primitives: equality, hash, copy.
//!
//! Equality is structural and deep; doubles compare bitwise so that the hash
//! stays coherent with equality. Container payloads are snapshotted before
//! recursing so no lock is held across a nested comparison.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::object::Payload;
use crate::ObjectRef;

fn scalar_hash<T: Hash>(kind: u8, value: T) -> u64 {
    let mut h = DefaultHasher::new();
    kind.hash(&mut h);
    value.hash(&mut h);
    h.finish()
}

impl ObjectRef {
    /// Structural equality over the held values.
    pub fn equals(&self, other: &ObjectRef) -> bool {
        if self.handle_eq(other) {
            return true;
        }
        match (&self.0.payload, &other.0.payload) {
            (Payload::Null, Payload::Null) => true,
            (Payload::Bool(a), Payload::Bool(b)) => a == b,
            (Payload::Int64(a), Payload::Int64(b)) => a == b,
            (Payload::Uint64(a), Payload::Uint64(b)) => a == b,
            (Payload::Double(a), Payload::Double(b)) => a.to_bits() == b.to_bits(),
            (Payload::Date(a), Payload::Date(b)) => a == b,
            (Payload::String(a), Payload::String(b)) => a == b,
            (Payload::Uuid(a), Payload::Uuid(b)) => a == b,
            (Payload::Data(a), Payload::Data(b)) => {
                let a = a.lock().clone();
                a == *b.lock()
            }
            (Payload::Array(a), Payload::Array(b)) => {
                let a = a.lock().clone();
                let b = b.lock().clone();
                a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| x.equals(y))
            }
            (Payload::Dictionary(a), Payload::Dictionary(b)) => {
                let a: Vec<(String, ObjectRef)> =
                    a.lock().iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                let b = b.lock().clone();
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|w| v.equals(w)))
            }
            _ => false,
        }
    }

    /// Structural hash, coherent with [`ObjectRef::equals`]: equal values
    /// hash equal. Dictionary entries combine order-independently.
    pub fn object_hash(&self) -> u64 {
        match &self.0.payload {
            Payload::Null => scalar_hash(0, ()),
            Payload::Bool(v) => scalar_hash(1, v),
            Payload::Int64(v) => scalar_hash(2, v),
            Payload::Uint64(v) => scalar_hash(3, v),
            Payload::Double(v) => scalar_hash(4, v.to_bits()),
            Payload::Date(v) => scalar_hash(5, v),
            Payload::String(s) => scalar_hash(6, &**s),
            Payload::Uuid(b) => scalar_hash(7, b),
            Payload::Data(d) => scalar_hash(8, &*d.lock()),
            Payload::Array(items) => {
                let items = items.lock().clone();
                let mut h = DefaultHasher::new();
                9u8.hash(&mut h);
                for item in &items {
                    h.write_u64(item.object_hash());
                }
                h.finish()
            }
            Payload::Dictionary(entries) => {
                let entries: Vec<(String, ObjectRef)> = entries
                    .lock()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                let mut acc = 0u64;
                for (key, value) in &entries {
                    let mut h = DefaultHasher::new();
                    key.hash(&mut h);
                    h.write_u64(value.object_hash());
                    acc ^= h.finish();
                }
                let mut h = DefaultHasher::new();
                10u8.hash(&mut h);
                h.write_usize(entries.len());
                h.write_u64(acc);
                h.finish()
            }
        }
    }

    /// Independently-owned deep copy of the held value.
    ///
    /// Returns `None` when the runtime refuses to copy the kind; every value
    /// kind this runtime constructs is copyable.
    pub fn duplicate(&self) -> Option<ObjectRef> {
        let copy = match &self.0.payload {
            Payload::Null => ObjectRef::null(),
            Payload::Bool(v) => ObjectRef::boolean(*v),
            Payload::Int64(v) => ObjectRef::int64(*v),
            Payload::Uint64(v) => ObjectRef::uint64(*v),
            Payload::Double(v) => ObjectRef::double(*v),
            Payload::Date(v) => ObjectRef::date(*v),
            Payload::String(s) => ObjectRef::string(s),
            Payload::Uuid(b) => ObjectRef::uuid(*b),
            Payload::Data(d) => ObjectRef::data(&d.lock()),
            Payload::Array(items) => {
                let items = items.lock().clone();
                let mut copies = Vec::with_capacity(items.len());
                for item in &items {
                    copies.push(item.duplicate()?);
                }
                ObjectRef::array(&copies)
            }
            Payload::Dictionary(entries) => {
                let entries: Vec<(String, ObjectRef)> = entries
                    .lock()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                let out = ObjectRef::dictionary();
                for (key, value) in &entries {
                    out.dict_set(key, Some(value.duplicate()?));
                }
                out
            }
        };
        Some(copy)
    }
}
