// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Handles and per-kind constructors/accessors.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::TypeTag;

/// Opaque handle to one value in the runtime.
///
/// `Clone` retains the same value (one more reference); use
/// [`ObjectRef::duplicate`] for an independently-owned copy.
pub struct ObjectRef(pub(crate) Arc<Object>);

impl Clone for ObjectRef {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

pub(crate) struct Object {
    pub(crate) payload: Payload,
}

/// Internal value representation. Container payloads sit behind a lock so
/// they can be mutated through a shared handle.
pub(crate) enum Payload {
    Null,
    Bool(bool),
    Int64(i64),
    Uint64(u64),
    Double(f64),
    /// Nanoseconds since the Unix epoch.
    Date(i64),
    String(Box<str>),
    Uuid([u8; 16]),
    Data(Mutex<Vec<u8>>),
    Array(Mutex<Vec<ObjectRef>>),
    Dictionary(Mutex<HashMap<String, ObjectRef>>),
}

impl ObjectRef {
    fn from_payload(payload: Payload) -> Self {
        Self(Arc::new(Object { payload }))
    }

    /// Create a null marker.
    pub fn null() -> Self {
        Self::from_payload(Payload::Null)
    }

    pub fn boolean(value: bool) -> Self {
        Self::from_payload(Payload::Bool(value))
    }

    pub fn int64(value: i64) -> Self {
        Self::from_payload(Payload::Int64(value))
    }

    pub fn uint64(value: u64) -> Self {
        Self::from_payload(Payload::Uint64(value))
    }

    pub fn double(value: f64) -> Self {
        Self::from_payload(Payload::Double(value))
    }

    /// Create a date from nanoseconds since the Unix epoch.
    pub fn date(nanos_since_epoch: i64) -> Self {
        Self::from_payload(Payload::Date(nanos_since_epoch))
    }

    pub fn string(value: &str) -> Self {
        Self::from_payload(Payload::String(value.into()))
    }

    pub fn uuid(bytes: [u8; 16]) -> Self {
        Self::from_payload(Payload::Uuid(bytes))
    }

    /// Create a data value by copying `bytes`.
    pub fn data(bytes: &[u8]) -> Self {
        Self::from_payload(Payload::Data(Mutex::new(bytes.to_vec())))
    }

    /// Create an array pre-populated with `elements`, preserving order.
    pub fn array(elements: &[ObjectRef]) -> Self {
        Self::from_payload(Payload::Array(Mutex::new(elements.to_vec())))
    }

    /// Create an empty dictionary.
    pub fn dictionary() -> Self {
        Self::from_payload(Payload::Dictionary(Mutex::new(HashMap::new())))
    }

    /// Runtime type tag of the held value.
    pub fn tag(&self) -> TypeTag {
        match &self.0.payload {
            Payload::Null => TypeTag::Null,
            Payload::Bool(_) => TypeTag::Bool,
            Payload::Int64(_) => TypeTag::Int64,
            Payload::Uint64(_) => TypeTag::Uint64,
            Payload::Double(_) => TypeTag::Double,
            Payload::Date(_) => TypeTag::Date,
            Payload::String(_) => TypeTag::String,
            Payload::Uuid(_) => TypeTag::Uuid,
            Payload::Data(_) => TypeTag::Data,
            Payload::Array(_) => TypeTag::Array,
            Payload::Dictionary(_) => TypeTag::Dictionary,
        }
    }

    /// True when both handles refer to the same value instance.
    pub fn handle_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Boolean payload; `false` for any other kind.
    pub fn bool_value(&self) -> bool {
        match self.0.payload {
            Payload::Bool(v) => v,
            _ => false,
        }
    }

    /// Signed 64-bit payload; `0` for any other kind.
    pub fn int64_value(&self) -> i64 {
        match self.0.payload {
            Payload::Int64(v) => v,
            _ => 0,
        }
    }

    /// Unsigned 64-bit payload; `0` for any other kind.
    pub fn uint64_value(&self) -> u64 {
        match self.0.payload {
            Payload::Uint64(v) => v,
            _ => 0,
        }
    }

    /// Double payload; `0.0` for any other kind.
    pub fn double_value(&self) -> f64 {
        match self.0.payload {
            Payload::Double(v) => v,
            _ => 0.0,
        }
    }

    /// Date payload in nanoseconds since the Unix epoch; `0` for any other
    /// kind.
    pub fn date_value(&self) -> i64 {
        match self.0.payload {
            Payload::Date(v) => v,
            _ => 0,
        }
    }

    /// String payload; `None` for any other kind.
    pub fn string_value(&self) -> Option<&str> {
        match &self.0.payload {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }

    /// Uuid payload; `None` for any other kind.
    pub fn uuid_bytes(&self) -> Option<&[u8; 16]> {
        match &self.0.payload {
            Payload::Uuid(b) => Some(b),
            _ => None,
        }
    }
}
