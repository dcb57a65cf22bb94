// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! # ipcv-collections
//!
//! Idiomatic collection views and type conversion over the tagged object
//! handles of [`ipcv-object`](ipcv_object).
//!
//! The crate is a pure in-process value-mapping layer: no transport, no wire
//! format, no persistence. Decoding flows from a handle to a typed native
//! value, encoding the reverse; the views add bounds-aware,
//! collection-semantic access on top of handles that are otherwise reached
//! only through the runtime's accessor surface.
//!
//! ## Layers
//!
//! | Piece | Role |
//! |-------|------|
//! | [`Convertible`] | two-way mapping `native type <-> tagged value` |
//! | [`Holder`] | base for wrappers owning exactly one handle (equality, hash, descriptions, duplication) |
//! | [`ArrayRef`] | random-access view over an ordered-object-sequence handle |
//! | [`DictionaryRef`] | string-keyed view over a key-value handle |
//! | [`DataRef`] | byte-indexed view over a binary-data handle |
//!
//! Typed accessors check the element's runtime tag before converting; a
//! mismatch is a contract violation and panics. Every accessor also has a
//! `*_safe` variant that yields `None` instead.
//!
//! ## Quick start
//!
//! ```rust
//! use ipcv_collections::{ipcv_array, DictionaryRef, Holder};
//!
//! let array = ipcv_array![String::from("hi"), String::from("there"), 1i64];
//! array.push(&1234i64);
//! assert_eq!(array.len(), 4);
//! assert_eq!(array.get_as::<String>(0), "hi");
//! assert_eq!(array.get_safe::<i64>(0), None);
//!
//! let dict = DictionaryRef::new();
//! dict.insert("count", &3i64);
//! assert_eq!(dict.get_as::<i64>("count"), Some(3));
//! assert_eq!(dict.duplicate(), dict);
//! ```
//!
//! This layer performs no locking of its own and introduces no global state
//! beyond a one-time capability probe for the runtime's short-description
//! symbol; thread safety of concurrent mutation of one handle is the
//! runtime's contract, not this crate's.

mod array;
mod convert;
mod data;
mod dictionary;
mod holder;
mod timestamp;

pub use array::{ArrayRef, Iter as ArrayIter};
pub use convert::Convertible;
pub use data::{Bytes, DataRef};
pub use dictionary::DictionaryRef;
pub use holder::{Holder, KindError};
pub use timestamp::{Timestamp, NANOS_PER_SECOND};

pub use ipcv_object::{find_describe_symbol, DescribeFn, ObjectRef, TypeTag};
