// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! In-process tagged object runtime.
//!
//! Values live behind opaque, reference-counted handles ([`ObjectRef`]) and
//! carry a runtime type tag ([`TypeTag`]). Every operation on a value goes
//! through a narrow accessor surface: per-kind constructors, per-kind scalar
//! and bulk accessors, tag query, equality, hash, copy, description, and
//! enumeration with early stop. Nothing outside this crate reaches the payload
//! directly, so layers built on top only ever see handles.
//!
//! Cloning an [`ObjectRef`] retains the same value; [`ObjectRef::duplicate`]
//! allocates an independently-owned deep copy. Container values (array,
//! dictionary, data) are mutable in place behind a lock: setters mutate the
//! referenced value, never the handle binding.
//!
//! # Example
//!
//! ```rust
//! use ipcv_object::{ObjectRef, TypeTag};
//!
//! let array = ObjectRef::array(&[ObjectRef::int64(1), ObjectRef::string("two")]);
//! assert_eq!(array.tag(), TypeTag::Array);
//! assert_eq!(array.array_len(), 2);
//! assert_eq!(array.array_get(1).string_value(), Some("two"));
//! ```

mod array;
mod compare;
mod data;
mod describe;
mod dictionary;
mod object;
mod tag;

pub use describe::{find_describe_symbol, DescribeFn};
pub use object::ObjectRef;
pub use tag::TypeTag;
