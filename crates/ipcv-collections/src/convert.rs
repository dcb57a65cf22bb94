// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Two-way mapping between native types and tagged object values.

use ipcv_object::{ObjectRef, TypeTag};
use uuid::Uuid;

use crate::data::DataRef;
use crate::Holder;

/// Types that can pass to and from the object runtime's collections.
///
/// `decode` carries a precondition: the handle's runtime tag must equal
/// [`Convertible::TAG`]. The typed view accessors check the tag before
/// calling it; direct callers take on that check themselves. `String` is the
/// one deliberately lenient implementation (a handle yielding no string
/// decodes to `""`).
pub trait Convertible: Sized {
    /// Tag a raw value must carry for `decode` to be meaningful.
    const TAG: TypeTag;

    /// Read a native value out of a raw object.
    fn decode(obj: &ObjectRef) -> Self;

    /// Encode the native value as a freshly created object.
    fn encode(&self) -> ObjectRef;

    /// Short name of the required tag.
    fn tag_name() -> &'static str {
        Self::TAG.name()
    }
}

impl Convertible for String {
    const TAG: TypeTag = TypeTag::String;

    fn decode(obj: &ObjectRef) -> Self {
        match obj.string_value() {
            Some(s) => s.to_owned(),
            None => {
                log::trace!("[convert] non-string handle decoded as empty string");
                Self::new()
            }
        }
    }

    fn encode(&self) -> ObjectRef {
        ObjectRef::string(self)
    }
}

impl Convertible for i64 {
    const TAG: TypeTag = TypeTag::Int64;

    fn decode(obj: &ObjectRef) -> Self {
        obj.int64_value()
    }

    fn encode(&self) -> ObjectRef {
        ObjectRef::int64(*self)
    }
}

impl Convertible for u64 {
    const TAG: TypeTag = TypeTag::Uint64;

    fn decode(obj: &ObjectRef) -> Self {
        obj.uint64_value()
    }

    fn encode(&self) -> ObjectRef {
        ObjectRef::uint64(*self)
    }
}

/// Platform-width integers ride the 64-bit representation and narrow with
/// host truncation semantics.
impl Convertible for isize {
    const TAG: TypeTag = TypeTag::Int64;

    fn decode(obj: &ObjectRef) -> Self {
        obj.int64_value() as isize
    }

    fn encode(&self) -> ObjectRef {
        ObjectRef::int64(*self as i64)
    }
}

impl Convertible for usize {
    const TAG: TypeTag = TypeTag::Uint64;

    fn decode(obj: &ObjectRef) -> Self {
        obj.uint64_value() as usize
    }

    fn encode(&self) -> ObjectRef {
        ObjectRef::uint64(*self as u64)
    }
}

impl Convertible for bool {
    const TAG: TypeTag = TypeTag::Bool;

    fn decode(obj: &ObjectRef) -> Self {
        obj.bool_value()
    }

    fn encode(&self) -> ObjectRef {
        ObjectRef::boolean(*self)
    }
}

impl Convertible for f64 {
    const TAG: TypeTag = TypeTag::Double;

    fn decode(obj: &ObjectRef) -> Self {
        obj.double_value()
    }

    fn encode(&self) -> ObjectRef {
        ObjectRef::double(*self)
    }
}

impl Convertible for Uuid {
    const TAG: TypeTag = TypeTag::Uuid;

    /// # Panics
    ///
    /// Panics when the handle yields no byte buffer. Unlike the string case
    /// there is no safe 16-byte default.
    fn decode(obj: &ObjectRef) -> Self {
        match obj.uuid_bytes() {
            Some(bytes) => Self::from_bytes(*bytes),
            None => panic!("uuid accessor returned no bytes for a {} object", obj.tag()),
        }
    }

    fn encode(&self) -> ObjectRef {
        ObjectRef::uuid(*self.as_bytes())
    }
}

impl Convertible for Vec<u8> {
    const TAG: TypeTag = TypeTag::Data;

    fn decode(obj: &ObjectRef) -> Self {
        DataRef::from_raw_unchecked(obj.clone()).to_vec()
    }

    fn encode(&self) -> ObjectRef {
        DataRef::from_bytes(self).into_raw()
    }
}

/// Forward `Convertible` through a tuple-struct newtype whose inner type
/// already conforms, so the wrapper travels as its representation.
///
/// ```rust
/// use ipcv_collections::{impl_convertible_newtype, Convertible};
///
/// struct SensorId(u64);
/// impl_convertible_newtype!(SensorId => u64);
///
/// let obj = SensorId(42).encode();
/// assert_eq!(SensorId::decode(&obj).0, 42);
/// ```
#[macro_export]
macro_rules! impl_convertible_newtype {
    ($outer:ty => $inner:ty) => {
        impl $crate::Convertible for $outer {
            const TAG: $crate::TypeTag = <$inner as $crate::Convertible>::TAG;

            fn decode(obj: &$crate::ObjectRef) -> Self {
                Self(<$inner as $crate::Convertible>::decode(obj))
            }

            fn encode(&self) -> $crate::ObjectRef {
                $crate::Convertible::encode(&self.0)
            }
        }
    };
}
