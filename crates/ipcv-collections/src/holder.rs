// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Common base for wrappers that own exactly one object handle.

use ipcv_object::{find_describe_symbol, DescribeFn, ObjectRef, TypeTag};
use std::fmt;
use std::sync::OnceLock;

/// Error from wrapping a handle whose runtime tag does not match the
/// wrapper's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindError {
    pub expected: TypeTag,
    pub actual: TypeTag,
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a {} object but got {}",
            self.expected.name(),
            self.actual.name()
        )
    }
}

impl std::error::Error for KindError {}

/// A value type whose sole stored field is one object handle.
///
/// Identity operations all derive from the runtime's primitives over that
/// handle: two holders are equal exactly when the runtime considers their
/// values equal, and the hash is coherent with that equality. Use
/// [`impl_holder!`](crate::impl_holder) to wire the derived std traits onto
/// a concrete wrapper.
pub trait Holder: Sized {
    /// Tag every wrapped handle must carry.
    const TAG: TypeTag;

    /// The held handle.
    fn raw(&self) -> &ObjectRef;

    /// Unwrap into the held handle.
    fn into_raw(self) -> ObjectRef;

    /// Wrap a handle without checking its tag. Precondition: the caller has
    /// already validated the kind.
    fn from_raw_unchecked(raw: ObjectRef) -> Self;

    /// Wrap a handle, checking its tag first.
    fn from_raw(raw: ObjectRef) -> Result<Self, KindError> {
        let actual = raw.tag();
        if actual == Self::TAG {
            Ok(Self::from_raw_unchecked(raw))
        } else {
            Err(KindError {
                expected: Self::TAG,
                actual,
            })
        }
    }

    /// New wrapper over an independently-owned duplicate of the handle.
    ///
    /// # Panics
    ///
    /// Panics when the runtime refuses to duplicate the value.
    fn duplicate(&self) -> Self {
        match self.raw().duplicate() {
            Some(copy) => Self::from_raw_unchecked(copy),
            None => panic!("{} object refused duplication", Self::TAG.name()),
        }
    }

    /// Short human-readable text for the held value.
    fn description(&self) -> String {
        short_description()(self.raw())
    }

    /// Full description of the held value.
    fn debug_description(&self) -> String {
        self.raw().describe()
    }

    /// The runtime's hash of the held value.
    fn object_hash(&self) -> u64 {
        self.raw().object_hash()
    }
}

static SHORT_DESCRIPTION: OnceLock<DescribeFn> = OnceLock::new();

/// Short-description primitive, probed once per process. Runtimes that do
/// not export the symbol degrade to the full description.
fn short_description() -> DescribeFn {
    *SHORT_DESCRIPTION.get_or_init(|| {
        match find_describe_symbol("copy_short_description") {
            Some(f) => f,
            None => {
                log::debug!(
                    "[holder] copy_short_description unavailable, falling back to copy_description"
                );
                |obj: &ObjectRef| obj.describe()
            }
        }
    })
}

/// Derive the standard capabilities of a [`Holder`] wrapper: equality and
/// hash from the runtime's primitives, `Display`/`Debug` from the
/// descriptions, `Convertible` as an identity passthrough, and conversion
/// into a raw handle.
#[macro_export]
macro_rules! impl_holder {
    ($ty:ident) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::Holder::raw(self).equals($crate::Holder::raw(other))
            }
        }

        impl Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::Holder::object_hash(self));
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::Holder::description(self))
            }
        }

        impl ::std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::Holder::debug_description(self))
            }
        }

        impl $crate::Convertible for $ty {
            const TAG: $crate::TypeTag = <$ty as $crate::Holder>::TAG;

            fn decode(obj: &$crate::ObjectRef) -> Self {
                <$ty as $crate::Holder>::from_raw_unchecked(obj.clone())
            }

            fn encode(&self) -> $crate::ObjectRef {
                $crate::Holder::raw(self).clone()
            }
        }

        impl From<$ty> for $crate::ObjectRef {
            fn from(value: $ty) -> Self {
                $crate::Holder::into_raw(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayRef, DictionaryRef};

    #[test]
    fn kind_error_names_both_tags() {
        let err = ArrayRef::from_raw(ObjectRef::string("hi")).expect_err("tag mismatch");
        assert_eq!(err.expected, TypeTag::Array);
        assert_eq!(err.actual, TypeTag::String);
        assert_eq!(err.to_string(), "expected a ARRAY object but got STRING");
    }

    #[test]
    fn from_raw_accepts_matching_tags() {
        let dict = DictionaryRef::from_raw(ObjectRef::dictionary()).expect("dictionary handle");
        assert_eq!(dict.len(), 0);
    }

    #[test]
    fn descriptions_use_the_short_form() {
        let dict = DictionaryRef::new();
        dict.insert("x", &1i64);
        assert_eq!(dict.description(), "<dictionary: 1 entries>");
        assert_eq!(
            dict.debug_description(),
            "<dictionary: {\"x\": <int64: 1>}>"
        );
        assert_eq!(format!("{dict}"), dict.description());
        assert_eq!(format!("{dict:?}"), dict.debug_description());
    }

    #[test]
    fn equality_and_hash_follow_the_held_value() {
        let a = DictionaryRef::new();
        let b = DictionaryRef::new();
        a.insert("x", &1i64);
        b.insert("x", &1i64);

        assert_eq!(a, b);
        assert_eq!(a.object_hash(), b.object_hash());
        assert!(!a.raw().handle_eq(b.raw()));
    }

    #[test]
    fn duplicate_equal_but_independent() {
        let a = DictionaryRef::new();
        a.insert("x", &1i64);

        let b = a.duplicate();
        assert_eq!(a, b);
        assert!(!a.raw().handle_eq(b.raw()));

        b.insert("y", &2i64);
        assert_ne!(a, b);
        assert_eq!(a.len(), 1);
    }
}
