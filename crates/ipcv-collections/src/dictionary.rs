// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! String-keyed view over a key-value handle.

use ipcv_object::{ObjectRef, TypeTag};

use crate::{Convertible, Holder};

/// View over a dictionary handle. Iteration order is whatever the runtime
/// yields and is not stable across mutation.
#[derive(Clone)]
pub struct DictionaryRef {
    raw: ObjectRef,
}

impl Holder for DictionaryRef {
    const TAG: TypeTag = TypeTag::Dictionary;

    fn raw(&self) -> &ObjectRef {
        &self.raw
    }

    fn into_raw(self) -> ObjectRef {
        self.raw
    }

    fn from_raw_unchecked(raw: ObjectRef) -> Self {
        Self { raw }
    }
}

crate::impl_holder!(DictionaryRef);

impl DictionaryRef {
    /// Fresh empty dictionary.
    pub fn new() -> Self {
        Self::from_raw_unchecked(ObjectRef::dictionary())
    }

    pub fn len(&self) -> usize {
        self.raw.dict_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Untyped read: the handle under `key`, or `None` when the key is
    /// unset. A stored null marker is returned as a null handle.
    pub fn get(&self, key: &str) -> Option<ObjectRef> {
        self.raw.dict_get(key)
    }

    /// Untyped write: `Some` stores the handle, `None` removes the key.
    pub fn set(&self, key: &str, value: Option<ObjectRef>) {
        self.raw.dict_set(key, value);
    }

    /// Store a convertible value under `key`.
    pub fn insert<T: Convertible>(&self, key: &str, value: &T) {
        self.set(key, Some(value.encode()));
    }

    /// Typed-nilable write: `None` removes the key.
    pub fn insert_opt<T: Convertible>(&self, key: &str, value: Option<&T>) {
        self.set(key, value.map(T::encode));
    }

    pub fn remove(&self, key: &str) {
        self.set(key, None);
    }

    /// Typed read. An absent key and a present null marker both yield
    /// `None`: null normalizes to "logically unset" for typed access.
    ///
    /// # Panics
    ///
    /// Panics when the key holds a non-null value whose tag does not match
    /// `T`, naming the expected and actual tags.
    pub fn get_as<T: Convertible>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match value.tag() {
            TypeTag::Null => None,
            tag if tag == T::TAG => Some(T::decode(&value)),
            other => panic!(
                "expected dictionary[{key:?}] to be of type {} but got {}",
                T::tag_name(),
                other.name()
            ),
        }
    }

    /// Typed read that yields `None` on tag mismatch instead of panicking.
    pub fn get_safe<T: Convertible>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        (value.tag() == T::TAG).then(|| T::decode(&value))
    }

    /// Visit every pair exactly once, in the runtime's iteration order.
    pub fn for_each(&self, mut f: impl FnMut(&str, &ObjectRef)) {
        self.raw.dict_apply(|key, value| {
            f(key, value);
            true
        });
    }

    /// Failing traversal: the first callback error aborts the walk and is
    /// propagated.
    pub fn try_for_each<E>(
        &self,
        mut f: impl FnMut(&str, &ObjectRef) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut failure = None;
        self.raw.dict_apply(|key, value| match f(key, value) {
            Ok(()) => true,
            Err(e) => {
                failure = Some(e);
                false
            }
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Early-stoppable traversal: the callback may set the flag to halt
    /// after the current pair.
    pub fn for_each_while(&self, mut f: impl FnMut(&str, &ObjectRef, &mut bool)) {
        self.raw.dict_apply(|key, value| {
            let mut stop = false;
            f(key, value, &mut stop);
            !stop
        });
    }

    /// Snapshot of the keys in the iteration order at the time of the call.
    pub fn keys(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len());
        self.for_each(|key, _| out.push(key.to_owned()));
        out
    }

    /// Snapshot of the values in the iteration order at the time of the
    /// call.
    pub fn values(&self) -> Vec<ObjectRef> {
        let mut out = Vec::with_capacity(self.len());
        self.for_each(|_, value| out.push(value.clone()));
        out
    }

    /// Key of the pair at `index` in iteration order, by linear scan:
    /// O(index) per access. For incidental indexed use over small
    /// collections only; full traversals belong on [`Self::for_each`].
    pub fn key_at(&self, index: usize) -> Option<String> {
        let mut found = None;
        let mut counter = 0;
        self.for_each_while(|key, _, stop| {
            if counter == index {
                found = Some(key.to_owned());
                *stop = true;
            }
            counter += 1;
        });
        found
    }

    /// Value of the pair at `index` in iteration order; same linear-scan
    /// cost as [`Self::key_at`].
    pub fn get_at(&self, index: usize) -> Option<ObjectRef> {
        self.get(&self.key_at(index)?)
    }

    /// Iterate over `(key, value)` snapshots.
    pub fn iter(&self) -> impl Iterator<Item = (String, ObjectRef)> + '_ {
        self.keys().into_iter().filter_map(|key| {
            let value = self.get(&key)?;
            Some((key, value))
        })
    }
}

impl Default for DictionaryRef {
    fn default() -> Self {
        Self::new()
    }
}
