// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Random-access view over an ordered-object-sequence handle.

use ipcv_object::{ObjectRef, TypeTag};

use crate::{Convertible, Holder};

/// View over an array handle with 0-based indices `[0, len)`.
///
/// Setters mutate the referenced array value in place; the wrapper binding
/// itself never changes. Untyped accessors perform no bounds check at this
/// layer — an out-of-range index is forwarded to the runtime, which panics.
#[derive(Clone)]
pub struct ArrayRef {
    raw: ObjectRef,
}

impl Holder for ArrayRef {
    const TAG: TypeTag = TypeTag::Array;

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

crate::impl_holder!(ArrayRef);

impl ArrayRef {
    /// Fresh empty array.
    pub fn new() -> Self {
        Self::from_raw_unchecked(ObjectRef::array(&[]))
    }

    /// Array pre-populated with already-encoded elements, in order.
    pub fn from_raw_elements(elements: Vec<ObjectRef>) -> Self {
        Self::from_raw_unchecked(ObjectRef::array(&elements))
    }

    pub fn len(&self) -> usize {
        self.raw.array_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Untyped element read; out-of-range panics in the runtime.
    pub fn get(&self, index: usize) -> ObjectRef {
        self.raw.array_get(index)
    }

    /// Untyped element write; out-of-range panics in the runtime.
    pub fn set(&self, index: usize, value: ObjectRef) {
        self.raw.array_set(index, value);
    }

    /// Typed element read.
    ///
    /// # Panics
    ///
    /// Panics when the element's runtime tag does not match `T`, naming the
    /// expected and actual tags.
    pub fn get_as<T: Convertible>(&self, index: usize) -> T {
        let value = self.get(index);
        let actual = value.tag();
        assert!(
            actual == T::TAG,
            "expected array[{index}] to be of type {} but got {}",
            T::tag_name(),
            actual.name()
        );
        T::decode(&value)
    }

    /// Typed element read that yields `None` on tag mismatch instead of
    /// panicking. Bounds are still not checked.
    pub fn get_safe<T: Convertible>(&self, index: usize) -> Option<T> {
        let value = self.get(index);
        (value.tag() == T::TAG).then(|| T::decode(&value))
    }

    /// Typed element write.
    pub fn set_as<T: Convertible>(&self, index: usize, value: &T) {
        self.set(index, value.encode());
    }

    /// Typed element write where `None` stores a null marker.
    pub fn set_opt<T: Convertible>(&self, index: usize, value: Option<&T>) {
        self.set(index, value.map_or_else(ObjectRef::null, T::encode));
    }

    /// Append a raw handle; the count grows by one.
    pub fn push_raw(&self, value: ObjectRef) {
        self.raw.array_push(value);
    }

    /// Append a convertible value; the count grows by one.
    pub fn push<T: Convertible>(&self, value: &T) {
        self.push_raw(value.encode());
    }

    /// Visit every element exactly once, in index order, without
    /// materializing a copy.
    pub fn for_each(&self, mut f: impl FnMut(&ObjectRef)) {
        self.raw.array_apply(|_, value| {
            f(value);
            true
        });
    }

    /// Failing traversal: the first callback error aborts the walk and is
    /// propagated; elements past it are never visited.
    pub fn try_for_each<E>(&self, mut f: impl FnMut(&ObjectRef) -> Result<(), E>) -> Result<(), E> {
        let mut failure = None;
        self.raw.array_apply(|_, value| match f(value) {
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

    /// Snapshot of the elements.
    pub fn to_vec(&self) -> Vec<ObjectRef> {
        let mut out = Vec::with_capacity(self.len());
        self.for_each(|value| out.push(value.clone()));
        out
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl Default for ArrayRef {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ObjectRef> for ArrayRef {
    fn from_iter<I: IntoIterator<Item = ObjectRef>>(iter: I) -> Self {
        Self::from_raw_elements(iter.into_iter().collect())
    }
}

/// Double-ended, exact-size iterator over the elements of an [`ArrayRef`].
pub struct Iter<'a> {
    array: &'a ArrayRef,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = ObjectRef;

    fn next(&mut self) -> Option<ObjectRef> {
        if self.front == self.back {
            return None;
        }
        let value = self.array.get(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<ObjectRef> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.array.get(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ArrayRef {
    type Item = ObjectRef;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Build an [`ArrayRef`] pre-populated from [`Convertible`] values, in
/// literal order.
///
/// ```rust
/// use ipcv_collections::ipcv_array;
///
/// let array = ipcv_array![String::from("hi"), 1i64, true];
/// assert_eq!(array.len(), 3);
/// ```
#[macro_export]
macro_rules! ipcv_array {
    () => {
        $crate::ArrayRef::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::ArrayRef::from_raw_elements(vec![$($crate::Convertible::encode(&$element)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DictionaryRef;

    fn sample() -> ArrayRef {
        ipcv_array![
            String::from("hi"),
            String::from("there"),
            1i64,
            2i64,
            DictionaryRef::new()
        ]
    }

    #[test]
    fn literal_build_and_append() {
        let array = sample();
        assert_eq!(array.len(), 5);
        array.push(&1234i64);
        assert_eq!(array.len(), 6);
        assert_eq!(array.get_as::<i64>(5), 1234);
    }

    #[test]
    fn typed_access_checks_the_tag() {
        let array = sample();
        assert_eq!(array.get_as::<String>(0), "hi");
        assert_eq!(array.get_safe::<i64>(0), None);
        assert_eq!(array.get_safe::<String>(0), Some(String::from("hi")));
        assert_eq!(array.get_safe::<i64>(2), Some(1));
    }

    #[test]
    #[should_panic(expected = "expected array[0] to be of type INT64 but got STRING")]
    fn typed_mismatch_is_fatal() {
        let _ = sample().get_as::<i64>(0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn untyped_out_of_range_is_forwarded_to_the_runtime() {
        let _ = ArrayRef::new().get(0);
    }

    #[test]
    fn typed_and_optional_writes() {
        let array = sample();
        array.set_as(2, &77i64);
        assert_eq!(array.get_as::<i64>(2), 77);

        array.set_opt::<i64>(2, None);
        assert_eq!(array.get(2).tag(), TypeTag::Null);
        array.set_opt(2, Some(&5i64));
        assert_eq!(array.get_as::<i64>(2), 5);
    }

    #[test]
    fn enumeration_is_exhaustive_and_ordered() {
        let array = ipcv_array![0i64, 1i64, 2i64, 3i64, 4i64];
        let mut seen = Vec::new();
        array.for_each(|value| seen.push(value.int64_value()));
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn failing_enumeration_stops_at_the_first_error() {
        let array = ipcv_array![0i64, 1i64, 2i64, 3i64, 4i64];
        let mut visited = Vec::new();
        let result = array.try_for_each(|value| {
            let v = value.int64_value();
            visited.push(v);
            if v == 2 {
                Err(format!("element {v} rejected"))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(String::from("element 2 rejected")));
        assert_eq!(visited, vec![0, 1, 2]);
    }

    #[test]
    fn iteration_runs_both_directions() {
        let array = ipcv_array![1i64, 2i64, 3i64];
        let forward: Vec<i64> = array.iter().map(|v| v.int64_value()).collect();
        assert_eq!(forward, vec![1, 2, 3]);

        let backward: Vec<i64> = array.iter().rev().map(|v| v.int64_value()).collect();
        assert_eq!(backward, vec![3, 2, 1]);

        assert_eq!(array.iter().len(), 3);
    }

    #[test]
    fn collects_from_raw_handles() {
        let array: ArrayRef = vec![ObjectRef::int64(1), ObjectRef::string("x")]
            .into_iter()
            .collect();
        assert_eq!(array.len(), 2);
        assert_eq!(array.to_vec().len(), 2);
    }
}
