// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Byte-indexed view over a binary-data handle.

use ipcv_object::{ObjectRef, TypeTag};

use crate::Holder;

/// View over a data handle as an ordered byte sequence.
///
/// Single-byte reads go through the runtime's bounded-copy accessor one byte
/// at a time; [`DataRef::with_bytes`] is the contiguous fast path for bulk
/// consumers. Out-of-range single-byte reads yield a zero byte rather than
/// panicking — deliberately asymmetric with [`ArrayRef`](crate::ArrayRef).
#[derive(Clone)]
pub struct DataRef {
    raw: ObjectRef,
}

impl Holder for DataRef {
    const TAG: TypeTag = TypeTag::Data;

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

crate::impl_holder!(DataRef);

impl DataRef {
    /// Fresh data value holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_raw_unchecked(ObjectRef::data(bytes))
    }

    /// Byte length as reported by the runtime.
    pub fn len(&self) -> usize {
        self.raw.data_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte at `index`; out of range yields `0`.
    pub fn byte(&self, index: usize) -> u8 {
        let mut scratch = [0u8; 1];
        self.raw.data_read(index, &mut scratch);
        scratch[0]
    }

    /// Bounded copy starting at `offset`; returns the number of bytes
    /// copied.
    pub fn read(&self, offset: usize, buf: &mut [u8]) -> usize {
        self.raw.data_read(offset, buf)
    }

    /// Contiguous fast path: runs `f` over the full byte slice.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        self.raw.data_with_bytes(f)
    }

    /// Copy out all bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.with_bytes(<[u8]>::to_vec)
    }

    pub fn iter(&self) -> Bytes<'_> {
        Bytes {
            data: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl From<&[u8]> for DataRef {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for DataRef {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(&bytes)
    }
}

/// Double-ended, exact-size iterator over the bytes of a [`DataRef`].
pub struct Bytes<'a> {
    data: &'a DataRef,
    front: usize,
    back: usize,
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        let byte = self.data.byte(self.front);
        self.front += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Bytes<'_> {
    fn next_back(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.data.byte(self.back))
    }
}

impl ExactSizeIterator for Bytes<'_> {}

impl<'a> IntoIterator for &'a DataRef {
    type Item = u8;
    type IntoIter = Bytes<'a>;

    fn into_iter(self) -> Bytes<'a> {
        self.iter()
    }
}
