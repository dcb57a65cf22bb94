// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Binary data accessors.
//!
//! Reads are bounded copies: requests past the end copy nothing rather than
//! failing. Using a non-data handle here is a contract violation and panics.

use parking_lot::Mutex;

use crate::object::Payload;
use crate::ObjectRef;

impl ObjectRef {
    fn data_bytes(&self) -> &Mutex<Vec<u8>> {
        match &self.0.payload {
            Payload::Data(bytes) => bytes,
            _ => panic!("{} object used as data", self.tag()),
        }
    }

    /// Byte length.
    pub fn data_len(&self) -> usize {
        self.data_bytes().lock().len()
    }

    /// Bounded copy starting at `offset`; returns the number of bytes
    /// copied, which is zero when `offset` is past the end.
    pub fn data_read(&self, offset: usize, buf: &mut [u8]) -> usize {
        let bytes = self.data_bytes().lock();
        if offset >= bytes.len() {
            return 0;
        }
        let n = buf.len().min(bytes.len() - offset);
        buf[..n].copy_from_slice(&bytes[offset..offset + n]);
        n
    }

    /// Contiguous fast path: runs `f` over the full byte slice.
    pub fn data_with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.data_bytes().lock())
    }
}
