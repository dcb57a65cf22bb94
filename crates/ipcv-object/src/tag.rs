// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Runtime type tags.

use std::fmt;

/// The closed set of kinds a handle can carry.
///
/// The transport-only kinds (`Activity`, `Connection`, `Endpoint`, `Error`,
/// `FileDescriptor`, `SharedMemory`) are never produced by this runtime's
/// value constructors, but every tag must resolve to a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Activity,
    Array,
    Bool,
    Connection,
    Data,
    Date,
    Dictionary,
    Double,
    Endpoint,
    Error,
    FileDescriptor,
    Int64,
    Null,
    SharedMemory,
    String,
    Uint64,
    Uuid,
}

impl TypeTag {
    /// Human-readable name for the tag.
    pub fn name(self) -> &'static str {
        match self {
            Self::Activity => "ACTIVITY",
            Self::Array => "ARRAY",
            Self::Bool => "BOOL",
            Self::Connection => "CONNECTION",
            Self::Data => "DATA",
            Self::Date => "DATE",
            Self::Dictionary => "DICTIONARY",
            Self::Double => "DOUBLE",
            Self::Endpoint => "ENDPOINT",
            Self::Error => "ERROR",
            Self::FileDescriptor => "FILE_DESCRIPTOR",
            Self::Int64 => "INT64",
            Self::Null => "NULL",
            Self::SharedMemory => "SHARED_MEMORY",
            Self::String => "STRING",
            Self::Uint64 => "UINT64",
            Self::Uuid => "UUID",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
