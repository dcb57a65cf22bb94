// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Descriptions and dynamic symbol lookup.

use crate::object::Payload;
use crate::ObjectRef;

/// Signature of the description primitives exported through
/// [`find_describe_symbol`].
pub type DescribeFn = fn(&ObjectRef) -> String;

/// Look up a description primitive by name.
///
/// Resolvable names are `"copy_description"` and `"copy_short_description"`.
/// Callers that depend on an optional symbol probe once and cache the result.
pub fn find_describe_symbol(name: &str) -> Option<DescribeFn> {
    match name {
        "copy_description" => Some(copy_description),
        "copy_short_description" => Some(copy_short_description),
        _ => None,
    }
}

fn copy_description(obj: &ObjectRef) -> String {
    obj.describe()
}

fn copy_short_description(obj: &ObjectRef) -> String {
    obj.describe_short()
}

impl ObjectRef {
    /// Full description of the held value, recursing into containers.
    pub fn describe(&self) -> String {
        match &self.0.payload {
            Payload::Null => "<null>".to_owned(),
            Payload::Bool(v) => format!("<bool: {v}>"),
            Payload::Int64(v) => format!("<int64: {v}>"),
            Payload::Uint64(v) => format!("<uint64: {v}>"),
            Payload::Double(v) => format!("<double: {v}>"),
            Payload::Date(v) => format!("<date: {v}ns>"),
            Payload::String(s) => format!("<string: {s:?}>"),
            Payload::Uuid(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02x}")).collect();
                format!("<uuid: {hex}>")
            }
            Payload::Data(d) => format!("<data: {} bytes>", d.lock().len()),
            Payload::Array(items) => {
                let items = items.lock().clone();
                let inner: Vec<String> = items.iter().map(ObjectRef::describe).collect();
                format!("<array: [{}]>", inner.join(", "))
            }
            Payload::Dictionary(entries) => {
                let mut entries: Vec<(String, ObjectRef)> = entries
                    .lock()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                // sorted so the rendering is deterministic
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                let inner: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{k:?}: {}", v.describe()))
                    .collect();
                format!("<dictionary: {{{}}}>", inner.join(", "))
            }
        }
    }

    /// Short description: containers summarize to their counts instead of
    /// recursing.
    fn describe_short(&self) -> String {
        match &self.0.payload {
            Payload::Data(d) => format!("<data: {} bytes>", d.lock().len()),
            Payload::Array(items) => format!("<array: {} values>", items.lock().len()),
            Payload::Dictionary(entries) => {
                format!("<dictionary: {} entries>", entries.lock().len())
            }
            _ => self.describe(),
        }
    }
}
