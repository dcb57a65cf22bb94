// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! End-to-end scenarios across the views and the conversion layer.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use ipcv_collections::{
    ipcv_array, ArrayRef, Convertible, DataRef, DictionaryRef, Holder, ObjectRef, Timestamp,
    TypeTag,
};
use uuid::Uuid;

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn array_scenario() {
    let array = ipcv_array![
        String::from("hi"),
        String::from("there"),
        1i64,
        2i64,
        DictionaryRef::new()
    ];
    array.push(&1234i64);

    assert_eq!(array.len(), 6);
    assert_eq!(array.get_safe::<i64>(0), None);
    assert_eq!(array.get_as::<String>(0), "hi");
    assert_eq!(array.get_as::<DictionaryRef>(4).len(), 0);
    assert_eq!(array, array.duplicate());
}

#[test]
fn dictionary_scenario() {
    let dict = DictionaryRef::new();
    assert!(dict.is_empty());

    dict.insert("hi", &String::new());
    dict.insert("bye", &0i64);
    dict.insert("die", &true);
    assert_eq!(dict.len(), 3);

    let keys: BTreeSet<String> = dict.keys().into_iter().collect();
    let expected: BTreeSet<String> = ["hi", "bye", "die"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(keys, expected);

    // a nested copy and a data value travel like any other handle
    dict.insert("hii", &dict.duplicate());
    dict.insert("hey", &DataRef::from_bytes(b"hi"));
    assert_eq!(dict.len(), 5);
    assert_eq!(dict.get_as::<DictionaryRef>("hii").map(|d| d.len()), Some(3));

    dict.set("die", Some(ObjectRef::null()));
    assert_eq!(dict.get_as::<bool>("die"), None);
    assert_eq!(dict.get("die").map(|v| v.tag()), Some(TypeTag::Null));
}

#[test]
fn holder_equality_and_hash_across_independent_handles() {
    let a = DictionaryRef::new();
    let b = DictionaryRef::new();
    a.insert("x", &1i64);
    b.insert("x", &1i64);

    assert_eq!(a, b);
    assert_eq!(std_hash(&a), std_hash(&b));

    let copy = a.duplicate();
    assert_eq!(copy, a);
    assert!(!copy.raw().handle_eq(a.raw()));

    copy.insert("y", &2i64);
    assert_ne!(copy, a);
    assert_eq!(a.len(), 1);
}

#[test]
fn byte_buffer_round_trip() {
    let data = DataRef::from_bytes(&[0x68, 0x69]);
    assert_eq!(data.len(), 2);
    assert_eq!(data.byte(0), 0x68);
    assert_eq!(data.byte(1), 0x69);
    assert_eq!(data.byte(2), 0);

    let raw = vec![0x68u8, 0x69].encode();
    assert_eq!(raw.tag(), TypeTag::Data);
    assert_eq!(Vec::<u8>::decode(&raw), vec![0x68, 0x69]);
}

#[test]
fn mixed_payloads_survive_a_nested_build() {
    let inner = ipcv_array![Uuid::from_bytes([3; 16]), Timestamp(1.5), 2.5f64];
    let dict = DictionaryRef::new();
    dict.insert("inner", &inner);

    let read_back: ArrayRef = dict.get_as("inner").expect("inner array");
    assert_eq!(read_back.get_as::<Uuid>(0), Uuid::from_bytes([3; 16]));
    assert_eq!(read_back.get_as::<Timestamp>(1), Timestamp(1.5));
    assert_eq!(read_back.get_as::<f64>(2), 2.5);
}

#[test]
fn wrapper_handles_are_shared_until_duplicated() {
    let array = ArrayRef::new();
    let alias = ArrayRef::from_raw(array.raw().clone()).expect("array handle");

    alias.push(&1i64);
    assert_eq!(array.len(), 1);

    let copy = array.duplicate();
    copy.push(&2i64);
    assert_eq!(array.len(), 1);
    assert_eq!(copy.len(), 2);
}

#[test]
fn failing_enumeration_never_reaches_later_elements() {
    let array = ipcv_array![10i64, 11i64, 12i64, 13i64, 14i64];
    let mut seen = Vec::new();
    let outcome: Result<(), &str> = array.try_for_each(|value| {
        seen.push(value.int64_value());
        if seen.len() == 3 {
            Err("third element rejected")
        } else {
            Ok(())
        }
    });
    assert_eq!(outcome, Err("third element rejected"));
    assert_eq!(seen, vec![10, 11, 12]);
}
