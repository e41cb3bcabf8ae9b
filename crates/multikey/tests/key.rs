// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Behavioral tests for `MultiKey`.

use std::collections::HashMap;

use multikey::{KeyComponent, MultiKey};

#[test]
fn equal_components_in_equal_order_compare_equal() {
    let left = MultiKey::new("config", 42_u32);
    let right = MultiKey::new("config", 42_u32);

    assert_eq!(left, right);
    assert_eq!(left.hash_value(), right.hash_value());
}

#[test]
fn component_order_is_significant() {
    assert_ne!(MultiKey::new("a", "b"), MultiKey::new("b", "a"));
}

#[test]
fn component_count_is_significant() {
    let two = MultiKey::new("a", "b");
    let three = MultiKey::from_components(vec![Box::new("a") as Box<dyn KeyComponent>, Box::new("b"), Box::new("c")])
        .expect("three components are enough");

    assert_ne!(two, three);
}

#[test]
fn components_of_different_types_never_compare_equal() {
    assert_ne!(MultiKey::new(1_u32, 2_u32), MultiKey::new(1_i32, 2_i32));
}

#[test]
fn too_few_components_are_rejected() {
    let error = MultiKey::from_components(vec![Box::new(7_u8) as Box<dyn KeyComponent>])
        .expect_err("one component is not a multi key");

    assert!(format!("{error}").contains("at least two"));
}

#[test]
fn empty_component_list_is_rejected() {
    let error = MultiKey::from_components(Vec::new()).expect_err("no components is not a multi key");

    assert!(format!("{error}").contains("got 0"));
}

#[test]
fn components_are_accessible_by_index() {
    let key = MultiKey::new("track".to_string(), 7_u32);

    assert_eq!(key.len(), 2);
    assert!(!key.is_empty());

    let first = key.component(0).expect("index 0 exists");
    assert_eq!(first.downcast_ref::<String>().map(String::as_str), Some("track"));

    let second = key.component(1).expect("index 1 exists");
    assert_eq!(second.downcast_ref::<u32>(), Some(&7));
}

#[test]
fn out_of_range_index_is_reported() {
    let key = MultiKey::new("a", "b");

    let error = key.component(2).map(|_| ()).expect_err("index 2 is out of range");

    assert!(format!("{error}").contains("out of range"));
}

#[test]
fn variable_arity_keys_compare_element_wise() {
    let build = || {
        MultiKey::from_components(vec![
            Box::new("report") as Box<dyn KeyComponent>,
            Box::new(2026_u16),
            Box::new(true),
        ])
        .expect("three components are enough")
    };

    assert_eq!(build(), build());
    assert_eq!(build().len(), 3);
}

#[test]
fn multi_keys_serve_as_map_keys() {
    let mut map = HashMap::new();
    map.insert(MultiKey::new("left", 1_u8), "first");
    map.insert(MultiKey::new("left", 2_u8), "second");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&MultiKey::new("left", 1_u8)), Some(&"first"));
    assert_eq!(map.get(&MultiKey::new("left", 3_u8)), None);
}
