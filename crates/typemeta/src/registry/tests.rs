// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 typemeta contributors
//! Tests for the dynamic identifier allocator and descriptor interning.

use super::*;
use crate::{descriptor_for, identifier_of};
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Default, Clone)]
struct DynAlpha {
    #[allow(dead_code)]
    value: u32,
}
crate::register_value_type!(DynAlpha);

#[derive(Default, Clone)]
struct DynBeta {
    #[allow(dead_code)]
    value: u64,
}
crate::register_value_type!(DynBeta);

#[derive(Default, Clone)]
struct NamedProbe;
crate::register_value_type!(NamedProbe);

#[derive(Default, Clone)]
struct ConcurrentProbe {
    #[allow(dead_code)]
    value: String,
}
crate::register_value_type!(ConcurrentProbe);

#[derive(Default, Clone)]
struct StatsProbe;
crate::register_value_type!(StatsProbe);

#[test]
fn test_dynamic_ids_are_unique_and_stable() {
    let alpha = identifier_of::<DynAlpha>();
    let beta = identifier_of::<DynBeta>();

    assert_ne!(alpha, beta);
    assert_eq!(identifier_of::<DynAlpha>(), alpha);
    assert_eq!(identifier_of::<DynBeta>(), beta);

    // reserved types never collide with dynamic ones
    assert_ne!(alpha, identifier_of::<u8>());
    assert_ne!(beta, identifier_of::<String>());
}

#[test]
fn test_dynamic_ids_start_above_reserved_range() {
    let id = identifier_of::<DynAlpha>();
    assert!(!id.is_reserved());
    assert!(id.to_u16() > TypeIdentifier::HIGHEST_RESERVED.to_u16());
}

#[test]
fn test_registered_name_is_the_source_token() {
    assert_eq!(descriptor_for::<NamedProbe>().name(), "NamedProbe");
    assert_eq!(
        descriptor_for::<NamedProbe>().itemsize(),
        std::mem::size_of::<NamedProbe>()
    );
}

#[test]
fn test_concurrent_first_use_yields_one_descriptor() {
    const THREADS: usize = 8;

    let barrier = Arc::new(Barrier::new(THREADS));
    let mut handles = Vec::with_capacity(THREADS);
    for _ in 0..THREADS {
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let meta = descriptor_for::<ConcurrentProbe>();
            (meta, meta.id())
        }));
    }

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker thread panicked"))
        .collect();

    let (first_meta, first_id) = results[0];
    for (meta, id) in &results {
        assert_eq!(*meta, first_meta, "all callers must observe one descriptor");
        assert_eq!(*id, first_id, "all callers must observe one identifier");
    }
    assert!(!first_id.is_reserved());
}

#[test]
fn test_stats_reflect_interning() {
    let before = stats();
    let _ = descriptor_for::<StatsProbe>();
    let after = stats();

    assert!(after.dynamic_types >= 1);
    assert!(after.dynamic_types >= before.dynamic_types);
    assert!(after.next_id > TypeIdentifier::HIGHEST_RESERVED.to_u16());
    assert!(after.next_id >= before.next_id);
}
