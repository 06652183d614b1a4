// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 typemeta contributors

//! Shared fixtures for unit tests.

use crate::TypeMeta;
use std::alloc::{alloc, dealloc, Layout};
use std::sync::atomic::{AtomicIsize, Ordering};

/// Live-instance counter used by drop-tracking test types.
pub(crate) static TRACKED_LIVE: AtomicIsize = AtomicIsize::new(0);

/// Counts constructions and drops so tests can assert leak-freedom.
#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) payload: u64,
}

impl Default for Tracked {
    fn default() -> Self {
        TRACKED_LIVE.fetch_add(1, Ordering::SeqCst);
        Self { payload: 0 }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        TRACKED_LIVE.fetch_add(1, Ordering::SeqCst);
        Self {
            payload: self.payload,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // assignment keeps the live count unchanged
        self.payload = source.payload;
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        TRACKED_LIVE.fetch_sub(1, Ordering::SeqCst);
    }
}

crate::register_value_type!(Tracked);

/// Heap buffer sized and aligned for `n` items of a handle's type.
pub(crate) struct RawSlots {
    ptr: *mut u8,
    layout: Layout,
}

impl RawSlots {
    /// Allocates room for `n > 0` items described by `meta`.
    pub(crate) fn for_meta(meta: &TypeMeta, n: usize) -> Self {
        assert!(n > 0, "RawSlots requires at least one slot");
        let size = meta.itemsize().max(1) * n;
        let layout = Layout::from_size_align(size, meta.align()).expect("valid test layout");
        let ptr = unsafe { alloc(layout) };
        assert!(!ptr.is_null(), "test allocation failed");
        Self { ptr, layout }
    }

    pub(crate) fn as_mut_ptr(&self) -> *mut u8 {
        self.ptr
    }
}

impl Drop for RawSlots {
    fn drop(&mut self) {
        unsafe { dealloc(self.ptr, self.layout) };
    }
}
