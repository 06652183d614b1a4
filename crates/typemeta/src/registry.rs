// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 typemeta contributors

//! Process-wide registry for dynamically identified types.
//!
//! Types outside the reserved table receive their identifier lazily, on
//! first use, from a monotonically increasing counter seeded above the
//! reserved range. The registry interns exactly one descriptor per distinct
//! type: the first caller builds and publishes it, every concurrent or later
//! caller observes the identical instance. Nothing is ever freed or reused;
//! descriptors live for the process.

use crate::descriptor::TypeMetaData;
use crate::id::TypeIdentifier;
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::OnceLock;

/// First identifier handed out by the dynamic allocator.
const FIRST_DYNAMIC_ID: u16 = TypeIdentifier::HIGHEST_RESERVED.to_u16() + 1;

/// Diagnostic snapshot of the registry.
#[derive(Debug, Clone, Copy)]
pub struct RegistryStats {
    /// Number of dynamically interned descriptors.
    pub dynamic_types: usize,
    /// Next identifier the allocator would hand out.
    pub next_id: u16,
}

struct TypeRegistry {
    next_id: AtomicU16,
    descriptors: DashMap<TypeId, &'static TypeMetaData>,
}

impl TypeRegistry {
    fn new() -> Self {
        Self {
            next_id: AtomicU16::new(FIRST_DYNAMIC_ID),
            descriptors: DashMap::new(),
        }
    }

    /// Hands out a fresh identifier strictly above everything allocated
    /// before. Panics when the 16-bit identifier space is exhausted.
    fn allocate_new_id(&self) -> TypeIdentifier {
        let raw = self.next_id.fetch_add(1, Ordering::Relaxed);
        assert!(
            raw >= FIRST_DYNAMIC_ID,
            "[TypeRegistry] dynamic type identifier space exhausted"
        );
        TypeIdentifier::from_raw(raw)
    }
}

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

fn global() -> &'static TypeRegistry {
    REGISTRY.get_or_init(TypeRegistry::new)
}

/// Interns the descriptor for the type keyed by `key`.
///
/// The first caller for a key allocates the dynamic identifier and builds
/// the descriptor inside the once-guarded map entry; all other callers for
/// the same key, concurrent or later, get the identical `'static` instance.
/// Exposed for [`register_value_type!`](crate::register_value_type); user
/// code goes through the macro.
pub fn intern(
    key: TypeId,
    build: impl FnOnce(TypeIdentifier) -> TypeMetaData,
) -> &'static TypeMetaData {
    let registry = global();
    if let Some(found) = registry.descriptors.get(&key) {
        return *found;
    }
    *registry.descriptors.entry(key).or_insert_with(|| {
        let id = registry.allocate_new_id();
        let data: &'static TypeMetaData = Box::leak(Box::new(build(id)));
        log::debug!("[TypeRegistry::intern] assigned id {} to type {}", data.id(), data.name());
        data
    })
}

/// Current allocator and interning snapshot.
#[must_use]
pub fn stats() -> RegistryStats {
    let registry = global();
    RegistryStats {
        dynamic_types: registry.descriptors.len(),
        next_id: registry.next_id.load(Ordering::Relaxed),
    }
}

/// Registers a type with the dynamic identifier allocator.
///
/// Expands to the [`TypedValue`](crate::TypedValue) impl for `$t`, so it
/// must appear in the crate that owns `$t`, exactly once. Both halves of
/// that rule are compile-time guarantees: a second registration anywhere in
/// the program is a conflicting-impl error, and registering a foreign type
/// is an orphan-rule error.
///
/// Construct and copy operations are selected at expansion time from the
/// type's actual capabilities; a type that is neither default-constructible
/// nor copy-assignable still registers fine and fails, with a
/// [`CapabilityError`](crate::CapabilityError) naming it, only when the
/// missing operation is invoked.
///
/// # Example
///
/// ```
/// #[derive(Default, Clone, PartialEq, Debug)]
/// struct Sample {
///     weight: f64,
///     tag: String,
/// }
/// typemeta::register_value_type!(Sample);
///
/// let meta = typemeta::descriptor_for::<Sample>();
/// assert_eq!(meta.name(), "Sample");
/// assert!(!meta.id().is_reserved());
/// ```
#[macro_export]
macro_rules! register_value_type {
    ($t:ty) => {
        impl $crate::TypedValue for $t {
            fn meta() -> &'static $crate::TypeMetaData {
                static META: ::std::sync::OnceLock<&'static $crate::TypeMetaData> =
                    ::std::sync::OnceLock::new();
                *META.get_or_init(|| {
                    #[allow(unused_imports)]
                    use $crate::ops::{
                        ProbeConstruct as _, ProbeConstructFallback as _, ProbeCopy as _,
                        ProbeCopyFallback as _,
                    };
                    let probe = $crate::ops::CapabilityProbe::<$t>::new();
                    $crate::registry::intern(::core::any::TypeId::of::<$t>(), |id| {
                        $crate::TypeMetaData::new::<$t>(
                            id,
                            ::core::stringify!($t),
                            (&&probe).construct_fn(),
                            (&&probe).copy_fn(),
                        )
                    })
                })
            }
        }
    };
}

#[cfg(test)]
mod tests;
