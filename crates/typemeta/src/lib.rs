// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 typemeta contributors

//! # typemeta - runtime type registry with type-erased value operations
//!
//! Assigns every compile-time-known type a small, process-unique runtime
//! identifier and an immutable descriptor exposing the minimum operations
//! needed to manipulate values through an erased interface: construct `n`
//! items in place, copy-assign `n` items, destroy `n` items, plus size,
//! alignment and a printable name. A generic container (a tagged any-value
//! box, a tensor storage buffer) embeds the [`TypeMeta`] handle and manages
//! bytes it owns without ever naming the element type again.
//!
//! ## Quick Start
//!
//! ```
//! use typemeta::{descriptor_for, identifier_of, TypeIdentifier};
//!
//! #[derive(Default, Clone, Debug, PartialEq)]
//! struct Sample {
//!     weight: f64,
//!     tag: String,
//! }
//! typemeta::register_value_type!(Sample);
//!
//! // well-known types resolve to fixed identifiers
//! assert_eq!(identifier_of::<f64>(), TypeIdentifier::FLOAT64);
//!
//! // registered types get a dynamic identifier on first use
//! let meta = descriptor_for::<Sample>();
//! assert!(!meta.id().is_reserved());
//!
//! // manage a buffer through the erased interface
//! let layout = std::alloc::Layout::from_size_align(meta.itemsize() * 4, meta.align()).unwrap();
//! unsafe {
//!     let buf = std::alloc::alloc(layout);
//!     meta.construct(buf, 4).unwrap();
//!     meta.destroy(buf, 4);
//!     std::alloc::dealloc(buf, layout);
//! }
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TypeIdentifier`] | Process-unique small integer naming one type for one run |
//! | [`TypeMetaData`] | Immutable per-type descriptor: layout, erased ops, id, name |
//! | [`TypeMeta`] | Copyable handle to a descriptor; what containers store |
//! | [`TypedValue`] | Trait binding a type to its descriptor singleton |
//! | [`CapabilityError`] | Construct/copy invoked on a type lacking the capability |
//!
//! ## Capability model
//!
//! Not every storable type is a full value type. Construct and copy
//! operations are selected per type at compile time: a type with the
//! capability gets the real implementation, a type without it gets a stub
//! that fails at call time with a [`CapabilityError`] naming the type.
//! Destroy is defined for every type. This keeps the registry usable for
//! types that are erasable-and-destroyable only, while still failing loudly
//! instead of corrupting memory.
//!
//! ## Identifiers
//!
//! A closed low range (0-27) is reserved for well-known scalar and helper
//! types and resolves as compile-time constants; see the table in
//! [`known`]. Everything else allocates lazily, thread-safely, exactly once
//! per type, via [`register_value_type!`]. Identifiers are not stable across
//! process runs and must never be persisted.

/// Immutable per-type descriptors and the erased operation signatures.
pub mod descriptor;
/// Capability violation errors.
pub mod error;
/// The erased type handle and the [`TypedValue`] trait.
pub mod handle;
/// Process-unique runtime type identifiers.
pub mod id;
/// Reserved descriptor table for well-known types.
pub mod known;
/// Erased operation synthesis and capability probing.
pub mod ops;
/// Dynamic identifier allocation and descriptor interning.
pub mod registry;
/// Scalar helper types for the reserved table.
pub mod scalar;

#[cfg(test)]
pub(crate) mod testutil;

pub use descriptor::{PlacementNew, TypeMetaData, TypedCopy, TypedDestructor};
pub use error::CapabilityError;
pub use handle::{TypeMeta, TypedValue};
pub use id::TypeIdentifier;
pub use known::{AtomicFlagHandle, MutexHandle};
pub use registry::RegistryStats;
pub use scalar::{Complex32, Complex64, ComplexHalf, Half, HighestReservedTypeId};

/// Returns the process-unique identifier for `T`.
///
/// Stable within one run; distinct for distinct types; never persist it.
#[must_use]
pub fn identifier_of<T: TypedValue>() -> TypeIdentifier {
    T::type_id()
}

/// Returns the erased handle for `T`, usable without ever naming `T` again.
#[must_use]
pub fn descriptor_for<T: TypedValue>() -> TypeMeta {
    TypeMeta::make::<T>()
}
