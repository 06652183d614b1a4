// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 typemeta contributors

//! Erased operation synthesis.
//!
//! For a concrete type `T` this module provides the monomorphized
//! construct/copy/destroy implementations installed into a
//! [`TypeMetaData`](crate::TypeMetaData), plus the capability-violation stubs
//! used when `T` lacks default construction or copy assignment. Which
//! implementation gets installed is decided at compile time where `T` is
//! concrete (the registration macro or the reserved table); whether the call
//! is allowed is only enforced at run time, when the stub fails.

use crate::descriptor::{PlacementNew, TypedCopy, TypedDestructor};
use crate::error::CapabilityError;
use std::any;
use std::marker::PhantomData;
use std::mem;
use std::ptr;

/// Default-constructs `T` at `n` consecutive slots.
///
/// # Safety
///
/// `ptr` must be non-null, aligned for `T`, and valid for writes of
/// `n * size_of::<T>()` bytes. The slots must not hold live values (they are
/// overwritten without being dropped).
pub unsafe fn placement_default<T: Default>(ptr: *mut u8, n: usize) -> Result<(), CapabilityError> {
    let slots = ptr.cast::<T>();
    for i in 0..n {
        slots.add(i).write(T::default());
    }
    Ok(())
}

/// Element-wise copy assignment of `n` items of `T` from `src` into `dst`.
///
/// # Safety
///
/// Both pointers must be non-null, aligned for `T`, and valid for `n`
/// initialized items; the two ranges must not overlap. Destination items are
/// assigned over, not freshly constructed.
pub unsafe fn clone_assign<T: Clone>(
    src: *const u8,
    dst: *mut u8,
    n: usize,
) -> Result<(), CapabilityError> {
    let src = src.cast::<T>();
    let dst = dst.cast::<T>();
    for i in 0..n {
        (*dst.add(i)).clone_from(&*src.add(i));
    }
    Ok(())
}

/// Drops `n` consecutive items of `T` in place.
///
/// # Safety
///
/// `ptr` must be non-null, aligned for `T`, and point at `n` initialized
/// items that are not used again.
pub unsafe fn drop_in_place_slice<T>(ptr: *mut u8, n: usize) {
    let slots = ptr.cast::<T>();
    for i in 0..n {
        ptr::drop_in_place(slots.add(i));
    }
}

/// Stub installed as the construct operation of non-default-constructible
/// types. Never touches `ptr`.
///
/// # Safety
///
/// Trivially safe; the signature is `unsafe` only to match [`PlacementNew`].
pub unsafe fn construct_unsupported<T>(
    _ptr: *mut u8,
    _n: usize,
) -> Result<(), CapabilityError> {
    let type_name = any::type_name::<T>();
    log::error!("[TypeMeta::construct] type {} is not default-constructible", type_name);
    Err(CapabilityError::NotDefaultConstructible { type_name })
}

/// Stub installed as the copy operation of non-copy-assignable types. Never
/// touches its pointers.
///
/// # Safety
///
/// Trivially safe; the signature is `unsafe` only to match [`TypedCopy`].
pub unsafe fn copy_unsupported<T>(
    _src: *const u8,
    _dst: *mut u8,
    _n: usize,
) -> Result<(), CapabilityError> {
    let type_name = any::type_name::<T>();
    log::error!("[TypeMeta::copy] type {} does not allow assignment", type_name);
    Err(CapabilityError::NotCopyAssignable { type_name })
}

/// Destructor entry for `T`, elided entirely for types without drop glue.
#[must_use]
pub const fn drop_fn_of<T>() -> Option<TypedDestructor> {
    if mem::needs_drop::<T>() {
        let dtor: TypedDestructor = drop_in_place_slice::<T>;
        Some(dtor)
    } else {
        None
    }
}

/// Compile-time capability probe for a concrete type.
///
/// Probing rides on method autoref priority: [`ProbeConstruct`] is
/// implemented for `&CapabilityProbe<T>` under a `T: Default` bound and wins
/// resolution on a `&&probe` receiver whenever the bound holds;
/// [`ProbeConstructFallback`] on `CapabilityProbe<T>` catches everything
/// else and installs the failing stub. The same pair exists for copy. This
/// only resolves as intended where `T` is a concrete type, which is exactly
/// where [`register_value_type!`](crate::register_value_type) expands it.
pub struct CapabilityProbe<T>(PhantomData<T>);

impl<T> CapabilityProbe<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for CapabilityProbe<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects [`placement_default`] for default-constructible types.
pub trait ProbeConstruct {
    fn construct_fn(&self) -> PlacementNew;
}

impl<T: Default> ProbeConstruct for &CapabilityProbe<T> {
    fn construct_fn(&self) -> PlacementNew {
        placement_default::<T>
    }
}

/// Fallback: selects [`construct_unsupported`].
pub trait ProbeConstructFallback {
    fn construct_fn(&self) -> PlacementNew;
}

impl<T> ProbeConstructFallback for CapabilityProbe<T> {
    fn construct_fn(&self) -> PlacementNew {
        construct_unsupported::<T>
    }
}

/// Selects [`clone_assign`] for copy-assignable types.
pub trait ProbeCopy {
    fn copy_fn(&self) -> TypedCopy;
}

impl<T: Clone> ProbeCopy for &CapabilityProbe<T> {
    fn copy_fn(&self) -> TypedCopy {
        clone_assign::<T>
    }
}

/// Fallback: selects [`copy_unsupported`].
pub trait ProbeCopyFallback {
    fn copy_fn(&self) -> TypedCopy;
}

impl<T> ProbeCopyFallback for CapabilityProbe<T> {
    fn copy_fn(&self) -> TypedCopy {
        copy_unsupported::<T>
    }
}
