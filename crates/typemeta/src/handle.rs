// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 typemeta contributors

//! The erased type handle stored by containers.
//!
//! [`TypeMeta`] is a small `Copy` value wrapping a reference to the one
//! process-wide [`TypeMetaData`] of its type. Containers embed it to
//! remember how to construct, copy and destroy bytes they own without
//! naming the element type again. Two handles are equal iff they reference
//! the identical descriptor instance, which holds iff they were built from
//! the same type.

use crate::descriptor::TypeMetaData;
use crate::error::CapabilityError;
use crate::id::TypeIdentifier;
use std::fmt;
use std::ptr;

/// Types that own a process-wide erased descriptor.
///
/// The crate implements this for the reserved scalar set; every other type
/// opts in through [`register_value_type!`](crate::register_value_type) in
/// the crate that owns it. Trait coherence guarantees exactly one
/// registration per type across the whole program.
pub trait TypedValue: Sized + 'static {
    /// The descriptor singleton for `Self`. Every call returns the same
    /// instance.
    fn meta() -> &'static TypeMetaData;

    /// Process-unique identifier for `Self`.
    fn type_id() -> TypeIdentifier {
        Self::meta().id()
    }

    /// Printable name for `Self`.
    fn type_name() -> &'static str {
        Self::meta().name()
    }
}

static UNINITIALIZED: TypeMetaData = TypeMetaData::uninitialized_sentinel();

/// Copyable handle to a type's descriptor.
///
/// Default-constructed handles reference a distinguished uninitialized
/// sentinel (identifier [`TypeIdentifier::UNINITIALIZED`], item size 0) and
/// compare unequal to the handle of every real type.
#[derive(Clone, Copy)]
pub struct TypeMeta {
    data: &'static TypeMetaData,
}

impl TypeMeta {
    /// Handle for `T`. First use of a registered type resolves its dynamic
    /// identifier; afterwards this is a single atomic load.
    #[must_use]
    pub fn make<T: TypedValue>() -> Self {
        Self { data: T::meta() }
    }

    /// Sentinel handle that references no real type.
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self {
            data: &UNINITIALIZED,
        }
    }

    /// The type's runtime identifier.
    #[must_use]
    pub fn id(&self) -> TypeIdentifier {
        self.data.id
    }

    /// Size of one item in bytes.
    #[must_use]
    pub fn itemsize(&self) -> usize {
        self.data.itemsize()
    }

    /// Required alignment of an item.
    #[must_use]
    pub fn align(&self) -> usize {
        self.data.align()
    }

    /// Printable name of the type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.data.name
    }

    /// True for the sentinel handle.
    #[must_use]
    pub fn is_uninitialized(&self) -> bool {
        self.data.id == TypeIdentifier::UNINITIALIZED
    }

    /// True iff this handle references the descriptor of `T`.
    #[must_use]
    pub fn matches<T: TypedValue>(&self) -> bool {
        ptr::eq(self.data, T::meta())
    }

    /// True when construction is a zero-fill (no constructor call needed).
    #[must_use]
    pub fn is_trivially_constructible(&self) -> bool {
        self.data.ctor.is_none()
    }

    /// True when copying is a plain byte copy.
    #[must_use]
    pub fn is_trivially_copyable(&self) -> bool {
        self.data.copy.is_none()
    }

    /// True when items carry drop glue that [`destroy`](Self::destroy) must
    /// run.
    #[must_use]
    pub fn needs_drop(&self) -> bool {
        self.data.dtor.is_some()
    }

    /// Default-constructs `n` consecutive items at `ptr`.
    ///
    /// # Errors
    ///
    /// [`CapabilityError::NotDefaultConstructible`] when the type does not
    /// support default construction; the buffer is left untouched.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned to [`align`](Self::align), and valid
    /// for writes of `n * itemsize()` bytes; the slots must not hold live
    /// values.
    pub unsafe fn construct(&self, ptr: *mut u8, n: usize) -> Result<(), CapabilityError> {
        match self.data.ctor {
            Some(ctor) => ctor(ptr, n),
            None => {
                // trivial types default to the all-zero byte pattern
                ptr::write_bytes(ptr, 0, n * self.data.itemsize());
                Ok(())
            }
        }
    }

    /// Copy-assigns `n` items from `src` into the initialized items at
    /// `dst`.
    ///
    /// # Errors
    ///
    /// [`CapabilityError::NotCopyAssignable`] when the type does not allow
    /// assignment; both buffers are left untouched.
    ///
    /// # Safety
    ///
    /// Both pointers must be non-null, aligned to [`align`](Self::align),
    /// and valid for `n` initialized items of this type; the ranges must not
    /// overlap.
    pub unsafe fn copy(&self, src: *const u8, dst: *mut u8, n: usize) -> Result<(), CapabilityError> {
        match self.data.copy {
            Some(copy) => copy(src, dst, n),
            None => {
                ptr::copy_nonoverlapping(src, dst, n * self.data.itemsize());
                Ok(())
            }
        }
    }

    /// Destroys `n` consecutive items at `ptr`. Defined for every type;
    /// never fails.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned to [`align`](Self::align), and point
    /// at `n` initialized items of this type that are not used again.
    pub unsafe fn destroy(&self, ptr: *mut u8, n: usize) {
        if let Some(dtor) = self.data.dtor {
            dtor(ptr, n);
        }
    }
}

impl Default for TypeMeta {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl PartialEq for TypeMeta {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.data, other.data)
    }
}

impl Eq for TypeMeta {}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("name", &self.data.name)
            .field("id", &self.data.id)
            .finish()
    }
}
