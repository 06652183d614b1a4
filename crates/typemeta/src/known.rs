// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 typemeta contributors

//! Reserved descriptor table for well-known types.
//!
//! Each entry binds a type to its fixed identifier through a `static`
//! descriptor built in const context, so hot-path code resolves these
//! without any allocation or locking. The numbering is carried in lock-step
//! with the scalar kind enumeration of the storage layer; renumbering an
//! entry is a breaking change for every subsystem that burned the constants
//! in. Slots 12, 25 and 26 stay unassigned, held for the storage layer.

use crate::descriptor::TypeMetaData;
use crate::handle::TypedValue;
use crate::id::TypeIdentifier;
use crate::ops;
use crate::scalar::{Complex32, Complex64, ComplexHalf, Half, HighestReservedTypeId};
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;

/// Nullable ownership of a mutex, storable as an erased value. Default
/// constructs empty; not copy-assignable.
pub type MutexHandle = Option<Box<Mutex<()>>>;

/// Nullable ownership of an atomic flag, storable as an erased value.
/// Default constructs empty; not copy-assignable.
pub type AtomicFlagHandle = Option<Box<AtomicBool>>;

/// `Copy` types whose all-zero byte pattern is their default value; all
/// three operation slots stay trivial.
macro_rules! reserved_trivial {
    ($($id:ident: $t:ty => $name:literal,)+) => {$(
        impl TypedValue for $t {
            fn meta() -> &'static TypeMetaData {
                static META: TypeMetaData =
                    TypeMetaData::trivial::<$t>(TypeIdentifier::$id, $name);
                &META
            }
        }
    )+};
}

/// Full value types: default construction and element-wise copy assignment.
macro_rules! reserved_object {
    ($($id:ident: $t:ty => $name:literal,)+) => {$(
        impl TypedValue for $t {
            fn meta() -> &'static TypeMetaData {
                static META: TypeMetaData = TypeMetaData::new::<$t>(
                    TypeIdentifier::$id,
                    $name,
                    ops::placement_default::<$t>,
                    ops::clone_assign::<$t>,
                );
                &META
            }
        }
    )+};
}

/// Default-constructible but not copy-assignable; copy gets the violation
/// stub.
macro_rules! reserved_move_only {
    ($($id:ident: $t:ty => $name:literal,)+) => {$(
        impl TypedValue for $t {
            fn meta() -> &'static TypeMetaData {
                static META: TypeMetaData = TypeMetaData::new::<$t>(
                    TypeIdentifier::$id,
                    $name,
                    ops::placement_default::<$t>,
                    ops::copy_unsupported::<$t>,
                );
                &META
            }
        }
    )+};
}

reserved_trivial! {
    UINT8: u8 => "u8",
    INT8: i8 => "i8",
    INT16: i16 => "i16",
    INT32: i32 => "i32",
    INT64: i64 => "i64",
    HALF: Half => "Half",
    FLOAT32: f32 => "f32",
    FLOAT64: f64 => "f64",
    COMPLEX_HALF: ComplexHalf => "ComplexHalf",
    COMPLEX32: Complex32 => "Complex32",
    COMPLEX64: Complex64 => "Complex64",
    BOOL: bool => "bool",
    UINT16: u16 => "u16",
    CHAR: char => "char",
    BOOL_PTR: *mut bool => "*mut bool",
    CHAR_PTR: *mut char => "*mut char",
    INT32_PTR: *mut i32 => "*mut i32",
    HIGHEST_RESERVED: HighestReservedTypeId => "HighestReservedTypeId",
}

reserved_object! {
    STRING: String => "String",
    VEC_INT32: Vec<i32> => "Vec<i32>",
    VEC_INT64: Vec<i64> => "Vec<i64>",
    VEC_UINT64: Vec<u64> => "Vec<u64>",
}

reserved_move_only! {
    MUTEX_HANDLE: MutexHandle => "MutexHandle",
    ATOMIC_FLAG: AtomicFlagHandle => "AtomicFlagHandle",
}
