// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 typemeta contributors

//! Process-unique runtime type identifiers.
//!
//! A [`TypeIdentifier`] names one Rust type for the duration of one process
//! run. Identifiers for a closed set of well-known types are fixed constants
//! (see the reserved table below) so hot-path code can compare against them
//! without touching the allocator; every other type receives its identifier
//! lazily, on first use, from the dynamic allocator in [`crate::registry`].
//!
//! Identifiers are not stable across runs and must never be persisted.

use std::fmt;

/// A process-unique identifier for a Rust type.
///
/// For any two distinct types the identifiers differ; for one type, repeated
/// queries within a run return the same value. Obtain one through
/// [`crate::identifier_of`] or [`crate::TypedValue::type_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdentifier(u16);

impl TypeIdentifier {
    // Reserved identifiers, carried in lock-step with the scalar kind
    // enumeration of the storage layer. Renumbering an entry breaks every
    // subsystem that burned the constants in; append instead.
    //
    // 12, 25 and 26 are intentionally unassigned, held for the storage layer.
    pub const UINT8: Self = Self(0);
    pub const INT8: Self = Self(1);
    pub const INT16: Self = Self(2);
    pub const INT32: Self = Self(3);
    pub const INT64: Self = Self(4);
    pub const HALF: Self = Self(5);
    pub const FLOAT32: Self = Self(6);
    pub const FLOAT64: Self = Self(7);
    pub const COMPLEX_HALF: Self = Self(8);
    pub const COMPLEX32: Self = Self(9);
    pub const COMPLEX64: Self = Self(10);
    /// Sentinel for "no type"; the id reported by a default [`crate::TypeMeta`].
    pub const UNINITIALIZED: Self = Self(11);
    pub const STRING: Self = Self(13);
    pub const BOOL: Self = Self(14);
    pub const UINT16: Self = Self(15);
    pub const CHAR: Self = Self(16);
    pub const MUTEX_HANDLE: Self = Self(17);
    pub const ATOMIC_FLAG: Self = Self(18);
    pub const VEC_INT32: Self = Self(19);
    pub const VEC_INT64: Self = Self(20);
    pub const VEC_UINT64: Self = Self(21);
    pub const BOOL_PTR: Self = Self(22);
    pub const CHAR_PTR: Self = Self(23);
    pub const INT32_PTR: Self = Self(24);
    /// Top of the reserved range; dynamic allocation starts above this.
    pub const HIGHEST_RESERVED: Self = Self(27);

    pub(crate) const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The sentinel identifier carried by descriptors of no type.
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self::UNINITIALIZED
    }

    /// Raw numeric value. For diagnostics and ordered containers only; the
    /// number has no meaning beyond this process run.
    #[must_use]
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// True for identifiers inside the fixed reserved range.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        self.0 <= Self::HIGHEST_RESERVED.0
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
