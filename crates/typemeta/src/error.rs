// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 typemeta contributors

//! Capability violation errors for erased operations.
//!
//! The erased call surface cannot reject an unsupported operation before
//! dispatch, so violations are detected at call time and surfaced through
//! [`CapabilityError`].

use std::fmt;

/// An erased operation was invoked for a type that does not support it.
///
/// Always carries the offending type's name. Not retryable; the call site
/// assumed a capability the stored type does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityError {
    /// `construct` was called for a type without default construction.
    NotDefaultConstructible {
        /// Name of the offending type.
        type_name: &'static str,
    },
    /// `copy` was called for a type without copy assignment.
    NotCopyAssignable {
        /// Name of the offending type.
        type_name: &'static str,
    },
}

impl CapabilityError {
    /// Name of the type that violated the capability.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::NotDefaultConstructible { type_name } | Self::NotCopyAssignable { type_name } => {
                type_name
            }
        }
    }
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDefaultConstructible { type_name } => {
                write!(f, "type {} is not default-constructible", type_name)
            }
            Self::NotCopyAssignable { type_name } => {
                write!(f, "type {} does not allow assignment", type_name)
            }
        }
    }
}

impl std::error::Error for CapabilityError {}
