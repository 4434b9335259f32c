// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ditto contributors

//! Duplication failure taxonomy.

use std::fmt;

/// Errors raised while duplicating a value graph.
///
/// Every variant aborts the whole top-level call: there is no retry, no
/// per-property recovery, and no partial duplicate. The variant describes the
/// first failure encountered in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicateError {
    /// The concrete composite type has no accessible zero-argument
    /// constructor.
    Construction { type_name: &'static str },
    /// The type declares its own duplication operation but the engine may
    /// not call it.
    RestrictedDuplication { type_name: &'static str },
    /// The value's runtime category has no duplication strategy.
    Unsupported { type_name: &'static str },
    /// An eligible accessor (or a declared-public self-duplication
    /// operation) failed when invoked.
    PropertyAccess {
        type_name: &'static str,
        property: &'static str,
        reason: String,
    },
}

impl fmt::Display for DuplicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction { type_name } => {
                write!(
                    f,
                    "cannot duplicate a {} value: no accessible zero-argument constructor",
                    type_name
                )
            }
            Self::RestrictedDuplication { type_name } => {
                write!(
                    f,
                    "cannot duplicate a {} value: its duplication operation is not public",
                    type_name
                )
            }
            Self::Unsupported { type_name } => {
                write!(f, "cannot duplicate a {} value: unsupported category", type_name)
            }
            Self::PropertyAccess {
                type_name,
                property,
                reason,
            } => {
                write!(f, "accessor for {}.{} failed: {}", type_name, property, reason)
            }
        }
    }
}

impl std::error::Error for DuplicateError {}

impl DuplicateError {
    /// The concrete type the failure was observed on.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Construction { type_name }
            | Self::RestrictedDuplication { type_name }
            | Self::Unsupported { type_name }
            | Self::PropertyAccess { type_name, .. } => *type_name,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DuplicateError>;
