// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ditto contributors

//! The duplication engine: recursive, category-dispatched deep copy.

use crate::composite::{Access, Composite};
use crate::error::{DuplicateError, Result};
use crate::introspect;
use crate::value::{MapValue, SequenceValue, Value};
use std::collections::HashSet;

/// Duplicate `value` with no ignored properties.
///
/// Equivalent to `Duplicator::new().duplicate(value)`.
pub fn duplicate(value: &Value) -> Result<Value> {
    Duplicator::new().duplicate(value)
}

/// The value duplicator.
///
/// Holds the caller's ignore set: property names skipped when the root of a
/// duplication call is a composite. The ignore set never applies to nested
/// composites discovered during traversal; that asymmetry is part of the
/// contract (convenience properties that mirror other properties of the same
/// object exist at the root the caller hands in, and skipping them deeper
/// would drop unrelated data).
#[derive(Debug, Default)]
pub struct Duplicator {
    ignore: HashSet<String>,
}

impl Duplicator {
    /// Duplicator with an empty ignore set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicator that skips the named properties on the root composite.
    pub fn with_ignored<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Produce a structurally independent duplicate of `value`.
    ///
    /// Total over every category except unsupported values, which fail with
    /// [`DuplicateError::Unsupported`]. Any failure at any recursion depth
    /// aborts the whole call; there is no partial result.
    ///
    /// A composite root with a non-empty ignore set is always duplicated
    /// property by property, the dedicated entry point for callers skipping
    /// convenience properties. With an empty ignore set the root goes
    /// through normal category dispatch, so a self-duplicating root
    /// duplicates itself.
    ///
    /// No cycle detection is performed: a composite that directly or
    /// indirectly contains itself recurses without termination. Callers
    /// bound input depth themselves.
    pub fn duplicate(&self, value: &Value) -> Result<Value> {
        if !self.ignore.is_empty() {
            if let Value::Composite(c) = value {
                let fresh = self.duplicate_composite(c.as_ref(), Some(&self.ignore))?;
                return Ok(Value::Composite(fresh));
            }
        }
        self.dispatch(value)
    }

    /// Category dispatch, first match wins. Recursive positions re-enter
    /// here, never through [`Duplicator::duplicate`], so the ignore set
    /// stays confined to the root.
    fn dispatch(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(self.dispatch(item)?);
                }
                Ok(Value::Array(out))
            }
            Value::Sequence(seq) => {
                let mut out = SequenceValue::new(seq.kind());
                for item in seq.iter() {
                    out.push(self.dispatch(item)?);
                }
                Ok(Value::Sequence(out))
            }
            Value::Map(map) => {
                let mut out = MapValue::new();
                for (key, val) in map.iter() {
                    let key = self.dispatch(key)?;
                    let val = self.dispatch(val)?;
                    out.insert(key, val);
                }
                Ok(Value::Map(out))
            }
            Value::Bool(v) => Ok(Value::Bool(*v)),
            Value::U8(v) => Ok(Value::U8(*v)),
            Value::I16(v) => Ok(Value::I16(*v)),
            Value::I32(v) => Ok(Value::I32(*v)),
            Value::I64(v) => Ok(Value::I64(*v)),
            Value::F32(v) => Ok(Value::F32(*v)),
            Value::F64(v) => Ok(Value::F64(*v)),
            Value::Char(v) => Ok(Value::Char(*v)),
            Value::Text(v) => Ok(Value::Text(v.clone())),
            Value::Composite(c) => match c.self_duplication() {
                Some(Access::Public) => match c.duplicate_self() {
                    Some(fresh) => Ok(Value::Composite(fresh)),
                    None => Err(DuplicateError::PropertyAccess {
                        type_name: c.type_name(),
                        property: "duplicate_self",
                        reason: "declared-public duplication operation produced nothing"
                            .to_string(),
                    }),
                },
                Some(Access::Private) => Err(DuplicateError::RestrictedDuplication {
                    type_name: c.type_name(),
                }),
                None => {
                    let fresh = self.duplicate_composite(c.as_ref(), None)?;
                    Ok(Value::Composite(fresh))
                }
            },
            Value::Opaque(o) => Err(DuplicateError::Unsupported {
                type_name: o.type_name(),
            }),
        }
    }

    /// Property-graph duplication: fresh instance of the exact concrete
    /// type, then one read-duplicate-write pass per eligible property in
    /// table order.
    ///
    /// A `Null` (or absent) read leaves the corresponding slot at its
    /// post-construction default; the setter is never invoked with `Null`.
    /// A constructor default that differs from null therefore survives into
    /// the duplicate.
    fn duplicate_composite(
        &self,
        source: &dyn Composite,
        ignore: Option<&HashSet<String>>,
    ) -> Result<Box<dyn Composite>> {
        let mut fresh = source
            .construct()
            .ok_or(DuplicateError::Construction {
                type_name: source.type_name(),
            })?;

        let props = introspect::eligible_properties(source);
        for d in props.iter() {
            if ignore.is_some_and(|names| names.contains(d.name)) {
                continue;
            }
            let (getter, setter) = match (d.getter, d.setter) {
                (Some(getter), Some(setter)) => (getter, setter),
                _ => continue,
            };
            let slot = getter(source).map_err(|e| DuplicateError::PropertyAccess {
                type_name: source.type_name(),
                property: d.name,
                reason: e.to_string(),
            })?;
            let current = match slot.value() {
                Some(current) => current,
                None => continue,
            };
            let duplicated = self.dispatch(current)?;
            setter(fresh.as_mut(), duplicated).map_err(|e| DuplicateError::PropertyAccess {
                type_name: source.type_name(),
                property: d.name,
                reason: e.to_string(),
            })?;
        }
        Ok(fresh)
    }
}
