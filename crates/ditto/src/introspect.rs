// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ditto contributors

//! Property introspection with a per-type descriptor cache.
//!
//! A type's accessor shape never changes, so the eligible descriptor set is
//! computed once per type name and served from a concurrent map afterwards
//! (write-once-per-type, read-many). `DashMap` shards internally, so
//! concurrent readers never contend on a global lock.

use crate::composite::Composite;
use crate::property::PropertyDescriptor;
use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

static CACHE: OnceLock<DashMap<&'static str, Arc<[PropertyDescriptor]>>> = OnceLock::new();

fn cache() -> &'static DashMap<&'static str, Arc<[PropertyDescriptor]>> {
    CACHE.get_or_init(DashMap::new)
}

/// The eligible property descriptors for `composite`'s concrete type, in
/// declaration order, cached per type name.
///
/// Eligibility follows [`PropertyDescriptor::is_eligible`]: both accessors
/// present, zero-argument read, declared by the type itself. Ineligible
/// entries are dropped here and never reach the engine.
///
/// Two threads racing on an uncached type both compute the same table; one
/// insert wins and later calls share it.
pub fn eligible_properties(composite: &dyn Composite) -> Arc<[PropertyDescriptor]> {
    let type_name = composite.type_name();
    if let Some(entry) = cache().get(type_name) {
        return entry.value().clone();
    }

    let raw = composite.descriptors();
    let eligible: Arc<[PropertyDescriptor]> = raw
        .iter()
        .filter(|d| d.is_eligible())
        .cloned()
        .collect();
    log::debug!(
        "[introspect] {}: {} of {} descriptors eligible",
        type_name,
        eligible.len(),
        raw.len()
    );
    cache().insert(type_name, eligible.clone());
    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{AccessError, Origin, Slot};
    use crate::value::Value;
    use std::any::Any;

    #[derive(Debug, Default)]
    struct Mixed {
        visible: Option<i32>,
    }

    fn get_visible(c: &dyn Composite) -> Result<Slot<'_>, AccessError> {
        let this = c
            .as_any()
            .downcast_ref::<Mixed>()
            .ok_or_else(|| AccessError::new("receiver is not a Mixed"))?;
        Ok(match this.visible {
            Some(v) => Slot::Owned(Value::from(v)),
            None => Slot::Empty,
        })
    }

    fn set_visible(c: &mut dyn Composite, value: Value) -> Result<(), AccessError> {
        let this = c
            .as_any_mut()
            .downcast_mut::<Mixed>()
            .ok_or_else(|| AccessError::new("receiver is not a Mixed"))?;
        this.visible = value.as_i32();
        Ok(())
    }

    impl Composite for Mixed {
        fn type_name(&self) -> &'static str {
            "introspect::Mixed"
        }

        fn construct(&self) -> Option<Box<dyn Composite>> {
            Some(Box::<Mixed>::default())
        }

        fn descriptors(&self) -> &'static [PropertyDescriptor] {
            static TABLE: &[PropertyDescriptor] = &[
                PropertyDescriptor::new("visible", get_visible, set_visible),
                // read accessor takes an index argument
                PropertyDescriptor::new("slot_at", get_visible, set_visible).with_read_arity(1),
                // inherited from the universal base surface
                PropertyDescriptor::new("type_tag", get_visible, set_visible).inherited(),
                PropertyDescriptor {
                    name: "read_only",
                    getter: Some(get_visible),
                    setter: None,
                    read_arity: 0,
                    origin: Origin::Declared,
                },
            ];
            TABLE
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_only_eligible_descriptors_survive() {
        let mixed = Mixed::default();
        let props = eligible_properties(&mixed);
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name, "visible");
    }

    #[test]
    fn test_cache_returns_same_table() {
        let mixed = Mixed::default();
        let first = eligible_properties(&mixed);
        let second = eligible_properties(&mixed);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
