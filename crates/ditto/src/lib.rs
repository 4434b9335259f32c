// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ditto contributors

//! # ditto — deep duplication for dynamic property-graph values
//!
//! Given an arbitrary structured [`Value`], ditto produces an independent
//! deep copy: mutating the copy never aliases the original. Values are
//! classified into behavioral categories (scalar, array, sequence, map,
//! self-duplicating composite, property-graph composite) and each category
//! gets its own duplication strategy, applied recursively. Unknown
//! categories are hard failures, never silent data loss.
//!
//! ## Quick Start
//!
//! ```rust
//! use ditto::{duplicate, properties, Value};
//!
//! #[derive(Debug, Default)]
//! struct SensorReading {
//!     sensor_id: Option<i32>,
//!     location: Option<String>,
//!     samples: Option<Value>,
//! }
//!
//! properties! {
//!     SensorReading {
//!         "sensor_id" => sensor_id: i32,
//!         "location" => location: String,
//!         "samples" => samples: Value,
//!     }
//! }
//!
//! fn main() -> ditto::Result<()> {
//!     let reading = SensorReading {
//!         sensor_id: Some(42),
//!         location: Some("Building A".to_string()),
//!         samples: Some(Value::from(vec![1i32, 2, 3])),
//!     };
//!
//!     let source = Value::Composite(Box::new(reading));
//!     let copy = duplicate(&source)?;
//!     assert_eq!(copy, source);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Value`] | The closed dynamic value model |
//! | [`Composite`] | Capability trait for property-graph values |
//! | [`Duplicator`] | The engine; carries the root-only ignore set |
//! | [`Category`] | Per-node behavioral classification |
//! | [`DuplicateError`] | Failure taxonomy; always aborts the whole call |
//!
//! The engine performs no logging and no I/O; the introspector emits one
//! `debug`-level line per type on first descriptor computation.

/// Behavioral categories and the per-node capability probe.
pub mod category;
/// The composite contract and the `properties!` descriptor-table generator.
pub mod composite;
/// The duplication engine.
pub mod duplicate;
/// Duplication failure taxonomy.
pub mod error;
/// Property introspection with a per-type descriptor cache.
pub mod introspect;
/// Property descriptors, accessor types, and typed slot bridging.
pub mod property;
/// The dynamic value model.
pub mod value;

pub use category::Category;
pub use composite::{Access, Composite};
pub use duplicate::{duplicate, Duplicator};
pub use error::{DuplicateError, Result};
pub use introspect::eligible_properties;
pub use property::{AccessError, Getter, Origin, PropertyDescriptor, PropertySlot, Setter, Slot};
pub use value::{MapValue, OpaqueValue, SequenceKind, SequenceValue, TypeMismatch, Value};
