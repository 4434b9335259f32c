// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ditto contributors

//! The composite contract: what a structured value must expose so the engine
//! can duplicate it property by property.

use crate::property::PropertyDescriptor;
use std::any::Any;
use std::fmt;

/// Accessibility of a type's self-duplication operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The operation may be invoked by the engine.
    Public,
    /// The operation is declared but not callable by the engine.
    Private,
}

/// A structured value with named, independently readable and writable
/// properties.
///
/// The trait replaces runtime reflection with a compile-time capability:
/// each type carries its own static accessor table, a way to construct a
/// fresh empty instance, and (optionally) its own duplication operation.
///
/// A `type_name` identifies exactly one accessor shape; the introspector
/// caches filtered descriptor tables under that name.
pub trait Composite: fmt::Debug {
    /// Concrete type identifier, used in error reporting and as the
    /// introspector cache key.
    fn type_name(&self) -> &'static str;

    /// A fresh empty instance from the type's zero-argument constructor, or
    /// `None` when no such constructor is available.
    fn construct(&self) -> Option<Box<dyn Composite>>;

    /// The raw accessor table. May contain ineligible entries; filtering is
    /// the introspector's job.
    fn descriptors(&self) -> &'static [PropertyDescriptor];

    /// Whether the type performs its own duplication, and with what
    /// accessibility. `None` means the engine walks properties instead.
    fn self_duplication(&self) -> Option<Access> {
        None
    }

    /// Invoke the type's own duplication operation. Only meaningful when
    /// [`Composite::self_duplication`] returns [`Access::Public`]; the result
    /// is used verbatim, without property introspection.
    fn duplicate_self(&self) -> Option<Box<dyn Composite>> {
        None
    }

    /// Downcast support for accessor functions.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support for accessor functions.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Generates a [`Composite`] implementation plus its static descriptor table
/// for a plain struct.
///
/// The struct must implement `Default` (that is its zero-argument
/// constructor) and `Debug`. Each listed field must be an `Option<T>` where
/// `T` implements [`PropertySlot`](crate::PropertySlot): the scalar types for
/// plain slots, or [`Value`](crate::Value) for structured slots (arrays,
/// sequences, maps, nested composites).
///
/// ```rust
/// use ditto::{properties, Value};
///
/// #[derive(Debug, Default)]
/// struct Waypoint {
///     label: Option<String>,
///     altitude: Option<f64>,
///     tags: Option<Value>,
/// }
///
/// properties! {
///     Waypoint {
///         "label" => label: String,
///         "altitude" => altitude: f64,
///         "tags" => tags: Value,
///     }
/// }
/// ```
#[macro_export]
macro_rules! properties {
    ($ty:ident { $($name:literal => $field:ident : $t:ty),+ $(,)? }) => {
        impl $crate::Composite for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn construct(&self) -> Option<Box<dyn $crate::Composite>> {
                Some(Box::new(<$ty as ::std::default::Default>::default()))
            }

            fn descriptors(&self) -> &'static [$crate::PropertyDescriptor] {
                static TABLE: &[$crate::PropertyDescriptor] = &[$(
                    $crate::PropertyDescriptor {
                        name: $name,
                        getter: Some({
                            fn get<'a>(
                                c: &'a dyn $crate::Composite,
                            ) -> ::std::result::Result<$crate::Slot<'a>, $crate::AccessError>
                            {
                                let this = c
                                    .as_any()
                                    .downcast_ref::<$ty>()
                                    .ok_or_else(|| $crate::AccessError::new(
                                        concat!("receiver is not a ", stringify!($ty)),
                                    ))?;
                                Ok(<$t as $crate::PropertySlot>::read(&this.$field))
                            }
                            get
                        }),
                        setter: Some({
                            fn set(
                                c: &mut dyn $crate::Composite,
                                value: $crate::Value,
                            ) -> ::std::result::Result<(), $crate::AccessError>
                            {
                                let this = c
                                    .as_any_mut()
                                    .downcast_mut::<$ty>()
                                    .ok_or_else(|| $crate::AccessError::new(
                                        concat!("receiver is not a ", stringify!($ty)),
                                    ))?;
                                <$t as $crate::PropertySlot>::write(&mut this.$field, value)
                            }
                            set
                        }),
                        read_arity: 0,
                        origin: $crate::Origin::Declared,
                    }
                ),+];
                TABLE
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
}
