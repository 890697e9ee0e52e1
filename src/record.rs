//! Record registration: the [`GridRecord`] trait plus the [`grid_record!`]
//! macro that implements it from a declarative field list.
//!
//! A record type declares its grid layout once (field names and coercion
//! kinds, in column order); the mapper drives everything else through the
//! trait. Nothing is discovered at runtime.

use crate::types::{FieldDescriptor, FieldValue};

/// A struct that can be mapped to and from grid rows.
///
/// Implement this with [`grid_record!`], never by hand: the macro keeps the
/// descriptor table, the getter and the setter in lockstep.
pub trait GridRecord: Default {
    /// The declared field layout, in declaration order. Declaration order is
    /// the column order on encode.
    fn fields() -> &'static [FieldDescriptor];

    /// Read one field by name. Unknown names come back as
    /// [`FieldValue::Unsupported`].
    fn field(&self, name: &str) -> FieldValue;

    /// Write one field by name. Unknown names and kind-mismatched values are
    /// ignored (the decoder only ever produces values keyed by the field's
    /// declared kind).
    fn set_field(&mut self, name: &str, value: FieldValue);
}

/// Implement [`GridRecord`] for a struct from a `field: Kind` list.
///
/// Kinds are the [`crate::types::FieldKind`] variant names: `Text` (String
/// members), `Integer` (any integer member), `Real` (float members),
/// `Boolean` (bool members) and `Unsupported` (members outside the coercion
/// table, e.g. timestamps: read-ignored, written as blank cells).
#[macro_export]
macro_rules! grid_record {
    ($ty:ty { $($field:ident : $kind:ident),+ $(,)? }) => {
        impl $crate::record::GridRecord for $ty {
            fn fields() -> &'static [$crate::types::FieldDescriptor] {
                &[
                    $(
                        $crate::types::FieldDescriptor {
                            name: stringify!($field),
                            kind: $crate::types::FieldKind::$kind,
                        },
                    )+
                ]
            }

            fn field(&self, name: &str) -> $crate::types::FieldValue {
                match name {
                    $(
                        stringify!($field) => $crate::__grid_record_get!(self, $field, $kind),
                    )+
                    _ => $crate::types::FieldValue::Unsupported,
                }
            }

            fn set_field(&mut self, name: &str, value: $crate::types::FieldValue) {
                match name {
                    $(
                        stringify!($field) => $crate::__grid_record_set!(self, $field, $kind, value),
                    )+
                    _ => {}
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __grid_record_get {
    ($rec:expr, $field:ident, Text) => {
        $crate::types::FieldValue::Text($rec.$field.clone())
    };
    ($rec:expr, $field:ident, Integer) => {
        $crate::types::FieldValue::Integer($rec.$field as i64)
    };
    ($rec:expr, $field:ident, Real) => {
        $crate::types::FieldValue::Real($rec.$field as f64)
    };
    ($rec:expr, $field:ident, Boolean) => {
        $crate::types::FieldValue::Boolean($rec.$field)
    };
    ($rec:expr, $field:ident, Unsupported) => {
        $crate::types::FieldValue::Unsupported
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __grid_record_set {
    ($rec:expr, $field:ident, Text, $value:expr) => {
        if let $crate::types::FieldValue::Text(v) = $value {
            $rec.$field = v;
        }
    };
    ($rec:expr, $field:ident, Integer, $value:expr) => {
        if let $crate::types::FieldValue::Integer(v) = $value {
            $rec.$field = v as _;
        }
    };
    ($rec:expr, $field:ident, Real, $value:expr) => {
        if let $crate::types::FieldValue::Real(v) = $value {
            $rec.$field = v as _;
        }
    };
    ($rec:expr, $field:ident, Boolean, $value:expr) => {
        if let $crate::types::FieldValue::Boolean(v) = $value {
            $rec.$field = v;
        }
    };
    ($rec:expr, $field:ident, Unsupported, $value:expr) => {{
        let _ = $value;
    }};
}
