//! Record schema and field injection.
//!
//! Records are plain data structs whose fields are private to the module that
//! defines them. There are no public constructors or setters: a record starts
//! out blank and every field is written by name through [`inject`]. The set of
//! injectable fields is declared once with [`define_record!`](crate::define_record),
//! which also provides the runtime schema used for diagnostics.

mod field;
mod macros;
mod schema_mismatch;

pub use field::{FieldMeta, FieldValue};
pub use schema_mismatch::SchemaMismatch;

use std::any::Any;

/// A host-owned data record populated through field injection.
///
/// Implemented via `define_record!`; implementing it by hand is possible but
/// the macro keeps `fields()` and `inject_value()` in sync.
pub trait Record: Default + 'static {
    /// Human-readable record name used in errors and logs.
    const KIND: &'static str;

    /// Injectable fields in declaration order.
    fn fields() -> Vec<FieldMeta>;

    /// Write a type-erased value into the named field.
    fn inject_value(&mut self, field: &str, value: FieldValue) -> Result<(), SchemaMismatch>;

    fn has_field(name: &str) -> bool {
        Self::fields().iter().any(|meta| meta.name == name)
    }
}

/// Create a blank record. Records take no constructor arguments.
#[inline]
pub fn blank<R: Record>() -> R {
    R::default()
}

/// Write `value` into the field named `field` on `target`.
///
/// The field must exist on `R` and `V` must be exactly the field's type.
/// Later writes to the same field replace earlier ones.
pub fn inject<R: Record, V: Any>(
    target: &mut R,
    field: &str,
    value: V,
) -> Result<(), SchemaMismatch> {
    tracing::trace!(record = R::KIND, field, "inject");
    target.inject_value(field, FieldValue::new(value))
}
