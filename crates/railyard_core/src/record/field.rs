use crate::record::SchemaMismatch;
use std::any::{type_name, Any};
use std::fmt;

/// Name and type of one injectable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    pub name: &'static str,
    pub type_name: &'static str,
}

impl FieldMeta {
    pub fn of<T: 'static>(name: &'static str) -> Self {
        Self {
            name,
            type_name: type_name::<T>(),
        }
    }
}

/// Type-erased value on its way into a record field.
///
/// Remembers the concrete type name so a mismatch can report what was
/// actually supplied.
pub struct FieldValue {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl FieldValue {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Unwrap into the field's declared type.
    pub fn downcast<T: Any>(self, record: &'static str, field: &str) -> Result<T, SchemaMismatch> {
        let FieldValue { value, type_name: found } = self;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(SchemaMismatch::IncompatibleValue {
                record,
                field: field.to_string(),
                expected: type_name::<T>(),
                found,
            }),
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
