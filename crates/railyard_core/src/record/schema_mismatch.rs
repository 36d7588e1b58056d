use thiserror::Error;

/// A field write that does not match the record layout.
///
/// Always fatal: it means the builder and the record definition disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaMismatch {
    #[error("record '{record}' has no field named '{field}'")]
    UnknownField { record: &'static str, field: String },

    #[error("field '{record}.{field}' expects {expected} but received {found}")]
    IncompatibleValue {
        record: &'static str,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}
