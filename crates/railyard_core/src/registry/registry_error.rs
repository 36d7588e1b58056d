use thiserror::Error;

/// Errors that can occur while registering a finished entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{kind} '{id}' is already registered")]
    DuplicateId { kind: &'static str, id: String },
}
