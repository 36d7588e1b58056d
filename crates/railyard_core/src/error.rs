use crate::builder::BuildError;
use crate::registry::RegistryError;
use thiserror::Error;

/// Failure of a combined build-and-register call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
