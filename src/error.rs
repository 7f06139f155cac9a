use thiserror::Error;

use crate::args::ResolveError;
use crate::config::ConfigError;
use crate::registry::RegistryError;

/// Top-level error for the router.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("name not set")]
    MissingName,
}
