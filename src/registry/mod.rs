//! Command registry keyed by normalized, space-joined command paths.
//!
//! Provides exact, longest-prefix and prefix-walk lookups, closest-name
//! suggestions, and placeholder synthesis for nested namespaces.

mod command;
mod index;
mod key;

pub use command::{Command, CommandRef, Declared, Placeholder, PlaceholderFn, PLACEHOLDER_SYNOPSIS};
pub use index::{Registry, RegistryError};
pub use key::{normalize, parent_of};
