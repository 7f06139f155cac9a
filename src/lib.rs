//! Command routing for multi-command command-line tools.
//!
//! A tool registers its commands under space-separated paths (`"config show"`),
//! and this crate turns raw process arguments into the command they name:
//!
//! ```text
//! argv → Classify (global switches) → Resolve (nested path) → Partition → Invocation
//! COMP_LINE → Tokenize → Walk registry → Candidates
//! ```
//!
//! Nothing here executes commands. The [`Registry`] is built once, materialized
//! (placeholder parents are filled in), and then only read by the
//! [`ArgResolver`] and the [`AutoCompleter`].

pub mod args;
pub mod cli;
pub mod complete;
pub mod config;
pub mod distance;
mod error;
pub mod logging;
pub mod registry;

pub use args::{ArgResolver, GlobalSwitches, Invocation, ResolveError};
pub use cli::{Cli, HelpEntry, Route};
pub use complete::{AutoCompleter, CompletionLine};
pub use error::Error;
pub use registry::{Command, CommandRef, Declared, Placeholder, Registry, RegistryError};
