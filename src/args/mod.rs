//! Argument resolution for a command namespace.
//!
//! ```text
//! argv → Classify (global switches, `--`) → Resolve (command path) → Partition → Invocation
//! ```
//!
//! Each stage is a pure function over the input and a frozen registry.

mod classifier;
mod registry;
mod resolver;

pub use classifier::{classify, is_flag, partition, ClassifiedArg, ClassifyResult};
pub use registry::{global_switches, lookup, GlobalSwitch, SwitchDef, TERMINATOR};
pub use resolver::{ArgResolver, GlobalSwitches, Invocation, ResolveError};
