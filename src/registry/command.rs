//! Command capability set and the two built-in variants.

use std::fmt;
use std::sync::Arc;

/// What the routing layer needs to know about a command.
///
/// The registry never runs a command; it only asks for its flag names (for
/// completion) and its synopsis (for help listings).
pub trait Command: fmt::Debug + Send + Sync {
    /// Recognized flag names without leading dashes, in declaration order.
    fn flag_names(&self) -> Vec<String>;

    /// One-line summary of the command.
    fn synopsis(&self) -> &str;
}

/// Shared handle to a registered command.
pub type CommandRef = Arc<dyn Command>;

/// Builds the command that fills a gap in a nested namespace.
pub type PlaceholderFn = Box<dyn Fn(&str) -> CommandRef + Send + Sync>;

pub const PLACEHOLDER_SYNOPSIS: &str = "Selection of commands that are nested under this one.";

/// Synthetic command standing in for an unregistered parent path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    path: String,
}

impl Placeholder {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The namespace path this placeholder fills.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Factory used by [`Registry::new`](super::Registry::new).
    pub fn factory() -> PlaceholderFn {
        Box::new(|path| Arc::new(Placeholder::new(path)))
    }
}

impl Command for Placeholder {
    fn flag_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn synopsis(&self) -> &str {
        PLACEHOLDER_SYNOPSIS
    }
}

/// Leaf command described by data rather than code, e.g. a `[[commands]]`
/// entry in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declared {
    synopsis: String,
    flags: Vec<String>,
}

impl Declared {
    pub fn new(synopsis: impl Into<String>) -> Self {
        Self {
            synopsis: synopsis.into().trim().to_string(),
            flags: Vec::new(),
        }
    }

    /// Add a flag name (without dashes).
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.flags.push(name.into());
        self
    }

    /// Add several flag names, keeping their order.
    pub fn with_flags<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags.extend(names.into_iter().map(Into::into));
        self
    }
}

impl Command for Declared {
    fn flag_names(&self) -> Vec<String> {
        self.flags.clone()
    }

    fn synopsis(&self) -> &str {
        &self.synopsis
    }
}
