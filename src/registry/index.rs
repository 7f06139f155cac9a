//! Sorted-map backed command index.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Bound;

use thiserror::Error;

use crate::distance::levenshtein;
use crate::registry::command::{CommandRef, Placeholder, PlaceholderFn};
use crate::registry::key::normalize;

/// Errors returned by registry mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no valid key found for '{path}'")]
    NotFound { path: String },
}

/// Commands keyed by normalized path.
///
/// Keys live in a `BTreeMap`, so every walk visits paths in ascending
/// byte-wise order and all keys sharing a prefix are contiguous.
///
/// Build the registry with [`add`](Self::add), call
/// [`materialize`](Self::materialize) once, then share it read-only.
pub struct Registry {
    index: BTreeMap<String, CommandRef>,
    placeholder: PlaceholderFn,
}

impl Registry {
    /// Empty registry whose gaps are filled with [`Placeholder`] commands.
    pub fn new() -> Self {
        Self {
            index: BTreeMap::new(),
            placeholder: Placeholder::factory(),
        }
    }

    /// Empty registry using a caller-supplied placeholder factory.
    pub fn with_placeholder<F>(factory: F) -> Self
    where
        F: Fn(&str) -> CommandRef + Send + Sync + 'static,
    {
        Self {
            index: BTreeMap::new(),
            placeholder: Box::new(factory),
        }
    }

    /// Register `command` under the normalized `path`.
    ///
    /// The last write for a path wins; the replaced command is returned.
    pub fn add(&mut self, path: &str, command: CommandRef) -> Option<CommandRef> {
        let key = normalize(path);
        tracing::trace!(path = %key, "Registering command");
        self.index.insert(key, command)
    }

    /// Remove the command registered under `path`.
    pub fn remove(&mut self, path: &str) -> Result<CommandRef, RegistryError> {
        self.index
            .remove(&normalize(path))
            .ok_or_else(|| RegistryError::NotFound {
                path: path.to_string(),
            })
    }

    /// Exact lookup.
    pub fn get(&self, path: &str) -> Option<&CommandRef> {
        self.index.get(&normalize(path))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(&normalize(path))
    }

    /// The longest stored path that is a string prefix of `path`.
    ///
    /// This is a character-level match: `"foo"` is returned for `"foobar"`.
    /// Callers that need whole words must check the boundary themselves.
    pub fn longest_prefix(&self, path: &str) -> Option<&str> {
        let key = normalize(path);
        (0..=key.len())
            .rev()
            .filter(|&end| key.is_char_boundary(end))
            .find_map(|end| self.index.get_key_value(&key[..end]))
            .map(|(stored, _)| stored.as_str())
    }

    /// Visit every stored path starting with `prefix`, in ascending order.
    ///
    /// `prefix` is used verbatim, so a trailing space restricts the walk to
    /// descendants. The walk stops early when `visit` returns `true`.
    pub fn walk_prefix<'r, F>(&'r self, prefix: &str, mut visit: F)
    where
        F: FnMut(&'r str, &'r CommandRef) -> bool,
    {
        let range = self
            .index
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded));
        for (path, command) in range {
            if !path.starts_with(prefix) {
                break;
            }
            if visit(path, command) {
                break;
            }
        }
    }

    /// The stored path with the smallest edit distance to `query`.
    ///
    /// Only paths sharing the first character of `query` are considered; on
    /// a tie the path visited first wins.
    pub fn closest_name(&self, query: &str) -> Option<&str> {
        let first = query.chars().next()?;
        let mut closest: Option<(&str, usize)> = None;
        for path in self.index.keys().filter(|p| p.starts_with(first)) {
            let distance = levenshtein(query, path);
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((path.as_str(), distance));
            }
        }
        closest.map(|(path, _)| path)
    }

    /// Fill every missing ancestor of a nested path with a placeholder.
    ///
    /// Returns the number of placeholders inserted; a second call inserts none.
    pub fn materialize(&mut self) -> usize {
        let mut missing = BTreeSet::new();
        for path in self.index.keys() {
            let mut ancestor = path.as_str();
            while let Some(idx) = ancestor.rfind(' ') {
                ancestor = &ancestor[..idx];
                if !self.index.contains_key(ancestor) {
                    missing.insert(ancestor.to_string());
                }
            }
        }

        let inserted = missing.len();
        for path in missing {
            tracing::debug!(path = %path, "Inserting placeholder command");
            let command = (self.placeholder)(&path);
            self.index.insert(path, command);
        }
        inserted
    }

    /// Whether any registered path has more than one word.
    pub fn is_nested(&self) -> bool {
        self.index.keys().any(|path| path.contains(' '))
    }

    /// Commands directly below `prefix`, or every descendant when
    /// `include_sub_keys` is set. The prefix itself is never included.
    pub fn children(&self, prefix: &str, include_sub_keys: bool) -> Vec<(&str, &CommandRef)> {
        let mut prefix = normalize(prefix);
        if !prefix.is_empty() {
            prefix.push(' ');
        }

        let mut found = Vec::new();
        self.walk_prefix(&prefix, |path, command| {
            let rest = &path[prefix.len()..];
            if !rest.is_empty() && (include_sub_keys || !rest.contains(' ')) {
                found.push((path, command));
            }
            false
        });
        found
    }

    /// Every stored path in index order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("paths", &self.index.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
