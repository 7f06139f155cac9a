//! Shell completion driven by the command registry.
//!
//! The shell hands over the whole line being edited (bash and zsh put it in
//! `COMP_LINE`); candidates are either the next command word or, when the
//! word being edited starts with `-`, the flags of the command already typed.

mod line;

pub use line::CompletionLine;

use crate::args::is_flag;
use crate::registry::{Command, CommandRef, Registry};

/// Environment variable bash and zsh use for the line being completed.
pub const DEFAULT_LINE_ENV: &str = "COMP_LINE";

/// Read the line being completed from `var`, if the shell set it.
pub fn terminal_line(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

/// Predicts completions for a line against a frozen registry.
#[derive(Debug, Clone, Copy)]
pub struct AutoCompleter<'a> {
    registry: &'a Registry,
}

impl<'a> AutoCompleter<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Candidates for `line` that extend the word being edited.
    ///
    /// Returns `None` for an empty line (nothing to complete); an attempted
    /// completion may still yield no candidates.
    pub fn complete(&self, line: &str) -> Option<Vec<String>> {
        if line.is_empty() {
            return None;
        }

        let line = CompletionLine::parse(line);
        let matches: Vec<String> = self
            .predict(&line)
            .into_iter()
            .filter(|candidate| candidate.starts_with(line.last()))
            .collect();

        tracing::debug!(
            last = %line.last(),
            matches = matches.len(),
            "Completed line"
        );
        Some(matches)
    }

    /// Every candidate for the line, before filtering by the word being edited.
    pub fn predict(&self, line: &CompletionLine) -> Vec<String> {
        let prefix = line.all_commands().join(" ");
        let mut potential: Vec<(&str, &CommandRef)> = Vec::new();
        self.registry.walk_prefix(&prefix, |path, command| {
            potential.push((path, command));
            false
        });

        if !is_flag(line.last()) {
            // Complete the command name. The default command has no word.
            return potential
                .iter()
                .filter_map(|&(path, _)| path.rsplit(' ').next())
                .filter(|word| !word.is_empty())
                .map(String::from)
                .collect();
        }

        let mut options = Vec::new();
        for &(path, command) in &potential {
            if path != prefix {
                continue;
            }
            let (flags, exact) = predict_flags(command.as_ref(), line.last());
            if exact {
                return flags;
            }
            options.extend(flags);
        }
        options
    }
}

/// Flag candidates for `command`, and whether `last` named one exactly.
fn predict_flags(command: &dyn Command, last: &str) -> (Vec<String>, bool) {
    let wanted = last.trim().trim_start_matches('-');
    let names = command.flag_names();
    if let Some(name) = names.iter().find(|name| name.as_str() == wanted) {
        return (vec![format!("--{name}")], true);
    }
    (names.iter().map(|name| format!("--{name}")).collect(), false)
}
