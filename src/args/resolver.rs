//! Resolver: classified args + registry → resolved invocation.

use regex::Regex;
use thiserror::Error;

use crate::args::classifier::{classify, is_flag, partition, ClassifiedArg};
use crate::args::registry::GlobalSwitch;
use crate::registry::Registry;

/// Errors that stop resolution before any command is looked up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("both autocomplete flags can not be used at the same time")]
    ConflictingCompletionSwitches,
}

/// Global switches seen anywhere before the terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalSwitches {
    pub help: bool,
    pub version: bool,
    pub debug: bool,
    pub dev_mode: bool,
    pub no_color: bool,
    pub no_sub_keys: bool,
    pub install_completion: bool,
    pub uninstall_completion: bool,
}

impl GlobalSwitches {
    fn set(&mut self, switch: GlobalSwitch) {
        match switch {
            GlobalSwitch::Help => self.help = true,
            GlobalSwitch::Version => self.version = true,
            GlobalSwitch::Debug => self.debug = true,
            GlobalSwitch::DevMode => self.dev_mode = true,
            GlobalSwitch::NoColor => self.no_color = true,
            GlobalSwitch::NoSubKeys => self.no_sub_keys = true,
            GlobalSwitch::InstallCompletion => self.install_completion = true,
            GlobalSwitch::UninstallCompletion => self.uninstall_completion = true,
        }
    }
}

/// The command an argument vector names, plus its partitioned arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    subcommand: String,
    args: Vec<String>,
    flags: Vec<String>,
    pre_flags: Vec<String>,
    switches: GlobalSwitches,
}

impl Invocation {
    /// Resolved command path, empty when no command word was found.
    pub fn subcommand(&self) -> &str {
        &self.subcommand
    }

    /// Positional arguments after the command path.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Flag-shaped arguments after the command path.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Flag-shaped tokens seen before the command path.
    pub fn pre_flags(&self) -> &[String] {
        &self.pre_flags
    }

    pub fn switches(&self) -> GlobalSwitches {
        self.switches
    }
}

/// Resolves argument vectors against a frozen registry.
#[derive(Debug, Clone, Copy)]
pub struct ArgResolver<'a> {
    registry: &'a Registry,
}

impl<'a> ArgResolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolve the process arguments (program name excluded).
    pub fn process<S: AsRef<str>>(&self, raw_args: &[S]) -> Result<Invocation, ResolveError> {
        let classified = classify(raw_args);
        if classified.discarded > 0 {
            tracing::debug!(
                discarded = classified.discarded,
                "Stopped scanning at terminator"
            );
        }

        let mut invocation = Invocation::default();
        let mut processed = Vec::with_capacity(classified.args.len());
        for arg in classified.args {
            match arg {
                ClassifiedArg::Switch(switch) => invocation.switches.set(switch),
                ClassifiedArg::Token(token) => processed.push(token),
            }
        }

        if invocation.switches.install_completion && invocation.switches.uninstall_completion {
            return Err(ResolveError::ConflictingCompletionSwitches);
        }

        let nested = self.registry.is_nested();
        for (i, arg) in processed.iter().enumerate() {
            if arg.is_empty() {
                continue;
            }
            if is_flag(arg) {
                invocation.pre_flags.push(arg.clone());
                continue;
            }

            // First command word. In a nested namespace a word with an
            // embedded space can never start a command path.
            let mut last = i;
            if nested {
                if arg.contains(char::is_whitespace) {
                    tracing::debug!(arg = %arg, "Command word contains whitespace");
                    return Ok(invocation);
                }
                match self.nested_path(&processed[i..]) {
                    Some((path, words)) => {
                        invocation.subcommand = path;
                        last = i + words - 1;
                    }
                    None => invocation.subcommand = arg.clone(),
                }
            } else {
                invocation.subcommand = arg.clone();
            }

            let (args, flags) = partition(&processed[last + 1..]);
            invocation.args = args;
            invocation.flags = flags;
            break;
        }

        if invocation.subcommand.is_empty() && self.registry.contains("") {
            let (args, flags) = partition(&std::mem::take(&mut invocation.pre_flags));
            invocation.args.extend(args);
            invocation.flags.extend(flags);
        }

        tracing::debug!(
            subcommand = %invocation.subcommand,
            args = invocation.args.len(),
            flags = invocation.flags.len(),
            "Resolved invocation"
        );
        Ok(invocation)
    }

    /// Longest registered path spelled by the leading words of `window`,
    /// with the number of words it spans.
    fn nested_path(&self, window: &[String]) -> Option<(String, usize)> {
        let words = window
            .iter()
            .take_while(|word| !word.is_empty() && !word.contains(char::is_whitespace))
            .map(String::as_str)
            .collect::<Vec<_>>();
        let search_key = words.join(" ");

        let prefix = self.registry.longest_prefix(&search_key)?;
        if prefix.is_empty() || !ends_on_word(prefix, &search_key) {
            tracing::trace!(search_key = %search_key, prefix = %prefix, "Prefix ends mid-word");
            return None;
        }
        Some((prefix.to_string(), prefix.split(' ').count()))
    }
}

/// Whether `prefix` is followed in `search_key` by a space or the end.
fn ends_on_word(prefix: &str, search_key: &str) -> bool {
    match Regex::new(&format!("^{}( |$)", regex::escape(prefix))) {
        Ok(verify) => verify.is_match(search_key),
        Err(err) => {
            tracing::warn!(prefix = %prefix, error = %err, "Failed to build word boundary check");
            false
        }
    }
}
