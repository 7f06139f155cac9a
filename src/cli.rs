//! Top-level router: decides what a run of the tool should do.
//!
//! [`Cli::route`] follows the usual decision order of a multi-command tool
//! (completion, version, help, completion install, command) and reports the
//! outcome as a [`Route`]. Rendering and running are left to the caller.

use std::sync::Arc;

use crate::args::{ArgResolver, Invocation};
use crate::complete::{terminal_line, AutoCompleter};
use crate::config::Config;
use crate::error::Error;
use crate::registry::{normalize, parent_of, CommandRef, Registry};

/// One line of a help listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub path: String,
    pub synopsis: String,
}

/// What a run of the tool resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The shell asked for completions.
    Complete(Vec<String>),
    /// Print the version.
    Version(String),
    /// List the commands below `parent`; nested ones are left out when
    /// `--no-sub-keys` was given.
    Help {
        parent: String,
        /// Set only for the root listing.
        header: String,
        children: Vec<HelpEntry>,
        /// Closest registered path to the unknown command, if any.
        hint: Option<String>,
    },
    /// Describe a single resolved command.
    CommandHelp {
        path: String,
        synopsis: String,
        flags: Vec<String>,
        hint: Option<String>,
    },
    InstallCompletion { name: String },
    UninstallCompletion { name: String },
    /// Run the command registered at `path`.
    Command { path: String, invocation: Invocation },
}

/// A tool's command namespace plus its configuration.
#[derive(Debug)]
pub struct Cli {
    config: Config,
    registry: Registry,
}

impl Cli {
    /// Build the namespace from the `[[commands]]` entries of `config`.
    pub fn new(config: Config) -> Self {
        let mut registry = Registry::new();
        for decl in &config.commands {
            registry.add(&decl.path, Arc::new(decl.to_command()));
        }
        tracing::debug!(
            name = %config.app.name,
            commands = registry.len(),
            "Built command registry"
        );
        Self { config, registry }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register `command` under `path`, returning any command it replaces.
    pub fn add(&mut self, path: &str, command: CommandRef) -> Option<CommandRef> {
        self.registry.add(path, command)
    }

    pub fn remove(&mut self, path: &str) -> Result<CommandRef, Error> {
        Ok(self.registry.remove(path)?)
    }

    /// Fill gaps in the namespace with placeholders. Call once after the
    /// last [`add`](Self::add) and before routing.
    pub fn prepare(&mut self) -> usize {
        self.registry.materialize()
    }

    /// Resolve process arguments (program name excluded).
    pub fn resolve<S: AsRef<str>>(&self, args: &[S]) -> Result<Invocation, Error> {
        Ok(ArgResolver::new(&self.registry).process(args)?)
    }

    /// Completion candidates for `line`, `None` when nothing was attempted.
    pub fn complete(&self, line: &str) -> Option<Vec<String>> {
        AutoCompleter::new(&self.registry).complete(line)
    }

    /// Completion candidates for the line in the configured environment
    /// variable, `None` when it is unset or empty.
    pub fn complete_from_env(&self) -> Option<Vec<String>> {
        let line = terminal_line(&self.config.completion.line_env)?;
        self.complete(&line)
    }

    /// The registered path closest to `path`, unless it is `path` itself.
    pub fn suggest(&self, path: &str) -> Option<String> {
        let closest = self.registry.closest_name(path)?;
        (closest != normalize(path)).then(|| closest.to_string())
    }

    /// Decide what a run with `args` should do.
    ///
    /// `completion_line` is the line the shell asked to complete, if any
    /// (see [`complete_from_env`](Self::complete_from_env) for the usual
    /// source).
    pub fn route<S: AsRef<str>>(
        &self,
        args: &[S],
        completion_line: Option<&str>,
    ) -> Result<Route, Error> {
        let invocation = self.resolve(args)?;
        let switches = invocation.switches();

        if let Some(candidates) = completion_line.and_then(|line| self.complete(line)) {
            return Ok(Route::Complete(candidates));
        }

        if switches.version && !self.config.app.version.is_empty() {
            return Ok(Route::Version(self.config.app.version.clone()));
        }

        let subcommand = invocation.subcommand();
        if switches.help && subcommand.is_empty() {
            return Ok(self.help("", subcommand, !switches.no_sub_keys));
        }

        let name = &self.config.app.name;
        if name.is_empty() {
            return Err(Error::MissingName);
        }
        if switches.install_completion {
            return Ok(Route::InstallCompletion { name: name.clone() });
        }
        if switches.uninstall_completion {
            return Ok(Route::UninstallCompletion { name: name.clone() });
        }

        let Some(command) = self.registry.get(subcommand) else {
            tracing::debug!(subcommand = %subcommand, "Unknown command");
            return Ok(self.help(
                &parent_of(subcommand),
                subcommand,
                !switches.no_sub_keys,
            ));
        };

        if switches.help || !invocation.pre_flags().is_empty() {
            return Ok(Route::CommandHelp {
                path: subcommand.to_string(),
                synopsis: command.synopsis().to_string(),
                flags: command.flag_names(),
                hint: self.suggest(subcommand),
            });
        }

        Ok(Route::Command {
            path: subcommand.to_string(),
            invocation,
        })
    }

    fn help(&self, parent: &str, subcommand: &str, include_sub_keys: bool) -> Route {
        let children = self
            .registry
            .children(parent, include_sub_keys)
            .into_iter()
            .map(|(path, command)| HelpEntry {
                path: path.to_string(),
                synopsis: command.synopsis().to_string(),
            })
            .collect();

        let header = if subcommand.is_empty() {
            self.config.app.header.clone()
        } else {
            String::new()
        };

        Route::Help {
            parent: parent.to_string(),
            header,
            children,
            hint: self.suggest(subcommand),
        }
    }
}
