use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use clui::args::global_switches;
use clui::config::Config;
use clui::{Cli, Route};

/// Drive a command namespace declared in a config file.
#[derive(Debug, Parser)]
#[command(name = "clui", version)]
struct Args {
    /// Config file to load instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Print the invocation the arguments resolve to
    Resolve {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print what a run with the arguments would do
    Route {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print completion candidates, one per line
    Complete {
        /// Line to complete (default: the configured environment variable)
        line: Option<String>,
    },
    /// Print the registered path closest to PATH
    Suggest { path: String },
    /// Print registered paths with their synopses
    Tree {
        /// Only list paths below this one
        #[arg(default_value = "")]
        prefix: String,
        /// List immediate children only
        #[arg(long)]
        no_sub_keys: bool,
    },
    /// Print the global switches recognized before a command
    Switches,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    clui::logging::init_tracing(&config.logging);

    let mut cli = Cli::new(config);
    cli.prepare();

    match args.command {
        Action::Resolve { args } => {
            let invocation = cli.resolve(&args)?;
            println!("subcommand: {}", invocation.subcommand());
            println!("args: {}", invocation.args().join(" "));
            println!("flags: {}", invocation.flags().join(" "));
            println!("pre_flags: {}", invocation.pre_flags().join(" "));
            println!("switches: {:?}", invocation.switches());
        }
        Action::Route { args } => {
            let line = clui::complete::terminal_line(&cli.config().completion.line_env);
            print_route(cli.route(&args, line.as_deref())?);
        }
        Action::Complete { line } => {
            let candidates = match line {
                Some(line) => cli.complete(&line),
                None => cli.complete_from_env(),
            };
            for candidate in candidates.unwrap_or_default() {
                println!("{candidate}");
            }
        }
        Action::Suggest { path } => match cli.suggest(&path) {
            Some(closest) => println!("{closest}"),
            None => std::process::exit(1),
        },
        Action::Tree {
            prefix,
            no_sub_keys,
        } => {
            for (path, command) in cli.registry().children(&prefix, !no_sub_keys) {
                println!("{path:<24}{}", command.synopsis());
            }
        }
        Action::Switches => {
            for def in global_switches() {
                println!("{:<28}{}", def.spellings.join(", "), def.description);
            }
        }
    }

    Ok(())
}

fn print_route(route: Route) {
    match route {
        Route::Complete(candidates) => {
            for candidate in candidates {
                println!("{candidate}");
            }
        }
        Route::Version(version) => println!("{version}"),
        Route::Help {
            parent,
            header,
            children,
            hint,
        } => {
            if !header.is_empty() {
                println!("{header}\n");
            }
            if !parent.is_empty() {
                println!("Subcommands of {parent}:");
            }
            for entry in children {
                println!("    {:<24}{}", entry.path, entry.synopsis);
            }
            if let Some(hint) = hint {
                println!("\nDid you mean {hint:?}?");
            }
        }
        Route::CommandHelp {
            path,
            synopsis,
            flags,
            hint,
        } => {
            println!("{path}: {synopsis}");
            for flag in flags {
                println!("    --{flag}");
            }
            if let Some(hint) = hint {
                println!("\nDid you mean {hint:?}?");
            }
        }
        Route::InstallCompletion { name } => {
            println!("complete -C {name} {name}");
        }
        Route::UninstallCompletion { name } => {
            println!("complete -r {name}");
        }
        Route::Command { path, invocation } => {
            println!("run {path:?} args={:?} flags={:?}", invocation.args(), invocation.flags());
        }
    }
}
