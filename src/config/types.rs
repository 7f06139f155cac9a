use serde::{Deserialize, Serialize};

use crate::complete::DEFAULT_LINE_ENV;
use crate::registry::Declared;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Declarative command namespace.
    #[serde(default)]
    pub commands: Vec<CommandDecl>,
}

/// Identity of the tool being routed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tool name, needed to install shell completion (default: "clui").
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Version printed for `--version`; empty disables the switch.
    #[serde(default = "default_app_version")]
    pub version: String,
    /// Text shown above the root help listing.
    #[serde(default)]
    pub header: String,
}

/// Shell completion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Environment variable holding the line being completed (default: "COMP_LINE").
    #[serde(default = "default_line_env")]
    pub line_env: String,
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Environment variable naming the log file; logging is off when unset.
    #[serde(default = "default_log_file_env")]
    pub file_env: String,
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// A `[[commands]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDecl {
    /// Space-separated command path (e.g., "config show").
    pub path: String,
    #[serde(default)]
    pub synopsis: String,
    /// Flag names without leading dashes.
    #[serde(default)]
    pub flags: Vec<String>,
}

impl CommandDecl {
    /// The command this entry declares.
    pub fn to_command(&self) -> Declared {
        Declared::new(self.synopsis.as_str()).with_flags(self.flags.iter().cloned())
    }
}

fn default_app_name() -> String {
    "clui".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_line_env() -> String {
    DEFAULT_LINE_ENV.to_string()
}

fn default_log_file_env() -> String {
    "CLUI_LOG".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            header: String::new(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            line_env: default_line_env(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_env: default_log_file_env(),
            filter: default_log_filter(),
        }
    }
}
