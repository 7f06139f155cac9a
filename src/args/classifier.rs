//! Argument classifier: raw args → global switches and resolvable tokens.

use crate::args::registry::{lookup, GlobalSwitch, TERMINATOR};

/// A classified argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedArg {
    /// Global switch, consumed here.
    Switch(GlobalSwitch),
    /// Anything else, left for command resolution.
    Token(String),
}

/// Result of classifying raw arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyResult {
    /// Classified arguments in order, up to the terminator.
    pub args: Vec<ClassifiedArg>,
    /// Number of arguments dropped at and after the `--` terminator.
    pub discarded: usize,
}

/// Classify raw args, stopping at the first `--`.
pub fn classify<S: AsRef<str>>(raw_args: &[S]) -> ClassifyResult {
    let mut args = Vec::with_capacity(raw_args.len());
    let mut discarded = 0;

    for (i, arg) in raw_args.iter().enumerate() {
        let arg = arg.as_ref();
        if arg == TERMINATOR {
            discarded = raw_args.len() - i;
            break;
        }
        match lookup(arg) {
            Some(switch) => args.push(ClassifiedArg::Switch(switch)),
            None => args.push(ClassifiedArg::Token(arg.to_string())),
        }
    }

    ClassifyResult { args, discarded }
}

/// Whether a token is flag-shaped: anything starting with `-`, a lone `-`
/// included.
pub fn is_flag(arg: &str) -> bool {
    arg.starts_with('-')
}

/// Split tokens into (positional, flag-shaped), each keeping input order.
pub fn partition(tokens: &[String]) -> (Vec<String>, Vec<String>) {
    tokens.iter().cloned().partition(|arg| !is_flag(arg))
}
