//! Global switch registry, the single source of truth for the switches every
//! tool built on this crate accepts, whatever command is being run.

/// A global boolean switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalSwitch {
    Help,
    Version,
    Debug,
    DevMode,
    NoColor,
    /// Leave nested sub-commands out of help listings.
    NoSubKeys,
    InstallCompletion,
    UninstallCompletion,
}

/// A single switch definition.
#[derive(Debug, Clone)]
pub struct SwitchDef {
    pub switch: GlobalSwitch,
    /// Every accepted spelling, matched exactly.
    pub spellings: &'static [&'static str],
    /// Human-readable description (for help text).
    pub description: &'static str,
}

/// Token that ends switch scanning. It and everything after it are dropped.
pub const TERMINATOR: &str = "--";

const GLOBAL_SWITCHES: &[SwitchDef] = &[
    SwitchDef {
        switch: GlobalSwitch::Help,
        spellings: &["-h", "-help", "--help"],
        description: "Show help",
    },
    SwitchDef {
        switch: GlobalSwitch::Version,
        spellings: &["-v", "-version", "--version"],
        description: "Show version",
    },
    SwitchDef {
        switch: GlobalSwitch::Debug,
        spellings: &["--debug"],
        description: "Enable debug output",
    },
    SwitchDef {
        switch: GlobalSwitch::DevMode,
        spellings: &["--dev-mode"],
        description: "Enable developer mode",
    },
    SwitchDef {
        switch: GlobalSwitch::NoColor,
        spellings: &["--no-color"],
        description: "Disable colored output",
    },
    SwitchDef {
        switch: GlobalSwitch::NoSubKeys,
        spellings: &["--no-sub-keys"],
        description: "Hide nested sub-commands in help",
    },
    SwitchDef {
        switch: GlobalSwitch::InstallCompletion,
        spellings: &["--autocomplete-install"],
        description: "Install shell completion",
    },
    SwitchDef {
        switch: GlobalSwitch::UninstallCompletion,
        spellings: &["--autocomplete-uninstall"],
        description: "Uninstall shell completion",
    },
];

/// The complete switch table.
pub fn global_switches() -> &'static [SwitchDef] {
    GLOBAL_SWITCHES
}

/// Find the switch spelled exactly as `arg`.
pub fn lookup(arg: &str) -> Option<GlobalSwitch> {
    GLOBAL_SWITCHES
        .iter()
        .find(|def| def.matches(arg))
        .map(|def| def.switch)
}

impl SwitchDef {
    /// Check if this definition matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        self.spellings.contains(&arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_spelling_resolves_to_its_switch() {
        for def in global_switches() {
            for spelling in def.spellings {
                assert_eq!(lookup(spelling), Some(def.switch), "{spelling}");
            }
        }
    }

    #[test]
    fn near_misses_are_not_switches() {
        assert_eq!(lookup("--h"), None);
        assert_eq!(lookup("-debug"), None);
        assert_eq!(lookup("--no-colour"), None);
        assert_eq!(lookup(TERMINATOR), None);
    }

    #[test]
    fn spellings_are_unique() {
        let mut all: Vec<&str> = global_switches()
            .iter()
            .flat_map(|def| def.spellings.iter().copied())
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
