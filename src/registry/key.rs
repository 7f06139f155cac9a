//! Command path normalization.

/// Canonicalize a command path: trim, collapse runs of whitespace to a single
/// space, and drop empty words.
pub fn normalize(path: &str) -> String {
    path.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The parent of a command path, or `""` for a top-level path.
pub fn parent_of(path: &str) -> String {
    let path = normalize(path);
    match path.rfind(' ') {
        Some(idx) => path[..idx].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, parent_of};

    #[test]
    fn normalize_keeps_canonical_paths() {
        assert_eq!(normalize("a"), "a");
        assert_eq!(normalize("a b"), "a b");
    }

    #[test]
    fn normalize_strips_trailing_space() {
        assert_eq!(normalize("a b "), "a b");
    }

    #[test]
    fn normalize_collapses_inner_runs() {
        assert_eq!(normalize(" a   b    x v      "), "a b x v");
    }

    #[test]
    fn normalize_blank_is_empty() {
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn parent_of_nested_and_top_level() {
        assert_eq!(parent_of("config show else"), "config show");
        assert_eq!(parent_of("config"), "");
        assert_eq!(parent_of(""), "");
        assert_eq!(parent_of(" config   show "), "config");
    }
}
