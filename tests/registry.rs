use std::collections::BTreeSet;
use std::sync::Arc;

use clui::registry::{
    normalize, parent_of, CommandRef, Declared, Registry, RegistryError, PLACEHOLDER_SYNOPSIS,
};
use quickcheck::{QuickCheck, TestResult};

fn cmd(synopsis: &str) -> CommandRef {
    Arc::new(Declared::new(synopsis))
}

fn registry_with(paths: &[&str]) -> Registry {
    let mut registry = Registry::new();
    for path in paths {
        registry.add(path, cmd(path));
    }
    registry
}

fn walk_all(registry: &Registry, prefix: &str) -> Vec<String> {
    let mut seen = Vec::new();
    registry.walk_prefix(prefix, |path, _| {
        seen.push(path.to_string());
        false
    });
    seen
}

#[test]
fn add_normalizes_paths() {
    let registry = registry_with(&[" config   show "]);
    assert!(registry.contains("config show"));
    assert!(registry.get("config  show").is_some());
    assert_eq!(registry.paths().collect::<Vec<_>>(), vec!["config show"]);
}

#[test]
fn add_overwrites_and_returns_previous() {
    let mut registry = Registry::new();
    assert!(registry.add("run", cmd("first")).is_none());

    let previous = registry.add("run ", cmd("second")).expect("replaced command");
    assert_eq!(previous.synopsis(), "first");
    assert_eq!(registry.get("run").map(|c| c.synopsis()), Some("second"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn remove_existing_and_missing() {
    let mut registry = registry_with(&["build"]);
    let removed = registry.remove("build").expect("registered");
    assert_eq!(removed.synopsis(), "build");
    assert!(registry.get("build").is_none());
    assert!(registry.is_empty());

    assert_eq!(
        registry.remove("build").unwrap_err(),
        RegistryError::NotFound {
            path: "build".to_string()
        }
    );
}

#[test]
fn get_is_exact() {
    let registry = registry_with(&["config show"]);
    assert!(registry.get("config").is_none());
    assert!(registry.get("config show else").is_none());
}

#[test]
fn longest_prefix_is_character_level() {
    let registry = registry_with(&["aaa", "aaa aaa", "aaaaaa"]);
    assert_eq!(registry.longest_prefix("aaaa"), Some("aaa"));
    assert_eq!(registry.longest_prefix("aaa aa"), Some("aaa"));
    assert_eq!(registry.longest_prefix("aaa aaa b"), Some("aaa aaa"));
    assert_eq!(registry.longest_prefix("b"), None);
}

#[test]
fn walk_prefix_visits_in_ascending_order() {
    let registry = registry_with(&["b", "a b", "a", "ab"]);
    assert_eq!(walk_all(&registry, ""), vec!["a", "a b", "ab", "b"]);
    assert_eq!(walk_all(&registry, "a"), vec!["a", "a b", "ab"]);
    assert_eq!(walk_all(&registry, "a "), vec!["a b"]);
    assert!(walk_all(&registry, "c").is_empty());
}

#[test]
fn closest_name_matches() {
    let registry = registry_with(&["test this"]);
    assert_eq!(registry.closest_name("test this"), Some("test this"));
    assert_eq!(registry.closest_name("test th"), Some("test this"));
    assert_eq!(registry.closest_name(""), None);
}

#[test]
fn closest_name_prunes_on_first_character() {
    let registry = registry_with(&["something"]);
    assert_eq!(registry.closest_name("foobar said nothing parent child"), None);
    // One edit away, but the leading character differs.
    assert_eq!(registry.closest_name("zomething"), None);
}

#[test]
fn closest_name_picks_smallest_distance() {
    let registry = registry_with(&["commit", "config", "clone"]);
    assert_eq!(registry.closest_name("confg"), Some("config"));
    assert_eq!(registry.closest_name("clon"), Some("clone"));
}

#[test]
fn materialize_fills_nested_gaps() {
    let mut registry = registry_with(&["a b"]);
    assert!(registry.get("a").is_none());

    assert_eq!(registry.materialize(), 1);
    let placeholder = registry.get("a").expect("placeholder inserted");
    assert_eq!(placeholder.synopsis(), PLACEHOLDER_SYNOPSIS);
    assert!(placeholder.flag_names().is_empty());
}

#[test]
fn materialize_fills_every_ancestor() {
    let mut registry = registry_with(&["a b c d", "a x"]);
    assert_eq!(registry.materialize(), 3);
    assert_eq!(
        registry.paths().collect::<Vec<_>>(),
        vec!["a", "a b", "a b c", "a b c d", "a x"]
    );
}

#[test]
fn materialize_keeps_registered_parents() {
    let mut registry = registry_with(&["a", "a b"]);
    assert_eq!(registry.materialize(), 0);
    assert_eq!(registry.get("a").map(|c| c.synopsis()), Some("a"));
}

#[test]
fn materialize_uses_custom_factory() {
    let shared: CommandRef = Arc::new(Declared::new("group"));
    let factory_output = shared.clone();
    let mut registry = Registry::with_placeholder(move |_| factory_output.clone());
    registry.add("a b", cmd("leaf"));

    registry.materialize();
    let parent = registry.get("a").expect("placeholder inserted");
    assert!(Arc::ptr_eq(parent, &shared));
}

#[test]
fn is_nested_tracks_multi_word_paths() {
    let mut registry = registry_with(&["a", "b"]);
    assert!(!registry.is_nested());
    registry.add("a b", cmd("nested"));
    assert!(registry.is_nested());
}

#[test]
fn children_immediate_and_all() {
    let mut registry = registry_with(&["config show", "config show all", "config edit", "run"]);
    registry.materialize();

    let immediate: Vec<&str> = registry
        .children("config", false)
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(immediate, vec!["config edit", "config show"]);

    let all: Vec<&str> = registry
        .children("config", true)
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(all, vec!["config edit", "config show", "config show all"]);

    let root: Vec<&str> = registry
        .children("", false)
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(root, vec!["config", "run"]);
}

#[test]
fn key_helpers() {
    assert_eq!(normalize(" a   b    x v      "), "a b x v");
    assert_eq!(parent_of("a b c"), "a b");
    assert_eq!(parent_of("a"), "");
}

#[test]
fn add_get_walk_round_trip() {
    fn prop(raw: Vec<String>) -> TestResult {
        let paths: BTreeSet<String> = raw.iter().map(|p| normalize(p)).collect();
        if paths.is_empty() {
            return TestResult::discard();
        }

        let mut registry = Registry::new();
        for path in &paths {
            registry.add(path, cmd(path));
        }

        let all_found = paths.iter().all(|path| {
            registry
                .get(path)
                .is_some_and(|command| command.synopsis() == path.trim())
        });
        let walked = walk_all(&registry, "");
        let walked_once = walked.len() == paths.len()
            && walked.iter().cloned().collect::<BTreeSet<_>>() == paths;

        TestResult::from_bool(all_found && walked_once)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Vec<String>) -> TestResult);
}

#[test]
fn materialize_is_idempotent() {
    fn prop(raw: Vec<String>) -> TestResult {
        if raw.is_empty() {
            return TestResult::discard();
        }

        let mut registry = Registry::new();
        for path in &raw {
            registry.add(path, cmd("leaf"));
        }

        registry.materialize();
        let once: Vec<String> = registry.paths().map(String::from).collect();
        let inserted = registry.materialize();
        let twice: Vec<String> = registry.paths().map(String::from).collect();

        TestResult::from_bool(inserted == 0 && once == twice)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Vec<String>) -> TestResult);
}
