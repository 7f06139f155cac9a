//! Completion line tokenizer.

use crate::args::is_flag;

/// A shell completion line split into words.
///
/// The first word (the program name) is dropped. When the line ends in
/// whitespace an empty word is appended, so [`last`](Self::last) is `""` while
/// a new word is being started. The final word is split on its last `=` so a
/// `--flag=value` can be completed at the value position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLine {
    /// Every word after the program name.
    all: Vec<String>,
    /// Words that are fully typed: `all` minus the one being edited.
    completed: Vec<String>,
    /// The word being edited.
    last: String,
    /// The last fully typed word.
    last_completed: String,
}

impl CompletionLine {
    pub fn parse(line: &str) -> Self {
        let parts = split_fields(line);
        let all = parts.get(1..).map(<[String]>::to_vec).unwrap_or_default();
        let completed = all[..all.len().saturating_sub(1)].to_vec();
        let last = all.last().cloned().unwrap_or_default();
        let last_completed = completed.last().cloned().unwrap_or_default();

        Self {
            all,
            completed,
            last,
            last_completed,
        }
    }

    pub fn all(&self) -> &[String] {
        &self.all
    }

    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn last_completed(&self) -> &str {
        &self.last_completed
    }

    /// Words of [`all`](Self::all) not starting with `-`.
    pub fn all_commands(&self) -> Vec<&str> {
        commands(&self.all)
    }

    /// Words of [`completed`](Self::completed) not starting with `-`.
    pub fn completed_commands(&self) -> Vec<&str> {
        commands(&self.completed)
    }

    /// The same line with its first `n` words dropped (clamped), for
    /// completing beneath an already resolved parent command. The word being
    /// edited is unchanged.
    pub fn from_index(&self, n: usize) -> Self {
        Self {
            all: self.all[n.min(self.all.len())..].to_vec(),
            completed: self.completed[n.min(self.completed.len())..].to_vec(),
            last: self.last.clone(),
            last_completed: self.last_completed.clone(),
        }
    }
}

fn commands(words: &[String]) -> Vec<&str> {
    words
        .iter()
        .map(String::as_str)
        .filter(|word| !is_flag(word))
        .collect()
}

fn split_fields(line: &str) -> Vec<String> {
    let mut parts: Vec<String> = line.split_whitespace().map(String::from).collect();
    if line.chars().last().is_some_and(char::is_whitespace) {
        parts.push(String::new());
    }

    if let Some(tail) = parts.pop() {
        match tail.rsplit_once('=') {
            Some((name, value)) => {
                parts.push(name.to_string());
                parts.push(value.to_string());
            }
            None => parts.push(tail),
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::CompletionLine;

    #[test]
    fn views_for_typical_lines() {
        let cases = [
            ("a b c", "b", "c", "b"),
            ("a b ", "b", "", "b"),
            ("", "", "", ""),
            ("a", "", "", ""),
            ("a ", "", "", ""),
            ("a -echo", "", "-echo", ""),
            ("a -echo ", "-echo", "", "-echo"),
        ];

        for (line, completed, last, last_completed) in cases {
            let parsed = CompletionLine::parse(line);
            assert_eq!(parsed.completed().join(" "), completed, "completed for {line:?}");
            assert_eq!(parsed.last(), last, "last for {line:?}");
            assert_eq!(parsed.last_completed(), last_completed, "last completed for {line:?}");
        }
    }

    #[test]
    fn trailing_space_starts_a_new_word() {
        let parsed = CompletionLine::parse("clui test foo ");
        assert_eq!(parsed.all(), ["test", "foo", ""]);
        assert_eq!(parsed.all_commands(), vec!["test", "foo", ""]);
    }

    #[test]
    fn last_word_splits_on_final_equals() {
        let parsed = CompletionLine::parse("clui run --opt=a=b");
        assert_eq!(parsed.all(), ["run", "--opt=a", "b"]);
        assert_eq!(parsed.last(), "b");

        let parsed = CompletionLine::parse("clui run --opt=");
        assert_eq!(parsed.all(), ["run", "--opt", ""]);
    }

    #[test]
    fn only_the_final_word_is_split() {
        let parsed = CompletionLine::parse("clui --a=1 run");
        assert_eq!(parsed.all(), ["--a=1", "run"]);
    }

    #[test]
    fn command_views_drop_flags() {
        let parsed = CompletionLine::parse("clui config --verbose show --fo");
        assert_eq!(parsed.all_commands(), vec!["config", "show"]);
        assert_eq!(parsed.completed_commands(), vec!["config", "show"]);
    }

    #[test]
    fn from_index_advances_and_clamps() {
        let parsed = CompletionLine::parse("clui config show ver");
        let scoped = parsed.from_index(1);
        assert_eq!(scoped.all(), ["show", "ver"]);
        assert_eq!(scoped.completed(), ["show"]);
        assert_eq!(scoped.last(), "ver");

        let clamped = parsed.from_index(10);
        assert!(clamped.all().is_empty());
        assert!(clamped.completed().is_empty());
        assert_eq!(clamped.last(), "ver");
    }
}
