//! Edit distance used for "did you mean" lookups.

/// Levenshtein distance between `a` and `b`, counted in chars.
///
/// Insertions, deletions and substitutions all cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

#[cfg(test)]
mod tests {
    use super::levenshtein;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(levenshtein("config show", "config show"), 0);
    }

    #[test]
    fn empty_side_costs_full_length() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abcd", ""), 4);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn classic_kitten_sitting() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn truncated_query_counts_missing_chars() {
        assert_eq!(levenshtein("test th", "test this"), 2);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
    }
}
