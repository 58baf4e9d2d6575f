/// Substring search over the word index.
///
/// Returns at most `limit` headwords containing `query`, with prefix matches
/// ranked ahead of inner matches and each group ordered lexicographically.
/// Both the index and the query are expected to be normalized lowercase.
pub fn search(words: &[String], query: &str, limit: usize) -> Vec<String> {
    let mut matches: Vec<&str> = words
        .iter()
        .filter(|word| word.contains(query))
        .map(String::as_str)
        .collect();

    matches.sort_by(|a, b| {
        let a_prefix = a.starts_with(query);
        let b_prefix = b.starts_with(query);
        b_prefix.cmp(&a_prefix).then_with(|| a.cmp(b))
    });

    matches.into_iter().take(limit).map(str::to_string).collect()
}
