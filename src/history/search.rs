use crate::models::ComparisonEntry;

/// Entries whose prompt or any response contains `query`, ignoring case.
/// An empty query matches everything. Order is preserved.
pub fn search<'a>(history: &'a [ComparisonEntry], query: &str) -> Vec<&'a ComparisonEntry> {
    if query.is_empty() {
        return history.iter().collect();
    }
    let needle = query.to_lowercase();
    history.iter().filter(|entry| entry.contains_lowercase(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Responses;

    fn history() -> Vec<ComparisonEntry> {
        vec![
            ComparisonEntry::new(
                "Summarize the abc conjecture",
                [("GPT-4o (OpenAI)", "It concerns sums of coprime integers.")].into_iter().collect::<Responses>(),
            ),
            ComparisonEntry::new(
                "Write a haiku",
                [
                    ("GPT-4o (OpenAI)", "Autumn moonlight"),
                    ("Mistral-small-latest (Mistral)", "❌ Error: Timeout: mistral request timed out"),
                ]
                .into_iter()
                .collect::<Responses>(),
            ),
            ComparisonEntry::new("Translate 'chat' to English", Responses::new()),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let history = history();
        let found = search(&history, "");
        assert_eq!(found, history.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_case_insensitive_prompt_match() {
        let history = history();
        let found = search(&history, "ABC");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].prompt, "Summarize the abc conjecture");
    }

    #[test]
    fn test_matches_any_response() {
        let history = history();
        let found = search(&history, "moonLIGHT");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].prompt, "Write a haiku");

        assert_eq!(search(&history, "timed out").len(), 1);
    }

    #[test]
    fn test_substring_not_tokens() {
        let history = history();
        assert_eq!(search(&history, "chat").len(), 1);
        assert_eq!(search(&history, "e a h").len(), 1);
        assert!(search(&history, "quantum").is_empty());
    }
}
