//! Relevance ordering of merged similar-project candidates

use priorart_sources::Candidate;
use std::collections::HashSet;

/// Words too generic to distinguish one candidate from another; they would
/// mark almost any project as relevant.
static GENERIC_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "into", "your", "using", "use", "app",
    "apps", "tool", "tools", "system", "platform", "service", "software", "project", "data",
    "code", "based", "build", "make", "want", "online", "new",
];

/// Reorder candidates so the ones textually related to the idea come first.
///
/// Builds a vocabulary of idea-specific words (length >= 3, lowercase) from
/// the raw idea text and every extracted query, minus the generic set. A
/// candidate is relevant when any vocabulary word occurs as a substring of
/// its name + description. Relevant items come first, fallback items after;
/// relative order inside each group is preserved and nothing is dropped, so
/// a broadly-matched keyword cannot silently evict an unrelated result.
pub fn filter_by_relevance(
    candidates: Vec<Candidate>,
    idea_text: &str,
    queries: &[String],
) -> Vec<Candidate> {
    let vocabulary = build_vocabulary(idea_text, queries);
    if vocabulary.is_empty() {
        return candidates;
    }

    let (mut relevant, fallback): (Vec<Candidate>, Vec<Candidate>) =
        candidates.into_iter().partition(|candidate| {
            let haystack =
                format!("{} {}", candidate.name, candidate.description).to_lowercase();
            vocabulary.iter().any(|word| haystack.contains(word))
        });
    relevant.extend(fallback);
    relevant
}

fn build_vocabulary(idea_text: &str, queries: &[String]) -> HashSet<String> {
    let generic: HashSet<&str> = GENERIC_WORDS.iter().copied().collect();
    let mut vocabulary = HashSet::new();
    let sources = std::iter::once(idea_text).chain(queries.iter().map(String::as_str));
    for text in sources {
        for word in text
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
        {
            if word.len() >= 3 && !generic.contains(word) {
                vocabulary.insert(word.to_string());
            }
        }
    }
    vocabulary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, description: &str) -> Candidate {
        Candidate {
            name: name.to_string(),
            url: String::new(),
            popularity: 0,
            updated: None,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_relevant_candidates_come_first() {
        let candidates = vec![
            candidate("popular/unrelated", "a famous window manager"),
            candidate("acme/llm-monitor", "monitoring for llm apps"),
        ];
        let queries = vec!["llm monitoring".to_string()];
        let ordered = filter_by_relevance(candidates, "monitoring llm api calls", &queries);
        assert_eq!(ordered[0].name, "acme/llm-monitor");
        assert_eq!(ordered[1].name, "popular/unrelated");
    }

    #[test]
    fn test_never_drops_or_duplicates() {
        let candidates = vec![
            candidate("a/one", "first"),
            candidate("b/two", "second"),
            candidate("c/three", "third"),
        ];
        let ordered = filter_by_relevance(
            candidates.clone(),
            "monitoring llm",
            &["llm monitoring".to_string()],
        );
        assert_eq!(ordered.len(), candidates.len());
        for original in &candidates {
            assert_eq!(ordered.iter().filter(|c| c.name == original.name).count(), 1);
        }
    }

    #[test]
    fn test_relative_order_preserved_within_groups() {
        let candidates = vec![
            candidate("x/first-fallback", "nothing shared"),
            candidate("y/llm-a", "llm helper"),
            candidate("z/second-fallback", "also nothing"),
            candidate("w/llm-b", "llm helper too"),
        ];
        let ordered =
            filter_by_relevance(candidates, "llm tracing", &["llm tracing".to_string()]);
        let names: Vec<&str> = ordered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["y/llm-a", "w/llm-b", "x/first-fallback", "z/second-fallback"]
        );
    }

    #[test]
    fn test_empty_vocabulary_returns_unchanged() {
        let candidates = vec![
            candidate("a/one", "first"),
            candidate("b/two", "second"),
        ];
        // every word is either too short or generic
        let ordered = filter_by_relevance(candidates.clone(), "an app", &["app".to_string()]);
        assert_eq!(ordered, candidates);
    }

    #[test]
    fn test_generic_words_do_not_mark_relevant() {
        let candidates = vec![
            candidate("any/project", "a tool for your data"),
            candidate("real/match", "greenhouse irrigation control"),
        ];
        let ordered = filter_by_relevance(
            candidates,
            "greenhouse irrigation tool",
            &["greenhouse irrigation".to_string()],
        );
        assert_eq!(ordered[0].name, "real/match");
    }

    #[test]
    fn test_missing_description_treated_as_empty() {
        let candidates = vec![candidate("bare/name-only", "")];
        let ordered = filter_by_relevance(
            candidates,
            "name matching",
            &["name matching".to_string()],
        );
        assert_eq!(ordered.len(), 1);
    }
}
