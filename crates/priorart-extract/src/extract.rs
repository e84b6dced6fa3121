//! Three-stage search query extraction

use crate::normalize::{apply_chinese_terms, extract_compound_terms, filter_and_partition, tokenize};
use priorart_lexicon::Lexicon;
use tracing::debug;

const MIN_QUERIES: usize = 3;
const MAX_QUERIES: usize = 8;
const MAX_QUERY_WORDS: usize = 8;
const MAX_ANCHORS: usize = 2;
const MAX_CONTEXT_TOKENS: usize = 3;
const MAX_SYNONYM_QUERIES: usize = 2;
const RAW_FALLBACK_CHARS: usize = 80;

/// Suffix appended to the registry query variant; matches both code-registry
/// and package-registry search phrasing.
const REGISTRY_SUFFIX: &str = "library";

/// Extract 3-8 search query variants from idea text.
///
/// Stage A normalizes and hard-filters (CJK substitution, compound
/// extraction, stop/boilerplate removal), Stage B detects up to two intent
/// anchors, Stage C expands query templates. Total over any input: when no
/// usable token survives, the raw text truncated to ~80 characters is
/// repeated to satisfy the minimum count.
pub fn extract_keywords(lexicon: &Lexicon, idea_text: &str) -> Vec<String> {
    // Stage A: priority-ordered token list
    let priority = priority_tokens(lexicon, idea_text);
    if priority.is_empty() {
        return raw_fallback(idea_text);
    }

    // Stage B: anchors in order of first appearance; everything else is context
    let mut anchors: Vec<String> = Vec::new();
    let mut context: Vec<String> = Vec::new();
    for token in &priority {
        if lexicon.is_intent_anchor(token) {
            if anchors.len() < MAX_ANCHORS && !anchors.contains(token) {
                anchors.push(token.clone());
            }
        } else {
            context.push(token.clone());
        }
    }
    debug!(anchors = anchors.len(), context = context.len(), "anchor scan done");

    // Stage C: template expansion
    let mut queries: Vec<String> = Vec::new();
    if let Some(first_anchor) = anchors.first() {
        let primary = context
            .iter()
            .find(|t| lexicon.is_tech_keyword(t))
            .or_else(|| context.first())
            .cloned()
            .unwrap_or_default();

        push_query(&mut queries, &format!("{first_anchor} {primary}"));

        let context_head = context
            .iter()
            .take(MAX_CONTEXT_TOKENS)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        push_query(&mut queries, &format!("{first_anchor} {context_head}"));
        // Domain-first variant: for domain-noun-heavy ideas the noun is more
        // discriminative than the anchor verb
        push_query(&mut queries, &format!("{context_head} {first_anchor}"));

        push_query(
            &mut queries,
            &format!("{first_anchor} {primary} {REGISTRY_SUFFIX}"),
        );

        let mut expanded = 0;
        for synonym in lexicon.synonyms_for(first_anchor) {
            if expanded == MAX_SYNONYM_QUERIES {
                break;
            }
            let candidate = if primary.is_empty() || synonym.contains(primary.as_str()) {
                (*synonym).to_string()
            } else {
                format!("{synonym} {primary}")
            };
            if push_query(&mut queries, &candidate) {
                expanded += 1;
            }
        }

        if let Some(second_anchor) = anchors.get(1) {
            push_query(&mut queries, &format!("{first_anchor} {second_anchor} {primary}"));
            push_query(&mut queries, &format!("{second_anchor} {primary}"));
        }

        if let Some(tech) = context.iter().find(|t| lexicon.is_tech_keyword(t)) {
            push_query(&mut queries, &format!("{first_anchor} {tech}"));
        }
    } else {
        let ranked = rank_tokens(lexicon, &priority);
        for take in [5usize, 3, 2] {
            let slice = ranked.iter().take(take).cloned().collect::<Vec<_>>().join(" ");
            push_query(&mut queries, &slice);
        }
        for token in &ranked {
            if queries.len() >= MIN_QUERIES {
                break;
            }
            push_query(&mut queries, token);
        }
    }

    if queries.is_empty() {
        return raw_fallback(idea_text);
    }
    while queries.len() < MIN_QUERIES {
        let first = queries[0].clone();
        queries.push(first);
    }
    queries.truncate(MAX_QUERIES);
    debug!(count = queries.len(), "queries generated");
    queries
}

/// Stage A: compound terms, then tech tokens, then other surviving tokens,
/// deduplicated preserving first appearance. Falls back to the ASCII
/// remainder of the original text so untranslated CJK never becomes a query.
fn priority_tokens(lexicon: &Lexicon, idea_text: &str) -> Vec<String> {
    let mapped = apply_chinese_terms(lexicon, idea_text);
    let normalized = mapped.to_lowercase().replace('-', " ");
    let (compounds, remainder) = extract_compound_terms(lexicon, &normalized);
    let (tech, other) = filter_and_partition(lexicon, tokenize(&remainder));

    let mut tokens = compounds;
    tokens.extend(tech);
    tokens.extend(other);
    let tokens = dedup_preserving_order(tokens);
    if !tokens.is_empty() {
        return tokens;
    }

    let ascii: String = idea_text.chars().filter(|c| c.is_ascii()).collect();
    let ascii = ascii.to_lowercase().replace('-', " ");
    let (tech, other) = filter_and_partition(lexicon, tokenize(&ascii));
    let mut tokens = tech;
    tokens.extend(other);
    dedup_preserving_order(tokens)
}

/// No-anchor ranking: tech tokens in appearance order, then everything else
/// by descending length (specificity proxy), ties broken lexicographically.
fn rank_tokens(lexicon: &Lexicon, priority: &[String]) -> Vec<String> {
    let mut tech: Vec<String> = Vec::new();
    let mut rest: Vec<String> = Vec::new();
    for token in priority {
        if lexicon.is_tech_keyword(token) {
            tech.push(token.clone());
        } else {
            rest.push(token.clone());
        }
    }
    rest.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    tech.extend(rest);
    tech
}

/// Trim, collapse whitespace, cap the word count, and reject empty or
/// already-present queries. Returns whether the query was added.
fn push_query(queries: &mut Vec<String>, candidate: &str) -> bool {
    let words: Vec<&str> = candidate.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }
    let take = words.len().min(MAX_QUERY_WORDS);
    let normalized = words[..take].join(" ");
    if queries.contains(&normalized) {
        return false;
    }
    queries.push(normalized);
    true
}

fn raw_fallback(idea_text: &str) -> Vec<String> {
    let truncated: String = idea_text.trim().chars().take(RAW_FALLBACK_CHARS).collect();
    vec![truncated; MIN_QUERIES]
}

fn dedup_preserving_order(tokens: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokens.into_iter().filter(|t| seen.insert(t.clone())).collect()
}
