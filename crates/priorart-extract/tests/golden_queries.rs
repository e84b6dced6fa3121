//! Golden-set quality evaluation for query extraction
//!
//! Checks three aggregate metrics over a fixed set of ideas: anchor hit
//! rate, junk-word ratio, and pairwise query diversity, plus hard
//! must-not-appear violations per idea.

use priorart_extract::extract_keywords;
use priorart_lexicon::Lexicon;
use std::collections::HashSet;

struct GoldenIdea {
    idea: &'static str,
    expected_anchors: &'static [&'static str],
    must_not_appear: &'static [&'static str],
}

static GOLDEN_IDEAS: &[GoldenIdea] = &[
    GoldenIdea {
        idea: "MCP server for monitoring LLM API calls",
        expected_anchors: &["mcp", "monitoring"],
        must_not_appear: &["ai", "the"],
    },
    GoldenIdea {
        idea: "LLM evaluation and benchmarking framework",
        expected_anchors: &["evaluation", "evals", "benchmark"],
        must_not_appear: &["and"],
    },
    GoldenIdea {
        idea: "AI agent for task automation",
        expected_anchors: &["agent", "automation", "workflow"],
        must_not_appear: &["ai"],
    },
    GoldenIdea {
        idea: "RAG pipeline with vector search and reranking",
        expected_anchors: &["rag", "retrieval", "vector"],
        must_not_appear: &["with"],
    },
    GoldenIdea {
        idea: "CLI tool for database migrations",
        expected_anchors: &["cli", "database"],
        must_not_appear: &["for"],
    },
    GoldenIdea {
        idea: "chatbot for customer support on slack",
        expected_anchors: &["chatbot", "bot", "assistant"],
        must_not_appear: &["for"],
    },
    GoldenIdea {
        idea: "web scraping framework for e-commerce prices",
        expected_anchors: &["scraping", "crawler"],
        must_not_appear: &["for"],
    },
    GoldenIdea {
        idea: "中醫問診 AI 助手",
        expected_anchors: &["assistant", "chatbot"],
        must_not_appear: &["ai"],
    },
    GoldenIdea {
        idea: "數據分析儀表板",
        expected_anchors: &["dashboard", "analytics"],
        must_not_appear: &[],
    },
    GoldenIdea {
        idea: "LLM 監控 with tracing and alerts",
        expected_anchors: &["monitoring", "tracing"],
        must_not_appear: &["with", "and"],
    },
];

/// Junk words that should not dominate output queries.
static JUNK_WORDS: &[&str] = &[
    "ai", "tool", "platform", "system", "solution", "app", "service", "engine", "framework",
    "library", "helper", "manager", "builder", "generator", "powered", "based", "driven",
    "enabled", "smart", "intelligent", "automatic", "automated", "simple", "easy",
];

fn jaccard(a: &str, b: &str) -> f64 {
    let sa: HashSet<&str> = a.split_whitespace().collect();
    let sb: HashSet<&str> = b.split_whitespace().collect();
    if sa.is_empty() && sb.is_empty() {
        return 1.0;
    }
    sa.intersection(&sb).count() as f64 / sa.union(&sb).count() as f64
}

fn avg_pairwise_jaccard(queries: &[String]) -> f64 {
    if queries.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    let mut pairs = 0;
    for i in 0..queries.len() {
        for j in (i + 1)..queries.len() {
            total += jaccard(&queries[i], &queries[j]);
            pairs += 1;
        }
    }
    total / pairs as f64
}

#[test]
fn test_golden_ideas_quality_metrics() {
    let lexicon = Lexicon::builtin();
    let junk: HashSet<&str> = JUNK_WORDS.iter().copied().collect();

    let mut anchor_hits = 0;
    let mut junk_ratio_total = 0.0;
    let mut diversity_total = 0.0;

    for golden in GOLDEN_IDEAS {
        let queries = extract_keywords(&lexicon, golden.idea);
        assert!(
            (3..=8).contains(&queries.len()),
            "query count out of range for {:?}",
            golden.idea
        );

        let joined = queries.join(" ");
        let all_words: HashSet<&str> = joined.split_whitespace().collect();

        if golden
            .expected_anchors
            .iter()
            .any(|anchor| joined.contains(anchor))
        {
            anchor_hits += 1;
        }

        let junk_found = all_words.iter().filter(|w| junk.contains(*w)).count();
        junk_ratio_total += junk_found as f64 / all_words.len().max(1) as f64;

        diversity_total += 1.0 - avg_pairwise_jaccard(&queries);

        for banned in golden.must_not_appear {
            assert!(
                !all_words.contains(banned),
                "banned word {:?} appeared for {:?}: {:?}",
                banned,
                golden.idea,
                queries
            );
        }
    }

    let n = GOLDEN_IDEAS.len() as f64;
    let hit_rate = anchor_hits as f64 / n;
    let avg_junk = junk_ratio_total / n;
    let avg_diversity = diversity_total / n;

    assert!(hit_rate >= 0.7, "anchor hit rate too low: {:.0}%", hit_rate * 100.0);
    assert!(avg_junk < 0.25, "junk ratio too high: {:.2}", avg_junk);
    assert!(avg_diversity > 0.3, "queries too repetitive: {:.2}", avg_diversity);
}

#[test]
fn test_golden_ideas_deterministic() {
    let lexicon = Lexicon::builtin();
    for golden in GOLDEN_IDEAS {
        let first = extract_keywords(&lexicon, golden.idea);
        let second = extract_keywords(&lexicon, golden.idea);
        assert_eq!(first, second, "non-deterministic for {:?}", golden.idea);
    }
}
