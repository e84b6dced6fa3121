//! End-to-end flow: extracted queries + source results -> final report

use priorart_extract::extract_keywords;
use priorart_lexicon::Lexicon;
use priorart_signal::{assemble_report, Depth, DuplicateLikelihood};
use priorart_sources::{Candidate, Evidence, EvidenceKind, SourceId, SourceResult};

fn github(count: u64, stars: u64) -> SourceResult {
    let top = if count > 0 {
        vec![Candidate {
            name: "user/repo".to_string(),
            url: "https://github.com/user/repo".to_string(),
            popularity: stars,
            updated: None,
            description: "An llm monitoring project".to_string(),
        }]
    } else {
        Vec::new()
    };
    SourceResult {
        source: SourceId::Github,
        total_count: count,
        max_magnitude: stars,
        top,
        evidence: Vec::new(),
        skipped: false,
    }
}

fn hackernews(mentions: u64) -> SourceResult {
    let evidence = if mentions > 0 {
        vec![Evidence {
            source: SourceId::Hackernews,
            kind: EvidenceKind::Count,
            query: "llm monitoring".to_string(),
            count: mentions,
            detail: format!("{} HN posts in last 12 months", mentions),
        }]
    } else {
        Vec::new()
    };
    SourceResult {
        source: SourceId::Hackernews,
        total_count: mentions,
        evidence,
        ..SourceResult::empty(SourceId::Hackernews)
    }
}

fn packages(source: SourceId, count: u64, name: &str) -> SourceResult {
    SourceResult {
        total_count: count,
        top: vec![Candidate {
            name: name.to_string(),
            url: String::new(),
            popularity: count,
            updated: None,
            description: "llm package".to_string(),
        }],
        ..SourceResult::empty(source)
    }
}

#[test]
fn test_quick_flow_high_competition() {
    let lexicon = Lexicon::builtin();
    let idea = "LLM monitoring dashboard for production";
    let queries = extract_keywords(&lexicon, idea);
    assert!((3..=8).contains(&queries.len()));

    let results = vec![github(1000, 50000), hackernews(100)];
    let report = assemble_report(idea, &queries, &results, Depth::Quick);

    assert_eq!(report.reality_signal, 90);
    assert_eq!(report.duplicate_likelihood, DuplicateLikelihood::High);
    assert!(report.pivot_hints[1].contains("user/repo"));
    assert!(report.pivot_hints[1].contains("50000"));
    assert_eq!(
        report.meta.sources_used,
        vec![SourceId::Github, SourceId::Hackernews]
    );
}

#[test]
fn test_quick_flow_nothing_found() {
    let lexicon = Lexicon::builtin();
    let idea = "underwater basket weaving tracker";
    let queries = extract_keywords(&lexicon, idea);

    let results = vec![github(0, 0), hackernews(0)];
    let report = assemble_report(idea, &queries, &results, Depth::Quick);

    assert_eq!(report.reality_signal, 0);
    assert_eq!(report.duplicate_likelihood, DuplicateLikelihood::Low);
    assert!(report.pivot_hints[0].contains("Low competition"));
    assert!(report.top_similars.is_empty());
}

#[test]
fn test_deep_flow_with_skipped_producthunt() {
    let lexicon = Lexicon::builtin();
    let idea = "LLM evaluation framework for python";
    let queries = extract_keywords(&lexicon, idea);

    let results = vec![
        github(100, 500),
        hackernews(10),
        packages(SourceId::Npm, 50, "llm-evals"),
        packages(SourceId::Pypi, 20, "llm-eval-kit"),
        SourceResult::skipped(SourceId::Producthunt),
    ];
    let report = assemble_report(idea, &queries, &results, Depth::Deep);

    assert!(!report.meta.sources_used.contains(&SourceId::Producthunt));
    assert_eq!(
        report.meta.sources_used,
        vec![
            SourceId::Github,
            SourceId::Hackernews,
            SourceId::Npm,
            SourceId::Pypi
        ]
    );
    // the skipped source still explains itself in the evidence
    assert!(report
        .evidence
        .iter()
        .any(|e| e.source == SourceId::Producthunt && e.kind == EvidenceKind::Skipped));
    // registry candidates arrive source-prefixed
    let names: Vec<&str> = report.top_similars.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"npm:llm-evals"));
    assert!(names.contains(&"pypi:llm-eval-kit"));
}

#[test]
fn test_relevant_similars_surface_first() {
    let lexicon = Lexicon::builtin();
    let idea = "LLM monitoring dashboard";
    let queries = extract_keywords(&lexicon, idea);

    let mut gh = github(100, 90000);
    gh.top = vec![
        Candidate {
            name: "famous/unrelated-editor".to_string(),
            url: String::new(),
            popularity: 90000,
            updated: None,
            description: "a text editor".to_string(),
        },
        Candidate {
            name: "acme/llm-watch".to_string(),
            url: String::new(),
            popularity: 300,
            updated: None,
            description: "monitoring for llm apps".to_string(),
        },
    ];
    let report = assemble_report(idea, &queries, &[gh, hackernews(5)], Depth::Quick);

    assert_eq!(report.top_similars[0].name, "acme/llm-watch");
    assert_eq!(report.top_similars.len(), 2);
}

#[test]
fn test_report_json_roundtrip() {
    let lexicon = Lexicon::builtin();
    let idea = "MCP server 監控 LLM calls";
    let queries = extract_keywords(&lexicon, idea);

    let results = vec![github(12, 340), hackernews(3)];
    let report = assemble_report(idea, &queries, &results, Depth::Quick);

    let json = serde_json::to_string(&report).unwrap();
    let parsed: priorart_signal::RealityCheckReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
