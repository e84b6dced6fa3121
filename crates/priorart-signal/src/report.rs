//! Final report assembly

use crate::pivot::pivot_hints;
use crate::relevance::filter_by_relevance;
use crate::synth::{compute_signal, DuplicateLikelihood};
use crate::weights::Depth;
use chrono::{DateTime, Utc};
use priorart_sources::{Candidate, Evidence, EvidenceKind, SourceId, SourceResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Report metadata echoing the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub checked_at: DateTime<Utc>,
    pub sources_used: Vec<SourceId>,
    pub depth: Depth,
    pub version: String,
}

/// The complete reality check output, the stable external contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealityCheckReport {
    pub reality_signal: u32,
    pub duplicate_likelihood: DuplicateLikelihood,
    pub evidence: Vec<Evidence>,
    pub top_similars: Vec<Candidate>,
    pub pivot_hints: Vec<String>,
    pub idea_hash: String,
    pub meta: ReportMeta,
}

/// Compose the full report from the extracted queries and the per-source
/// results. Pure apart from the timestamp stamp.
pub fn assemble_report(
    idea_text: &str,
    queries: &[String],
    results: &[SourceResult],
    depth: Depth,
) -> RealityCheckReport {
    let summary = compute_signal(results, depth);
    let considered = considered_sources(depth);

    let evidence = merge_evidence(queries, results, &considered);
    let merged = merge_candidates(results, &considered);
    let top_similars = filter_by_relevance(merged, idea_text, queries);
    let hints = pivot_hints(summary.signal, top_similars.first());

    RealityCheckReport {
        reality_signal: summary.signal,
        duplicate_likelihood: summary.likelihood,
        evidence,
        top_similars,
        pivot_hints: hints,
        idea_hash: idea_hash(idea_text),
        meta: ReportMeta {
            checked_at: Utc::now(),
            sources_used: summary.sources_used,
            depth,
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    }
}

/// SHA-256 hex of the normalized idea text, for downstream history lookups.
pub fn idea_hash(idea_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(idea_text.trim().to_lowercase().as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Quick mode only ever reads the repository and discussion sources, even
/// when more results were supplied.
fn considered_sources(depth: Depth) -> Vec<SourceId> {
    match depth {
        Depth::Quick => vec![SourceId::Github, SourceId::Hackernews],
        Depth::Deep => SourceId::ALL.to_vec(),
    }
}

/// Merge order: the primary source's count evidence, then its magnitude
/// evidence, then its remaining entries, then each other source's evidence
/// in the order supplied. When the primary adapter sent no count/magnitude
/// entries they are synthesized from its totals.
fn merge_evidence(
    queries: &[String],
    results: &[SourceResult],
    considered: &[SourceId],
) -> Vec<Evidence> {
    let first_query = queries.first().cloned().unwrap_or_default();
    let mut merged = Vec::new();

    let primary = results.iter().find(|r| r.source == SourceId::Github);
    let (total_count, max_magnitude) = primary
        .map(|r| (r.total_count, r.max_magnitude))
        .unwrap_or((0, 0));

    let counts: Vec<Evidence> = primary
        .map(|r| {
            r.evidence
                .iter()
                .filter(|e| e.kind == EvidenceKind::Count)
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    if counts.is_empty() {
        merged.push(Evidence {
            source: SourceId::Github,
            kind: EvidenceKind::Count,
            query: first_query.clone(),
            count: total_count,
            detail: format!("{} repos found across queries", total_count),
        });
    } else {
        merged.extend(counts);
    }

    let magnitudes: Vec<Evidence> = primary
        .map(|r| {
            r.evidence
                .iter()
                .filter(|e| e.kind == EvidenceKind::Magnitude)
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    if magnitudes.is_empty() {
        merged.push(Evidence {
            source: SourceId::Github,
            kind: EvidenceKind::Magnitude,
            query: first_query,
            count: max_magnitude,
            detail: format!("Top repo has {} stars", max_magnitude),
        });
    } else {
        merged.extend(magnitudes);
    }

    if let Some(r) = primary {
        merged.extend(
            r.evidence
                .iter()
                .filter(|e| e.kind != EvidenceKind::Count && e.kind != EvidenceKind::Magnitude)
                .cloned(),
        );
    }

    for result in results {
        if result.source == SourceId::Github || !considered.contains(&result.source) {
            continue;
        }
        merged.extend(result.evidence.iter().cloned());
    }
    merged
}

/// Merge top candidates across sources. Non-primary entries get a
/// source-prefixed name; collisions keep the higher-popularity record in the
/// earlier position.
fn merge_candidates(results: &[SourceResult], considered: &[SourceId]) -> Vec<Candidate> {
    let primary = results.iter().find(|r| r.source == SourceId::Github);
    let rest = results
        .iter()
        .filter(|r| r.source != SourceId::Github && considered.contains(&r.source));

    let mut merged: Vec<Candidate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for result in primary.into_iter().chain(rest) {
        for candidate in &result.top {
            let mut tagged = candidate.clone();
            if result.source != SourceId::Github {
                tagged.name = format!("{}:{}", result.source.as_str(), tagged.name);
            }
            match index.get(&tagged.name) {
                Some(&at) => {
                    if tagged.popularity > merged[at].popularity {
                        merged[at] = tagged;
                    }
                }
                None => {
                    index.insert(tagged.name.clone(), merged.len());
                    merged.push(tagged);
                }
            }
        }
    }
    merged
}
