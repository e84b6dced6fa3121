//! Composite signal synthesis

use crate::score::{
    mention_score, npm_package_score, product_post_score, pypi_package_score, repo_count_score,
    star_magnitude_score,
};
use crate::weights::{Component, Depth, SignalWeights};
use priorart_sources::{SourceId, SourceResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Duplicate-likelihood band of a composite signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateLikelihood {
    Low,
    Medium,
    High,
}

impl DuplicateLikelihood {
    pub fn from_signal(signal: u32) -> Self {
        if signal < 30 {
            DuplicateLikelihood::Low
        } else if signal <= 60 {
            DuplicateLikelihood::Medium
        } else {
            DuplicateLikelihood::High
        }
    }
}

/// Result of signal synthesis: the clamped composite, its band, and the
/// sources that actually participated.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSummary {
    pub signal: u32,
    pub likelihood: DuplicateLikelihood,
    pub sources_used: Vec<SourceId>,
}

/// Combine per-source results into the 0-100 composite signal.
///
/// Quick mode always uses its fixed three-way weighting over the repository
/// and discussion sources, regardless of what else was supplied. Deep mode
/// weights all six components, dropping and redistributing the weight of any
/// optional source that was skipped or absent. A required source that is
/// absent scores from zero counts but keeps its weight.
pub fn compute_signal(results: &[SourceResult], depth: Depth) -> SignalSummary {
    let (weights, sources_used) = match depth {
        Depth::Quick => (
            SignalWeights::preset(depth),
            vec![SourceId::Github, SourceId::Hackernews],
        ),
        Depth::Deep => {
            let unavailable: Vec<SourceId> = SourceId::ALL
                .into_iter()
                .filter(|id| id.is_optional())
                .filter(|id| match find(results, *id) {
                    Some(result) => result.skipped,
                    None => true,
                })
                .collect();
            let weights = SignalWeights::preset(depth).without_sources(&unavailable);
            let sources_used = SourceId::ALL
                .into_iter()
                .filter(|id| !unavailable.contains(id))
                .collect();
            (weights, sources_used)
        }
    };

    let weighted: f64 = weights
        .entries()
        .iter()
        .map(|(component, weight)| weight * sub_score(results, *component) as f64)
        .sum();
    let signal = (weighted.trunc() as u32).min(100);
    debug!(signal, ?sources_used, "signal synthesized");

    SignalSummary {
        signal,
        likelihood: DuplicateLikelihood::from_signal(signal),
        sources_used,
    }
}

fn find(results: &[SourceResult], id: SourceId) -> Option<&SourceResult> {
    results.iter().find(|r| r.source == id)
}

fn sub_score(results: &[SourceResult], component: Component) -> u32 {
    let total = |id: SourceId| find(results, id).map(|r| r.total_count).unwrap_or(0);
    match component {
        Component::RepoCount => repo_count_score(total(SourceId::Github)),
        Component::StarMagnitude => star_magnitude_score(
            find(results, SourceId::Github)
                .map(|r| r.max_magnitude)
                .unwrap_or(0),
        ),
        Component::Mentions => mention_score(total(SourceId::Hackernews)),
        Component::NpmPackages => npm_package_score(total(SourceId::Npm)),
        Component::PypiPackages => pypi_package_score(total(SourceId::Pypi)),
        Component::ProductPosts => product_post_score(total(SourceId::Producthunt)),
    }
}
