//! Depth presets and weight redistribution

use priorart_sources::SourceId;
use serde::{Deserialize, Serialize};

/// How many sources a check consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// Repository and discussion search only.
    Quick,
    /// All registries, including the optional ones.
    Deep,
}

impl Depth {
    pub fn as_str(self) -> &'static str {
        match self {
            Depth::Quick => "quick",
            Depth::Deep => "deep",
        }
    }
}

/// One weighted term of the composite signal. GitHub contributes two
/// (presence and popularity); every other source contributes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    RepoCount,
    StarMagnitude,
    Mentions,
    NpmPackages,
    PypiPackages,
    ProductPosts,
}

impl Component {
    pub fn source(self) -> SourceId {
        match self {
            Component::RepoCount | Component::StarMagnitude => SourceId::Github,
            Component::Mentions => SourceId::Hackernews,
            Component::NpmPackages => SourceId::Npm,
            Component::PypiPackages => SourceId::Pypi,
            Component::ProductPosts => SourceId::Producthunt,
        }
    }
}

/// A weight table over signal components. Presets sum to 1.0; removing a
/// source keeps that invariant by proportional redistribution.
#[derive(Debug, Clone)]
pub struct SignalWeights {
    entries: Vec<(Component, f64)>,
}

impl SignalWeights {
    pub fn preset(depth: Depth) -> Self {
        let entries = match depth {
            Depth::Quick => vec![
                (Component::RepoCount, 0.6),
                (Component::StarMagnitude, 0.2),
                (Component::Mentions, 0.2),
            ],
            Depth::Deep => vec![
                (Component::RepoCount, 0.30),
                (Component::StarMagnitude, 0.15),
                (Component::Mentions, 0.15),
                (Component::NpmPackages, 0.15),
                (Component::PypiPackages, 0.15),
                (Component::ProductPosts, 0.10),
            ],
        };
        Self { entries }
    }

    /// Remove every component belonging to the given sources and spread the
    /// removed weight across the remaining components in proportion to their
    /// existing share, so the table still sums to 1.0.
    pub fn without_sources(&self, removed: &[SourceId]) -> Self {
        let (kept, dropped): (Vec<_>, Vec<_>) = self
            .entries
            .iter()
            .copied()
            .partition(|(component, _)| !removed.contains(&component.source()));

        let removed_weight: f64 = dropped.iter().map(|(_, w)| w).sum();
        let remaining_weight: f64 = kept.iter().map(|(_, w)| w).sum();
        if removed_weight == 0.0 || remaining_weight == 0.0 {
            return Self { entries: kept };
        }

        let entries = kept
            .into_iter()
            .map(|(component, weight)| {
                (component, weight + removed_weight * (weight / remaining_weight))
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(Component, f64)] {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}
