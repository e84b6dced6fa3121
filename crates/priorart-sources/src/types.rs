//! Record types produced by the external source adapters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The external registries a reality check can consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Github,
    Hackernews,
    Npm,
    Pypi,
    Producthunt,
}

impl SourceId {
    /// Canonical report order. GitHub is the primary source.
    pub const ALL: [SourceId; 5] = [
        SourceId::Github,
        SourceId::Hackernews,
        SourceId::Npm,
        SourceId::Pypi,
        SourceId::Producthunt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceId::Github => "github",
            SourceId::Hackernews => "hackernews",
            SourceId::Npm => "npm",
            SourceId::Pypi => "pypi",
            SourceId::Producthunt => "producthunt",
        }
    }

    /// Optional sources report a skipped state when unconfigured instead of
    /// participating in deep-mode scoring.
    pub fn is_optional(self) -> bool {
        matches!(self, SourceId::Pypi | SourceId::Producthunt)
    }
}

/// What one evidence entry records about a source interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    /// Total matched count for a query.
    Count,
    /// Secondary popularity metric (max stars, max votes).
    Magnitude,
    /// The request was attempted and failed.
    Error,
    /// The source was not queried at all (missing credential or config).
    Skipped,
}

/// A structured record explaining one contribution to the score or one
/// source interaction, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub source: SourceId,
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub detail: String,
}

/// One candidate project/package surfaced as potentially competing with the
/// idea. Missing fields decode to empty defaults; adapters truncate
/// descriptions upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// Stars, votes, or another per-source popularity count.
    #[serde(default)]
    pub popularity: u64,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

/// Aggregated result for one source across all query variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceResult {
    pub source: SourceId,
    /// Total matched count summed over queries.
    #[serde(default)]
    pub total_count: u64,
    /// Highest popularity metric seen, 0 where not applicable.
    #[serde(default)]
    pub max_magnitude: u64,
    #[serde(default)]
    pub top: Vec<Candidate>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    /// Set when the source was never queried; totals are zero and evidence
    /// holds exactly one skipped entry.
    #[serde(default)]
    pub skipped: bool,
}

impl SourceResult {
    /// A result representing a source that found nothing.
    pub fn empty(source: SourceId) -> Self {
        Self {
            source,
            total_count: 0,
            max_magnitude: 0,
            top: Vec::new(),
            evidence: Vec::new(),
            skipped: false,
        }
    }

    /// A result representing a source that was not queried.
    pub fn skipped(source: SourceId) -> Self {
        Self {
            source,
            total_count: 0,
            max_magnitude: 0,
            top: Vec::new(),
            evidence: vec![Evidence {
                source,
                kind: EvidenceKind::Skipped,
                query: String::new(),
                count: 0,
                detail: format!("{} search skipped (not configured)", source.as_str()),
            }],
            skipped: true,
        }
    }
}
