//! Reality-signal synthesis: scoring curves, weights, relevance, and reports

mod pivot;
mod relevance;
mod report;
mod score;
mod synth;
mod weights;

pub use pivot::pivot_hints;
pub use relevance::filter_by_relevance;
pub use report::{assemble_report, idea_hash, RealityCheckReport, ReportMeta};
pub use score::{
    mention_score, npm_package_score, product_post_score, pypi_package_score, repo_count_score,
    star_magnitude_score,
};
pub use synth::{compute_signal, DuplicateLikelihood, SignalSummary};
pub use weights::{Component, Depth, SignalWeights};
