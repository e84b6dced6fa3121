//! Search query extraction from free-text product ideas
//!
//! Turns an idea description (English, Chinese, or mixed) into 3-8
//! diversified registry search queries via a three-stage pipeline:
//! normalization and hard filtering, intent-anchor detection, and query
//! template expansion. Every function here is pure and total; degenerate
//! input degrades to a raw-text fallback, never an error.

mod extract;
mod normalize;

pub use extract::extract_keywords;
