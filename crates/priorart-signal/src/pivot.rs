//! Band-templated pivot suggestions

use priorart_sources::Candidate;

const HIGH_BAND: u32 = 60;
const MEDIUM_BAND: u32 = 30;

/// Generate exactly 3 actionable pivot hints for a signal.
///
/// Selection depends only on the signal band; the high band's second hint is
/// parameterized with the top competitor when one exists. Fully
/// deterministic for a given band and top result.
pub fn pivot_hints(signal: u32, top_candidate: Option<&Candidate>) -> Vec<String> {
    if signal >= HIGH_BAND {
        let leader_hint = match top_candidate {
            Some(top) => format!(
                "The leading project ({}, {} stars) may have gaps. \
                 Check its issues and feature requests for unmet needs.",
                top.name, top.popularity
            ),
            None => "The leading projects in this space may have gaps. \
                     Check their issue trackers and feature requests for unmet needs."
                .to_string(),
        };
        vec![
            "High existing competition detected. Consider a niche differentiator \
             or target an underserved audience segment."
                .to_string(),
            leader_hint,
            "Consider building an integration or plugin for existing tools \
             rather than a standalone replacement."
                .to_string(),
        ]
    } else if signal >= MEDIUM_BAND {
        vec![
            "Moderate competition exists. Focus on a specific use case or workflow \
             that current solutions handle poorly."
                .to_string(),
            "Validate with potential users before building — the market exists \
             but may not need another general solution."
                .to_string(),
            "Look at the most recent entries for emerging trends you could lead.".to_string(),
        ]
    } else {
        vec![
            "Low competition — this could be a greenfield opportunity or a niche \
             that hasn't gained traction yet."
                .to_string(),
            "Validate demand before investing heavily. Low competition can also \
             mean low demand."
                .to_string(),
            "Search adjacent problem spaces — the idea might exist under different \
             terminology."
                .to_string(),
        ]
    }
}
