//! Static term dictionaries for idea keyword extraction

mod anchors;
mod chinese;
mod tech;
mod words;

use std::collections::{HashMap, HashSet};

/// Classification of a normalized token. Technology keywords and intent
/// anchors take precedence over the stop/boilerplate classes so they are
/// never filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    IntentAnchor,
    TechKeyword,
    StopWord,
    Boilerplate,
    Plain,
}

/// Immutable bundle of every dictionary the extractor consults. Built once
/// and passed by reference; there is no module-level mutable state.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<&'static str>,
    boilerplate_words: HashSet<&'static str>,
    tech_keywords: HashSet<&'static str>,
    compound_terms: Vec<&'static str>,
    chinese_terms: Vec<(&'static str, &'static str)>,
    intent_anchors: HashSet<&'static str>,
    synonyms: HashMap<&'static str, &'static [&'static str]>,
}

impl Lexicon {
    /// Build the curated built-in lexicon.
    ///
    /// Longest-match-first is an explicit invariant here, not an accident of
    /// table order: compound terms and CJK keys are sorted by descending
    /// length so a contained shorter entry can never pre-empt its superstring.
    pub fn builtin() -> Self {
        let mut compound_terms: Vec<&'static str> = tech::COMPOUND_TERMS.to_vec();
        compound_terms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let mut chinese_terms: Vec<(&'static str, &'static str)> = chinese::CHINESE_TERMS.to_vec();
        chinese_terms.sort_by(|a, b| {
            let a_len = a.0.chars().count();
            let b_len = b.0.chars().count();
            b_len.cmp(&a_len).then(a.0.cmp(b.0))
        });

        let intent_anchors: HashSet<&'static str> = anchors::INTENT_ANCHORS.iter().copied().collect();
        let synonyms: HashMap<&'static str, &'static [&'static str]> =
            anchors::SYNONYMS.iter().copied().collect();
        debug_assert!(
            synonyms.keys().all(|k| intent_anchors.contains(k)),
            "every synonym key must be a known intent anchor"
        );

        Self {
            stop_words: words::STOP_WORDS.iter().copied().collect(),
            boilerplate_words: words::BOILERPLATE_WORDS.iter().copied().collect(),
            tech_keywords: tech::TECH_KEYWORDS.iter().copied().collect(),
            compound_terms,
            chinese_terms,
            intent_anchors,
            synonyms,
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_boilerplate(&self, word: &str) -> bool {
        self.boilerplate_words.contains(word)
    }

    pub fn is_tech_keyword(&self, word: &str) -> bool {
        self.tech_keywords.contains(word)
    }

    pub fn is_intent_anchor(&self, word: &str) -> bool {
        self.intent_anchors.contains(word)
    }

    /// Compound terms, longest first.
    pub fn compound_terms(&self) -> &[&'static str] {
        &self.compound_terms
    }

    /// CJK substitution entries, longest key first.
    pub fn chinese_terms(&self) -> &[(&'static str, &'static str)] {
        &self.chinese_terms
    }

    /// Expansion terms for an anchor, most useful first. Empty for anchors
    /// without an expansion entry.
    pub fn synonyms_for(&self, anchor: &str) -> &[&'static str] {
        self.synonyms.get(anchor).copied().unwrap_or(&[])
    }

    /// Classify a token into exactly one class. Anchor and tech membership
    /// win over the filtered classes.
    pub fn classify(&self, token: &str) -> TokenClass {
        if self.is_intent_anchor(token) {
            TokenClass::IntentAnchor
        } else if self.is_tech_keyword(token) {
            TokenClass::TechKeyword
        } else if self.is_stop_word(token) {
            TokenClass::StopWord
        } else if self.is_boilerplate(token) {
            TokenClass::Boilerplate
        } else {
            TokenClass::Plain
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
