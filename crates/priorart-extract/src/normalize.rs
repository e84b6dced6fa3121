//! Text normalization: CJK substitution, compound extraction, tokenization

use priorart_lexicon::{Lexicon, TokenClass};
use regex::Regex;
use std::sync::OnceLock;

static TOKENIZE_RE: OnceLock<Regex> = OnceLock::new();

/// Replace every known CJK term with its English equivalent, longest key
/// first so a compound key wins over any shorter key it contains. Runs on
/// the original-cased text; injected English is padded with spaces so it
/// does not fuse with adjacent characters.
pub(crate) fn apply_chinese_terms(lexicon: &Lexicon, text: &str) -> String {
    let mut result = text.to_string();
    for (key, english) in lexicon.chinese_terms() {
        if result.contains(key) {
            result = result.replace(key, &format!(" {} ", english));
        }
    }
    result
}

/// Pull fixed multi-word phrases out of the normalized text, longest phrase
/// first, removing each match so its words are not re-tokenized. Returns the
/// extracted phrases in scan order and the remaining text.
pub(crate) fn extract_compound_terms(lexicon: &Lexicon, text: &str) -> (Vec<String>, String) {
    let mut compounds = Vec::new();
    let mut remainder = text.to_string();
    for phrase in lexicon.compound_terms() {
        if remainder.contains(phrase) {
            compounds.push((*phrase).to_string());
            remainder = remainder.replace(phrase, " ");
        }
    }
    (compounds, remainder)
}

/// Split lowercased text into ASCII alphanumeric words of length >= 2.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let re = TOKENIZE_RE.get_or_init(|| Regex::new(r"[a-z0-9]{2,}").unwrap());
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Drop stop and boilerplate words; technology keywords and intent anchors
/// always survive. Returns (tech tokens, other tokens), order preserved.
pub(crate) fn filter_and_partition(lexicon: &Lexicon, tokens: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut tech = Vec::new();
    let mut other = Vec::new();
    for token in tokens {
        match lexicon.classify(&token) {
            TokenClass::TechKeyword => tech.push(token),
            TokenClass::IntentAnchor | TokenClass::Plain => other.push(token),
            TokenClass::StopWord | TokenClass::Boilerplate => {}
        }
    }
    (tech, other)
}
