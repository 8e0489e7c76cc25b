//! Risk annotation over the untouched original text: flags hapax and rare
//! words as elevated attribution signal, independently of any transform.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Language, RiskFeature, RiskLevel, RiskSpan, SpanKind};
use crate::wordlists;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-zÄÖÜäöüß]{2,}").unwrap());

pub fn annotate_risk(original_text: &str, language: Language) -> Vec<RiskSpan> {
    let stopwords = wordlists::stopwords(language);

    let tokens: Vec<(usize, &str)> = WORD
        .find_iter(original_text)
        .map(|m| (m.start(), m.as_str()))
        .collect();

    let mut freq: HashMap<String, usize> = HashMap::new();
    for (_, word) in &tokens {
        *freq.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    let mut spans = Vec::new();
    for (start, word) in tokens {
        let lower = word.to_lowercase();
        // Stopwords carry no distinctiveness by definition.
        if stopwords.contains(lower.as_str()) {
            continue;
        }
        let hapax = freq[&lower] == 1;
        let rare = wordlists::is_rare_word(&lower, language);
        let (feature, risk_level) = match (hapax, rare) {
            (true, true) => (RiskFeature::Hapax, RiskLevel::High),
            (false, true) => (RiskFeature::RareWord, RiskLevel::High),
            (true, false) => (RiskFeature::Hapax, RiskLevel::Medium),
            (false, false) => continue,
        };
        spans.push(RiskSpan {
            kind: SpanKind::Risk,
            start,
            end: start + word.len(),
            feature,
            risk_level,
        });
    }

    spans
}
