//! Nine lexical/structural metrics over a text snapshot. Pure and
//! deterministic: byte-identical input produces byte-identical output, which
//! the 4-decimal rounding is part of (golden/snapshot testing relies on it).

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Language, Metrics};
use crate::wordlists;

static NON_TOKEN_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-ZäöüßÄÖÜ0-9\s]").unwrap());
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,;:!?]").unwrap());
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());
static ALPHA_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-züöäß]{3,}").unwrap());

/// Round to 4 decimal places, part of the output contract.
pub(crate) fn r4(n: f64) -> f64 {
    (n * 10_000.0).round() / 10_000.0
}

/// Lowercase alpha+digit tokens (German umlauts included); every other
/// character becomes whitespace first.
fn tokenize(text: &str) -> Vec<String> {
    let cleaned = NON_TOKEN_CHARS.replace_all(text, " ").to_lowercase();
    cleaned
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

/// Split on sentence-ending punctuation followed by whitespace. A text
/// without such punctuation is exactly one sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last = 0usize;
    for m in SENTENCE_END.find_iter(text) {
        // The punctuation mark is a single byte; keep it with its sentence.
        let sentence = text[last..m.start() + 1].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        last = m.end();
    }
    let tail = text[last..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

fn population_stdev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

pub fn compute_metrics(text: &str, language: Language) -> Metrics {
    let all_tokens = tokenize(text);
    let total_tokens = all_tokens.len();

    if total_tokens == 0 {
        return Metrics {
            sentence_count: 0,
            avg_sentence_length_tokens: 0.0,
            stdev_sentence_length_tokens: 0.0,
            punctuation_rate: 0.0,
            type_token_ratio: 0.0,
            hapax_rate: 0.0,
            stopword_rate: 0.0,
            rare_word_rate: 0.0,
            basic_ngram_uniqueness: 0.0,
        };
    }

    let sentences = split_sentences(text);
    let sentence_lengths: Vec<f64> = sentences
        .iter()
        .map(|s| tokenize(s).len() as f64)
        .collect();
    let avg_sentence_length = if sentence_lengths.is_empty() {
        0.0
    } else {
        sentence_lengths.iter().sum::<f64>() / sentence_lengths.len() as f64
    };

    let punctuation_count = PUNCTUATION.find_iter(text).count();
    let punctuation_rate = punctuation_count as f64 / total_tokens as f64;

    let type_set: HashSet<&str> = all_tokens.iter().map(String::as_str).collect();
    let type_token_ratio = type_set.len() as f64 / total_tokens as f64;

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for t in &all_tokens {
        *freq.entry(t.as_str()).or_insert(0) += 1;
    }
    let hapax_count = freq.values().filter(|&&v| v == 1).count();
    let hapax_rate = hapax_count as f64 / total_tokens as f64;

    let stopwords = wordlists::stopwords(language);
    let stopword_count = all_tokens
        .iter()
        .filter(|t| stopwords.contains(t.as_str()))
        .count();
    let stopword_rate = stopword_count as f64 / total_tokens as f64;

    // Rare-word rate is measured only over word tokens (>= 3 alpha chars),
    // which excludes numbers.
    let word_tokens: Vec<&String> = all_tokens
        .iter()
        .filter(|t| ALPHA_WORD.is_match(t))
        .collect();
    let rare_count = word_tokens
        .iter()
        .filter(|t| wordlists::is_rare_word(t, language))
        .count();
    let rare_word_rate = if word_tokens.is_empty() {
        0.0
    } else {
        rare_count as f64 / word_tokens.len() as f64
    };

    let trigram_total = all_tokens.len().saturating_sub(2);
    let basic_ngram_uniqueness = if trigram_total == 0 {
        0.0
    } else {
        let unique: HashSet<String> = all_tokens
            .windows(3)
            .map(|w| format!("{}_{}_{}", w[0], w[1], w[2]))
            .collect();
        unique.len() as f64 / trigram_total as f64
    };

    Metrics {
        sentence_count: sentences.len() as i64,
        avg_sentence_length_tokens: r4(avg_sentence_length),
        stdev_sentence_length_tokens: r4(population_stdev(&sentence_lengths)),
        punctuation_rate: r4(punctuation_rate),
        type_token_ratio: r4(type_token_ratio),
        hapax_rate: r4(hapax_rate),
        stopword_rate: r4(stopword_rate),
        rare_word_rate: r4(rare_word_rate),
        basic_ngram_uniqueness: r4(basic_ngram_uniqueness),
    }
}

/// Field-wise `after - before`, re-rounded to 4 decimals.
pub fn compute_delta(before: &Metrics, after: &Metrics) -> Metrics {
    Metrics {
        sentence_count: after.sentence_count - before.sentence_count,
        avg_sentence_length_tokens: r4(
            after.avg_sentence_length_tokens - before.avg_sentence_length_tokens,
        ),
        stdev_sentence_length_tokens: r4(
            after.stdev_sentence_length_tokens - before.stdev_sentence_length_tokens,
        ),
        punctuation_rate: r4(after.punctuation_rate - before.punctuation_rate),
        type_token_ratio: r4(after.type_token_ratio - before.type_token_ratio),
        hapax_rate: r4(after.hapax_rate - before.hapax_rate),
        stopword_rate: r4(after.stopword_rate - before.stopword_rate),
        rare_word_rate: r4(after.rare_word_rate - before.rare_word_rate),
        basic_ngram_uniqueness: r4(after.basic_ngram_uniqueness - before.basic_ngram_uniqueness),
    }
}
