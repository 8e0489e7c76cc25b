//! Versioned composite indices over before/after metrics.
//!
//! Weight rationale: hapax and rare are correlated (hapax tokens are almost
//! always rare), so each is down-weighted to 0.25 and the freed share goes to
//! type-token ratio, a more orthogonal lexical-diversity signal. Sentence
//! length stdev captures syntactic variance. The formula version string must
//! change whenever weights or structure change.

use std::collections::BTreeMap;

use crate::types::{IndexScores, Metrics};

pub const SUI_FORMULA_VERSION: &str = "sui-v1.0";
pub const SSI_FORMULA_VERSION: &str = "ssi-v1.0";

const HAPAX_WEIGHT: f64 = 0.25;
const RARE_WEIGHT: f64 = 0.25;
const TTR_WEIGHT: f64 = 0.20;
const STDEV_WEIGHT: f64 = 0.30;
// Sum: 0.25 + 0.25 + 0.20 + 0.30 = 1.00

/// Empirical normalization constant for sentence-length variance: a stdev of
/// 10 tokens or more counts as maximal syntactic variance.
const STDEV_NORM_FACTOR: f64 = 10.0;

const SSI_NGRAM_WEIGHT: f64 = 0.40;
const SSI_RARE_WEIGHT: f64 = 0.35;
const SSI_STOPWORD_WEIGHT: f64 = 0.25;

/// Round to 2 decimal places (composite scores are coarser than raw metrics).
fn r2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

fn sui_value(m: &Metrics) -> f64 {
    let stdev_norm = (m.stdev_sentence_length_tokens / STDEV_NORM_FACTOR).min(1.0);
    r2((HAPAX_WEIGHT * m.hapax_rate
        + RARE_WEIGHT * m.rare_word_rate
        + TTR_WEIGHT * m.type_token_ratio
        + STDEV_WEIGHT * stdev_norm)
        * 100.0)
}

/// Stylometric Uniqueness Index, v1.0. Values in [0, 100].
pub fn compute_sui(before: &Metrics, after: &Metrics) -> IndexScores {
    let weights = BTreeMap::from([
        ("hapaxRate".to_string(), HAPAX_WEIGHT),
        ("rareWordRate".to_string(), RARE_WEIGHT),
        ("typeTokenRatio".to_string(), TTR_WEIGHT),
        ("stdevSentenceLengthTokens".to_string(), STDEV_WEIGHT),
        ("stdevNormFactor".to_string(), STDEV_NORM_FACTOR),
    ]);
    let value_before = sui_value(before);
    let value_after = sui_value(after);
    IndexScores {
        formula_version: SUI_FORMULA_VERSION.to_string(),
        weights,
        value_before,
        value_after,
        delta: value_before - value_after,
    }
}

fn ssi_value(m: &Metrics) -> f64 {
    r2((SSI_NGRAM_WEIGHT * m.basic_ngram_uniqueness
        + SSI_RARE_WEIGHT * m.rare_word_rate
        + SSI_STOPWORD_WEIGHT * (1.0 - m.stopword_rate))
        * 100.0)
}

/// Semantic Specificity Index, v1.0. Values in [0, 100]. A high stopword rate
/// means generic phrasing, so the stopword term enters inverted.
pub fn compute_ssi(before: &Metrics, after: &Metrics) -> IndexScores {
    let weights = BTreeMap::from([
        ("basicNgramUniqueness".to_string(), SSI_NGRAM_WEIGHT),
        ("rareWordRate".to_string(), SSI_RARE_WEIGHT),
        ("stopwordRate".to_string(), SSI_STOPWORD_WEIGHT),
    ]);
    let value_before = ssi_value(before);
    let value_after = ssi_value(after);
    IndexScores {
        formula_version: SSI_FORMULA_VERSION.to_string(),
        weights,
        value_before,
        value_after,
        delta: value_before - value_after,
    }
}

/// Relative reduction of one metric. A zero baseline means there was no
/// signal to reduce, scored as "no reduction achieved" (0), never undefined.
fn relative_reduction(before: f64, after: f64) -> f64 {
    if before > 0.0 {
        clamp01((before - after) / before)
    } else {
        0.0
    }
}

/// Weighted relative reduction across the four SUI inputs, scaled to
/// [0, 100] and rounded to 2 decimals.
pub fn compute_reduction_score(before: &Metrics, after: &Metrics) -> f64 {
    let hapax = relative_reduction(before.hapax_rate, after.hapax_rate);
    let rare = relative_reduction(before.rare_word_rate, after.rare_word_rate);
    let ttr = relative_reduction(before.type_token_ratio, after.type_token_ratio);
    let stdev = relative_reduction(
        before.stdev_sentence_length_tokens,
        after.stdev_sentence_length_tokens,
    );
    r2((HAPAX_WEIGHT * hapax + RARE_WEIGHT * rare + TTR_WEIGHT * ttr + STDEV_WEIGHT * stdev)
        * 100.0)
}
