use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language '{other}' (expected de|en)")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::De => "de",
            Language::En => "en",
        })
    }
}

/// Optional external-rewriter configuration carried on the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmConfig {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// When set, the pipeline computes
    /// `semantic_similarity = cosine(embed(original), embed(final))`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    pub text: String,
    pub language: Language,
    /// Cumulative strength level, 0–3.
    pub strength: u8,
    #[serde(default)]
    pub llm: LlmConfig,
}

// ---------------------------------------------------------------------------
// Edit records and spans
// ---------------------------------------------------------------------------

/// A single edit made by a transform, recorded *without* absolute offsets.
/// Offsets are unstable while the chain is still running (later stages keep
/// mutating the text), so positions are resolved post-hoc against the final
/// text (see `resolve`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRecord {
    pub original_fragment: String,
    pub replaced_with: String,
    pub transform: String,
    /// Strength tier at which the emitting stage is gated.
    pub strength: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    Lexical,
    Structural,
    Semantic,
    Contextual,
}

/// Discriminant carried on every span value at the core boundary so consumers
/// switch on a single field instead of probing for shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Annotated,
    Risk,
    Diff,
}

/// An edit record resolved to a byte range in the **final** text.
/// Invariant: `final_text[start..end] == replaced_with`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedSpan {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
    pub original_fragment: String,
    pub replaced_with: String,
    pub transform: String,
    pub strength: u8,
    pub signal_type: SignalType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFeature {
    Hapax,
    RareWord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
}

/// A high-attribution-signal region of the **original** text. Never refers to
/// the transformed text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSpan {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
    pub feature: RiskFeature,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubSpan {
    pub start: usize,
    pub end: usize,
    pub original_fragment: String,
}

/// An edit found by the diff engine that no transform record explains.
/// Offsets are byte ranges in the **transformed** text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSpan {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
    pub original_fragment: String,
    /// Present only when two or more raw spans were merged into this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_spans: Option<Vec<SubSpan>>,
}

// ---------------------------------------------------------------------------
// Metrics and composite indices
// ---------------------------------------------------------------------------

/// Nine lexical/structural metrics over a text snapshot. All rate fields are
/// ratios in [0, 1]; everything is rounded to 4 decimal places so that
/// byte-identical input yields byte-identical output (snapshot testing).
///
/// `sentence_count` is signed so the same shape can carry the before/after
/// delta, where fields may go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub sentence_count: i64,
    pub avg_sentence_length_tokens: f64,
    pub stdev_sentence_length_tokens: f64,
    pub punctuation_rate: f64,
    pub type_token_ratio: f64,
    pub hapax_rate: f64,
    pub stopword_rate: f64,
    pub rare_word_rate: f64,
    pub basic_ngram_uniqueness: f64,
}

/// A versioned composite score in [0, 100]. `formula_version` must change
/// whenever the weights or formula structure change; it is the
/// reproducibility contract for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexScores {
    pub formula_version: String,
    pub weights: BTreeMap<String, f64>,
    pub value_before: f64,
    pub value_after: f64,
    /// Always exactly `value_before - value_after`.
    pub delta: f64,
}

// ---------------------------------------------------------------------------
// Response bundle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmStatus {
    Used,
    Skipped,
    FailedFallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    /// Stage names in the order they actually ran.
    pub applied: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResponse {
    pub original_text: String,
    pub transformed_text: String,
    pub metrics_before: Metrics,
    pub metrics_after: Metrics,
    pub delta: Metrics,
    pub uniqueness_reduction_score: f64,
    pub sui: IndexScores,
    pub ssi: IndexScores,
    pub annotated_spans: Vec<AnnotatedSpan>,
    pub risk_annotations: Vec<RiskSpan>,
    pub trace: Trace,
    pub llm_status: LlmStatus,
    /// Cosine similarity between embeddings of original and final text,
    /// in [-1, 1]. Absent when no embedding model is configured or the
    /// embedding call fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_similarity: Option<f64>,
}
