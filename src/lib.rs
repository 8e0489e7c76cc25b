//! Deterministic stylometric signal reduction for German and English prose.
//!
//! The core is a strength-gated chain of regex transforms (syntax
//! normalization, entity generalization, number bucketing, context dampening,
//! lexical neutralization) plus before/after stylometric metrics, versioned
//! composite indices, span annotation, and risk annotation. An optional
//! LLM collaborator can refine the deterministic output; the pipeline is
//! byte-for-byte reproducible whenever it is disabled.

pub mod diff;
pub mod error;
pub mod indices;
pub mod llm;
pub mod metrics;
pub mod pipeline;
pub mod resolve;
pub mod risk;
pub mod transforms;
pub mod types;
pub mod wordlists;

pub use error::PipelineError;
pub use llm::{LlmClient, OllamaClient};
pub use pipeline::{run_pipeline, MAX_STRENGTH, MAX_TEXT_CHARS};
pub use types::{
    AnnotatedSpan, DiffSpan, EditRecord, IndexScores, Language, LlmConfig, LlmStatus, Metrics,
    RiskFeature, RiskLevel, RiskSpan, SignalType, SpanKind, SubSpan, Trace, TransformRequest,
    TransformResponse,
};
