//! Pipeline orchestration: validate, transform, measure, annotate, assemble.

use crate::error::PipelineError;
use crate::indices;
use crate::llm::{self, LlmClient};
use crate::metrics;
use crate::resolve;
use crate::risk;
use crate::transforms::CHAIN;
use crate::types::{LlmStatus, Trace, TransformRequest, TransformResponse};

/// Hard input cap, counted in chars. The transform regexes and the metrics
/// passes are all fine at this size; past it, response latency degrades.
pub const MAX_TEXT_CHARS: usize = 100_000;

pub const MAX_STRENGTH: u8 = 3;

pub const LLM_TRANSFORM: &str = "llm_transform";
pub const LLM_FAILED_FALLBACK: &str = "llm_failed_fallback";

pub fn run_pipeline(
    request: &TransformRequest,
    client: Option<&dyn LlmClient>,
) -> Result<TransformResponse, PipelineError> {
    let text = request.text.as_str();
    if text.trim().is_empty() {
        return Err(PipelineError::EmptyText);
    }
    let char_count = text.chars().count();
    if char_count > MAX_TEXT_CHARS {
        return Err(PipelineError::TextTooLong {
            max: MAX_TEXT_CHARS,
            got: char_count,
        });
    }
    if request.strength > MAX_STRENGTH {
        return Err(PipelineError::InvalidStrength(request.strength));
    }

    let language = request.language;
    let metrics_before = metrics::compute_metrics(text, language);

    let outcome = CHAIN.run(text, language, request.strength);
    let mut current = outcome.final_text;
    let mut applied = outcome.applied;

    // The LLM sees the deterministic output, never the original: entities are
    // already replaced by placeholders at that point.
    let llm_status = if let (true, Some(client)) = (request.llm.enabled, client) {
        let model = request.llm.model.as_deref().unwrap_or(llm::DEFAULT_MODEL);
        let prompt = llm::build_prompt(&current, language, request.strength);
        match client.generate(&prompt, model) {
            Ok(raw) => match llm::parse_llm_output(&raw) {
                Some(refined) => {
                    current = refined;
                    applied.push(LLM_TRANSFORM.to_string());
                    LlmStatus::Used
                }
                None => {
                    applied.push(LLM_FAILED_FALLBACK.to_string());
                    LlmStatus::FailedFallback
                }
            },
            Err(err) => {
                tracing::warn!(%err, "llm request failed");
                applied.push(LLM_FAILED_FALLBACK.to_string());
                LlmStatus::FailedFallback
            }
        }
    } else {
        LlmStatus::Skipped
    };

    let metrics_after = metrics::compute_metrics(&current, language);
    let delta = metrics::compute_delta(&metrics_before, &metrics_after);
    let uniqueness_reduction_score =
        indices::compute_reduction_score(&metrics_before, &metrics_after);
    let sui = indices::compute_sui(&metrics_before, &metrics_after);
    let ssi = indices::compute_ssi(&metrics_before, &metrics_after);

    let annotated_spans = resolve::resolve_spans(&current, &outcome.edit_records);
    let risk_annotations = risk::annotate_risk(text, language);

    // Embeddings are gated on the embedding model being configured, not on
    // llm.enabled; a failure here drops the field rather than the response.
    let semantic_similarity = match (&request.llm.embedding_model, client) {
        (Some(embedding_model), Some(client)) => {
            let before = client.embed(text, embedding_model);
            let after = client.embed(&current, embedding_model);
            match (before, after) {
                (Ok(b), Ok(a)) => Some(llm::cosine_similarity(&b, &a)),
                (Err(err), _) | (_, Err(err)) => {
                    tracing::warn!(%err, "embedding failed, omitting similarity");
                    None
                }
            }
        }
        _ => None,
    };

    Ok(TransformResponse {
        original_text: text.to_string(),
        transformed_text: current,
        metrics_before,
        metrics_after,
        delta,
        uniqueness_reduction_score,
        sui,
        ssi,
        annotated_spans,
        risk_annotations,
        trace: Trace { applied },
        llm_status,
        semantic_similarity,
    })
}
