//! Post-hoc span resolution: turn relative edit records into absolute byte
//! ranges in the final text.
//!
//! The resolver keeps a monotonically advancing cursor and, for each record
//! in execution order, takes the first occurrence of `replaced_with` at or
//! after the cursor. A record whose replacement cannot be found is dropped
//! silently. Because transforms scan left to right and records are appended
//! in execution order, the sequential cursor assigns correctly in the vast
//! majority of cases. Known limitation: a replacement token that also occurs
//! naturally in the text (e.g. "many") can be attributed to the wrong
//! occurrence. This behavior is pinned; downstream tests rely on it.

use crate::types::{AnnotatedSpan, EditRecord, SignalType, SpanKind};
use crate::transforms;

/// Fixed per-transform signal classification.
fn signal_type_for(transform: &str) -> SignalType {
    match transform {
        transforms::SYNTAX_NORMALIZATION => SignalType::Structural,
        transforms::ENTITY_GENERALIZATION => SignalType::Semantic,
        transforms::NUMBERS_BUCKETING => SignalType::Semantic,
        transforms::CONTEXT_DAMPENING => SignalType::Contextual,
        transforms::LEXICAL_NEUTRALIZATION => SignalType::Lexical,
        _ => SignalType::Structural,
    }
}

pub fn resolve_spans(final_text: &str, records: &[EditRecord]) -> Vec<AnnotatedSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0usize;

    for record in records {
        if record.replaced_with.is_empty() {
            continue;
        }
        let Some(found) = final_text[cursor..].find(&record.replaced_with) else {
            continue;
        };
        let start = cursor + found;
        let end = start + record.replaced_with.len();
        spans.push(AnnotatedSpan {
            kind: SpanKind::Annotated,
            start,
            end,
            original_fragment: record.original_fragment.clone(),
            replaced_with: record.replaced_with.clone(),
            transform: record.transform.clone(),
            strength: record.strength,
            signal_type: signal_type_for(&record.transform),
        });
        cursor = end;
    }

    spans
}
