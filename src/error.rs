use thiserror::Error;

/// Errors raised at the pipeline boundary, before any transform runs.
///
/// The transforms themselves are total over valid strings; the span resolver
/// and diff engine degrade (drop records, skip paragraphs) instead of failing.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("text must be a non-empty string")]
    EmptyText,

    #[error("text exceeds the maximum length of {max} characters (got {got})")]
    TextTooLong { max: usize, got: usize },

    #[error("strength must be between 0 and 3 (got {0})")]
    InvalidStrength(u8),
}
