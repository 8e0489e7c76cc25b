//! Word-level diff between original and transformed text, producing spans in
//! transformed-text byte coordinates.
//!
//! The diff runs per paragraph so that common words in unrelated paragraphs
//! are never matched as equal across paragraph boundaries. Paragraphs beyond
//! 800 tokens are skipped (the O(m*n) LCS table gets too large); the pipeline
//! prefers no diff spans over a stalled response.

use crate::types::{DiffSpan, SpanKind, SubSpan};

/// Maximum token count per side before a paragraph's diff is skipped.
const MAX_DIFF_TOKENS: usize = 800;

/// Byte gap under which adjacent spans are merged into one with sub-spans.
const MERGE_GAP: usize = 20;

/// Interleaved runs of non-whitespace and whitespace, covering the whole
/// input. Whitespace runs are tokens too, so offsets stay exact.
pub fn word_tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut in_space = false;
    for (pos, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        if pos == 0 {
            in_space = space;
        } else if space != in_space {
            tokens.push(&text[start..pos]);
            start = pos;
            in_space = space;
        }
    }
    if !text.is_empty() {
        tokens.push(&text[start..]);
    }
    tokens
}

pub fn lcs_table(a: &[&str], b: &[&str]) -> Vec<Vec<usize>> {
    let m = a.len();
    let n = b.len();
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Equal,
    Insert,
    Delete,
}

/// Backtrack the LCS table into the full op sequence, aligned to `b` (the
/// transformed side). Delete ops carry the original token and consume no
/// b-slot. Ties prefer insert, which groups replacements as delete-then-insert.
fn backtrack_ops<'a>(dp: &[Vec<usize>], a: &[&'a str], b: &[&'a str]) -> Vec<(Op, &'a str)> {
    let mut ops = Vec::new();
    let mut i = a.len();
    let mut j = b.len();
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            ops.push((Op::Equal, b[j - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i][j - 1] >= dp[i - 1][j]) {
            ops.push((Op::Insert, b[j - 1]));
            j -= 1;
        } else {
            ops.push((Op::Delete, a[i - 1]));
            i -= 1;
        }
    }
    ops.reverse();
    ops
}

/// Paragraphs split on blank lines (`\n\n` or more), each with its byte
/// offset in the source. Whitespace-only paragraphs are dropped.
pub fn paragraph_ranges(text: &str) -> Vec<(&str, usize)> {
    let mut ranges = Vec::new();
    let mut last_end = 0usize;
    let bytes = text.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == b'\n' {
                j += 1;
            }
            if j - i >= 2 {
                let para = &text[last_end..i];
                if !para.trim().is_empty() {
                    ranges.push((para, last_end));
                }
                last_end = j;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    let tail = &text[last_end..];
    if !tail.trim().is_empty() {
        ranges.push((tail, last_end));
    }
    ranges
}

/// Raw (un-merged) diff spans for a single paragraph. `offset` is the
/// paragraph's start in the full transformed text.
pub fn word_diff_spans(orig: &str, trans: &str, offset: usize) -> Vec<DiffSpan> {
    let orig_toks = word_tokenize(orig);
    let trans_toks = word_tokenize(trans);
    if orig_toks.len() > MAX_DIFF_TOKENS || trans_toks.len() > MAX_DIFF_TOKENS {
        return Vec::new();
    }

    let dp = lcs_table(&orig_toks, &trans_toks);
    let ops = backtrack_ops(&dp, &orig_toks, &trans_toks);

    let mut raw = Vec::new();
    let mut cursor = offset;
    let mut span_start: Option<usize> = None;
    // Deleted tokens accumulated ahead of (or inside) an insert cluster.
    let mut pending_orig = String::new();

    for (op, tok) in ops {
        if op == Op::Delete {
            pending_orig.push_str(tok);
            continue;
        }

        let is_space = tok.chars().all(char::is_whitespace);

        if op == Op::Insert && !is_space {
            if span_start.is_none() {
                span_start = Some(cursor);
            }
        } else if let Some(start) = span_start.take() {
            raw.push(DiffSpan {
                kind: SpanKind::Diff,
                start,
                end: cursor,
                original_fragment: pending_orig.trim().to_string(),
                sub_spans: None,
            });
            pending_orig.clear();
        } else {
            pending_orig.clear();
        }
        cursor += tok.len();
    }
    if let Some(start) = span_start {
        raw.push(DiffSpan {
            kind: SpanKind::Diff,
            start,
            end: cursor,
            original_fragment: pending_orig.trim().to_string(),
            sub_spans: None,
        });
    }

    raw
}

/// Merge spans whose gap is at most `gap` bytes. The merged span keeps the
/// first fragment as its own and records every constituent as a sub-span.
pub fn merge_nearby(spans: Vec<DiffSpan>, gap: usize) -> Vec<DiffSpan> {
    let mut merged: Vec<DiffSpan> = Vec::new();
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start.saturating_sub(last.end) <= gap => {
                let subs = last.sub_spans.get_or_insert_with(|| {
                    vec![SubSpan {
                        start: last.start,
                        end: last.end,
                        original_fragment: last.original_fragment.clone(),
                    }]
                });
                subs.push(SubSpan {
                    start: span.start,
                    end: span.end,
                    original_fragment: span.original_fragment,
                });
                last.end = span.end;
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Paragraph-scoped diff between the original and transformed texts, merged
/// with a 20-byte gap. Falls back to one full-text diff when the transformed
/// text has at most one paragraph.
pub fn compute_diff_spans(original: &str, transformed: &str) -> Vec<DiffSpan> {
    let orig_paras = paragraph_ranges(original);
    let tran_paras = paragraph_ranges(transformed);

    let all = if tran_paras.len() <= 1 {
        word_diff_spans(original, transformed, 0)
    } else {
        let mut spans = Vec::new();
        for (i, (tp_text, tp_start)) in tran_paras.iter().enumerate() {
            let orig_text = orig_paras.get(i).map(|(t, _)| *t).unwrap_or("");
            spans.extend(word_diff_spans(orig_text, tp_text, *tp_start));
        }
        spans
    };

    merge_nearby(all, MERGE_GAP)
}
