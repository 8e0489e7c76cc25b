use stilwende::diff::{
    compute_diff_spans, lcs_table, merge_nearby, paragraph_ranges, word_diff_spans, word_tokenize,
};
use stilwende::{DiffSpan, SpanKind};

fn span(start: usize, end: usize, fragment: &str) -> DiffSpan {
    DiffSpan {
        kind: SpanKind::Diff,
        start,
        end,
        original_fragment: fragment.to_string(),
        sub_spans: None,
    }
}

// ---------------------------------------------------------------------------
// word_tokenize
// ---------------------------------------------------------------------------

#[test]
fn tokenizes_into_word_and_whitespace_runs() {
    assert_eq!(word_tokenize("hello world"), vec!["hello", " ", "world"]);
}

#[test]
fn keeps_multiple_spaces_as_one_token() {
    assert_eq!(word_tokenize("a  b"), vec!["a", "  ", "b"]);
}

#[test]
fn tokenizes_empty_string_to_nothing() {
    assert!(word_tokenize("").is_empty());
}

#[test]
fn keeps_leading_and_trailing_whitespace_tokens() {
    let toks = word_tokenize(" hello ");
    assert_eq!(toks.first(), Some(&" "));
    assert_eq!(toks.last(), Some(&" "));
}

#[test]
fn tokens_concatenate_back_to_the_input() {
    let text = "  ein  Satz\nmit   Lücken ";
    assert_eq!(word_tokenize(text).concat(), text);
}

// ---------------------------------------------------------------------------
// word_diff_spans
// ---------------------------------------------------------------------------

#[test]
fn identical_texts_produce_no_spans() {
    assert!(word_diff_spans("hello world", "hello world", 0).is_empty());
}

#[test]
fn detects_a_single_word_replacement() {
    let orig = "the cat sat";
    let trans = "the dog sat";
    let spans = word_diff_spans(orig, trans, 0);
    assert_eq!(spans.len(), 1);
    assert_eq!(&trans[spans[0].start..spans[0].end], "dog");
    assert_eq!(spans[0].original_fragment, "cat");
}

#[test]
fn offset_shifts_span_positions() {
    let spans = word_diff_spans("old word", "new word", 50);
    assert!(spans[0].start >= 50);
}

#[test]
fn captures_original_fragment_for_replaced_words() {
    let spans = word_diff_spans("sehr außergewöhnlich", "sehr bemerkenswert", 0);
    assert!(!spans.is_empty());
    assert_eq!(spans[0].original_fragment, "außergewöhnlich");
}

#[test]
fn span_bounds_are_valid_in_the_transformed_text() {
    let trans = "the slow red fox";
    for s in word_diff_spans("the quick brown fox", trans, 0) {
        assert!(s.start < s.end);
        assert!(s.end <= trans.len());
    }
}

#[test]
fn oversized_paragraphs_produce_no_spans() {
    let long: Vec<String> = (0..900).map(|i| format!("word{i}")).collect();
    let long = long.join(" ");
    let longer = format!("{long} extra");
    assert!(word_diff_spans(&long, &longer, 0).is_empty());
}

// ---------------------------------------------------------------------------
// paragraph_ranges
// ---------------------------------------------------------------------------

#[test]
fn unbroken_text_is_one_paragraph() {
    let ranges = paragraph_ranges("One sentence only.");
    assert_eq!(ranges, vec![("One sentence only.", 0)]);
}

#[test]
fn splits_on_double_newline() {
    let ranges = paragraph_ranges("Para one.\n\nPara two.");
    assert_eq!(ranges, vec![("Para one.", 0), ("Para two.", 11)]);
}

#[test]
fn start_offsets_slice_back_to_paragraphs() {
    let text = "A\n\nB\n\nC";
    let ranges = paragraph_ranges(text);
    assert_eq!(ranges.len(), 3);
    for (para, start) in ranges {
        assert_eq!(&text[start..start + para.len()], para);
    }
}

#[test]
fn skips_blank_only_paragraphs() {
    assert_eq!(paragraph_ranges("A\n\n   \n\nB").len(), 2);
}

// ---------------------------------------------------------------------------
// merge_nearby
// ---------------------------------------------------------------------------

#[test]
fn merging_empty_input_is_empty() {
    assert!(merge_nearby(Vec::new(), 20).is_empty());
}

#[test]
fn does_not_merge_spans_beyond_the_gap() {
    let merged = merge_nearby(vec![span(0, 3, "foo"), span(30, 33, "bar")], 20);
    assert_eq!(merged.len(), 2);
}

#[test]
fn merges_spans_within_the_gap() {
    let merged = merge_nearby(vec![span(0, 3, "foo"), span(10, 13, "bar")], 20);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start, 0);
    assert_eq!(merged[0].end, 13);
}

#[test]
fn merged_span_records_constituents_as_sub_spans() {
    let merged = merge_nearby(vec![span(0, 3, "foo"), span(10, 13, "bar")], 20);
    let subs = merged[0].sub_spans.as_ref().unwrap();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].original_fragment, "foo");
    assert_eq!(subs[1].original_fragment, "bar");
}

#[test]
fn single_span_keeps_sub_spans_absent() {
    let merged = merge_nearby(vec![span(0, 3, "x")], 20);
    assert!(merged[0].sub_spans.is_none());
}

// ---------------------------------------------------------------------------
// compute_diff_spans
// ---------------------------------------------------------------------------

#[test]
fn identical_full_texts_produce_no_spans() {
    let text = "The quick brown fox jumps over the lazy dog.";
    assert!(compute_diff_spans(text, text).is_empty());
}

#[test]
fn finds_changed_words_in_a_single_paragraph() {
    let trans = "The slow red fox";
    let spans = compute_diff_spans("The quick brown fox", trans);
    assert!(!spans.is_empty());
    for s in &spans {
        assert!(!trans[s.start..s.end].trim().is_empty());
    }
}

#[test]
fn paragraphs_do_not_cross_contaminate() {
    // "kurzen" appears in both original paragraphs but only in paragraph 2 of
    // the transformed text. A full-text diff would match it as equal across
    // the boundary; the paragraph-scoped diff must keep every span in
    // paragraph 1.
    let orig = "Ein kurzen Satz hier.\n\nNoch ein kurzen Satz da.";
    let trans = "Ein langer Satz hier.\n\nNoch ein kurzen Satz da.";
    let first_para_end = trans.find("\n\n").unwrap();
    for s in compute_diff_spans(orig, trans) {
        assert!(s.start < first_para_end, "span leaked past paragraph 1");
    }
}

#[test]
fn lcs_table_counts_common_tokens() {
    let a = word_tokenize("the quick brown fox");
    let b = word_tokenize("the slow red fox");
    let dp = lcs_table(&a, &b);
    // "the", " ", " ", " ", "fox" are common in order.
    assert_eq!(dp[a.len()][b.len()], 5);
}
