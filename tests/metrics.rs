use stilwende::metrics::{compute_delta, compute_metrics};
use stilwende::Language;

const EN_SHORT: &str = "The quick brown fox jumps over the lazy dog. The dog barked loudly.";
const DE_SHORT: &str =
    "Der schnelle braune Fuchs springt über den faulen Hund. Der Hund bellte laut.";
const REPEAT: &str = "apple apple apple apple apple banana banana banana";
const UNIQUE: &str = "apple banana cherry date elderberry fig grape hazelnut iris jasmine";

#[test]
fn counts_two_sentences_in_en_short() {
    assert_eq!(compute_metrics(EN_SHORT, Language::En).sentence_count, 2);
}

#[test]
fn counts_two_sentences_in_de_short() {
    assert_eq!(compute_metrics(DE_SHORT, Language::De).sentence_count, 2);
}

#[test]
fn unterminated_text_is_one_sentence() {
    let m = compute_metrics("Hello world how are you", Language::En);
    assert_eq!(m.sentence_count, 1);
}

#[test]
fn ratios_stay_in_unit_interval() {
    let m = compute_metrics(EN_SHORT, Language::En);
    for (name, value) in [
        ("type_token_ratio", m.type_token_ratio),
        ("hapax_rate", m.hapax_rate),
        ("stopword_rate", m.stopword_rate),
        ("rare_word_rate", m.rare_word_rate),
        ("basic_ngram_uniqueness", m.basic_ngram_uniqueness),
    ] {
        assert!((0.0..=1.0).contains(&value), "{name} out of range: {value}");
    }
}

#[test]
fn hapax_rate_is_zero_when_every_word_repeats() {
    let m = compute_metrics(REPEAT, Language::En);
    assert_eq!(m.hapax_rate, 0.0);
}

#[test]
fn unique_text_has_higher_hapax_rate_than_repetitive_text() {
    let unique = compute_metrics(UNIQUE, Language::En);
    let repeat = compute_metrics(REPEAT, Language::En);
    assert!(unique.hapax_rate > repeat.hapax_rate);
}

#[test]
fn ttr_is_one_for_all_unique_tokens() {
    let m = compute_metrics(UNIQUE, Language::En);
    assert_eq!(m.type_token_ratio, 1.0);
}

#[test]
fn ttr_is_below_one_for_repetitive_text() {
    let m = compute_metrics(REPEAT, Language::En);
    assert!(m.type_token_ratio < 1.0);
}

#[test]
fn ngram_uniqueness_is_one_without_repeated_trigrams() {
    let m = compute_metrics(UNIQUE, Language::En);
    assert_eq!(m.basic_ngram_uniqueness, 1.0);
}

#[test]
fn ngram_uniqueness_drops_for_repetitive_text() {
    let m = compute_metrics("the cat sat on the mat and the cat sat", Language::En);
    assert!(m.basic_ngram_uniqueness < 1.0);
}

#[test]
fn stopword_rate_is_positive_for_ordinary_prose() {
    assert!(compute_metrics(EN_SHORT, Language::En).stopword_rate > 0.0);
    assert!(compute_metrics(DE_SHORT, Language::De).stopword_rate > 0.0);
}

#[test]
fn punctuation_rate_reflects_punctuation() {
    let with = compute_metrics("Hello world. How are you?", Language::En);
    let without = compute_metrics("hello world how are you", Language::En);
    assert!(with.punctuation_rate > 0.0);
    assert_eq!(without.punctuation_rate, 0.0);
}

#[test]
fn empty_input_yields_all_zeros() {
    let m = compute_metrics("", Language::En);
    assert_eq!(m.sentence_count, 0);
    assert_eq!(m.avg_sentence_length_tokens, 0.0);
    assert_eq!(m.stdev_sentence_length_tokens, 0.0);
    assert_eq!(m.punctuation_rate, 0.0);
    assert_eq!(m.type_token_ratio, 0.0);
    assert_eq!(m.hapax_rate, 0.0);
    assert_eq!(m.stopword_rate, 0.0);
    assert_eq!(m.rare_word_rate, 0.0);
    assert_eq!(m.basic_ngram_uniqueness, 0.0);
}

#[test]
fn delta_is_zero_when_before_equals_after() {
    let m = compute_metrics(EN_SHORT, Language::En);
    let d = compute_delta(&m, &m);
    assert_eq!(d.sentence_count, 0);
    assert_eq!(d.hapax_rate, 0.0);
    assert_eq!(d.type_token_ratio, 0.0);
    assert_eq!(d.basic_ngram_uniqueness, 0.0);
}

#[test]
fn hapax_delta_is_negative_for_more_repetitive_output() {
    let before = compute_metrics("apple banana cherry grape mango peach", Language::En);
    let after = compute_metrics("apple apple apple apple apple apple", Language::En);
    let d = compute_delta(&before, &after);
    assert!(d.hapax_rate < 0.0);
}

#[test]
fn ttr_delta_is_negative_for_more_repetitive_output() {
    let before = compute_metrics("alpha beta gamma delta epsilon", Language::En);
    let after = compute_metrics("alpha alpha alpha alpha alpha", Language::En);
    let d = compute_delta(&before, &after);
    assert!(d.type_token_ratio < 0.0);
}

#[test]
fn rounding_is_stable_across_runs() {
    let m1 = compute_metrics(DE_SHORT, Language::De);
    let m2 = compute_metrics(DE_SHORT, Language::De);
    assert_eq!(m1, m2);
}
