//! The deterministic transform chain: five pure, language-aware text
//! transforms gated by a cumulative strength level.
//!
//! Each transform maps `(text, language)` to the mutated text plus a list of
//! relative edits. Edits deliberately carry no absolute offsets; later stages
//! keep mutating the text, so positions are resolved post-hoc against the
//! final text (see `resolve`).

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::types::{EditRecord, Language};
use crate::wordlists;

pub const SYNTAX_NORMALIZATION: &str = "syntax_normalization";
pub const ENTITY_GENERALIZATION: &str = "entity_generalization";
pub const NUMBERS_BUCKETING: &str = "numbers_bucketing";
pub const CONTEXT_DAMPENING: &str = "context_dampening";
pub const LEXICAL_NEUTRALIZATION: &str = "lexical_neutralization";

/// One relative edit made by a transform; the chain stamps it into an
/// [`EditRecord`] with the stage name and strength tier.
#[derive(Debug, Clone)]
pub struct Edit {
    pub original: String,
    pub replaced: String,
}

pub struct TransformOutput {
    pub text: String,
    pub edits: Vec<Edit>,
}

/// A named, pure, language-aware text transform. Implementations hold their
/// word lists and compiled patterns as immutable construction data.
pub trait Transform {
    fn name(&self) -> &'static str;
    fn apply(&self, text: &str, language: Language) -> TransformOutput;
}

fn escape_all(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

// ---------------------------------------------------------------------------
// Syntax normalization (strength 0)
// ---------------------------------------------------------------------------

/// Minimal surface cleanup: whitespace, punctuation spacing, newline runs,
/// ellipsis variants. No word replacements. Only the ellipsis collapse is a
/// surface-visible, attributable change, so it is the only recorded edit.
pub struct SyntaxNormalization {
    horizontal_ws: Regex,
    space_before_punct: Regex,
    punct_then_letter: Regex,
    newline_runs: Regex,
    ellipsis: Regex,
}

impl Default for SyntaxNormalization {
    fn default() -> Self {
        Self {
            horizontal_ws: Regex::new(r"[ \t]+").unwrap(),
            space_before_punct: Regex::new(r"\s+([.,;:!?])").unwrap(),
            punct_then_letter: Regex::new(r"([.,;:!?])([a-zA-ZäöüßÄÖÜ])").unwrap(),
            newline_runs: Regex::new(r"\n{3,}").unwrap(),
            ellipsis: Regex::new(r"\.{2,}").unwrap(),
        }
    }
}

impl Transform for SyntaxNormalization {
    fn name(&self) -> &'static str {
        SYNTAX_NORMALIZATION
    }

    fn apply(&self, text: &str, _language: Language) -> TransformOutput {
        let mut edits = Vec::new();
        let step = self.horizontal_ws.replace_all(text, " ");
        let step = self.space_before_punct.replace_all(&step, "$1");
        let step = self.punct_then_letter.replace_all(&step, "$1 $2");
        let step = self.newline_runs.replace_all(&step, "\n\n");
        let step = self.ellipsis.replace_all(&step, |caps: &Captures| {
            edits.push(Edit {
                original: caps[0].to_string(),
                replaced: ".".to_string(),
            });
            "."
        });
        TransformOutput {
            text: step.trim().to_string(),
            edits,
        }
    }
}

// ---------------------------------------------------------------------------
// Entity generalization (strength 1)
// ---------------------------------------------------------------------------

/// Conservative heuristic entity generalization, no NLP model. Recognized
/// legal org suffixes, a curated city list and a curated first-name list,
/// applied in that fixed order. Placeholders contain no capitalized word
/// pairs or list entries, so later passes never re-match earlier output.
/// The false-negative rate is intentionally high.
pub struct EntityGeneralization {
    org_suffix: Regex,
    cities_de: Regex,
    cities_en: Regex,
    full_name: Regex,
    first_names: &'static HashSet<&'static str>,
}

impl Default for EntityGeneralization {
    fn default() -> Self {
        let mut all_cities: Vec<&str> = wordlists::CITIES_DE.to_vec();
        all_cities.extend_from_slice(wordlists::CITIES_EN);
        Self {
            org_suffix: Regex::new(
                r"\b[A-ZÜÖÄ][a-zA-ZäöüßÄÖÜ]+(?:\s+(?:&\s+)?[A-ZÜÖÄ][a-zA-ZäöüßÄÖÜ]+)?\s+(?:GmbH|AG|Ltd\.?|LLC|Corp\.?|Inc\.?|SE|KG|OHG|gGmbH|PLC|GbR)\b",
            )
            .unwrap(),
            cities_de: Regex::new(&format!(r"\b(?:{})\b", escape_all(wordlists::CITIES_DE)))
                .unwrap(),
            cities_en: Regex::new(&format!(r"\b(?:{})\b", escape_all(&all_cities))).unwrap(),
            full_name: Regex::new(r"\b([A-ZÜÖÄ][a-züöäßÄÖÜ]+)\s+([A-ZÜÖÄ][a-züöäßÄÖÜ]+)\b")
                .unwrap(),
            first_names: &wordlists::FIRST_NAMES,
        }
    }
}

impl Transform for EntityGeneralization {
    fn name(&self) -> &'static str {
        ENTITY_GENERALIZATION
    }

    fn apply(&self, text: &str, language: Language) -> TransformOutput {
        let mut edits = Vec::new();

        // 1. Organizations: word(s) + recognized legal suffix
        let step = self.org_suffix.replace_all(text, |caps: &Captures| {
            edits.push(Edit {
                original: caps[0].to_string(),
                replaced: "[ORG]".to_string(),
            });
            "[ORG]"
        });

        // 2. Known cities. German input uses the DE list only; English input
        //    uses both lists, since English text mentions German cities too.
        let city_re = match language {
            Language::De => &self.cities_de,
            Language::En => &self.cities_en,
        };
        let step = city_re.replace_all(&step, |caps: &Captures| {
            edits.push(Edit {
                original: caps[0].to_string(),
                replaced: "[CITY]".to_string(),
            });
            "[CITY]"
        });

        // 3. Full-name pattern, only when the first word is a known given name
        let step = self.full_name.replace_all(&step, |caps: &Captures| {
            if self.first_names.contains(&caps[1]) {
                edits.push(Edit {
                    original: caps[0].to_string(),
                    replaced: "[PERSON]".to_string(),
                });
                "[PERSON]".to_string()
            } else {
                caps[0].to_string()
            }
        });

        TransformOutput {
            text: step.into_owned(),
            edits,
        }
    }
}

// ---------------------------------------------------------------------------
// Numbers bucketing (strength 1)
// ---------------------------------------------------------------------------

/// Maps precise counts and temporal expressions to coarse buckets. Dates and
/// years become a localized "some time ago" phrase; remaining integers are
/// bucketed by magnitude. Dates must run before years, and years before bare
/// integers, so a year is never re-matched as a plain number.
pub struct NumbersBucketing {
    date_iso: Regex,
    date_eu: Regex,
    year: Regex,
    integer: Regex,
}

impl Default for NumbersBucketing {
    fn default() -> Self {
        Self {
            date_iso: Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
            date_eu: Regex::new(r"\b\d{1,2}[./]\d{1,2}[./]\d{2,4}\b").unwrap(),
            year: Regex::new(r"\b(?:1[0-9]{3}|20[0-9]{2})\b").unwrap(),
            integer: Regex::new(r"\b\d+\b").unwrap(),
        }
    }
}

impl NumbersBucketing {
    fn replace_temporal(&self, re: &Regex, text: &str, label: &str, edits: &mut Vec<Edit>) -> String {
        re.replace_all(text, |caps: &Captures| {
            edits.push(Edit {
                original: caps[0].to_string(),
                replaced: label.to_string(),
            });
            label.to_string()
        })
        .into_owned()
    }
}

impl Transform for NumbersBucketing {
    fn name(&self) -> &'static str {
        NUMBERS_BUCKETING
    }

    fn apply(&self, text: &str, language: Language) -> TransformOutput {
        let labels = wordlists::bucket_labels(language);
        let mut edits = Vec::new();

        let step = self.replace_temporal(&self.date_iso, text, labels.time_ago, &mut edits);
        let step = self.replace_temporal(&self.date_eu, &step, labels.time_ago, &mut edits);
        let step = self.replace_temporal(&self.year, &step, labels.time_ago, &mut edits);

        let step = self.integer.replace_all(&step, |caps: &Captures| {
            let label = match caps[0].parse::<u64>() {
                Ok(n) if n <= 2 => labels.some,
                Ok(n) if n <= 9 => labels.several,
                _ => labels.many,
            };
            edits.push(Edit {
                original: caps[0].to_string(),
                replaced: label.to_string(),
            });
            label
        });

        TransformOutput {
            text: step.into_owned(),
            edits,
        }
    }
}

// ---------------------------------------------------------------------------
// Context dampening (strength 2)
// ---------------------------------------------------------------------------

const PRONOUN_WINDOW: i64 = 200; // chars
const PRONOUN_MAX_OCCURRENCES: u32 = 2;

/// Two conservative measures: first-person pronoun repetition is suppressed
/// (beyond 2 occurrences of the same form within a 200-character window the
/// form is replaced by a neutral pronoun), and adjacent redundant discourse
/// marker pairs are collapsed. No semantic inversion; prefers false negatives.
pub struct ContextDampening {
    pronouns_de: Vec<Regex>,
    pronouns_en: Vec<Regex>,
    discourse_de: Vec<(Regex, &'static str)>,
    discourse_en: Vec<(Regex, &'static str)>,
}

fn compile_pronouns(forms: &[&str]) -> Vec<Regex> {
    // Case-sensitive on purpose: each surface form is tracked separately, and
    // a capitalized sentence-initial form is a different surface form.
    forms
        .iter()
        .map(|p| Regex::new(&format!(r"\b{}\b", regex::escape(p))).unwrap())
        .collect()
}

fn compile_discourse(pairs: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    pairs
        .iter()
        .map(|(pat, repl)| (Regex::new(&format!("(?i){pat}")).unwrap(), *repl))
        .collect()
}

impl Default for ContextDampening {
    fn default() -> Self {
        Self {
            pronouns_de: compile_pronouns(wordlists::PRONOUNS_DE),
            pronouns_en: compile_pronouns(wordlists::PRONOUNS_EN),
            discourse_de: compile_discourse(wordlists::DISCOURSE_PAIRS_DE),
            discourse_en: compile_discourse(wordlists::DISCOURSE_PAIRS_EN),
        }
    }
}

/// Replace occurrences of one pronoun form once more than
/// `PRONOUN_MAX_OCCURRENCES` of it fall within `PRONOUN_WINDOW` of each other.
/// The counter resets when the gap since the last occurrence exceeds the
/// window.
fn damp_pronoun(text: &str, form: &Regex, replacement: &str, edits: &mut Vec<Edit>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_end = 0usize;
    let mut last_offset: i64 = -PRONOUN_WINDOW - 1;
    let mut count = 0u32;
    // The window is measured in chars; rebuilding the string stays byte-based.
    let mut counted_upto = 0usize;
    let mut chars_before = 0i64;

    for m in form.find_iter(text) {
        chars_before += text[counted_upto..m.start()].chars().count() as i64;
        counted_upto = m.start();
        let offset = chars_before;
        if offset - last_offset > PRONOUN_WINDOW {
            count = 0;
        }
        count += 1;
        last_offset = offset;

        out.push_str(&text[prev_end..m.start()]);
        if count > PRONOUN_MAX_OCCURRENCES {
            out.push_str(replacement);
            edits.push(Edit {
                original: m.as_str().to_string(),
                replaced: replacement.to_string(),
            });
        } else {
            out.push_str(m.as_str());
        }
        prev_end = m.end();
    }
    out.push_str(&text[prev_end..]);
    out
}

impl Transform for ContextDampening {
    fn name(&self) -> &'static str {
        CONTEXT_DAMPENING
    }

    fn apply(&self, text: &str, language: Language) -> TransformOutput {
        let (pronouns, replacement, pairs) = match language {
            Language::De => (&self.pronouns_de, "man", &self.discourse_de),
            Language::En => (&self.pronouns_en, "one", &self.discourse_en),
        };

        let mut edits = Vec::new();
        let mut current = text.to_string();
        for form in pronouns {
            current = damp_pronoun(&current, form, replacement, &mut edits);
        }

        for (pattern, repl) in pairs {
            current = pattern
                .replace_all(&current, |caps: &Captures| {
                    edits.push(Edit {
                        original: caps[0].to_string(),
                        replaced: repl.to_string(),
                    });
                    *repl
                })
                .into_owned();
        }

        TransformOutput {
            text: current,
            edits,
        }
    }
}

// ---------------------------------------------------------------------------
// Lexical neutralization (strength 3)
// ---------------------------------------------------------------------------

/// Replaces high-intensity evaluative words with neutral equivalents from a
/// static per-language map. Matches exact word boundaries in base form only;
/// inflected forms are deliberately missed rather than risked. Preserves the
/// capitalization of the matched word's first letter.
pub struct LexicalNeutralization {
    synonyms_de: Vec<(Regex, &'static str)>,
    synonyms_en: Vec<(Regex, &'static str)>,
}

fn compile_synonyms(map: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    map.iter()
        .map(|(rare, neutral)| {
            (
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(rare))).unwrap(),
                *neutral,
            )
        })
        .collect()
}

fn preserve_case(original: &str, replacement: &str) -> String {
    let capitalized = original.chars().next().is_some_and(|c| c.is_uppercase());
    if capitalized {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}

impl Default for LexicalNeutralization {
    fn default() -> Self {
        Self {
            synonyms_de: compile_synonyms(wordlists::SYNONYMS_DE),
            synonyms_en: compile_synonyms(wordlists::SYNONYMS_EN),
        }
    }
}

impl Transform for LexicalNeutralization {
    fn name(&self) -> &'static str {
        LEXICAL_NEUTRALIZATION
    }

    fn apply(&self, text: &str, language: Language) -> TransformOutput {
        let synonyms = match language {
            Language::De => &self.synonyms_de,
            Language::En => &self.synonyms_en,
        };

        let mut edits = Vec::new();
        let mut current = text.to_string();
        for (pattern, neutral) in synonyms {
            current = pattern
                .replace_all(&current, |caps: &Captures| {
                    let replaced = preserve_case(&caps[0], neutral);
                    edits.push(Edit {
                        original: caps[0].to_string(),
                        replaced: replaced.clone(),
                    });
                    replaced
                })
                .into_owned();
        }

        TransformOutput {
            text: current,
            edits,
        }
    }
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

pub struct ChainOutcome {
    pub final_text: String,
    pub edit_records: Vec<EditRecord>,
    /// Stage names in execution order. For strengths m < n the trace at m is
    /// always a prefix (hence subset) of the trace at n.
    pub applied: Vec<String>,
}

/// An explicit ordered list of `(transform, minimum strength)` pairs. The
/// runner filters and folds over this list instead of branching on strength
/// inline, so inserting a stage at a new tier is a one-line change.
pub struct TransformChain {
    stages: Vec<(Box<dyn Transform + Send + Sync>, u8)>,
}

impl Default for TransformChain {
    fn default() -> Self {
        Self {
            stages: vec![
                (Box::new(SyntaxNormalization::default()) as _, 0),
                (Box::new(EntityGeneralization::default()) as _, 1),
                (Box::new(NumbersBucketing::default()) as _, 1),
                (Box::new(ContextDampening::default()) as _, 2),
                (Box::new(LexicalNeutralization::default()) as _, 3),
            ],
        }
    }
}

/// Lazily built shared chain; all stages are stateless after construction.
pub static CHAIN: Lazy<TransformChain> = Lazy::new(TransformChain::default);

impl TransformChain {
    /// Runs every stage whose gate is at or below `strength`, left to right,
    /// each stage consuming the previous stage's output. Edit records are
    /// appended in execution order and stamped with the stage's gate tier.
    pub fn run(&self, text: &str, language: Language, strength: u8) -> ChainOutcome {
        let mut current = text.to_string();
        let mut edit_records = Vec::new();
        let mut applied = Vec::new();

        for (stage, gate) in &self.stages {
            if strength < *gate {
                continue;
            }
            let output = stage.apply(&current, language);
            current = output.text;
            edit_records.extend(output.edits.into_iter().map(|edit| EditRecord {
                original_fragment: edit.original,
                replaced_with: edit.replaced,
                transform: stage.name().to_string(),
                strength: *gate,
            }));
            applied.push(stage.name().to_string());
        }

        ChainOutcome {
            final_text: current,
            edit_records,
            applied,
        }
    }
}
