//! Optional LLM refinement stage and embedding-based similarity check,
//! backed by a local Ollama server.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::Language;

pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

const TIMEOUT: Duration = Duration::from_secs(30);

/// Text generation plus embeddings. Object-safe so the pipeline can take a
/// mock in tests.
pub trait LlmClient {
    fn generate(&self, prompt: &str, model: &str) -> Result<String>;
    fn embed(&self, text: &str, model: &str) -> Result<Vec<f64>>;
}

// ---------------------------------------------------------------------------
// Prompt
// ---------------------------------------------------------------------------

/// Three instruction tiers, cumulative in spirit: 1 touches only obvious
/// stylistic signals, 2 adds vocabulary and sentence-length normalization,
/// 3 is full aggressive lexical neutralization.
pub fn build_prompt(text: &str, language: Language, strength: u8) -> String {
    let lang_note = match language {
        Language::De => "Antworte auf Deutsch. Keine Erklärungen.",
        Language::En => "Respond in English. No explanations.",
    };

    let instructions: &[&str] = if strength >= 3 {
        &[
            "- Replace ALL unusual, rare, or infrequent words with common everyday equivalents.",
            "  Where multiple synonyms exist, always pick the most frequent/common one.",
            "- Normalize sentence lengths aggressively: split long sentences, expand short ones",
            "  so all sentences are closer to average length — without adding new information.",
            "- Reduce distinctive vocabulary: never use the same uncommon word twice;",
            "  prefer generic phrasing over specific or idiosyncratic expressions.",
            "- Replace emphatic constructions (sehr, wirklich, absolut, extremely, truly)",
            "  with neutral phrasing or omit them entirely where meaning is preserved.",
            "- Prefer high-frequency function words over rare content words wherever possible.",
        ]
    } else if strength >= 2 {
        &[
            "- Replace ALL adjectives and adverbs that sound elevated, literary, or unusual",
            "  with simple, common everyday alternatives.",
            "  Examples: \"phänomenal\"→\"gut\", \"außergewöhnlich\"→\"bemerkenswert\",",
            "  \"tremendous\"→\"large\", \"extraordinary\"→\"notable\".",
            "- Replace rare or infrequent content words with their most common synonyms.",
            "  When in doubt, use the simpler, more generic word.",
            "- Normalize sentence lengths: aim for 10–18 words per sentence.",
            "  Split sentences that exceed 25 words; join or expand those under 6 words.",
            "  Do not add new facts — rephrase only.",
        ]
    } else {
        &[
            "- Replace words or short phrases that carry strong stylistic signals",
            "  (intensifiers, rare vocabulary, idiosyncratic phrasing).",
            "- Keep sentence structure and length close to the original.",
        ]
    };

    let mut lines = vec![
        "You are a text editor reducing stylistic fingerprints. Rewrite the text below",
        "so it sounds natural and generic while minimizing distinctive language patterns.",
        "",
        "Rules:",
    ];
    lines.extend_from_slice(instructions);
    let lang_line = format!("- {lang_note}");
    lines.extend_from_slice(&[
        "- Tokens in brackets like [PERSON], [CITY], [ORG] are placeholders.",
        "  Keep them exactly as-is — do NOT remove or rephrase them.",
        "- Do NOT add new information, facts, or entities.",
        "- Do NOT add commentary, meta-text, or explanations.",
        "- Preserve the original language.",
        &lang_line,
        "- Respond ONLY with valid JSON: {\"transformedText\":\"...\"}",
        "",
        "Text:",
        text,
    ]);
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Output parsing
// ---------------------------------------------------------------------------

static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^```(?:json)?\s*").unwrap());
static FENCE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*```\s*$").unwrap());

#[derive(Deserialize)]
struct LlmOutput {
    #[serde(rename = "transformedText")]
    transformed_text: String,
}

/// First balanced JSON object in `raw`. A non-greedy regex breaks when the
/// value itself contains '}', so brace depth is scanned manually, with
/// string and escape state tracked.
fn extract_first_json(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape = false;
    for (i, ch) in raw[start..].char_indices() {
        if escape {
            escape = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Salvage path for the most common model defect: literal `"` inside the
/// transformedText value instead of `\"`. Takes everything between the first
/// quote after the key's colon and the last quote in the object, then
/// unescapes the standard short escapes.
fn direct_extract_transformed_text(json: &str) -> Option<String> {
    let key_pos = json.find("\"transformedText\"")?;
    let after_key = &json[key_pos + "\"transformedText\"".len()..];
    let colon = after_key.find(':')?;
    let after_colon = &after_key[colon + 1..];
    let open = after_colon.find('"')?;
    let value_and_tail = &after_colon[open + 1..];
    let close = value_and_tail.rfind('"')?;
    let value = &value_and_tail[..close];

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Some(out)
}

/// Parse raw model output into the transformed text, or `None` on any
/// unexpected shape. Strips markdown fences first (models at temperature 0
/// like wrapping JSON in code blocks), then tries strict JSON, then the
/// direct-extraction salvage.
pub fn parse_llm_output(raw: &str) -> Option<String> {
    let defenced = FENCE_OPEN.replace(raw.trim(), "");
    let stripped = FENCE_CLOSE.replace(&defenced, "");
    let source = if stripped.trim().is_empty() {
        raw
    } else {
        stripped.as_ref()
    };

    let json = match extract_first_json(source) {
        Some(j) => j,
        None => {
            let head: String = raw.chars().take(200).collect();
            tracing::warn!(raw = %head, "llm parse failed, no json object");
            return None;
        }
    };

    match serde_json::from_str::<LlmOutput>(json) {
        Ok(out) => Some(out.transformed_text),
        Err(err) => {
            if let Some(text) = direct_extract_transformed_text(json) {
                return Some(text);
            }
            tracing::warn!(%err, "llm json parse failed");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Similarity
// ---------------------------------------------------------------------------

/// Cosine similarity in [-1, 1], rounded to 4 decimals. Returns 0 when
/// either vector has zero norm (degenerate embedding).
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a > 0.0 && norm_b > 0.0 {
        crate::metrics::r4(dot / (norm_a * norm_b))
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Ollama client
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GenerateBody<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Serialize)]
struct EmbedBody<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f64>,
}

pub struct OllamaClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Base URL from `OLLAMA_BASE_URL`, falling back to localhost.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl LlmClient for OllamaClient {
    fn generate(&self, prompt: &str, model: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        tracing::debug!(%url, model, "ollama generate");
        let res = self
            .client
            .post(&url)
            .json(&GenerateBody {
                model,
                prompt,
                stream: false,
                options: GenerateOptions { temperature: 0.0 },
            })
            .send()
            .context("ollama generate request failed")?;
        if !res.status().is_success() {
            return Err(anyhow!("ollama HTTP {}", res.status()));
        }
        let data: GenerateResponse = res.json().context("invalid ollama generate response")?;
        Ok(data.response)
    }

    fn embed(&self, text: &str, model: &str) -> Result<Vec<f64>> {
        let url = format!("{}/api/embeddings", self.base_url);
        let res = self
            .client
            .post(&url)
            .json(&EmbedBody {
                model,
                prompt: text,
            })
            .send()
            .context("ollama embed request failed")?;
        if !res.status().is_success() {
            return Err(anyhow!("ollama embed HTTP {}", res.status()));
        }
        let data: EmbedResponse = res.json().context("invalid ollama embed response")?;
        Ok(data.embedding)
    }
}
