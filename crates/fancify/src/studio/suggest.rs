//! Rotating font-style suggestions.

use rand::{Rng, RngExt};
use serde::Serialize;

/// Preview sentence used when the caller gives an empty prompt.
pub const DEFAULT_PREVIEW: &str = "The quick brown fox jumps over the lazy dog";

/// Number of suggestions produced per prompt.
pub const SUGGESTION_COUNT: usize = 8;

const CATEGORIES: &[&str] = &["serif", "sans-serif", "display", "handwriting", "monospace"];

const ADJECTIVES: &[&str] = &[
    "Modern",
    "Classic",
    "Elegant",
    "Bold",
    "Minimal",
    "Artistic",
    "Creative",
    "Professional",
];

const WEIGHTS: &[&str] = &["Regular", "Light", "Medium", "Bold", "Italic", "Condensed"];

/// A suggested font style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSuggestion {
    /// Unique per-call id; only this field varies between calls.
    pub id: String,
    pub name: String,
    /// The prompt text, or [`DEFAULT_PREVIEW`] for an empty prompt.
    pub preview: String,
    pub category: &'static str,
}

/// Produces [`SUGGESTION_COUNT`] suggestions for `prompt`.
///
/// Names and categories rotate through fixed lists; the id carries a random
/// nonce so repeated calls produce distinguishable batches.
pub fn suggest_font_styles(prompt: &str) -> Vec<FontSuggestion> {
    suggest_with(prompt, &mut rand::rng())
}

pub(crate) fn suggest_with<R: Rng + ?Sized>(prompt: &str, rng: &mut R) -> Vec<FontSuggestion> {
    let nonce: u32 = rng.random();
    let preview = if prompt.is_empty() {
        DEFAULT_PREVIEW
    } else {
        prompt
    };

    (0..SUGGESTION_COUNT)
        .map(|i| FontSuggestion {
            id: format!("font-{:08x}-{}", nonce, i),
            name: format!(
                "{} {}",
                ADJECTIVES[i % ADJECTIVES.len()],
                WEIGHTS[i % WEIGHTS.len()]
            ),
            preview: preview.to_string(),
            category: CATEGORIES[i % CATEGORIES.len()],
        })
        .collect()
}
