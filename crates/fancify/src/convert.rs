//! The substitution engine: pure functions from input text to styled text.
//!
//! Everything in this module is total. Unknown style ids fall back to the
//! input unchanged, unmapped characters pass through, and the same input
//! always produces the same output. Nothing here returns `Result`.

use serde::Serialize;

use crate::style::{glyph_for, StyleId, StyleInfo};

/// A single styled rendering of an input string.
///
/// Produced fresh on every [`convert_all`] call; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Style id the text was produced with.
    pub id: &'static str,
    /// The style's registered display name.
    pub name: &'static str,
    /// The input after substitution.
    pub text: String,
}

impl StyleId {
    /// Applies this style's character map to `text`.
    ///
    /// Characters the map does not cover (digits, punctuation, whitespace,
    /// letters a partial style omits, anything non-Latin) are emitted
    /// unchanged. Replacements may be multi-code-point sequences, so the
    /// output can hold more code points than the input; that is the shape of
    /// the data, not something to normalize away.
    pub fn apply(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match glyph_for(self, c) {
                Some(glyph) => out.push_str(glyph),
                None => out.push(c),
            }
        }
        out
    }
}

/// Converts `text` using the style named by `style_id`.
///
/// Unknown ids return the input unchanged. That fail-soft contract is part
/// of the public interface; callers relying on it must not see an error.
///
/// # Example
///
/// ```rust
/// assert_eq!(fancify::convert("abc", "bold"), "𝐚𝐛𝐜");
/// assert_eq!(fancify::convert("abc", "not-a-real-style"), "abc");
/// ```
pub fn convert(text: &str, style_id: &str) -> String {
    match StyleId::parse(style_id) {
        Some(style) => style.apply(text),
        None => text.to_string(),
    }
}

/// Converts `text` with every registered style, in canonical order.
///
/// Always yields exactly one [`Variant`] per style, ids unique, even for
/// empty input (whose variants all carry empty text).
pub fn convert_all(text: &str) -> Vec<Variant> {
    StyleId::ALL
        .iter()
        .map(|&style| Variant {
            id: style.as_str(),
            name: style.display_name(),
            text: style.apply(text),
        })
        .collect()
}

/// Enumerates the registered styles in canonical display order.
pub fn list_styles() -> Vec<StyleInfo> {
    StyleId::ALL.iter().map(|&style| style.info()).collect()
}

/// Selects which variants a listing shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleFilter {
    /// Keep every variant.
    All,
    /// Keep variants whose id equals the given string.
    ///
    /// The id is kept as a raw string rather than a [`StyleId`] so that
    /// filtering by an unknown external id yields an empty result instead
    /// of failing at parse time.
    Only(String),
}

impl StyleFilter {
    /// Parses a selector string; `"all"` is the keep-everything sentinel.
    pub fn parse(selector: &str) -> StyleFilter {
        if selector == "all" {
            StyleFilter::All
        } else {
            StyleFilter::Only(selector.to_string())
        }
    }

    fn keeps(&self, variant: &Variant) -> bool {
        match self {
            StyleFilter::All => true,
            StyleFilter::Only(id) => variant.id == id,
        }
    }
}

/// Filters `variants` by `filter`, preserving order.
///
/// An unknown id simply matches nothing; an empty result is not an error.
pub fn filter_variants(variants: &[Variant], filter: &StyleFilter) -> Vec<Variant> {
    variants
        .iter()
        .filter(|v| filter.keeps(v))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_known_mappings() {
        assert_eq!(convert("abc", "bold"), "𝐚𝐛𝐜");
        assert_eq!(convert("abc", "circled"), "ⓐⓑⓒ");
        assert_eq!(convert("ABC", "circled"), "ⒶⒷⒸ");
    }

    #[test]
    fn test_convert_unknown_style_is_identity() {
        assert_eq!(convert("Hello", "not-a-real-style"), "Hello");
        assert_eq!(convert("Hello", ""), "Hello");
    }

    #[test]
    fn test_convert_passes_through_unmapped_characters() {
        assert_eq!(convert("a1!", "bold"), "𝐚1!");
        assert_eq!(convert("hi there", "fullwidth"), "ｈｉ ｔｈｅｒｅ");
        // squared only maps uppercase
        assert_eq!(convert("Ab", "squared"), "🄰b");
    }

    #[test]
    fn test_convert_empty_input() {
        assert_eq!(convert("", "bold"), "");
    }

    #[test]
    fn test_convert_leaves_already_fancy_input_alone() {
        // output of one conversion contains no ASCII letters, so a second
        // pass finds nothing to map
        let once = convert("abc", "bold");
        assert_eq!(convert(&once, "bold"), once);
    }

    #[test]
    fn test_strikethrough_grows_code_point_count() {
        let out = convert("abc", "strikethrough");
        assert_eq!(out.chars().count(), 6);
        assert_eq!(out, "a\u{336}b\u{336}c\u{336}");
    }

    #[test]
    fn test_convert_all_covers_every_style_once() {
        let variants = convert_all("Hello World");
        assert_eq!(variants.len(), StyleId::ALL.len());

        let mut seen = std::collections::HashSet::new();
        for v in &variants {
            assert!(seen.insert(v.id), "duplicate id: {}", v.id);
        }
    }

    #[test]
    fn test_convert_all_empty_input_yields_empty_texts() {
        let variants = convert_all("");
        assert_eq!(variants.len(), 23);
        assert!(variants.iter().all(|v| v.text.is_empty()));
    }

    #[test]
    fn test_convert_all_order_is_canonical() {
        let variants = convert_all("x");
        let ids: Vec<&str> = variants.iter().map(|v| v.id).collect();
        let expected: Vec<&str> = StyleId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_variant_names_are_registered_display_names() {
        for v in convert_all("hi") {
            let style = StyleId::parse(v.id).unwrap();
            assert_eq!(v.name, style.display_name());
        }
    }

    #[test]
    fn test_list_styles_is_stable() {
        let first = list_styles();
        let second = list_styles();
        assert_eq!(first, second);
        assert_eq!(first.len(), 23);
        assert_eq!(first[0].id, "bold");
        assert_eq!(first[1].id, "emojiMix");
    }

    #[test]
    fn test_filter_known_id_keeps_exactly_one() {
        let variants = convert_all("hi");
        let kept = filter_variants(&variants, &StyleFilter::parse("fraktur"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "fraktur");
        assert_eq!(kept[0].text, "𝔥𝔦");
    }

    #[test]
    fn test_filter_unknown_id_yields_empty() {
        let variants = convert_all("hi");
        let kept = filter_variants(&variants, &StyleFilter::parse("nope"));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_all_sentinel_keeps_everything() {
        let variants = convert_all("hi");
        let kept = filter_variants(&variants, &StyleFilter::parse("all"));
        assert_eq!(kept, variants);
    }

    #[test]
    fn test_variant_serializes_with_expected_fields() {
        let v = &convert_all("a")[0];
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["id"], "bold");
        assert_eq!(json["name"], "Bold");
        assert_eq!(json["text"], "𝐚");
    }
}
