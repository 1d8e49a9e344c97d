//! Style identifiers.

use serde::Serialize;

/// Identifier for a registered fancy-text style.
///
/// The variant order here is incidental; the canonical display order is
/// fixed by [`StyleId::ALL`], which interleaves the alphabet styles with the
/// emoji styles the way listings present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    Bold,
    Italic,
    BoldItalic,
    Script,
    Fraktur,
    Monospace,
    DoubleStruck,
    Circled,
    Squared,
    Parenthesized,
    Fullwidth,
    SmallCaps,
    Superscript,
    Subscript,
    Inverted,
    Strikethrough,
    EmojiMix,
    EmojiCute,
    EmojiFaces,
    EmojiAnimals,
    EmojiFood,
    EmojiSports,
    EmojiNature,
}

impl StyleId {
    /// Every registered style, in canonical display order.
    ///
    /// Listings and [`crate::convert_all`] iterate this array, never an
    /// underlying map, so the order is stable across calls and releases.
    pub const ALL: [StyleId; 23] = [
        StyleId::Bold,
        StyleId::EmojiMix,
        StyleId::Italic,
        StyleId::EmojiCute,
        StyleId::BoldItalic,
        StyleId::EmojiFaces,
        StyleId::Script,
        StyleId::EmojiAnimals,
        StyleId::Fraktur,
        StyleId::EmojiFood,
        StyleId::Monospace,
        StyleId::EmojiSports,
        StyleId::DoubleStruck,
        StyleId::EmojiNature,
        StyleId::Circled,
        StyleId::Squared,
        StyleId::Parenthesized,
        StyleId::Fullwidth,
        StyleId::SmallCaps,
        StyleId::Superscript,
        StyleId::Subscript,
        StyleId::Inverted,
        StyleId::Strikethrough,
    ];

    /// Looks up a style by its external string id.
    ///
    /// Returns `None` for unknown ids. Callers that need the documented
    /// fail-soft behavior (return input unchanged, or an empty listing)
    /// handle the `None` themselves; nothing here is an error.
    pub fn parse(id: &str) -> Option<StyleId> {
        match id {
            "bold" => Some(StyleId::Bold),
            "italic" => Some(StyleId::Italic),
            "boldItalic" => Some(StyleId::BoldItalic),
            "script" => Some(StyleId::Script),
            "fraktur" => Some(StyleId::Fraktur),
            "monospace" => Some(StyleId::Monospace),
            "doubleStruck" => Some(StyleId::DoubleStruck),
            "circled" => Some(StyleId::Circled),
            "squared" => Some(StyleId::Squared),
            "parenthesized" => Some(StyleId::Parenthesized),
            "fullwidth" => Some(StyleId::Fullwidth),
            "smallCaps" => Some(StyleId::SmallCaps),
            "superscript" => Some(StyleId::Superscript),
            "subscript" => Some(StyleId::Subscript),
            "inverted" => Some(StyleId::Inverted),
            "strikethrough" => Some(StyleId::Strikethrough),
            "emojiMix" => Some(StyleId::EmojiMix),
            "emojiCute" => Some(StyleId::EmojiCute),
            "emojiFaces" => Some(StyleId::EmojiFaces),
            "emojiAnimals" => Some(StyleId::EmojiAnimals),
            "emojiFood" => Some(StyleId::EmojiFood),
            "emojiSports" => Some(StyleId::EmojiSports),
            "emojiNature" => Some(StyleId::EmojiNature),
            _ => None,
        }
    }

    /// The stable external id string.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleId::Bold => "bold",
            StyleId::Italic => "italic",
            StyleId::BoldItalic => "boldItalic",
            StyleId::Script => "script",
            StyleId::Fraktur => "fraktur",
            StyleId::Monospace => "monospace",
            StyleId::DoubleStruck => "doubleStruck",
            StyleId::Circled => "circled",
            StyleId::Squared => "squared",
            StyleId::Parenthesized => "parenthesized",
            StyleId::Fullwidth => "fullwidth",
            StyleId::SmallCaps => "smallCaps",
            StyleId::Superscript => "superscript",
            StyleId::Subscript => "subscript",
            StyleId::Inverted => "inverted",
            StyleId::Strikethrough => "strikethrough",
            StyleId::EmojiMix => "emojiMix",
            StyleId::EmojiCute => "emojiCute",
            StyleId::EmojiFaces => "emojiFaces",
            StyleId::EmojiAnimals => "emojiAnimals",
            StyleId::EmojiFood => "emojiFood",
            StyleId::EmojiSports => "emojiSports",
            StyleId::EmojiNature => "emojiNature",
        }
    }

    /// The human-readable label shown in listings.
    pub fn display_name(self) -> &'static str {
        match self {
            StyleId::Bold => "Bold",
            StyleId::Italic => "Italic",
            StyleId::BoldItalic => "Bold Italic",
            StyleId::Script => "Script",
            StyleId::Fraktur => "Fraktur",
            StyleId::Monospace => "Monospace",
            StyleId::DoubleStruck => "Double Struck",
            StyleId::Circled => "Circled",
            StyleId::Squared => "Squared",
            StyleId::Parenthesized => "Parenthesized",
            StyleId::Fullwidth => "Fullwidth",
            StyleId::SmallCaps => "Small Caps",
            StyleId::Superscript => "Superscript",
            StyleId::Subscript => "Subscript",
            StyleId::Inverted => "Inverted",
            StyleId::Strikethrough => "Strikethrough",
            StyleId::EmojiMix => "🅰🅱© Emoji Mix",
            StyleId::EmojiCute => "🍎🦋🌙 Emoji Cute",
            StyleId::EmojiFaces => "😀😊😎 Emoji Faces",
            StyleId::EmojiAnimals => "🐻🦊🐼 Emoji Animals",
            StyleId::EmojiFood => "🍎🍕🍦 Emoji Food",
            StyleId::EmojiSports => "🏀⚽🏆 Emoji Sports",
            StyleId::EmojiNature => "🌲🌸🌊 Emoji Nature",
        }
    }

    /// The `(id, display name)` record for this style.
    pub fn info(self) -> StyleInfo {
        StyleInfo {
            id: self.as_str(),
            name: self.display_name(),
        }
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A style's id and display name, as listings present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleInfo {
    pub id: &'static str,
    pub name: &'static str,
}
