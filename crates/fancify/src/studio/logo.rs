//! Logo typography presets.

use serde::Serialize;

/// A logo typography preset: font family plus the CSS-ish knobs a renderer
/// needs to reproduce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub font_family: &'static str,
    pub font_weight: u16,
    pub font_style: Option<&'static str>,
    pub letter_spacing: Option<&'static str>,
    pub text_transform: Option<&'static str>,
}

/// The fixed preset catalog, in display order.
pub const LOGO_STYLES: &[LogoStyle] = &[
    LogoStyle {
        id: "modern-sans",
        name: "Modern Sans",
        font_family: "system-ui",
        font_weight: 700,
        font_style: None,
        letter_spacing: Some("-0.02em"),
        text_transform: None,
    },
    LogoStyle {
        id: "elegant-serif",
        name: "Elegant Serif",
        font_family: "Georgia",
        font_weight: 400,
        font_style: Some("italic"),
        letter_spacing: None,
        text_transform: None,
    },
    LogoStyle {
        id: "bold-display",
        name: "Bold Display",
        font_family: "Impact",
        font_weight: 900,
        font_style: None,
        letter_spacing: None,
        text_transform: Some("uppercase"),
    },
    LogoStyle {
        id: "minimal-thin",
        name: "Minimal Thin",
        font_family: "system-ui",
        font_weight: 200,
        font_style: None,
        letter_spacing: Some("0.2em"),
        text_transform: None,
    },
    LogoStyle {
        id: "tech-mono",
        name: "Tech Mono",
        font_family: "monospace",
        font_weight: 500,
        font_style: None,
        letter_spacing: None,
        text_transform: None,
    },
    LogoStyle {
        id: "classic-serif",
        name: "Classic Serif",
        font_family: "Times New Roman",
        font_weight: 700,
        font_style: None,
        letter_spacing: None,
        text_transform: None,
    },
    LogoStyle {
        id: "rounded-friendly",
        name: "Rounded Friendly",
        font_family: "system-ui",
        font_weight: 600,
        font_style: None,
        letter_spacing: Some("0.05em"),
        text_transform: None,
    },
    LogoStyle {
        id: "condensed-bold",
        name: "Condensed Bold",
        font_family: "Arial Narrow",
        font_weight: 700,
        font_style: None,
        letter_spacing: Some("-0.03em"),
        text_transform: None,
    },
    LogoStyle {
        id: "script-elegant",
        name: "Script Elegant",
        font_family: "cursive",
        font_weight: 400,
        font_style: None,
        letter_spacing: None,
        text_transform: None,
    },
    LogoStyle {
        id: "geometric-clean",
        name: "Geometric Clean",
        font_family: "Verdana",
        font_weight: 500,
        font_style: None,
        letter_spacing: Some("0.1em"),
        text_transform: None,
    },
    LogoStyle {
        id: "vintage-display",
        name: "Vintage Display",
        font_family: "Georgia",
        font_weight: 700,
        font_style: None,
        letter_spacing: Some("0.15em"),
        text_transform: Some("uppercase"),
    },
    LogoStyle {
        id: "futuristic",
        name: "Futuristic",
        font_family: "system-ui",
        font_weight: 300,
        font_style: None,
        letter_spacing: Some("0.3em"),
        text_transform: Some("uppercase"),
    },
];

/// A preset paired with the brand text it previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoPreview {
    pub style: LogoStyle,
    pub preview: String,
}

/// Pairs every preset with `brand` (or a placeholder when empty).
pub fn logo_styles(brand: &str) -> Vec<LogoPreview> {
    let preview = if brand.is_empty() { "Brand" } else { brand };
    LOGO_STYLES
        .iter()
        .map(|style| LogoPreview {
            style: style.clone(),
            preview: preview.to_string(),
        })
        .collect()
}
