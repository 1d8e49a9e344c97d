//! Terminal and JSON presentation of engine output.
//!
//! Listings are rendered through minijinja templates with a `style` filter
//! backed by [`console::Style`] entries, so the same template produces plain
//! or ANSI-styled text depending on the selected [`OutputMode`]. The `Json`
//! mode bypasses templates entirely and serializes the underlying records.

use std::collections::HashMap;

use console::Style;
use minijinja::{context, Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::convert::Variant;
use crate::studio::{FontSuggestion, IdentifiedFont, LogoPreview};
use crate::style::StyleInfo;

/// How rendered output should be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Detect terminal color support and behave like `Term` or `Text`.
    #[default]
    Auto,
    /// Force ANSI styling.
    Term,
    /// Plain text, no escape codes.
    Text,
    /// Serialize the records as pretty-printed JSON instead of rendering.
    Json,
}

impl OutputMode {
    fn should_use_color(self) -> bool {
        match self {
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
            OutputMode::Auto => console::colors_enabled(),
        }
    }

    fn is_json(self) -> bool {
        self == OutputMode::Json
    }
}

/// Error from rendering or serializing a listing.
#[derive(Debug)]
pub enum RenderError {
    /// Template compilation or rendering failed.
    Template(minijinja::Error),
    /// JSON serialization failed.
    Serialize(serde_json::Error),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Template(e) => write!(f, "template error: {}", e),
            RenderError::Serialize(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Template(e) => Some(e),
            RenderError::Serialize(e) => Some(e),
        }
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(e: minijinja::Error) -> Self {
        RenderError::Template(e)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Serialize(e)
    }
}

/// Fixed styling for listing output.
static THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("label", Style::new().cyan()),
        ("muted", Style::new().dim()),
        ("accent", Style::new().bold()),
    ])
});

const STYLES_TEMPLATE: &str =
    "{% for s in styles %}{{ s.id | pad(id_width) | style(\"label\") }}  {{ s.name }}\n{% endfor %}";

const VARIANTS_TEMPLATE: &str =
    "{% for v in variants %}{{ v.name | pad(name_width) | style(\"label\") }}  {{ v.text }}\n{% endfor %}";

const SUGGESTIONS_TEMPLATE: &str =
    "{% for s in suggestions %}{{ s.name | pad(name_width) | style(\"label\") }}  \
     {{ s.category | pad(category_width) | style(\"muted\") }}  {{ s.preview }}\n{% endfor %}";

const IDENTIFY_TEMPLATE: &str = "{{ font.name | style(\"accent\") }}  \
     {{ font.confidence }}% match\nsimilar: {{ font.similar_fonts | join(\", \") }}\n\
     download: {{ font.download_url | style(\"muted\") }}\n";

const LOGOS_TEMPLATE: &str =
    "{% for l in logos %}{{ l.style.name | pad(name_width) | style(\"label\") }}  \
     {{ l.style.font_family | pad(family_width) | style(\"muted\") }}  {{ l.preview }}\n{% endfor %}";

/// Registers the built-in filters on a minijinja environment.
fn register_filters(env: &mut Environment<'static>, mode: OutputMode) {
    let use_color = mode.should_use_color();

    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match THEME.get(name.as_str()) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(&text)
                .to_string(),
            _ => text,
        }
    });

    // Pads with spaces up to a display width; wide glyphs count per column.
    env.add_filter("pad", |value: Value, width: usize| -> String {
        let mut text = value.to_string();
        let current = text.as_str().width();
        for _ in current..width {
            text.push(' ');
        }
        text
    });
}

/// A renderer with the listing templates pre-registered.
///
/// # Example
///
/// ```rust
/// use fancify::{convert_all, OutputMode, Renderer};
///
/// let renderer = Renderer::new(OutputMode::Text).unwrap();
/// let listing = renderer.variants(&convert_all("hi")).unwrap();
/// assert!(listing.contains("𝐡𝐢"));
/// ```
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Renderer {
    /// Creates a renderer for the given output mode.
    pub fn new(mode: OutputMode) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        register_filters(&mut env, mode);

        let mut renderer = Self { env, mode };
        renderer.add_template("styles", STYLES_TEMPLATE)?;
        renderer.add_template("variants", VARIANTS_TEMPLATE)?;
        renderer.add_template("suggestions", SUGGESTIONS_TEMPLATE)?;
        renderer.add_template("identify", IDENTIFY_TEMPLATE)?;
        renderer.add_template("logos", LOGOS_TEMPLATE)?;
        Ok(renderer)
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if the
    /// syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    /// Renders the style listing, or serializes it in `Json` mode.
    pub fn styles(&self, styles: &[StyleInfo]) -> Result<String, RenderError> {
        if self.mode.is_json() {
            return Ok(serde_json::to_string_pretty(styles)?);
        }
        let id_width = styles.iter().map(|s| s.id.width()).max().unwrap_or(0);
        self.render("styles", &context! { styles, id_width })
    }

    /// Renders the variant listing, or serializes it in `Json` mode.
    pub fn variants(&self, variants: &[Variant]) -> Result<String, RenderError> {
        if self.mode.is_json() {
            return Ok(serde_json::to_string_pretty(variants)?);
        }
        let name_width = variants.iter().map(|v| v.name.width()).max().unwrap_or(0);
        self.render("variants", &context! { variants, name_width })
    }

    /// Renders the font suggestion listing, or serializes it in `Json` mode.
    pub fn suggestions(&self, suggestions: &[FontSuggestion]) -> Result<String, RenderError> {
        if self.mode.is_json() {
            return Ok(serde_json::to_string_pretty(suggestions)?);
        }
        let name_width = suggestions
            .iter()
            .map(|s| s.name.as_str().width())
            .max()
            .unwrap_or(0);
        let category_width = suggestions
            .iter()
            .map(|s| s.category.width())
            .max()
            .unwrap_or(0);
        self.render(
            "suggestions",
            &context! { suggestions, name_width, category_width },
        )
    }

    /// Renders an identification report, or serializes it in `Json` mode.
    pub fn identification(&self, font: &IdentifiedFont) -> Result<String, RenderError> {
        if self.mode.is_json() {
            return Ok(serde_json::to_string_pretty(font)?);
        }
        self.render("identify", &context! { font })
    }

    /// Renders the logo style listing, or serializes it in `Json` mode.
    pub fn logos(&self, logos: &[LogoPreview]) -> Result<String, RenderError> {
        if self.mode.is_json() {
            return Ok(serde_json::to_string_pretty(logos)?);
        }
        let name_width = logos
            .iter()
            .map(|l| l.style.name.width())
            .max()
            .unwrap_or(0);
        let family_width = logos
            .iter()
            .map(|l| l.style.font_family.width())
            .max()
            .unwrap_or(0);
        self.render("logos", &context! { logos, name_width, family_width })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert_all;
    use crate::convert::list_styles;

    #[test]
    fn test_styles_listing_plain_text() {
        let renderer = Renderer::new(OutputMode::Text).unwrap();
        let out = renderer.styles(&list_styles()).unwrap();

        assert!(out.contains("bold"));
        assert!(out.contains("Double Struck"));
        assert!(!out.contains('\x1b'));
        assert_eq!(out.lines().count(), 23);
    }

    #[test]
    fn test_variants_listing_contains_converted_text() {
        let renderer = Renderer::new(OutputMode::Text).unwrap();
        let out = renderer.variants(&convert_all("abc")).unwrap();

        assert!(out.contains("𝐚𝐛𝐜"));
        assert!(out.contains("ⓐⓑⓒ"));
    }

    #[test]
    fn test_term_mode_emits_ansi() {
        let renderer = Renderer::new(OutputMode::Term).unwrap();
        let out = renderer.styles(&list_styles()).unwrap();
        assert!(out.contains("\x1b[36m"));
    }

    #[test]
    fn test_json_mode_serializes_records() {
        let renderer = Renderer::new(OutputMode::Json).unwrap();
        let out = renderer.variants(&convert_all("a")).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 23);
        assert_eq!(parsed[0]["id"], "bold");
    }

    #[test]
    fn test_pad_filter_aligns_by_display_width() {
        let renderer = Renderer::new(OutputMode::Text).unwrap();
        let out = renderer.styles(&list_styles()).unwrap();

        // ids are plain ASCII, so the label column is padded to the longest
        // id ("parenthesized", 13 columns) followed by the two-space gap
        for line in out.lines() {
            assert_eq!(&line[13..15], "  ", "misaligned line: {:?}", line);
        }
    }

    #[test]
    fn test_unknown_style_name_passes_text_through() {
        let mut renderer = Renderer::new(OutputMode::Term).unwrap();
        renderer
            .add_template("t", "{{ x | style(\"nope\") }}")
            .unwrap();
        let out = renderer.render("t", &context! { x => "hi" }).unwrap();
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_custom_template_registration() {
        let mut renderer = Renderer::new(OutputMode::Text).unwrap();
        renderer.add_template("greet", "hello {{ name }}").unwrap();
        let out = renderer.render("greet", &context! { name => "world" }).unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn test_invalid_template_is_an_error() {
        let mut renderer = Renderer::new(OutputMode::Text).unwrap();
        let result = renderer.add_template("bad", "{% for %}");
        assert!(result.is_err());
    }
}
