//! SVG export of a styled rendering.
//!
//! Produces the same minimal document the download button offers: a fixed
//! 600x100 viewport with a single `<text>` element. The converted text goes
//! in verbatim (XML-escaped, not normalized), so combining sequences and
//! astral-plane glyphs survive the round trip into design tools.

use minijinja::{context, AutoEscape, Environment};

use crate::render::RenderError;

const SVG_WIDTH: u32 = 600;
const SVG_HEIGHT: u32 = 100;

const SVG_TEMPLATE: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" \
     width=\"{{ width }}\" height=\"{{ height }}\">\n  \
     <text x=\"10\" y=\"50\" font-family=\"Arial\" font-size=\"24\" fill=\"black\">{{ text }}</text>\n\
     </svg>\n";

/// Builds a standalone SVG document wrapping `text`.
///
/// # Example
///
/// ```rust
/// let doc = fancify::svg_document("𝐡𝐢").unwrap();
/// assert!(doc.contains(">𝐡𝐢</text>"));
/// ```
pub fn svg_document(text: &str) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("svg", SVG_TEMPLATE)?;

    let tmpl = env.get_template("svg")?;
    let doc = tmpl.render(context! {
        width => SVG_WIDTH,
        height => SVG_HEIGHT,
        text,
    })?;
    Ok(doc)
}

/// Derives a download filename from a style or font name.
///
/// Whitespace runs become dashes and the result is lowercased, matching the
/// filenames the export button produces.
///
/// # Example
///
/// ```rust
/// assert_eq!(fancify::svg_filename("Modern Bold"), "modern-bold.svg");
/// ```
pub fn svg_filename(name: &str) -> String {
    let dashed: Vec<&str> = name.split_whitespace().collect();
    format!("{}.svg", dashed.join("-").to_lowercase())
}
