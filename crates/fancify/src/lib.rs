//! Unicode fancy-text conversion.
//!
//! `fancify` maps Latin letters onto alternate Unicode glyph sets — bold and
//! italic mathematical alphabets, circled and fullwidth forms, combining
//! strikethrough, emoji substitutions — and produces styled renderings of
//! arbitrary input text. Because the output is plain Unicode, it can be
//! pasted anywhere that renders text.
//!
//! The engine is a pure function library over constant tables: no state, no
//! I/O, no errors. Unknown style ids fall back to the input unchanged and
//! unmapped characters pass through, so every call has a well-defined
//! result.
//!
//! # Example
//!
//! ```rust
//! use fancify::{convert, convert_all, StyleId};
//!
//! assert_eq!(convert("Hello", "bold"), "𝐇𝐞𝐥𝐥𝐨");
//!
//! let variants = convert_all("Hello");
//! assert_eq!(variants.len(), StyleId::ALL.len());
//! assert_eq!(variants[0].id, "bold");
//! ```
//!
//! Beyond the engine, the crate carries the surfaces an application needs:
//! a template-driven [`Renderer`] for terminal and JSON listings, SVG export
//! ([`svg_document`]), and the canned [`studio`] catalogs (font suggestions,
//! font identification, logo presets).

mod convert;
mod render;
mod style;
pub mod studio;
mod svg;

pub use convert::{convert, convert_all, filter_variants, list_styles, StyleFilter, Variant};
pub use render::{OutputMode, RenderError, Renderer};
pub use style::{StyleId, StyleInfo};
pub use svg::{svg_document, svg_filename};
