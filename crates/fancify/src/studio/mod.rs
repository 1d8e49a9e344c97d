//! Canned catalogs backing the studio tools.
//!
//! These reproduce the interface of a font-suggestion backend without any
//! inference: fixed rotations and catalog picks, randomized only where the
//! real thing would vary (suggestion ids, the identified font and its
//! confidence). Swapping in a genuine service means replacing the function
//! bodies, not the shapes.

mod identify;
mod logo;
mod suggest;

pub use identify::{identify_font, IdentifiedFont};
pub use logo::{logo_styles, LogoPreview, LogoStyle, LOGO_STYLES};
pub use suggest::{suggest_font_styles, FontSuggestion, DEFAULT_PREVIEW, SUGGESTION_COUNT};
