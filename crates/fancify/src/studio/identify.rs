//! Font identification against a fixed catalog.

use std::path::Path;

use rand::{Rng, RngExt};
use serde::Serialize;

/// The identification result for an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifiedFont {
    pub name: &'static str,
    /// Match confidence, always in 85..=95.
    pub confidence: u8,
    pub similar_fonts: [&'static str; 3],
    pub download_url: &'static str,
}

const CATALOG: &[(&str, [&str; 3])] = &[
    ("Helvetica Neue", ["Arial", "Inter", "SF Pro Display"]),
    ("Roboto", ["Open Sans", "Lato", "Source Sans Pro"]),
    ("Playfair Display", ["Didot", "Bodoni", "Cormorant"]),
    ("Montserrat", ["Gotham", "Proxima Nova", "Raleway"]),
    ("Futura", ["Century Gothic", "Avenir", "Poppins"]),
];

/// "Identifies" the font in `image` by picking from the catalog.
///
/// The image is never read; callers validate that the path looks like an
/// image before getting here, and the result does not depend on its
/// contents. The field shapes are what a real recognition backend would
/// return.
pub fn identify_font(image: &Path) -> IdentifiedFont {
    identify_with(image, &mut rand::rng())
}

pub(crate) fn identify_with<R: Rng + ?Sized>(_image: &Path, rng: &mut R) -> IdentifiedFont {
    let (name, similar_fonts) = CATALOG[rng.random_range(0..CATALOG.len())];
    IdentifiedFont {
        name,
        confidence: rng.random_range(85..=95),
        similar_fonts,
        download_url: "#",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    #[test]
    fn test_result_comes_from_the_catalog() {
        let path = PathBuf::from("poster.png");
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let font = identify_with(&path, &mut rng);
            let entry = CATALOG.iter().find(|(name, _)| *name == font.name);
            let (_, similar) = entry.expect("identified font not in catalog");
            assert_eq!(font.similar_fonts, *similar);
        }
    }

    #[test]
    fn test_confidence_stays_in_range() {
        let path = PathBuf::from("poster.png");
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let font = identify_with(&path, &mut rng);
            assert!((85..=95).contains(&font.confidence));
        }
    }

    #[test]
    fn test_download_url_is_a_placeholder() {
        let font = identify_font(Path::new("sample.jpg"));
        assert_eq!(font.download_url, "#");
    }
}
