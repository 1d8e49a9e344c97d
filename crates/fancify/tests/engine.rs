//! End-to-end checks of the conversion engine's contract.

use fancify::{
    convert, convert_all, filter_variants, list_styles, svg_document, svg_filename, StyleFilter,
    StyleId,
};
use proptest::prelude::*;

#[test]
fn known_mapping_spot_checks() {
    assert_eq!(convert("abc", "bold"), "𝐚𝐛𝐜");
    assert_eq!(convert("abc", "circled"), "ⓐⓑⓒ");
    assert_eq!(convert("ABC", "circled"), "ⒶⒷⒸ");
    assert_eq!(convert("abc", "script"), "𝒶𝒷𝒸");
    assert_eq!(convert("abc", "doubleStruck"), "𝕒𝕓𝕔");
}

#[test]
fn unknown_style_fallback() {
    assert_eq!(convert("Hello", "not-a-real-style"), "Hello");
}

#[test]
fn empty_input_yields_empty_variants() {
    let variants = convert_all("");
    assert_eq!(variants.len(), 23);
    for v in variants {
        assert_eq!(v.text, "");
    }
}

#[test]
fn canonical_coverage() {
    let variants = convert_all("Hello World");
    assert_eq!(variants.len(), list_styles().len());

    let mut ids = std::collections::HashSet::new();
    for v in &variants {
        assert!(ids.insert(v.id));
    }
}

#[test]
fn digits_and_punctuation_pass_through() {
    assert_eq!(convert("a1!", "bold"), "𝐚1!");
    assert_eq!(convert("3.14", "fraktur"), "3.14");
}

#[test]
fn filtering_by_each_registered_id_keeps_one() {
    let variants = convert_all("sample");
    for style in StyleId::ALL {
        let kept = filter_variants(&variants, &StyleFilter::parse(style.as_str()));
        assert_eq!(kept.len(), 1, "style {}", style);
        assert_eq!(kept[0].id, style.as_str());
    }
}

#[test]
fn filtering_by_absent_id_is_empty() {
    let variants = convert_all("sample");
    let kept = filter_variants(&variants, &StyleFilter::parse("absent"));
    assert!(kept.is_empty());
}

#[test]
fn list_styles_order_matches_canonical_sequence() {
    let listed: Vec<&str> = list_styles().iter().map(|s| s.id).collect();
    let canonical: Vec<&str> = StyleId::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(listed, canonical);
    assert_eq!(listed, list_styles().iter().map(|s| s.id).collect::<Vec<_>>());
}

#[test]
fn svg_export_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let converted = convert("Logo", "bold");
    let doc = svg_document(&converted).unwrap();

    let path = dir.path().join(svg_filename("Bold"));
    std::fs::write(&path, &doc).unwrap();

    let read_back = std::fs::read_to_string(&path).unwrap();
    assert_eq!(read_back, doc);
    assert!(read_back.contains("𝐋𝐨𝐠𝐨"));
    assert_eq!(path.file_name().unwrap(), "bold.svg");
}

fn any_style() -> impl Strategy<Value = StyleId> {
    prop::sample::select(StyleId::ALL.to_vec())
}

proptest! {
    #[test]
    fn conversion_is_deterministic(text in "\\PC*", style in any_style()) {
        let first = convert(&text, style.as_str());
        let second = convert(&text, style.as_str());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_ids_are_identity(text in "\\PC*") {
        prop_assert_eq!(convert(&text, "no-such-style"), text);
    }

    #[test]
    fn non_letters_are_fixed_points(text in "[0-9 .,!?;:#@-]*", style in any_style()) {
        prop_assert_eq!(convert(&text, style.as_str()), text);
    }

    #[test]
    fn output_never_loses_slots(text in "\\PC*", style in any_style()) {
        // every input char emits at least one output char
        let out = convert(&text, style.as_str());
        prop_assert!(out.chars().count() >= text.chars().count());
    }

    #[test]
    fn convert_all_is_total_and_duplicate_free(text in "\\PC*") {
        let variants = convert_all(&text);
        prop_assert_eq!(variants.len(), 23);

        let mut ids = std::collections::HashSet::new();
        for v in &variants {
            prop_assert!(ids.insert(v.id));
        }
    }
}
