//! Language detection through the public API

use syllabreak::Syllabreak;

#[test]
fn test_unique_character_evidence_is_decisive() {
    let s = Syllabreak::new();
    assert_eq!(s.detect_language("straße")[0], "de");
    assert_eq!(s.detect_language("ağaç")[0], "tr");
    assert_eq!(s.detect_language("їжак")[0], "uk");
    assert_eq!(s.detect_language("șarpe")[0], "ro");
}

#[test]
fn test_shared_cyrillic_ties_keep_catalog_order() {
    let s = Syllabreak::new();
    // Every letter exists in both the Russian and Ukrainian tables;
    // the Russian table is registered first.
    let codes = s.detect_language("молоко");
    assert_eq!(codes[0], "ru");
    assert!(codes.contains(&"uk".to_string()));
}

#[test]
fn test_russian_specific_letters() {
    let s = Syllabreak::new();
    assert_eq!(s.detect_language("ёлка")[0], "ru");
}

#[test]
fn test_latin_tie_prefers_first_registered() {
    let s = Syllabreak::new();
    assert_eq!(s.detect_language("banana")[0], "en");
}

#[test]
fn test_no_letters_yields_empty() {
    let s = Syllabreak::new();
    assert!(s.detect_language("").is_empty());
    assert!(s.detect_language("123!?").is_empty());
    assert!(s.detect_language("  \t\n").is_empty());
}

#[test]
fn test_unmatched_script_yields_empty() {
    let s = Syllabreak::new();
    // Greek is not a bundled language.
    assert!(s.detect_language("αβγ").is_empty());
}

#[test]
fn test_detection_is_deterministic() {
    let s = Syllabreak::new();
    let first = s.detect_language("banana");
    for _ in 0..10 {
        assert_eq!(s.detect_language("banana"), first);
    }
}
