//! Basic usage of the syllabreak API

use syllabreak::Syllabreak;

fn main() {
    // Visible hyphens for demonstration; the default is a soft hyphen.
    let s = Syllabreak::with_separator("-");

    for text in ["banana", "apple", "straße", "молоко", "saat"] {
        let detected = s.detect_language(text);
        println!(
            "{text:12} -> {:12} (detected: {:?})",
            s.syllabify(text, None),
            detected
        );
    }

    // Explicit language selection skips detection.
    println!("{}", s.syllabify("careless parent", Some("en")));
}
