//! The syllabification pipeline
//!
//! A word passes through four stages: tokenization into phonologically
//! classed units, nucleus selection, boundary placement between
//! adjacent nuclei, and reconstruction with separators inserted. The
//! scanner lifts the per-word pipeline to running text.

pub mod boundary;
pub mod nuclei;
pub mod scanner;
pub mod token;
pub mod tokenizer;
pub mod word;

pub use boundary::BoundaryPlacer;
pub use nuclei::find_nuclei;
pub use scanner::syllabify_text;
pub use token::{Token, TokenClass};
pub use tokenizer::tokenize;
pub use word::WordSyllabifier;
