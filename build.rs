//! Build script to generate embedded dictionaries
//!
//! Reads the sectioned dictionary file and generates Rust source code with
//! one const array per difficulty tier.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DICTIONARY_PATH: &str = "data/dictionary.txt";

/// (section marker, const name, doc comment)
const SECTIONS: [(&str, &str, &str); 3] = [
    ("3-letter", "BEGINNER", "Three-letter words for the beginner tier"),
    ("4-letter", "CHALLENGE", "Four-letter words for the challenge tier"),
    ("5-letter", "ADVANCED", "Five-letter words for the advanced tier"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content = fs::read_to_string(DICTIONARY_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {DICTIONARY_PATH}: {e}"));

    let output_path = Path::new(&out_dir).join("dictionary.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionaries").unwrap();
    writeln!(output).unwrap();

    for (marker, const_name, doc_comment) in SECTIONS {
        let words = section_words(&content, marker);
        write_word_list(&mut output, const_name, doc_comment, &words);
    }

    println!("cargo:rerun-if-changed={DICTIONARY_PATH}");
}

/// Collect the words listed under the section whose header contains `marker`
fn section_words<'a>(content: &'a str, marker: &str) -> Vec<&'a str> {
    let mut in_section = false;
    let mut words = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            // Comments without a section marker keep the current section
            if SECTIONS.iter().any(|(m, _, _)| trimmed.contains(m)) {
                in_section = trimmed.contains(marker);
            }
            continue;
        }
        if in_section {
            words.extend(trimmed.split_whitespace());
        }
    }

    words
}

fn write_word_list(output: &mut fs::File, const_name: &str, doc_comment: &str, words: &[&str]) {
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
    writeln!(output).unwrap();
}
