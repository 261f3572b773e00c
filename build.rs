//! Build script to generate the embedded vocabulary
//!
//! Reads the themed word list and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_vocabulary(
        "data/vocabulary.txt",
        &Path::new(&out_dir).join("vocabulary.rs"),
        "VOCABULARY",
        "Built-in themed vocabulary (theme name, [(word, clue)])",
    );

    // Rebuild if the vocabulary changes
    println!("cargo:rerun-if-changed=data/vocabulary.txt");
}

/// Parse `[Theme]` headers followed by `WORD|clue` lines.
fn parse_themes(content: &str) -> Vec<(String, Vec<(String, String)>)> {
    let mut themes: Vec<(String, Vec<(String, String)>)> = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            themes.push((name.trim().to_string(), Vec::new()));
            continue;
        }

        let (word, clue) = trimmed
            .split_once('|')
            .unwrap_or_else(|| panic!("line {}: expected WORD|clue, got {trimmed:?}", line_no + 1));
        let (_, entries) = themes
            .last_mut()
            .unwrap_or_else(|| panic!("line {}: entry before any [theme] header", line_no + 1));
        entries.push((word.trim().to_string(), clue.trim().to_string()));
    }

    themes
}

fn generate_vocabulary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let themes = parse_themes(&content);
    let count = themes.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated vocabulary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &[(&str, &str)])] = &[").unwrap();

    for (name, entries) in &themes {
        writeln!(output, "    ({name:?}, &[").unwrap();
        for (word, clue) in entries {
            writeln!(output, "        ({word:?}, {clue:?}),").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of themes in {const_name}").unwrap();
    writeln!(output, "pub const THEME_COUNT: usize = {count};").unwrap();
}
