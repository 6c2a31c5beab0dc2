pub mod config;
pub mod emit;
pub mod normalize;
pub mod stopwords;

use stopwords::StopwordSet;

/// Normalize a whole input text: one normalized query per input line,
/// in input order. Lines that normalize to nothing stay in place as
/// empty strings so record indices keep matching the source file.
pub fn normalize_queries(text: &str, stopwords: &StopwordSet) -> Vec<String> {
    normalize::split_lines(text)
        .iter()
        .map(|line| normalize::normalize(line, stopwords))
        .collect()
}
