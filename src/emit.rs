use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Output file lives in `output_dir`, named after the input file with its
/// extension replaced by `_norm.txt`.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}_norm.txt", stem))
}

/// Serialize records as `<index>\t<text>\n`, index 1-based in input order.
pub fn render_records(queries: &[String]) -> String {
    let mut out = String::new();
    for (i, query) in queries.iter().enumerate() {
        out.push_str(&format!("{}\t{}\n", i + 1, query));
    }
    out
}

pub fn write_records(path: &Path, queries: &[String]) -> io::Result<()> {
    fs::write(path, render_records(queries))
}
