use clap::Parser;
use qnorm::config::Config;
use qnorm::emit;
use qnorm::stopwords::StopwordSource;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "qnorm",
    about = "Query Normalizer — normalize questionnaire queries for retrieval indexing"
)]
struct Cli {
    /// Raw query file (txt), one query per line
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Stopwords choice: none, nltk, or a path to a custom list
    #[arg(short, long, value_name = "none|nltk|PATH", default_value = "none")]
    stopwords: String,

    /// Output directory (default: the input file's directory)
    #[arg(short, long = "output_dir", value_name = "PATH")]
    output_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["qnorm.config.json", "config/qnorm.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    if !cli.input.is_file() {
        die(&format!("{} is not a valid file", cli.input.display()));
    }

    // Default output directory is the input file's directory; an empty
    // component means the current directory and needs no creation.
    let output_dir = match cli.output_dir {
        Some(ref dir) => dir.clone(),
        None => cli
            .input
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default(),
    };
    if !output_dir.as_os_str().is_empty() && !output_dir.is_dir() {
        fs::create_dir_all(&output_dir)
            .unwrap_or_else(|e| die(&format!("cannot create {}: {}", output_dir.display(), e)));
    }

    // Resolve stopwords
    let source = StopwordSource::from_arg(&cli.stopwords);
    if let StopwordSource::Custom(ref path) = source {
        if !path.is_file() {
            die(&format!("stopwords path {} is not a valid file", path.display()));
        }
    }
    let mut stopwords = source
        .resolve()
        .unwrap_or_else(|e| die(&format!("cannot read stopwords: {}", e)));
    if !config.extra_stopwords.is_empty() {
        stopwords.add_words(&config.extra_stopwords);
    }
    if !config.protect_words.is_empty() {
        stopwords.protect_words(&config.protect_words);
    }

    // Normalize and write
    let text = fs::read_to_string(&cli.input)
        .unwrap_or_else(|e| die(&format!("cannot read {}: {}", cli.input.display(), e)));
    let queries = qnorm::normalize_queries(&text, &stopwords);

    let out_path = emit::output_path(&cli.input, &output_dir);
    emit::write_records(&out_path, &queries)
        .unwrap_or_else(|e| die(&format!("cannot write {}: {}", out_path.display(), e)));

    eprintln!(
        "normalized {} queries -> {} ({} stopwords)",
        queries.len(),
        out_path.display(),
        stopwords.len()
    );
}
