use serde::Deserialize;

/// Optional run configuration. Every field defaults to empty, in which
/// case the tool behaves exactly as the CLI flags alone describe.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Stopwords merged into the resolved set whatever the `-s` mode.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    /// Words never filtered, even when the stopword list contains them.
    #[serde(default)]
    pub protect_words: Vec<String>,
}
