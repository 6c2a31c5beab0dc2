use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stop_words::{get, LANGUAGE};

/// The three disjoint forms of the `--stopwords` selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwordSource {
    NoFilter,
    Standard,
    Custom(PathBuf),
}

impl StopwordSource {
    pub fn from_arg(arg: &str) -> StopwordSource {
        match arg {
            "none" => StopwordSource::NoFilter,
            "nltk" => StopwordSource::Standard,
            path => StopwordSource::Custom(PathBuf::from(path)),
        }
    }

    pub fn resolve(&self) -> io::Result<StopwordSet> {
        match self {
            StopwordSource::NoFilter => Ok(StopwordSet::empty()),
            StopwordSource::Standard => Ok(StopwordSet::standard()),
            StopwordSource::Custom(path) => StopwordSet::from_file(path),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
    protect: HashSet<String>,
}

impl StopwordSet {
    pub fn empty() -> StopwordSet {
        StopwordSet::default()
    }

    /// The standard English list; mild filtering.
    pub fn standard() -> StopwordSet {
        StopwordSet {
            words: get(LANGUAGE::English).into_iter().collect(),
            protect: HashSet::new(),
        }
    }

    pub fn from_list(words: &[&str]) -> StopwordSet {
        StopwordSet {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
            protect: HashSet::new(),
        }
    }

    /// Load a user-supplied list, one word per line; aggressive filtering.
    /// Entries keep the case given in the file: query tokens are lowercased
    /// before lookup, so the list must be pre-lowercased by its curator.
    pub fn from_file(path: &Path) -> io::Result<StopwordSet> {
        let content = fs::read_to_string(path)?;
        let words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Ok(StopwordSet {
            words,
            protect: HashSet::new(),
        })
    }

    pub fn add_words(&mut self, words: &[String]) {
        for word in words {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Words that survive filtering even when listed as stopwords.
    pub fn protect_words(&mut self, words: &[String]) {
        for word in words {
            self.protect.insert(word.to_lowercase());
        }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        !self.protect.contains(token) && self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
