// src/words/mod.rs
use crate::core::modes::Category;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One ordered word pool per category, loaded from a JSON word file.
/// A key missing from the file simply leaves that pool empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordSet {
    #[serde(default)]
    pub adjectives: Vec<String>,
    #[serde(default)]
    pub buzzwords: Vec<String>,
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub suffix: Vec<String>,
}

impl WordSet {
    /// The word pool for a category. May be empty; the generator skips
    /// empty pools.
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Adjectives => &self.adjectives,
            Category::Buzzwords => &self.buzzwords,
            Category::Core => &self.core,
            Category::Suffix => &self.suffix,
        }
    }
}

/// Word-pool loading is the one fatal error surface of the tool: a word
/// set that cannot be read or parsed aborts the run before any name is
/// generated.
#[derive(Debug, Error)]
pub enum WordsError {
    #[error("cannot load words from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed word file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl WordsError {
    pub fn path(&self) -> &Path {
        match self {
            WordsError::Read { path, .. } | WordsError::Parse { path, .. } => path,
        }
    }
}

/// Reads the word set for a language and mode from
/// `{data_dir}/{lang}/{mode}.json`, e.g. `data/en/startup.json`.
pub fn load(data_dir: &Path, lang: &str, mode: &str) -> Result<WordSet, WordsError> {
    let path = data_dir.join(lang).join(format!("{mode}.json"));

    let data = fs::read_to_string(&path).map_err(|source| WordsError::Read {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| WordsError::Parse { path, source })
}
