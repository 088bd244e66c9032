// ============================================================
// Layer 6 — Stopword Store
// ============================================================
// Manages the stopword word list on disk.
//
// The first run writes the bundled list for the requested
// language into the cache directory:
//
//   <cache_dir>/stopwords_en.txt   (one word per line, sorted)
//
// Later runs read that file instead, so the list can be edited
// in place and every run of the same cache sees the same words.
// An explicit word list file bypasses the cache entirely.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::nlp::stopwords::StopwordFilter;

pub struct StopwordStore {
    dir: PathBuf,
}

impl StopwordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn cache_path(&self, language: &str) -> PathBuf {
        self.dir.join(format!("stopwords_{}.txt", language.to_lowercase()))
    }

    /// Load the cached list for `language`, or build and cache it
    pub fn load_or_build(&self, language: &str) -> Result<StopwordFilter> {
        let path = self.cache_path(language);
        if path.exists() {
            tracing::info!("Loading cached stopwords from '{}'", path.display());
            Self::load_file(&path)
        } else {
            tracing::info!("Building stopword list for '{}'", language);
            self.build_and_save(language)
        }
    }

    /// Read a word list: one word per line, blank lines and
    /// '#' comments ignored.
    pub fn load_file(path: &Path) -> Result<StopwordFilter> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Cannot read stopword list '{}'", path.display()))?;

        let filter = StopwordFilter::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        );

        tracing::debug!("Read {} stopwords from '{}'", filter.len(), path.display());
        Ok(filter)
    }

    fn build_and_save(&self, language: &str) -> Result<StopwordFilter> {
        let filter = StopwordFilter::new(language);

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create cache directory '{}'", self.dir.display()))?;

        let path = self.cache_path(language);
        let mut contents = filter.sorted_words().join("\n");
        contents.push('\n');

        fs::write(&path, contents)
            .with_context(|| format!("Cannot write stopword list '{}'", path.display()))?;

        tracing::debug!("Cached {} stopwords at '{}'", filter.len(), path.display());
        Ok(filter)
    }
}
