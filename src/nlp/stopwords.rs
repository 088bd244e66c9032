// ============================================================
// Layer 5 — Stopword Filter
// ============================================================
// Decides whether a word is a stopword.
//
// The bundled lists are the NLTK stopword corpora shipped by the
// stop-words crate (179 English words). Content words that
// matter for spam detection ("free", "million", "offer") are
// not on them.
//
// A filter can also be built from any word list, e.g. a cached
// file on disk or a user-supplied list. Lookups are
// case-insensitive: words are stored lowercase.
//
// Reference: Rust Book §8.3 (Hash Maps)

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a stopword filter from the bundled list for a language.
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, sv, da, no, fi.
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        Self::from_words(get(Self::bundled_language(language)))
    }

    /// Create a stopword filter from any list of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// All stopwords, sorted, for writing a word list to disk
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.stopwords.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    fn bundled_language(language: &str) -> LANGUAGE {
        match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "fi" | "finnish" => LANGUAGE::Finnish,
            other => {
                tracing::warn!("No stopword list for language '{}', using English", other);
                LANGUAGE::English
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("methanol"));
        assert!(!filter.is_stopword("pipeline"));
    }

    #[test]
    fn test_english_list_keeps_spam_content_words() {
        let filter = StopwordFilter::new("en");

        for word in ["free", "million", "information", "help", "need", "new", "please"] {
            assert!(!filter.is_stopword(word), "{word} should not be a stopword");
        }
        assert!(filter.len() < 200, "unexpected list size {}", filter.len());
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("klingon");
        assert_eq!(filter.sorted_words(), StopwordFilter::new("en").sorted_words());
    }

    #[test]
    fn test_from_words_trims_and_lowercases() {
        let filter = StopwordFilter::from_words(["  Foo ", "BAR", ""]);

        assert_eq!(filter.len(), 2);
        assert!(filter.is_stopword("foo"));
        assert!(filter.is_stopword("Bar"));
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_sorted_words() {
        let filter = StopwordFilter::from_words(["b", "c", "a"]);
        assert_eq!(filter.sorted_words(), vec!["a", "b", "c"]);
    }
}
