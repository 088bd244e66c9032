// ============================================================
// Layer 5 — Organization Recognizer
// ============================================================
// Marks the tokens of a document that belong to an
// organization name, i.e. the tokens whose entity type is ORG.
//
// Two rules, both working on the tokenizer's output:
//
//   Gazetteer   "Goldman Sachs", "Enron", "Bank of America"
//               Known names, matched case-insensitively over
//               consecutive tokens. The first token must be
//               capitalized or match the listed spelling exactly,
//               so "apple pie" is not Apple.
//
//   Designator  "Acme Widget Corp", "Chase Bank"
//               A run of capitalized words ending in a corporate
//               designator (Inc, Corp, LLC, Ltd, Bank, ...).
//               The run stops at a sentence-initial word unless
//               that word is the only candidate.
//
// Longest gazetteer match wins; gazetteer spans are never split.
// Names are indexed by their lowercase first word, so a token
// is only compared against names that can start there.
//
// Reference: Rust Book §8 (Collections)

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::nlp::tokenizer::{is_capitalized, sentence_starts, RawToken, Tokenizer};

const BUILTIN_ORGS: &[&str] = &[
    "Enron", "Enron North America", "Enron Online", "EnronOnline", "Enron Energy Services",
    "HPL", "Houston Pipe Line", "Dynegy", "Reliant Energy", "Duke Energy", "El Paso",
    "Williams Energy", "Calpine", "PG&E", "FERC", "NYMEX", "SEC",
    "Arthur Andersen", "Andersen", "Microsoft", "Google", "Yahoo", "AOL", "Amazon",
    "eBay", "PayPal", "IBM", "Oracle", "Intel", "Cisco", "Dell", "Apple", "Adobe",
    "Citibank", "Citigroup", "Wells Fargo", "Bank of America", "Goldman Sachs",
    "Morgan Stanley", "Merrill Lynch", "JP Morgan", "Chase", "Barclays", "HSBC",
    "Western Union", "American Express", "MasterCard", "Visa", "Reuters", "Bloomberg",
    "Pfizer",
];

const DESIGNATORS: &[&str] = &[
    "Inc", "Corp", "Corporation", "LLC", "Ltd", "Co", "Company", "Group", "Bank",
    "Holdings", "Partners", "Associates",
];

/// One gazetteer entry: the listed spelling and its lowercase form,
/// both already split into tokens.
#[derive(Debug, Clone)]
struct OrgName {
    tokens: Vec<String>,
    lower: Vec<String>,
}

pub struct OrgRecognizer {
    tokenizer: Tokenizer,
    /// Names by lowercase first word, each list sorted longest first
    names: FxHashMap<String, Vec<OrgName>>,
    designators: FxHashSet<&'static str>,
}

impl OrgRecognizer {
    /// Recognizer with the built-in gazetteer
    pub fn new() -> Self {
        let mut recognizer = Self::empty();
        for name in BUILTIN_ORGS {
            recognizer.add_name(name);
        }
        recognizer
    }

    /// Recognizer with no gazetteer; only the designator rule applies
    pub fn empty() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            names: FxHashMap::default(),
            designators: DESIGNATORS.iter().copied().collect(),
        }
    }

    pub fn add_name(&mut self, name: &str) {
        let tokens: Vec<String> = self
            .tokenizer
            .tokenize(name.trim())
            .into_iter()
            .filter(|t| !t.is_space)
            .map(|t| t.text)
            .collect();

        if tokens.is_empty() {
            return;
        }

        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let bucket = self.names.entry(lower[0].clone()).or_default();
        bucket.push(OrgName { tokens, lower });
        bucket.sort_by(|a, b| b.tokens.len().cmp(&a.tokens.len()));
    }

    /// Add every name listed in a file, one per line.
    /// Blank lines and lines starting with '#' are skipped.
    pub fn load_names(&mut self, path: &Path) -> Result<usize> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Cannot read organization list '{}'", path.display()))?;

        let mut added = 0;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.add_name(line);
            added += 1;
        }

        tracing::debug!("Loaded {} organization names from '{}'", added, path.display());
        Ok(added)
    }

    /// For each token, whether it is part of an organization name.
    pub fn tag(&self, tokens: &[RawToken]) -> Vec<bool> {
        let mut tags = vec![false; tokens.len()];
        let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();

        let mut i = 0;
        while i < tokens.len() {
            match self.longest_match(tokens, &lowered, i) {
                Some(len) => {
                    tags[i..i + len].iter_mut().for_each(|t| *t = true);
                    i += len;
                }
                None => i += 1,
            }
        }

        let starts = sentence_starts(tokens);
        for (j, tok) in tokens.iter().enumerate() {
            if tok.is_space || !self.designators.contains(tok.text.as_str()) {
                continue;
            }
            if let Some(first) = designator_span_start(tokens, &starts, j) {
                tags[first..=j].iter_mut().for_each(|t| *t = true);
            }
        }

        tags
    }

    /// Length of the longest name starting at `at`. `lowered` holds
    /// the lowercase text of every token.
    fn longest_match(&self, tokens: &[RawToken], lowered: &[String], at: usize) -> Option<usize> {
        if tokens[at].is_space {
            return None;
        }

        self.names
            .get(&lowered[at])?
            .iter()
            .find(|name| matches_at(name, tokens, lowered, at))
            .map(|name| name.tokens.len())
    }
}

impl Default for OrgRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_at(name: &OrgName, tokens: &[RawToken], lowered: &[String], at: usize) -> bool {
    let end = at + name.tokens.len();
    let (Some(window), Some(lower)) = (tokens.get(at..end), lowered.get(at..end)) else {
        return false;
    };

    if window.iter().any(|t| t.is_space) || lower != name.lower.as_slice() {
        return false;
    }

    let first = &window[0].text;
    is_capitalized(first) || *first == name.tokens[0]
}

/// First token of the capitalized run ending at designator `j`,
/// or None when no capitalized word precedes it.
fn designator_span_start(tokens: &[RawToken], starts: &[bool], j: usize) -> Option<usize> {
    let mut first = None;
    let mut k = j;

    while k > 0 {
        let prev = &tokens[k - 1];
        if prev.is_space {
            break;
        }
        // "Procter & Gamble Co": an ampersand joins two capitalized words
        if prev.text == "&" && first.is_some() {
            k -= 1;
            continue;
        }
        if !is_capitalized(&prev.text) {
            break;
        }
        if starts[k - 1] && first.is_some() {
            break;
        }
        first = Some(k - 1);
        k -= 1;
    }

    first
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(recognizer: &OrgRecognizer, text: &str) -> Vec<String> {
        let tokens = Tokenizer::new().tokenize(text);
        let tags = recognizer.tag(&tokens);
        tokens
            .into_iter()
            .zip(tags)
            .filter(|(_, t)| *t)
            .map(|(tok, _)| tok.text)
            .collect()
    }

    #[test]
    fn test_gazetteer_single_and_multi_word() {
        let r = OrgRecognizer::new();
        assert_eq!(
            tagged(&r, "Subject: Enron and Goldman Sachs met Bank of America"),
            vec!["Enron", "Goldman", "Sachs", "Bank", "of", "America"]
        );
    }

    #[test]
    fn test_gazetteer_needs_capital_or_exact_spelling() {
        let r = OrgRecognizer::new();
        assert!(tagged(&r, "an apple a day").is_empty());
        assert_eq!(tagged(&r, "pay with eBay"), vec!["eBay"]);
        assert_eq!(tagged(&r, "ENRON stock"), vec!["ENRON"]);
    }

    #[test]
    fn test_longest_match_wins() {
        let r = OrgRecognizer::new();
        assert_eq!(
            tagged(&r, "ask Enron North America now"),
            vec!["Enron", "North", "America"]
        );
    }

    #[test]
    fn test_names_sharing_a_first_word_share_one_bucket() {
        let mut r = OrgRecognizer::empty();
        r.add_name("Kinder");
        r.add_name("Kinder Morgan Energy Partners");
        r.add_name("Kinder Morgan");
        r.add_name("Texaco");

        assert_eq!(r.names.len(), 2);
        let lengths: Vec<usize> = r.names["kinder"].iter().map(|n| n.tokens.len()).collect();
        assert_eq!(lengths, vec![4, 2, 1]);

        // Lookup is by lowercase first word, longest name first
        assert_eq!(tagged(&r, "KINDER MORGAN bought Texaco"), vec!["KINDER", "MORGAN", "Texaco"]);
        assert_eq!(tagged(&r, "Kinder Morgan Energy Partners"), vec!["Kinder", "Morgan", "Energy", "Partners"]);
        assert!(tagged(&r, "kinder morgan").is_empty());
    }

    #[test]
    fn test_designator_run() {
        let r = OrgRecognizer::empty();
        assert_eq!(
            tagged(&r, "please call Acme Widget Corp today"),
            vec!["Acme", "Widget", "Corp"]
        );
        assert_eq!(tagged(&r, "write to Procter & Gamble Co"), vec!["Procter", "&", "Gamble", "Co"]);
    }

    #[test]
    fn test_designator_run_stops_at_sentence_start() {
        let r = OrgRecognizer::empty();
        assert_eq!(tagged(&r, "Please Acme Corp"), vec!["Acme", "Corp"]);
        // The sentence-initial word joins when it is the only candidate
        assert_eq!(tagged(&r, "Acme Corp said"), vec!["Acme", "Corp"]);
    }

    #[test]
    fn test_lone_designator_is_not_an_org() {
        let r = OrgRecognizer::empty();
        assert!(tagged(&r, "the Bank").is_empty());
        assert!(tagged(&r, "Inc").is_empty());
    }

    #[test]
    fn test_whitespace_breaks_a_name() {
        let r = OrgRecognizer::new();
        assert!(tagged(&r, "Goldman\n\nSachs").is_empty());
    }

    #[test]
    fn test_load_names_from_file() {
        use std::io::Write;

        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "# partners\nKinder Morgan\n\nTexaco").unwrap();

        let mut r = OrgRecognizer::empty();
        assert_eq!(r.load_names(f.path()).unwrap(), 2);
        assert_eq!(tagged(&r, "from Kinder Morgan"), vec!["Kinder", "Morgan"]);
    }
}
