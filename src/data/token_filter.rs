// ============================================================
// Layer 4 — Token Filter
// ============================================================
// Decides which annotated tokens make it into the derived
// columns of a row.
//
// A token is kept when ALL of these hold:
//   1. it is not punctuation
//   2. its lowercased text is not "subject" (every message in
//      the dataset starts with a "Subject:" header)
//   3. it is not a stopword
//   4. it is not whitespace
//   5. its text is at least 3 characters long
//
//   lemmas → lemma of every kept token
//   ent    → surface text of every kept token tagged ORG
//
// Both derivations are pure: same tokens in, same strings out,
// in the original token order.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::domain::row::DatasetRow;
use crate::domain::token::{AnnotatedDoc, AnnotatedToken};

pub struct TokenFilter {
    /// Lowercase word that is always dropped
    excluded_word: String,
    /// Minimum surface length in characters
    min_len: usize,
}

impl TokenFilter {
    pub fn new(excluded_word: impl Into<String>, min_len: usize) -> Self {
        Self {
            excluded_word: excluded_word.into().to_lowercase(),
            min_len,
        }
    }

    /// The keep predicate shared by both derivations.
    pub fn keep(&self, token: &AnnotatedToken) -> bool {
        !token.is_punct
            && token.text.to_lowercase() != self.excluded_word
            && !token.is_stop
            && !token.is_space
            && token.char_len() >= self.min_len
    }

    /// Lemmas of the kept tokens, lazily, in document order.
    pub fn lemmas<'a>(&'a self, doc: &'a AnnotatedDoc) -> impl Iterator<Item = &'a str> + 'a {
        doc.iter()
            .filter(move |t| self.keep(t))
            .map(|t| t.lemma.as_str())
    }

    /// Surface text of kept tokens whose entity type is ORG.
    pub fn org_mentions<'a>(&'a self, doc: &'a AnnotatedDoc) -> impl Iterator<Item = &'a str> + 'a {
        doc.iter()
            .filter(move |t| self.keep(t) && t.ent_type.is_org())
            .map(|t| t.text.as_str())
    }

    /// Fill the `lemmas` and `ent` columns of every row from the
    /// matching annotated document. Rows and docs pair up by position.
    pub fn derive_columns(&self, rows: &mut [DatasetRow], docs: &[AnnotatedDoc]) {
        for (row, doc) in rows.iter_mut().zip(docs) {
            row.lemmas = self.lemmas(doc).map(str::to_string).collect();
            row.ent = self.org_mentions(doc).map(str::to_string).collect();
        }
    }
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new("subject", 3)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::EntityType;

    fn word(text: &str) -> AnnotatedToken {
        AnnotatedToken::new(text)
    }

    fn sample_doc() -> AnnotatedDoc {
        AnnotatedDoc::new(vec![
            word("Subject"),
            word(":").with_punct(true),
            word("Enron").with_entity(EntityType::Org),
            word("meters").with_lemma("meter"),
            word("are").with_lemma("be").with_stop(true),
            word("\n\n").with_space(true),
            word("HPL").with_entity(EntityType::Org),
            word("at").with_stop(true),
            word("ok"),
            word("Houston").with_entity(EntityType::Other("GPE".into())),
        ])
    }

    #[test]
    fn test_lemmas_keep_order_and_drop_excluded() {
        let f = TokenFilter::default();
        let doc = sample_doc();
        let lemmas: Vec<&str> = f.lemmas(&doc).collect();
        assert_eq!(lemmas, vec!["Enron", "meter", "HPL", "Houston"]);
    }

    #[test]
    fn test_org_mentions_use_surface_text() {
        let f = TokenFilter::default();
        let doc = sample_doc();
        let orgs: Vec<&str> = f.org_mentions(&doc).collect();
        assert_eq!(orgs, vec!["Enron", "HPL"]);
    }

    #[test]
    fn test_short_tokens_are_dropped_whatever_the_flags() {
        let f = TokenFilter::default();
        for text in ["a", "ok", "IB", "é1"] {
            let tok = word(text).with_entity(EntityType::Org);
            assert!(!f.keep(&tok), "{text} should be dropped");
        }
        // Three characters is enough, even when they are multi-byte
        assert!(f.keep(&word("ééé")));
    }

    #[test]
    fn test_subject_dropped_in_any_case_even_if_not_a_stopword() {
        let f = TokenFilter::default();
        for text in ["subject", "Subject", "SUBJECT"] {
            assert!(!f.keep(&word(text)));
        }
        // Only the exact word, not words containing it
        assert!(f.keep(&word("subjects")));
    }

    #[test]
    fn test_each_flag_excludes() {
        let f = TokenFilter::default();
        assert!(f.keep(&word("energy")));
        assert!(!f.keep(&word("energy").with_punct(true)));
        assert!(!f.keep(&word("energy").with_stop(true)));
        assert!(!f.keep(&word("energy").with_space(true)));
    }

    #[test]
    fn test_org_mentions_are_subset_of_kept_tokens() {
        let f = TokenFilter::default();
        let doc = sample_doc();
        for (i, tok) in doc.iter().enumerate() {
            if tok.ent_type.is_org() && f.keep(tok) {
                assert!(f.lemmas(&doc).any(|l| l == doc.tokens[i].lemma));
            }
        }
        // A stopword tagged ORG never becomes a mention
        let doc = AnnotatedDoc::new(vec![word("The").with_stop(true).with_entity(EntityType::Org)]);
        assert_eq!(f.org_mentions(&doc).count(), 0);
    }

    #[test]
    fn test_empty_doc_gives_empty_columns() {
        let f = TokenFilter::default();
        let doc = AnnotatedDoc::default();
        assert_eq!(f.lemmas(&doc).count(), 0);
        assert_eq!(f.org_mentions(&doc).count(), 0);
    }

    #[test]
    fn test_derive_columns_is_idempotent() {
        let f = TokenFilter::default();
        let docs = vec![sample_doc(), AnnotatedDoc::default()];
        let mut rows = vec![
            DatasetRow::new("0", "ignored", "ham"),
            DatasetRow::new("1", "", "spam"),
        ];

        f.derive_columns(&mut rows, &docs);
        let first = rows.clone();
        f.derive_columns(&mut rows, &docs);

        assert_eq!(rows, first);
        assert_eq!(rows[0].ent, vec!["Enron", "HPL"]);
        assert!(rows[1].lemmas.is_empty());
        // Original columns survive the derivation
        assert_eq!(rows[0].text, "ignored");
        assert_eq!(rows[0].label, "ham");
    }
}
