// ============================================================
// Layer 5 — Rule-Based NLP Pipeline
// ============================================================
// Turns raw message texts into annotated documents using the
// components of this layer:
//
//   text
//     │
//     ▼
//   Tokenizer        → words, punctuation, whitespace
//     │
//     ▼
//   OrgRecognizer    → which tokens belong to an ORG name
//     │
//     ▼
//   per token:
//     is_punct  ← tokenizer word shape
//     is_stop   ← StopwordFilter
//     lemma     ← Lemmatizer (proper nouns keep their case)
//     ent_type  ← ORG or none
//
// The pipeline holds no per-document state, so annotating the
// same text twice gives the same document.

use anyhow::Result;

use crate::domain::token::{AnnotatedDoc, AnnotatedToken, EntityType};
use crate::domain::traits::NlpPipeline;
use crate::nlp::entities::OrgRecognizer;
use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{is_acronym, is_capitalized, is_punctuation, sentence_starts, Tokenizer};

pub struct RuleBasedPipeline {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    lemmatizer: Lemmatizer,
    orgs: OrgRecognizer,
}

impl RuleBasedPipeline {
    pub fn new(stopwords: StopwordFilter, orgs: OrgRecognizer) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            stopwords,
            lemmatizer: Lemmatizer::new(),
            orgs,
        }
    }

    /// Annotate a single document.
    pub fn annotate(&self, text: &str) -> AnnotatedDoc {
        let raw = self.tokenizer.tokenize(text);
        let org_tags = self.orgs.tag(&raw);
        let starts = sentence_starts(&raw);

        let tokens = raw
            .iter()
            .zip(org_tags)
            .zip(starts)
            .map(|((tok, is_org), at_start)| {
                if tok.is_space {
                    return AnnotatedToken::new(tok.text.as_str()).with_space(true);
                }

                let is_punct = is_punctuation(&tok.text);
                let proper = is_org
                    || is_acronym(&tok.text)
                    || (is_capitalized(&tok.text) && !at_start);
                let lemma = if is_punct {
                    tok.text.clone()
                } else {
                    self.lemmatizer.lemmatize(&tok.text, proper)
                };

                AnnotatedToken::new(tok.text.as_str())
                    .with_lemma(lemma)
                    .with_punct(is_punct)
                    .with_stop(self.stopwords.is_stopword(&tok.text))
                    .with_entity(if is_org { EntityType::Org } else { EntityType::None })
            })
            .collect();

        AnnotatedDoc::new(tokens)
    }
}

impl NlpPipeline for RuleBasedPipeline {
    fn pipe(&self, texts: &[String]) -> Result<Vec<AnnotatedDoc>> {
        let docs: Vec<AnnotatedDoc> = texts.iter().map(|t| self.annotate(t)).collect();

        tracing::debug!(
            "Annotated {} documents ({} tokens)",
            docs.len(),
            docs.iter().map(AnnotatedDoc::len).sum::<usize>()
        );

        Ok(docs)
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> RuleBasedPipeline {
        RuleBasedPipeline::new(
            StopwordFilter::from_words(["the", "for", "is", "and", "of"]),
            OrgRecognizer::new(),
        )
    }

    fn find<'a>(doc: &'a AnnotatedDoc, text: &str) -> &'a AnnotatedToken {
        doc.iter().find(|t| t.text == text).unwrap()
    }

    #[test]
    fn test_annotates_flags_lemmas_and_orgs() {
        let doc = pipeline().annotate("Subject: Enron meters for the HPL pipeline\n\nRunning late.");

        let subject = find(&doc, "Subject");
        assert_eq!(subject.lemma, "subject");

        assert!(find(&doc, ":").is_punct);
        assert!(find(&doc, "for").is_stop);
        assert!(find(&doc, "\n\n").is_space);

        let enron = find(&doc, "Enron");
        assert!(enron.ent_type.is_org());
        assert_eq!(enron.lemma, "Enron");

        assert_eq!(find(&doc, "meters").lemma, "meter");
        assert_eq!(find(&doc, "meters").ent_type, EntityType::None);
        assert!(find(&doc, "HPL").ent_type.is_org());

        // Sentence-initial capital is lowercased and lemmatized
        assert_eq!(find(&doc, "Running").lemma, "run");
    }

    #[test]
    fn test_mid_sentence_capital_keeps_its_form() {
        let doc = pipeline().annotate("call Houston today");
        assert_eq!(find(&doc, "Houston").lemma, "Houston");
    }

    #[test]
    fn test_pipe_returns_one_doc_per_text_in_order() {
        let texts = vec!["first text".to_string(), String::new(), "third".to_string()];
        let docs = pipeline().pipe(&texts).unwrap();

        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].tokens[0].text, "first");
        assert!(docs[1].tokens.is_empty());
        assert_eq!(docs[2].tokens[0].text, "third");
    }

    #[test]
    fn test_annotation_is_deterministic() {
        let p = pipeline();
        let text = "Goldman Sachs and Enron Corp signed the deals.";
        assert_eq!(p.annotate(text), p.annotate(text));
    }
}
