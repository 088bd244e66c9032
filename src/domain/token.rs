// ============================================================
// Layer 3 — Annotated Token Domain Types
// ============================================================
// The output of an NLP pipeline for one document: an ordered
// list of tokens, each carrying the attributes the token
// filter reads.
//
//   text      → surface form exactly as it appeared
//   lemma     → dictionary form ("running" → "run")
//   is_punct  → token is made only of punctuation
//   is_stop   → token is a stopword
//   is_space  → token is pure whitespace
//   ent_type  → named-entity label ("ORG", "" for none)
//
// Tokens are read-only once a pipeline has produced them.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use serde::{Deserialize, Serialize};

/// Named-entity label attached to a token.
///
/// Serialised as the bare label string so annotation files can
/// use the usual `"ORG"` / `""` convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityType {
    /// Token is not part of any entity
    #[default]
    None,
    /// Organization name
    Org,
    /// Any other label (PERSON, GPE, MONEY, ...)
    Other(String),
}

impl EntityType {
    pub fn label(&self) -> &str {
        match self {
            EntityType::None => "",
            EntityType::Org => "ORG",
            EntityType::Other(label) => label,
        }
    }

    pub fn is_org(&self) -> bool {
        matches!(self, EntityType::Org)
    }
}

impl From<String> for EntityType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "" => EntityType::None,
            "ORG" => EntityType::Org,
            _ => EntityType::Other(label),
        }
    }
}

impl From<&str> for EntityType {
    fn from(label: &str) -> Self {
        EntityType::from(label.to_string())
    }
}

impl From<EntityType> for String {
    fn from(ent: EntityType) -> Self {
        ent.label().to_string()
    }
}

/// One token of an annotated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text as it appeared in the document
    pub text: String,

    /// Dictionary form of the token
    pub lemma: String,

    #[serde(default)]
    pub is_punct: bool,

    #[serde(default)]
    pub is_stop: bool,

    #[serde(default)]
    pub is_space: bool,

    #[serde(default)]
    pub ent_type: EntityType,
}

impl AnnotatedToken {
    /// Create a plain word token whose lemma equals its text.
    /// Flags start cleared; use the `with_*` builders to set them.
    ///
    /// Example:
    ///   let tok = AnnotatedToken::new("Enron").with_entity(EntityType::Org);
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            is_punct: false,
            is_stop: false,
            is_space: false,
            ent_type: EntityType::None,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    pub fn with_punct(mut self, is_punct: bool) -> Self {
        self.is_punct = is_punct;
        self
    }

    pub fn with_stop(mut self, is_stop: bool) -> Self {
        self.is_stop = is_stop;
        self
    }

    pub fn with_space(mut self, is_space: bool) -> Self {
        self.is_space = is_space;
        self
    }

    pub fn with_entity(mut self, ent_type: EntityType) -> Self {
        self.ent_type = ent_type;
        self
    }

    /// Length of the surface text in characters, not bytes
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// The ordered tokens of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDoc {
    pub tokens: Vec<AnnotatedToken>,
}

impl AnnotatedDoc {
    pub fn new(tokens: Vec<AnnotatedToken>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedToken> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a AnnotatedDoc {
    type Item = &'a AnnotatedToken;
    type IntoIter = std::slice::Iter<'a, AnnotatedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_from_label() {
        assert_eq!(EntityType::from(""), EntityType::None);
        assert_eq!(EntityType::from("ORG"), EntityType::Org);
        assert_eq!(
            EntityType::from("PERSON"),
            EntityType::Other("PERSON".to_string())
        );
        // Labels are case-sensitive, "org" is not an organization
        assert!(!EntityType::from("org").is_org());
    }

    #[test]
    fn test_entity_type_serialises_as_label() {
        let json = serde_json::to_string(&EntityType::Org).unwrap();
        assert_eq!(json, "\"ORG\"");
        let none: EntityType = serde_json::from_str("\"\"").unwrap();
        assert_eq!(none, EntityType::None);
    }

    #[test]
    fn test_token_flags_default_when_missing() {
        let tok: AnnotatedToken =
            serde_json::from_str(r#"{"text":"Enron","lemma":"Enron","ent_type":"ORG"}"#).unwrap();
        assert!(!tok.is_punct);
        assert!(!tok.is_stop);
        assert!(!tok.is_space);
        assert!(tok.ent_type.is_org());
    }

    #[test]
    fn test_char_len_counts_characters() {
        // "café" is 5 bytes but 4 characters
        assert_eq!(AnnotatedToken::new("café").char_len(), 4);
    }
}
