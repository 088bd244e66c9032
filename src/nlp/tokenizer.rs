// ============================================================
// Layer 5 — Word Tokenizer
// ============================================================
// Splits a message into word, punctuation and whitespace tokens.
//
// How it works:
//   1. Unicode word-boundary segmentation (UAX #29) via the
//      unicode-segmentation crate. "Enron's 3.5% deal." becomes
//      "Enron's" " " "3.5" "%" " " "deal" "."
//   2. English contraction suffixes are split off:
//      "Enron's" → "Enron" "'s", "don't" → "do" "n't"
//   3. Whitespace runs are merged. A single space after a token
//      is that token's trailing whitespace and disappears; any
//      other run ("\n\n", "   ") becomes a whitespace token.
//   4. Repeated punctuation ("...", "--", "!!!") stays together.
//
// The helpers at the bottom (word shape, sentence starts) are
// shared by the lemmatizer and the ORG recognizer.
//
// Reference: unicode-segmentation crate documentation
//            Rust Book §8.2 (Strings)

use unicode_segmentation::UnicodeSegmentation;

/// Contraction suffixes split off the end of a word, matched
/// case-insensitively with straight or curly apostrophes.
const CONTRACTION_SUFFIXES: [&str; 7] = ["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// A token before any annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    pub is_space: bool,
}

impl RawToken {
    fn word(text: &str) -> Self {
        Self { text: text.to_string(), is_space: false }
    }

    fn space(text: &str) -> Self {
        Self { text: text.to_string(), is_space: true }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize one document.
    pub fn tokenize(&self, text: &str) -> Vec<RawToken> {
        let mut tokens: Vec<RawToken> = Vec::new();
        let mut pending_space = String::new();

        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                pending_space.push_str(segment);
                continue;
            }

            let adjacent = pending_space.is_empty();
            flush_space(&mut tokens, &mut pending_space);

            if adjacent && extends_punct_run(tokens.last(), segment) {
                if let Some(last) = tokens.last_mut() {
                    last.text.push_str(segment);
                }
                continue;
            }

            match split_contraction(segment) {
                Some((stem, suffix)) => {
                    tokens.push(RawToken::word(stem));
                    tokens.push(RawToken::word(suffix));
                }
                None => tokens.push(RawToken::word(segment)),
            }
        }

        flush_space(&mut tokens, &mut pending_space);
        tokens
    }
}

fn flush_space(tokens: &mut Vec<RawToken>, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    let run = std::mem::take(pending);
    let rest = if tokens.is_empty() {
        run.as_str()
    } else {
        run.strip_prefix(' ').unwrap_or(&run)
    };
    if !rest.is_empty() {
        tokens.push(RawToken::space(rest));
    }
}

/// True when `segment` is one punctuation character repeating
/// the character(s) of the previous token.
fn extends_punct_run(last: Option<&RawToken>, segment: &str) -> bool {
    let mut chars = segment.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return false;
    };
    if !is_punct_char(c) {
        return false;
    }
    match last {
        Some(tok) if !tok.is_space => tok.text.chars().all(|p| p == c),
        _ => false,
    }
}

/// Split "don't" into ("do", "n't"). Returns None when the word
/// has no contraction suffix or would leave an empty stem.
fn split_contraction(word: &str) -> Option<(&str, &str)> {
    let total = word.chars().count();

    for suffix in CONTRACTION_SUFFIXES {
        let n = suffix.chars().count();
        if total <= n {
            continue;
        }

        let tail: String = word
            .chars()
            .skip(total - n)
            .map(|c| if c == '\u{2019}' { '\'' } else { c.to_ascii_lowercase() })
            .collect();

        if tail == suffix {
            let (cut, _) = word.char_indices().nth(total - n)?;
            return Some((&word[..cut], &word[cut..]));
        }
    }
    None
}

// ─── Word Shape Helpers ──────────────────────────────────────────────────────

/// Punctuation characters: the Unicode P* categories of ASCII
/// plus common typographic punctuation. Symbols such as `$`, `+`
/// and `=` are not punctuation.
pub fn is_punct_char(c: char) -> bool {
    matches!(
        c,
        '!' | '"' | '#' | '%' | '&' | '\'' | '(' | ')' | '*' | ',' | '-' | '.' | '/'
            | ':' | ';' | '?' | '@' | '[' | '\\' | ']' | '_' | '{' | '}'
            | '¡' | '§' | '«' | '¶' | '·' | '»' | '¿'
            | '\u{2010}'..='\u{2027}'
            | '\u{2039}' | '\u{203A}'
            | '\u{3001}'..='\u{3003}'
            | '\u{300C}'..='\u{300F}'
    )
}

/// Token is made only of punctuation characters
pub fn is_punctuation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_punct_char)
}

/// "Enron", "McKinsey", "Wells-Fargo": starts uppercase, only
/// letters, digits or hyphens after that
pub fn is_capitalized(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| c.is_alphanumeric() || c == '-'),
        _ => false,
    }
}

/// "HPL", "FERC": at least two letters, none lowercase
pub fn is_acronym(text: &str) -> bool {
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    letters >= 2
        && text.chars().all(|c| c.is_alphanumeric())
        && !text.chars().any(|c| c.is_lowercase())
}

/// For each token, whether it opens a sentence. The first word of
/// the document does, as does the first word after `.`, `!`, `?`
/// or a line break.
pub fn sentence_starts(tokens: &[RawToken]) -> Vec<bool> {
    let mut starts = Vec::with_capacity(tokens.len());
    let mut at_start = true;

    for tok in tokens {
        if tok.is_space {
            starts.push(false);
            if tok.text.contains('\n') {
                at_start = true;
            }
            continue;
        }

        starts.push(at_start);
        at_start = tok.text.chars().all(|c| matches!(c, '.' | '!' | '?'));
    }
    starts
}
