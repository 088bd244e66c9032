// ============================================================
// Layer 5 — Rule-Based English Lemmatizer
// ============================================================
// Maps a word to its dictionary form without a tagger:
//
//   1. Proper nouns and acronyms keep their surface form
//      (the caller decides, see `keep_case`)
//   2. Irregular forms come from an exception table
//      ("was" → "be", "children" → "child", "n't" → "not")
//   3. A few words that only look inflected are left alone
//      ("news", "morning", "hundred")
//   4. Suffix rules, applied once:
//        -ies  → -y     companies → company
//        -sses → -ss    addresses → address
//        -ches/-shes/-xes/-zzes → drop "es"
//        -s    → drop   meters → meter
//        -ied  → -y     applied → apply
//        -ing / -ed → stem, then repair the stem:
//          doubled final consonant → single  running → run
//          stems that lost an "e"  → add it  making  → make
//
// Without part-of-speech information this is an
// approximation: nouns ending in -ing keep being verbs.
//
// Reference: Porter (1980) suffix stripping
//            Rust Book §8.2 (Strings)

use rustc_hash::{FxHashMap, FxHashSet};

const EXCEPTIONS: &[(&str, &str)] = &[
    // be / have / do / go
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"), ("'m", "be"), ("'re", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"), ("'ve", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"),
    ("goes", "go"), ("went", "go"), ("gone", "go"),
    ("n't", "not"), ("'ll", "will"), ("'d", "would"),
    // irregular verbs
    ("made", "make"), ("got", "get"), ("gotten", "get"), ("said", "say"),
    ("took", "take"), ("taken", "take"), ("came", "come"), ("saw", "see"),
    ("seen", "see"), ("knew", "know"), ("known", "know"), ("thought", "think"),
    ("sent", "send"), ("paid", "pay"), ("bought", "buy"), ("found", "find"),
    ("gave", "give"), ("given", "give"), ("told", "tell"), ("left", "leave"),
    ("felt", "feel"), ("kept", "keep"), ("held", "hold"), ("brought", "bring"),
    ("began", "begin"), ("begun", "begin"), ("wrote", "write"), ("written", "write"),
    ("ran", "run"), ("met", "meet"), ("sold", "sell"), ("won", "win"),
    ("lost", "lose"), ("built", "build"), ("spent", "spend"), ("meant", "mean"),
    ("understood", "understand"), ("chose", "choose"), ("chosen", "choose"),
    ("spoke", "speak"), ("spoken", "speak"), ("forgot", "forget"),
    ("forgotten", "forget"), ("became", "become"), ("led", "lead"),
    ("fell", "fall"), ("fallen", "fall"), ("grew", "grow"), ("grown", "grow"),
    ("drove", "drive"), ("driven", "drive"), ("ate", "eat"), ("eaten", "eat"),
    ("stood", "stand"), ("heard", "hear"), ("lent", "lend"),
    ("dealt", "deal"), ("sought", "seek"), ("taught", "teach"), ("caught", "catch"),
    ("fought", "fight"), ("rose", "rise"), ("risen", "rise"), ("wore", "wear"),
    ("worn", "wear"), ("broke", "break"), ("broken", "break"),
    // -ie verbs and other stems the suffix rules get wrong
    ("dies", "die"), ("died", "die"), ("dying", "die"),
    ("lies", "lie"), ("lied", "lie"), ("lying", "lie"),
    ("ties", "tie"), ("tied", "tie"), ("tying", "tie"),
    ("used", "use"), ("using", "use"),
    ("caused", "cause"), ("causing", "cause"),
    ("created", "create"), ("creating", "create"),
    ("closed", "close"), ("closing", "close"),
    // irregular plurals
    ("men", "man"), ("women", "woman"), ("children", "child"), ("feet", "foot"),
    ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"),
    ("analyses", "analysis"), ("crises", "crisis"), ("indices", "index"),
];

const INVARIANT: &[&str] = &[
    "news", "series", "species", "always", "perhaps", "whereas", "thus", "plus",
    "christmas", "texas", "kansas", "arkansas", "sometimes", "afterwards", "towards",
    "morning", "evening", "during", "nothing", "something", "anything", "everything",
    "ceiling", "wedding", "spring", "string", "sibling", "pudding",
    "hundred", "indeed", "naked", "wicked", "sacred", "kindred",
];

pub struct Lemmatizer {
    exceptions: FxHashMap<&'static str, &'static str>,
    invariant: FxHashSet<&'static str>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: EXCEPTIONS.iter().copied().collect(),
            invariant: INVARIANT.iter().copied().collect(),
        }
    }

    /// Lemma of a single token.
    ///
    /// With `keep_case` the surface form is returned untouched;
    /// the pipeline sets it for proper nouns and acronyms.
    /// Tokens that are not words (numbers, "e-mail", "988291")
    /// also come back unchanged.
    pub fn lemmatize(&self, word: &str, keep_case: bool) -> String {
        if keep_case {
            return word.to_string();
        }

        let lower = word.to_lowercase().replace('\u{2019}', "'");

        if let Some(lemma) = self.exceptions.get(lower.as_str()) {
            return (*lemma).to_string();
        }

        if !lower.chars().all(|c| c.is_ascii_alphabetic()) || self.invariant.contains(lower.as_str()) {
            return lower;
        }

        strip_inflection(&lower)
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the first matching suffix rule. Input is lowercase ASCII.
fn strip_inflection(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 3 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    for suffix in ["ches", "shes", "xes", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with('s')
        && word.len() > 3
        && !["ss", "us", "is"].iter().any(|end| word.ends_with(end))
    {
        return word[..word.len() - 1].to_string();
    }

    if let Some(stem) = word.strip_suffix("ied") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if is_stem(stem) {
            return repair_stem(stem);
        }
    }
    if word.ends_with("eed") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if is_stem(stem) {
            return repair_stem(stem);
        }
    }

    word.to_string()
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// A plausible stem has two letters or more, one of them a vowel
fn is_stem(stem: &str) -> bool {
    stem.len() >= 2 && stem.bytes().any(|c| is_vowel(c) || c == b'y')
}

fn repair_stem(stem: &str) -> String {
    let b = stem.as_bytes();
    let n = b.len();
    let last = b[n - 1];

    // runn → run, stopp → stop; fill, pass and buzz keep theirs
    if n >= 3 && b[n - 2] == last && !is_vowel(last) && !matches!(last, b'l' | b's' | b'z') {
        return stem[..n - 1].to_string();
    }

    if needs_final_e(b) {
        return format!("{stem}e");
    }

    stem.to_string()
}

/// Stems that dropped a silent "e" before -ing / -ed.
fn needs_final_e(b: &[u8]) -> bool {
    let n = b.len();
    let last = b[n - 1];
    let prev = if n >= 2 { b[n - 2] } else { 0 };

    match last {
        // receiv(e), hav(e)
        b'v' => true,
        // organiz(e)
        b'z' => prev != b'z',
        // charg(e), but not hang
        b'g' => prev != b'n' && prev != b'g',
        // produc(e)
        b'c' => is_vowel(prev),
        // enabl(e), settl(e), handl(e)
        b'l' => matches!(prev, b'b' | b'c' | b'd' | b'f' | b'g' | b'k' | b'p' | b't'),
        // updat(e), relat(e); but not treat
        b't' if prev == b'a' => n >= 3 && !is_vowel(b[n - 3]),
        // releas(e), increas(e), pleas(e); but not focus
        b's' => is_vowel(prev) && prev != b'u',
        // mak(e), hop(e), bas(e): short consonant-vowel-consonant stems
        _ => {
            n == 3
                && !is_vowel(b[0])
                && is_vowel(b[1])
                && !is_vowel(last)
                && !matches!(last, b'w' | b'x' | b'y')
        }
    }
}
