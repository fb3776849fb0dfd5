//! Dictionary of common ASL words and spelling patterns
//!
//! Resolution degrades gracefully: exact match, then longest known prefix,
//! then the letters spelled out. Unmatched spelling is never silently
//! dropped.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Exact-match vocabulary: accumulated letters -> emitted text.
static WORDS: &[(&str, &str)] = &[
    ("HELLO", "hello"),
    ("HI", "hi"),
    ("YES", "yes"),
    ("NO", "no"),
    ("THANKYOU", "thank you"),
    ("THANK", "thank you"),
    ("PLEASE", "please"),
    ("HELP", "help"),
    ("ILOVEYOU", "i love you"),
    ("ILU", "i love you"),
    ("SORRY", "sorry"),
    ("EXCUSE", "excuse me"),
    ("NAME", "name"),
    ("WHAT", "what"),
    ("HOW", "how"),
    ("WHERE", "where"),
    ("WHY", "why"),
    ("WHEN", "when"),
    ("WHO", "who"),
    ("NICE", "nice"),
    ("MEET", "nice to meet you"),
    ("GOOD", "good"),
    ("BAD", "bad"),
    ("OK", "okay"),
    ("FINE", "fine"),
    ("HAPPY", "happy"),
    ("SAD", "sad"),
    ("TIRED", "tired"),
    ("HUNGRY", "hungry"),
    ("THIRSTY", "thirsty"),
    ("EAT", "eat"),
    ("DRINK", "drink"),
    ("SLEEP", "sleep"),
    ("WORK", "work"),
    ("HOME", "home"),
    ("SCHOOL", "school"),
    ("FRIEND", "friend"),
    ("FAMILY", "family"),
    ("WATER", "water"),
    ("FOOD", "food"),
    ("TODAY", "today"),
    ("TOMORROW", "tomorrow"),
    ("YESTERDAY", "yesterday"),
    ("NOW", "now"),
    ("LATER", "later"),
    ("AGAIN", "again"),
];

/// Prefix patterns for words abandoned mid-spelling. Checked longest
/// prefix first, down to two letters.
static PREFIXES: &[(&str, &str)] = &[
    ("HEL", "hello"),
    ("HELL", "hello"),
    ("HE", "hello"),
    ("TH", "thank you"),
    ("THA", "thank you"),
    ("THAN", "thank you"),
    ("PL", "please"),
    ("PLE", "please"),
    ("PLEA", "please"),
    ("PLEAS", "please"),
    ("YE", "yes"),
    ("IL", "i love you"),
    ("ILO", "i love you"),
    ("ILOV", "i love you"),
    ("ILOVE", "i love you"),
    ("ILOVEY", "i love you"),
    ("ILOVEYO", "i love you"),
];

fn word_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| WORDS.iter().copied().collect())
}

fn prefix_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| PREFIXES.iter().copied().collect())
}

pub fn lookup_exact(letters: &str) -> Option<&'static str> {
    word_map().get(letters.to_uppercase().as_str()).copied()
}

/// Longest known prefix of the accumulated letters, at least two letters.
pub fn lookup_prefix(letters: &str) -> Option<&'static str> {
    let upper = letters.to_uppercase();
    for len in (2..=upper.len()).rev() {
        if let Some(&text) = prefix_map().get(&upper[..len]) {
            return Some(text);
        }
    }
    None
}

/// Resolve accumulated letters to emitted text: word, abbreviation, or
/// spelled-out letters.
pub fn resolve(letters: &str) -> String {
    if let Some(word) = lookup_exact(letters) {
        return word.to_string();
    }
    if let Some(word) = lookup_prefix(letters) {
        return word.to_string();
    }
    spell_out(letters)
}

fn spell_out(letters: &str) -> String {
    let lower = letters.to_lowercase();
    let chars: Vec<String> = lower.chars().map(|c| c.to_string()).collect();
    chars.join(" ")
}
