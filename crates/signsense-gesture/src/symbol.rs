use serde::{Deserialize, Serialize};
use std::fmt;

/// A hand pose that directly represents a whole word rather than a spelled
/// letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordSign {
    Hello,
    Yes,
    ThankYou,
}

impl WordSign {
    /// Uppercase token form, matching the dictionary's key space.
    pub fn token(&self) -> &'static str {
        match self {
            WordSign::Hello => "HELLO",
            WordSign::Yes => "YES",
            WordSign::ThankYou => "THANKYOU",
        }
    }
}

/// One classified symbol: a fingerspelled letter or a whole-word gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Letter(char),
    Word(WordSign),
}

impl Symbol {
    pub fn letter(&self) -> Option<char> {
        match self {
            Symbol::Letter(c) => Some(*c),
            Symbol::Word(_) => None,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Symbol::Word(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Letter(c) => write!(f, "{c}"),
            Symbol::Word(w) => f.write_str(w.token()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_token_space() {
        assert_eq!(Symbol::Letter('A').to_string(), "A");
        assert_eq!(Symbol::Word(WordSign::ThankYou).to_string(), "THANKYOU");
    }

    #[test]
    fn letter_accessor() {
        assert_eq!(Symbol::Letter('L').letter(), Some('L'));
        assert_eq!(Symbol::Word(WordSign::Yes).letter(), None);
        assert!(Symbol::Word(WordSign::Hello).is_word());
    }
}
