//! Word list parsing.
//!
//! Word lists arrive as plain text in which every playable word appears as a
//! quoted five-letter token, e.g. `"cigar","rebut","sissy"`. The parser picks
//! out those tokens and ignores everything else.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::WORD_LENGTH;

/// A five-letter word, stored inline so it can be copied freely.
///
/// Words compare structurally and order lexicographically, which is what the
/// ranking code uses to break score ties.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word from a string slice.
    ///
    /// Returns `None` unless the input is exactly five ASCII characters.
    pub fn parse(s: &str) -> Option<Self> {
        let letters: [u8; WORD_LENGTH] = s.as_bytes().try_into().ok()?;
        if letters.iter().all(|b| b.is_ascii()) {
            Some(Self(letters))
        } else {
            None
        }
    }

    /// The letters of the word.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

/// Extract every quoted five-letter token from `text`.
///
/// Double quotes pair up in order of appearance. A quoted span of any other
/// length is skipped, and unquoted content never contributes a word.
pub fn parse_words(text: &str) -> Vec<Word> {
    let bytes = text.as_bytes();
    let mut words = Vec::new();
    let mut open = None;

    for (i, &b) in bytes.iter().enumerate() {
        if b != b'"' {
            continue;
        }
        match open.take() {
            None => open = Some(i),
            Some(start) if i - start == WORD_LENGTH + 1 => {
                if let Some(word) = Word::parse(&text[start + 1..i]) {
                    words.push(word);
                }
            }
            Some(_) => {}
        }
    }

    words
}

/// Read a word list from disk.
///
/// A missing or unreadable file is treated as an empty list; the ranking
/// downstream then simply produces no output.
pub fn load_words(path: &Path) -> Vec<Word> {
    fs::read_to_string(path)
        .map(|text| parse_words(&text))
        .unwrap_or_default()
}
