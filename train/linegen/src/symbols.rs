use std::collections::HashMap;

use crate::error::{GenError, Result};

pub const FIRST_CODE: u32 = 200;

/// Run-wide char -> code assignment plus the word lexicon it produced.
///
/// Codes are handed out in first-seen order, so the same input order always
/// gives the same table no matter how many splits or fonts share it.
#[derive(Debug, Default)]
pub struct SymbolTable {
    codes: HashMap<char, char>,
    lexicon: Vec<(String, String)>,
    word_index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code_for(&mut self, ch: char) -> Result<char> {
        if let Some(&code) = self.codes.get(&ch) {
            return Ok(code);
        }
        let n = self.codes.len();
        let code = u32::try_from(n)
            .ok()
            .and_then(|n| n.checked_add(FIRST_CODE))
            .and_then(char::from_u32)
            .ok_or(GenError::SymbolSpaceExhausted(n))?;
        self.codes.insert(ch, code);
        Ok(code)
    }

    pub fn encode_word(&mut self, word: &str) -> Result<String> {
        let coded = word
            .chars()
            .map(|ch| self.code_for(ch))
            .collect::<Result<String>>()?;

        if !self.word_index.contains_key(word) {
            self.word_index.insert(word.to_owned(), self.lexicon.len());
            self.lexicon.push((word.to_owned(), coded.clone()));
        }
        Ok(coded)
    }

    /// Number of distinct chars seen.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.lexicon.len()
    }

    pub fn coded_word(&self, word: &str) -> Option<&str> {
        self.word_index
            .get(word)
            .map(|&i| self.lexicon[i].1.as_str())
    }

    /// `"<coded> <word>"` per distinct word, first-seen order, `\n`-joined.
    pub fn lexical_dump(&self) -> String {
        self.lexicon
            .iter()
            .map(|(word, coded)| format!("{coded} {word}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(n: u32) -> char {
        char::from_u32(n).unwrap()
    }

    #[test]
    fn same_char_same_code() {
        let mut t = SymbolTable::new();
        let a = t.code_for('ب').unwrap();
        let b = t.code_for('ب').unwrap();
        assert_eq!(a, b);
        assert_eq!(a, code(200));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn codes_follow_first_seen_order() {
        let mut t = SymbolTable::new();
        for (i, ch) in ['z', 'a', 'ی', 'z', '7', 'a'].into_iter().enumerate() {
            t.code_for(ch).unwrap();
            assert!(t.len() <= i + 1);
        }
        assert_eq!(t.code_for('z').unwrap(), code(200));
        assert_eq!(t.code_for('a').unwrap(), code(201));
        assert_eq!(t.code_for('ی').unwrap(), code(202));
        assert_eq!(t.code_for('7').unwrap(), code(203));
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn lexicon_has_one_entry_per_word() {
        let mut t = SymbolTable::new();
        assert_eq!(t.encode_word("ab").unwrap(), "\u{c8}\u{c9}");
        t.encode_word("ba").unwrap();
        t.encode_word("ab").unwrap();
        t.encode_word("a").unwrap();

        assert_eq!(t.word_count(), 3);
        assert_eq!(t.coded_word("ba"), Some("\u{c9}\u{c8}"));
        assert_eq!(
            t.lexical_dump(),
            "\u{c8}\u{c9} ab\n\u{c9}\u{c8} ba\n\u{c8} a"
        );
    }

    #[test]
    fn empty_table_dumps_nothing() {
        let t = SymbolTable::new();
        assert!(t.is_empty());
        assert_eq!(t.lexical_dump(), "");
    }
}
