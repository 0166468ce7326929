use crate::{error::Result, symbols::SymbolTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLabels {
    /// Goes to `<i>.dat`.
    pub raw: String,
    /// Goes to `<i>.dat2`.
    pub encoded: String,
}

pub fn label_line(line: &str, symbols: &mut SymbolTable) -> Result<LineLabels> {
    let raw = flip_digits(line);
    let encoded = encode_flipped(&raw, symbols)?;
    Ok(LineLabels { raw, encoded })
}

/// Reverses all-digit tokens, then reverses the whole space-joined line.
///
/// A visual-order line goes back to reading order this way while digit runs,
/// which bidi already kept left-to-right, come out unchanged.
pub fn flip_digits(line: &str) -> String {
    let joined = line
        .split_whitespace()
        .map(|word| {
            if is_digit_word(word) {
                word.chars().rev().collect()
            } else {
                word.to_owned()
            }
        })
        .collect::<Vec<String>>()
        .join(" ");

    joined.chars().rev().collect()
}

fn encode_flipped(flipped: &str, symbols: &mut SymbolTable) -> Result<String> {
    let coded = flipped
        .split_whitespace()
        .map(|word| symbols.encode_word(word))
        .collect::<Result<Vec<_>>>()?;
    Ok(coded.join(" "))
}

fn is_digit_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_token_keeps_its_digits() {
        assert_eq!(flip_digits("123"), "123");
        assert_eq!(flip_digits("abc 123"), "123 cba");
        assert_eq!(flip_digits("۱۲۳ ﻡﻼﺳ"), "ﺳﻼﻡ ۱۲۳");
    }

    #[test]
    fn mixed_tokens_are_plain_reversed() {
        assert_eq!(flip_digits("a12"), "21a");
        assert_eq!(flip_digits("x 4.5"), "5.4 x");
    }

    #[test]
    fn flip_is_involutive_on_equal_length_digit_tokens() {
        let fixture = "1234 5678 9012";
        assert_eq!(flip_digits(&flip_digits(fixture)), fixture);
        assert_eq!(flip_digits(fixture), "9012 5678 1234");
    }

    #[test]
    fn whitespace_is_normalised() {
        assert_eq!(flip_digits("  ab   cd "), "dc ba");
        assert_eq!(flip_digits(""), "");
    }

    #[test]
    fn encoded_label_maps_each_token() {
        let mut symbols = SymbolTable::new();
        let labels = label_line("ba 12", &mut symbols).unwrap();
        assert_eq!(labels.raw, "12 ab");
        // '1' -> 200, '2' -> 201, 'a' -> 202, 'b' -> 203
        assert_eq!(labels.encoded, "\u{c8}\u{c9} \u{ca}\u{cb}");
        assert_eq!(symbols.word_count(), 2);
        assert_eq!(symbols.coded_word("ab"), Some("\u{ca}\u{cb}"));
    }
}
