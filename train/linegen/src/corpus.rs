//! Corpus loading and right-to-left preparation.
//!
//! The corpus is decoded, each line gets its word order reversed, `#` is
//! stripped, and the whole text goes through Arabic reshaping and bidi
//! reordering before it is split into the flat token stream the wrapper packs.

use std::path::Path;

use ar_reshaper::ArabicReshaper;
use encoding_rs::Encoding;
use unicode_bidi::{BidiClass, BidiInfo, LTR_LEVEL, Level, RTL_LEVEL, bidi_class};
use unicode_bidi_mirroring::get_mirrored;

use crate::error::{GenError, Result};

pub fn read_corpus(path: &Path, encoding_label: &str) -> Result<String> {
    let encoding = Encoding::for_label(encoding_label.trim().as_bytes())
        .ok_or_else(|| GenError::UnknownEncoding(encoding_label.to_string()))?;
    let bytes = std::fs::read(path).map_err(|e| GenError::io(path, e))?;

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| GenError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        })
}

pub fn load_tokens(path: &Path, encoding_label: &str) -> Result<Vec<String>> {
    let text = read_corpus(path, encoding_label)?;
    let tokens = display_tokens(&text);
    tracing::debug!("Loaded {} tokens from {:?}", tokens.len(), path);
    Ok(tokens)
}

/// Turns logical corpus text into visual-order tokens.
pub fn display_tokens(text: &str) -> Vec<String> {
    let reversed = text
        .lines()
        .map(|line| line.split_whitespace().rev().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
        .replace('#', "");

    let reshaped = ArabicReshaper::default().reshape(&reversed);

    visual_order(&reshaped)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Display order of every line, with mirrored glyphs swapped inside
/// right-to-left runs. One base level, taken from the first strong char of
/// the whole text, applies to every line.
fn visual_order(text: &str) -> String {
    let info = BidiInfo::new(text, Some(base_level(text)));
    let mut out = String::with_capacity(text.len());

    for para in &info.paragraphs {
        // разделитель абзаца остаётся в конце строки
        let body = text[para.range.clone()].trim_end_matches(['\n', '\r']);
        let line = para.range.start..para.range.start + body.len();

        let (levels, runs) = info.visual_runs(para, line.clone());
        for run in runs {
            let chunk = &text[run.clone()];
            if levels[run.start].is_rtl() {
                out.extend(chunk.chars().rev().map(|c| get_mirrored(c).unwrap_or(c)));
            } else {
                out.push_str(chunk);
            }
        }
        out.push_str(&text[line.end..para.range.end]);
    }
    out
}

fn base_level(text: &str) -> Level {
    text.chars()
        .find_map(|c| match bidi_class(c) {
            BidiClass::L => Some(LTR_LEVEL),
            BidiClass::R | BidiClass::AL => Some(RTL_LEVEL),
            _ => None,
        })
        .unwrap_or(LTR_LEVEL)
}
