use std::path::{Path, PathBuf};

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Settings of one generation run.
///
/// Every field has a default, so a JSON config only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub data_path: PathBuf,
    pub data_encoding: String,
    pub font_paths: Vec<PathBuf>,
    /// Pixels per em, one run per (font, size).
    pub font_sizes: Vec<u32>,
    pub image_width: u32,
    pub image_margin_width: u32,
    pub background_color: [u8; 3],
    pub text_color: [u8; 3],
    /// `data_set/` and `lexical.dat` are created here.
    pub out_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("test_txt.dat"),
            data_encoding: "utf-8".to_string(),
            font_paths: vec![PathBuf::from("PNazanin.TTF")],
            font_sizes: vec![12, 14],
            image_width: 600,
            image_margin_width: 20,
            background_color: [255, 255, 255],
            text_color: [0, 0, 0],
            out_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.font_paths.is_empty() {
            return Err(GenError::InvalidConfig("no font paths given".into()));
        }
        if self.font_sizes.is_empty() {
            return Err(GenError::InvalidConfig("no font sizes given".into()));
        }
        if self.font_sizes.contains(&0) {
            return Err(GenError::InvalidConfig("font size must be positive".into()));
        }
        if self.image_width == 0 {
            return Err(GenError::InvalidConfig("image width must be positive".into()));
        }
        Ok(())
    }

    /// Widest a display line may render.
    pub fn line_budget(&self) -> u32 {
        self.image_width.saturating_sub(self.image_margin_width)
    }

    pub fn background(&self) -> Rgb<u8> {
        Rgb(self.background_color)
    }

    pub fn foreground(&self) -> Rgb<u8> {
        Rgb(self.text_color)
    }
}
