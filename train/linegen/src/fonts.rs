use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::error::{GenError, Result};

/// Rendered extent of a string, in pixels.
pub trait TextMeasure {
    fn text_size(&self, text: &str) -> (u32, u32);
}

/// A font at one size: measures, draws, and names its output directory.
pub trait TextFace: TextMeasure {
    fn family(&self) -> &str;
    fn size(&self) -> u32;
    fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str);
}

#[derive(Clone)]
pub struct FontFace {
    font: FontArc,
    scale: PxScale,
    family: String,
    size: u32,
}

impl FontFace {
    pub fn load(path: &Path, size: u32) -> Result<Self> {
        Ok(Self::from_font(read_font(path)?, font_stem(path), size))
    }

    pub fn from_font(font: FontArc, family: String, size: u32) -> Self {
        let scale = em_scale(&font, size);
        Self {
            font,
            scale,
            family,
            size,
        }
    }
}

impl TextMeasure for FontFace {
    fn text_size(&self, text: &str) -> (u32, u32) {
        text_size(self.scale, &self.font, text)
    }
}

impl TextFace for FontFace {
    fn family(&self) -> &str {
        &self.family
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
        draw_text_mut(canvas, color, x, y, self.scale, &self.font, text);
    }
}

/// Loads every (font, size) pair, fonts outer, sizes inner.
pub fn load_faces(paths: &[PathBuf], sizes: &[u32]) -> Result<Vec<FontFace>> {
    let mut faces = Vec::with_capacity(paths.len() * sizes.len());
    for path in paths {
        let font = read_font(path)?;
        let family = font_stem(path);
        tracing::debug!("Loaded font {:?} as '{}'", path, family);
        for &size in sizes {
            faces.push(FontFace::from_font(font.clone(), family.clone(), size));
        }
    }
    Ok(faces)
}

fn read_font(path: &Path) -> Result<FontArc> {
    let bytes = std::fs::read(path).map_err(|e| GenError::io(path, e))?;
    FontArc::try_from_vec(bytes).map_err(|_| GenError::InvalidFont {
        path: path.to_path_buf(),
    })
}

/// `fonts/B Nazanin.bold.ttf` -> `B Nazanin`
pub fn font_stem(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or_default()
        .to_string()
}

// TrueType size = пиксели на em; PxScale ab_glyph = высота ascent..descent
fn em_scale(font: &FontArc, size: u32) -> PxScale {
    let px = size as f32;
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(px * font.height_unscaled() / upem),
        _ => PxScale::from(px),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_stops_at_first_dot() {
        assert_eq!(font_stem(Path::new("fonts/PNazanin.TTF")), "PNazanin");
        assert_eq!(font_stem(Path::new("/a/b/B Yekan.bold.ttf")), "B Yekan");
        assert_eq!(font_stem(Path::new("plain")), "plain");
    }

    #[test]
    fn missing_font_file_is_io_error() {
        let err = FontFace::load(Path::new("/no/such/font.ttf"), 12).err().unwrap();
        assert!(matches!(err, GenError::Io { .. }));
    }

    #[test]
    fn garbage_font_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"definitely not a font").unwrap();
        let err = FontFace::load(file.path(), 12).err().unwrap();
        assert!(matches!(err, GenError::InvalidFont { .. }));
    }
}
