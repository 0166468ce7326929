use image::{Rgb, RgbImage};

use crate::{config::GeneratorConfig, fonts::TextFace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCfg {
    pub width: u32,
    pub height: u32, // max_height of the wrapped run
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

impl RenderCfg {
    pub fn for_run(config: &GeneratorConfig, max_height: u32) -> Self {
        Self {
            width: config.image_width,
            height: max_height.max(1),
            background: config.background(),
            foreground: config.foreground(),
        }
    }
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            width: 600,
            height: 32,
            background: Rgb([255, 255, 255]),
            foreground: Rgb([0, 0, 0]),
        }
    }
}

pub fn render_line<F: TextFace + ?Sized>(face: &F, line: &str, cfg: &RenderCfg) -> RgbImage {
    let (tw, th) = face.text_size(line);
    let (x, y) = text_origin((cfg.width, cfg.height), (tw, th));

    let mut img = RgbImage::from_pixel(cfg.width, cfg.height, cfg.background);
    face.draw(&mut img, cfg.foreground, x, y, &swap_parens(line));
    img
}

/// Top-left corner that centers a `text` box on a `canvas`. Negative when the
/// text overflows.
pub fn text_origin(canvas: (u32, u32), text: (u32, u32)) -> (i32, i32) {
    let x = (i64::from(canvas.0) - i64::from(text.0)).div_euclid(2);
    let y = (i64::from(canvas.1) - i64::from(text.1)).div_euclid(2);
    (x as i32, y as i32)
}

/// Mirrors `(` and `)` through a three-step replace chain; a backslash in
/// front of a paren is consumed by it (`\)` becomes `)`).
pub fn swap_parens(text: &str) -> String {
    text.replace('(', "\\)")
        .replace(')', "(")
        .replace("\\(", ")")
}
