use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use linegen::{DatasetGenerator, GeneratorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "linegen",
    about = "Generates an OCR line dataset from a right-to-left corpus."
)]
struct Args {
    /// Corpus file, one paragraph per line
    corpus: PathBuf,

    /// Encoding label of the corpus (utf-8, windows-1256, ...)
    #[arg(long)]
    encoding: Option<String>,

    /// JSON config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file, repeatable
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Font size in pixels per em, repeatable
    #[arg(long = "size")]
    sizes: Vec<u32>,

    /// Canvas width
    #[arg(long)]
    width: Option<u32>,

    /// Horizontal margin subtracted from the canvas width when wrapping
    #[arg(long)]
    margin: Option<u32>,

    /// Where data_set/ and lexical.dat are written
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Write a JSON summary of every (font, size) pass here
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<GeneratorConfig> {
        let mut cfg = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        cfg.data_path = self.corpus;
        if let Some(encoding) = self.encoding {
            cfg.data_encoding = encoding;
        }
        if !self.fonts.is_empty() {
            cfg.font_paths = self.fonts;
        }
        if !self.sizes.is_empty() {
            cfg.font_sizes = self.sizes;
        }
        if let Some(width) = self.width {
            cfg.image_width = width;
        }
        if let Some(margin) = self.margin {
            cfg.image_margin_width = margin;
        }
        if let Some(out_dir) = self.out_dir {
            cfg.out_dir = out_dir;
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = Args::parse();
    let report_path = args.report.take();
    let cfg = args.into_config()?;
    tracing::info!(
        "Generating from {:?} ({}) with {} font(s) x {} size(s)",
        cfg.data_path,
        cfg.data_encoding,
        cfg.font_paths.len(),
        cfg.font_sizes.len()
    );

    let mut generator = DatasetGenerator::new(cfg);
    let reports = generator
        .generate()
        .with_context(|| format!("generating dataset from {:?}", generator.config().data_path))?;

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&reports)?;
        std::fs::write(&path, json).with_context(|| format!("writing report {}", path.display()))?;
    }

    let total: usize = reports.iter().map(|r| r.lines).sum();
    tracing::info!("Done: {} lines over {} face(s)", total, reports.len());
    Ok(())
}
