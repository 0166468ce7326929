use std::path::Path;

use serde::Serialize;

use crate::{
    config::GeneratorConfig,
    corpus,
    error::Result,
    fonts::{self, TextFace},
    io::DatasetLayout,
    labels::{self, label_line},
    layout::wrap_words,
    render::{RenderCfg, render_line},
    split::{Partition, Split},
    symbols::SymbolTable,
};

/// What one (font, size) pass produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceReport {
    pub family: String,
    pub size: u32,
    pub lines: usize,
    pub canvas_height: u32,
    pub partition: Partition,
}

pub struct DatasetGenerator {
    config: GeneratorConfig,
    layout: DatasetLayout,
    symbols: SymbolTable,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let layout = DatasetLayout::new(&config.out_dir);
        Self {
            config,
            layout,
            symbols: SymbolTable::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn layout(&self) -> &DatasetLayout {
        &self.layout
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Full run from the config: corpus, fonts, every split, lexical table.
    pub fn generate(&mut self) -> Result<Vec<FaceReport>> {
        self.config.validate()?;
        let tokens = corpus::load_tokens(&self.config.data_path, &self.config.data_encoding)?;
        let faces = fonts::load_faces(&self.config.font_paths, &self.config.font_sizes)?;
        self.generate_from(&tokens, &faces)
    }

    /// Same as [`generate`](Self::generate) with tokens and faces already prepared.
    pub fn generate_from<F: TextFace>(
        &mut self,
        tokens: &[String],
        faces: &[F],
    ) -> Result<Vec<FaceReport>> {
        self.layout
            .scaffold(faces.iter().map(|f| (f.family(), f.size())))?;

        let mut reports = Vec::with_capacity(faces.len());
        for face in faces {
            let report = self.generate_face(tokens, face)?;
            tracing::info!(
                "{} {}px: {} lines (train {}, dev {}, val {}, lm {}), canvas {}x{}",
                report.family,
                report.size,
                report.lines,
                report.partition.train.len(),
                report.partition.dev.len(),
                report.partition.val.len(),
                report.partition.lm.len(),
                self.config.image_width,
                report.canvas_height,
            );
            reports.push(report);
        }

        self.layout.write_lexical(&self.symbols)?;
        tracing::info!(
            "Wrote {} words / {} symbols to {:?}",
            self.symbols.word_count(),
            self.symbols.len(),
            self.layout.lexical_path()
        );

        Ok(reports)
    }

    fn generate_face<F: TextFace>(&mut self, tokens: &[String], face: &F) -> Result<FaceReport> {
        let wrapped = wrap_words(tokens, face, self.config.line_budget());
        let partition = Partition::new(wrapped.lines.len());
        let render_cfg = RenderCfg::for_run(&self.config, wrapped.max_height);

        for split in Split::ALL {
            let dir = self.layout.face_dir(split, face.family(), face.size());
            let lines = partition.slice(split, &wrapped.lines);
            tracing::debug!("{}: {} lines -> {:?}", split, lines.len(), dir);

            if split.is_language_model() {
                self.write_language_model(&dir, lines)?;
            } else {
                self.write_split(&dir, lines, face, &render_cfg)?;
            }
        }

        Ok(FaceReport {
            family: face.family().to_string(),
            size: face.size(),
            lines: wrapped.lines.len(),
            canvas_height: render_cfg.height,
            partition,
        })
    }

    fn write_split<F: TextFace>(
        &mut self,
        dir: &Path,
        lines: &[String],
        face: &F,
        render_cfg: &RenderCfg,
    ) -> Result<()> {
        for (index, line) in lines.iter().enumerate() {
            let index = index + 1;
            let labels = label_line(line, &mut self.symbols)?;
            self.layout.write_labels(dir, index, &labels)?;

            let img = render_line(face, line, render_cfg);
            self.layout.save_png(dir, index, &img)?;
        }
        Ok(())
    }

    fn write_language_model(&self, dir: &Path, lines: &[String]) -> Result<()> {
        let mut lm = self.layout.language_model(dir);
        for line in lines {
            lm.append(&labels::flip_digits(line))?;
        }
        lm.finish()
    }
}
