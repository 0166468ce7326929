use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use image::RgbImage;

use crate::{
    error::{GenError, Result},
    labels::LineLabels,
    split::Split,
    symbols::SymbolTable,
};

pub const DATA_SET_DIR: &str = "data_set";
pub const LANGUAGE_MODEL_FILE: &str = "language_model.dat";
pub const LEXICAL_FILE: &str = "lexical.dat";

/// Output tree rooted at `out_dir`; every path is composed here, nothing
/// changes the working directory.
#[derive(Debug, Clone)]
pub struct DatasetLayout {
    out_dir: PathBuf,
}

impl DatasetLayout {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn data_set_dir(&self) -> PathBuf {
        self.out_dir.join(DATA_SET_DIR)
    }

    pub fn face_dir(&self, split: Split, family: &str, size: u32) -> PathBuf {
        self.data_set_dir()
            .join(split.name())
            .join(family)
            .join(size.to_string())
    }

    pub fn lexical_path(&self) -> PathBuf {
        self.out_dir.join(LEXICAL_FILE)
    }

    /// `data_set/{split}/{family}/{size}` for every split and face.
    pub fn scaffold<'a, I>(&self, faces: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, u32)> + Clone,
    {
        for split in Split::ALL {
            for (family, size) in faces.clone() {
                let dir = self.face_dir(split, family, size);
                if !dir.is_dir() {
                    std::fs::create_dir_all(&dir).map_err(|e| GenError::io(&dir, e))?;
                    tracing::debug!("Created {:?}", dir);
                }
            }
        }
        Ok(())
    }

    pub fn write_labels(&self, dir: &Path, index: usize, labels: &LineLabels) -> Result<()> {
        write_bytes(&dir.join(format!("{index}.dat")), labels.raw.as_bytes())?;
        write_bytes(&dir.join(format!("{index}.dat2")), labels.encoded.as_bytes())
    }

    pub fn save_png(&self, dir: &Path, index: usize, img: &RgbImage) -> Result<()> {
        let path = dir.join(format!("{index}.png"));
        img.save(&path).map_err(|source| GenError::Image { path, source })
    }

    pub fn language_model(&self, dir: &Path) -> LanguageModelWriter {
        LanguageModelWriter::new(dir.join(LANGUAGE_MODEL_FILE))
    }

    pub fn write_lexical(&self, symbols: &SymbolTable) -> Result<()> {
        write_bytes(&self.lexical_path(), symbols.lexical_dump().as_bytes())
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| GenError::io(path, e))
}

/// Space-separated lm corpus. The file is created (truncated) on the first
/// line, so an empty lm split writes nothing and a rerun never appends to the
/// previous run's file. Finishing with no lines removes a stale file.
pub struct LanguageModelWriter {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    written: usize,
}

impl LanguageModelWriter {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            writer: None,
            written: 0,
        }
    }

    pub fn append(&mut self, line: &str) -> Result<()> {
        if self.writer.is_none() {
            let file = File::create(&self.path).map_err(|e| GenError::io(&self.path, e))?;
            self.writer = Some(BufWriter::with_capacity(1 << 20, file));
        }

        if let Some(ref mut writer) = self.writer {
            if self.written > 0 {
                writer
                    .write_all(b" ")
                    .map_err(|e| GenError::io(&self.path, e))?;
            }
            writer
                .write_all(line.as_bytes())
                .map_err(|e| GenError::io(&self.path, e))?;
        }
        self.written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn finish(mut self) -> Result<()> {
        self.close()?;
        if self.written == 0 {
            match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                    return Err(GenError::io(&self.path, e));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            let file = writer
                .into_inner()
                .map_err(|e| GenError::io(&self.path, e.into_error()))?;
            file.sync_all().map_err(|e| GenError::io(&self.path, e))?;
        }
        Ok(())
    }
}

impl Drop for LanguageModelWriter {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
