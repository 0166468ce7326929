use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("'{}' is not valid {encoding}", path.display())]
    Decode { path: PathBuf, encoding: String },

    #[error("'{}' is not a usable TrueType/OpenType font", path.display())]
    InvalidFont { path: PathBuf },

    #[error("failed to write image '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("symbol table exhausted after {0} symbols")]
    SymbolSpaceExhausted(usize),
}

pub type Result<T> = std::result::Result<T, GenError>;

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
