//! Synthetic OCR line dataset generator for right-to-left corpora.
//!
//! ```text
//! data_set/{train,dev,val}/<font>/<size>/{i.dat, i.dat2, i.png}
//! data_set/lm/<font>/<size>/language_model.dat
//! lexical.dat
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod fonts;
pub mod generator;
pub mod io;
pub mod labels;
pub mod layout;
pub mod render;
pub mod split;
pub mod symbols;

pub use config::GeneratorConfig;
pub use error::{GenError, Result};
pub use fonts::{FontFace, TextFace, TextMeasure};
pub use generator::{DatasetGenerator, FaceReport};
pub use layout::{WrappedLines, wrap_words};
pub use split::{Partition, Split};
pub use symbols::SymbolTable;
