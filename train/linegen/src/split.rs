use std::{fmt, ops::Range};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Dev,
    Val,
    Lm,
}

impl Split {
    pub const ALL: [Split; 4] = [Split::Train, Split::Dev, Split::Val, Split::Lm];

    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Val => "val",
            Split::Lm => "lm",
        }
    }

    /// lm gets one concatenated corpus file instead of per-line artifacts.
    pub fn is_language_model(self) -> bool {
        matches!(self, Split::Lm)
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contiguous index ranges: train = ceil(n/4), dev and val = ceil(n/40) each,
/// lm = the rest. Ranges are clamped to `n`, so small inputs just leave the
/// later splits empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub train: Range<usize>,
    pub dev: Range<usize>,
    pub val: Range<usize>,
    pub lm: Range<usize>,
}

impl Partition {
    pub fn new(n: usize) -> Self {
        let quarter = n.div_ceil(4);
        let fortieth = n.div_ceil(40);

        let train_end = quarter.min(n);
        let dev_end = (train_end + fortieth).min(n);
        let val_end = (dev_end + fortieth).min(n);

        Self {
            train: 0..train_end,
            dev: train_end..dev_end,
            val: dev_end..val_end,
            lm: val_end..n,
        }
    }

    pub fn range(&self, split: Split) -> Range<usize> {
        match split {
            Split::Train => self.train.clone(),
            Split::Dev => self.dev.clone(),
            Split::Val => self.val.clone(),
            Split::Lm => self.lm.clone(),
        }
    }

    pub fn slice<'a, T>(&self, split: Split, items: &'a [T]) -> &'a [T] {
        &items[self.range(split)]
    }
}
