use crate::fonts::TextMeasure;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedLines {
    pub lines: Vec<String>,
    /// Tallest string measured while packing; every canvas of the run uses it.
    pub max_height: u32,
}

/// Greedy packing of visual-order tokens into lines no wider than `max_width`.
///
/// Each next token is prepended to the line being built, so words inside a
/// line come out in reverse token order. A token wider than `max_width` on
/// its own still becomes a (too wide) line of its own.
pub fn wrap_words<S, M>(words: &[S], measure: &M, max_width: u32) -> WrappedLines
where
    S: AsRef<str>,
    M: TextMeasure + ?Sized,
{
    let Some((first, rest)) = words.split_first() else {
        return WrappedLines::default();
    };

    let mut lines = Vec::new();
    let mut cur = first.as_ref().to_owned();
    let mut max_height = measure.text_size(&cur).1;

    for word in rest {
        let word = word.as_ref();
        let candidate = format!("{word} {cur}");

        let (w, h) = measure.text_size(&candidate);
        max_height = max_height.max(h);

        if w > max_width {
            lines.push(std::mem::replace(&mut cur, word.to_owned()));
        } else {
            cur = candidate;
        }
    }

    lines.push(cur);
    WrappedLines { lines, max_height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};
    use rand_xoshiro::SplitMix64;

    /// Every char advances `advance` px; height grows with the char count so
    /// `max_height` has something to track.
    struct MonoMeasure {
        advance: u32,
    }

    impl TextMeasure for MonoMeasure {
        fn text_size(&self, text: &str) -> (u32, u32) {
            let n = text.chars().count() as u32;
            (n * self.advance, 10 + n / 10)
        }
    }

    fn random_words(rng: &mut SmallRng, count: usize) -> Vec<String> {
        (0..count)
            .map(|_| {
                let len = rng.random_range(1..=8);
                (0..len)
                    .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
                    .collect()
            })
            .collect()
    }

    fn unwrap_lines(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split_whitespace().rev().map(str::to_owned).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn empty_input_gives_no_lines() {
        let wrapped = wrap_words::<&str, _>(&[], &MonoMeasure { advance: 10 }, 100);
        assert!(wrapped.lines.is_empty());
        assert_eq!(wrapped.max_height, 0);
    }

    #[test]
    fn single_word_is_one_line() {
        let wrapped = wrap_words(&["only"], &MonoMeasure { advance: 10 }, 100);
        assert_eq!(wrapped.lines, ["only"]);
        assert_eq!(wrapped.max_height, 10);
    }

    #[test]
    fn words_are_prepended() {
        // "cc bb aa" = 80px fits, adding "dd" would be 110px
        let wrapped = wrap_words(&["aa", "bb", "cc", "dd"], &MonoMeasure { advance: 10 }, 100);
        assert_eq!(wrapped.lines, ["cc bb aa", "dd"]);
    }

    #[test]
    fn exact_fit_stays_on_line() {
        let wrapped = wrap_words(&["aaaa", "bbbbb"], &MonoMeasure { advance: 10 }, 100);
        assert_eq!(wrapped.lines, ["bbbbb aaaa"]);
    }

    #[test]
    fn oversized_word_gets_own_line() {
        let wrapped = wrap_words(&["a", "bbbbbbbbbbbbbbb", "c"], &MonoMeasure { advance: 10 }, 100);
        assert_eq!(wrapped.lines, ["a", "bbbbbbbbbbbbbbb", "c"]);
    }

    #[test]
    fn random_corpora_respect_budget_and_keep_every_word() {
        let measure = MonoMeasure { advance: 10 };
        let mut sm = SplitMix64::seed_from_u64(7);
        for _ in 0..50 {
            let mut rng = SmallRng::seed_from_u64(sm.next_u64());
            let count = rng.random_range(0..200);
            let budget = rng.random_range(80..=600);
            let words = random_words(&mut rng, count);

            let wrapped = wrap_words(&words, &measure, budget);

            for line in &wrapped.lines {
                assert!(measure.text_size(line).0 <= budget, "{line:?} over {budget}");
            }
            assert_eq!(unwrap_lines(&wrapped.lines), words);
            let tallest = wrapped
                .lines
                .iter()
                .map(|l| measure.text_size(l).1)
                .max()
                .unwrap_or(0);
            assert!(wrapped.max_height >= tallest);
        }
    }
}
