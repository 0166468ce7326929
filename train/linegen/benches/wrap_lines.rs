use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use linegen::{Partition, SymbolTable, TextMeasure, labels::label_line, wrap_words};
use std::hint::black_box;

struct Mono;

impl TextMeasure for Mono {
    fn text_size(&self, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * 7, 18)
    }
}

fn corpus() -> Vec<String> {
    (0..20_000).map(|i| format!("کلمه{}", i % 977)).collect()
}

fn bench_wrap(c: &mut Criterion) {
    let words = corpus();

    c.bench_function("wrap_words", |b| {
        b.iter(|| black_box(wrap_words(black_box(&words), &Mono, 580)))
    });

    let lines = wrap_words(&words, &Mono, 580).lines;
    c.bench_function("label_lines", |b| {
        b.iter_batched(
            SymbolTable::new,
            |mut symbols| {
                let p = Partition::new(lines.len());
                for line in &lines[p.train.start..p.val.end] {
                    black_box(label_line(line, &mut symbols).unwrap());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_wrap);
criterion_main!(benches);
