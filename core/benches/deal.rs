use criterion::{Criterion, criterion_group, criterion_main};
use memomatch_core::*;
use std::hint::black_box;

fn deal(c: &mut Criterion) {
    let mut group = c.benchmark_group("deal");
    for (rows, cols) in [(4, 4), (6, 6), (8, 15)] {
        let config = GameConfig::new(rows, cols).unwrap();
        group.bench_function(format!("{rows}x{cols}"), |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(RandomBoardGenerator::new(seed).generate(black_box(config)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, deal);
criterion_main!(benches);
