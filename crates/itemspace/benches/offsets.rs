use criterion::{black_box, criterion_group, criterion_main, Criterion};
use itemspace::{
    compute_offsets, DecorationContext, GridSpacingConfig, ItemDecoration, ItemOffsets,
    LayoutDirection, SpanGridSpacingDecoration,
};

fn bench_grid_spacing(c: &mut Criterion) {
    let config = GridSpacingConfig::new(4, 30, 10, true).unwrap();

    c.bench_function("grid_spacing_1000_items", |b| {
        b.iter(|| {
            for position in 0..1000 {
                black_box(compute_offsets(
                    &config,
                    black_box(position),
                    None,
                    LayoutDirection::Rtl,
                ));
            }
        })
    });
}

fn bench_span_grid_spacing(c: &mut Criterion) {
    let decoration = SpanGridSpacingDecoration::new(4, ItemOffsets::uniform(8), false).unwrap();
    let headers = |position: usize| -> usize { if position % 25 == 0 { 4 } else { 1 } };
    let context = DecorationContext::new(200).with_span_lookup(&headers);

    // Span lookups walk every earlier position, so this one is quadratic.
    c.bench_function("span_grid_spacing_200_items", |b| {
        b.iter(|| {
            for position in 0..200 {
                black_box(decoration.item_offsets(black_box(position), &context));
            }
        })
    });
}

criterion_group!(benches, bench_grid_spacing, bench_span_grid_spacing);
criterion_main!(benches);
