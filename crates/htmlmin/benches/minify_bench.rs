use criterion::{Criterion, black_box, criterion_group, criterion_main};
use html::perf_fixtures::{make_blocks, make_mixed_document};
use htmlmin::{Minifier, Options, minify};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;

fn bench_minify_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    let options = Options::default();
    c.bench_function("bench_minify_small", |b| {
        b.iter(|| black_box(minify(black_box(input.as_bytes()), &options)));
    });
}

fn bench_minify_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    let options = Options::new().unquote_attrs(true);
    c.bench_function("bench_minify_large", |b| {
        b.iter(|| black_box(minify(black_box(input.as_bytes()), &options)));
    });
}

fn bench_minify_mixed_delegating(c: &mut Criterion) {
    let input = make_mixed_document(LARGE_BLOCKS / 4, 16);
    let minifier = Minifier::new(Options::all());
    c.bench_function("bench_minify_mixed_delegating", |b| {
        b.iter(|| black_box(minifier.minify(black_box(input.as_bytes()))));
    });
}

fn bench_minify_whitespace_heavy(c: &mut Criterion) {
    let mut input = String::with_capacity(1 << 20);
    while input.len() < 1 << 20 {
        input.push_str("<p>   lorem \n\n\t  ipsum   </p>\n    ");
    }
    let options = Options::default();
    c.bench_function("bench_minify_whitespace_heavy", |b| {
        b.iter(|| black_box(minify(black_box(input.as_bytes()), &options)));
    });
}

criterion_group!(
    benches,
    bench_minify_small,
    bench_minify_large,
    bench_minify_mixed_delegating,
    bench_minify_whitespace_heavy
);
criterion_main!(benches);
