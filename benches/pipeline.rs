//! Benchmarks for the iconset pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use iconset::validation::DEFAULT_PATTERN;
use iconset::{
    colorize, expand, AssetPipeline, Colour, MatchMode, Palette, Rasterizer, ReferenceExtractor,
    SizeSpec, StateColours, SvgRasterizer,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

// -- Templating benchmarks --

fn bench_templating(c: &mut Criterion) {
    let mut group = c.benchmark_group("templating");

    let source = load_fixture("svg/checkbox_checked.svg");
    let colours = StateColours::resolve(&Palette::dark()).unwrap();
    let colour = Colour::rgb(0x14, 0x8c, 0xd2);

    group.bench_function("colorize", |b| {
        b.iter(|| colorize(black_box(&source), black_box(colour)))
    });

    group.bench_function("expand", |b| {
        b.iter(|| expand(black_box("checkbox_checked.svg"), &colours).unwrap())
    });

    group.finish();
}

// -- Reference benchmarks --

fn bench_references(c: &mut Criterion) {
    let mut group = c.benchmark_group("references");

    let stylesheet = load_fixture("_styles.scss").repeat(200);
    let first = ReferenceExtractor::new(DEFAULT_PATTERN, MatchMode::FirstPerLine).unwrap();
    let all = ReferenceExtractor::new(DEFAULT_PATTERN, MatchMode::All).unwrap();

    group.bench_function("extract_first_per_line", |b| {
        b.iter(|| first.extract(black_box(&stylesheet)))
    });

    group.bench_function("extract_all", |b| {
        b.iter(|| all.extract(black_box(&stylesheet)))
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let source = load_fixture("svg/arrow_down.svg");
    let rasterizer = SvgRasterizer::new();

    group.bench_function("rasterize_32", |b| {
        b.iter(|| rasterizer.rasterize(black_box(&source), 32, 32).unwrap())
    });

    group.bench_function("rasterize_64", |b| {
        b.iter(|| rasterizer.rasterize(black_box(&source), 64, 64).unwrap())
    });

    let palette = Palette::dark();
    let dir = tempfile::tempdir().unwrap();
    let pipeline = AssetPipeline::new(fixtures_dir().join("svg"), dir.path().join("rc"), &palette)
        .with_blacklist(["base_palette"])
        .with_sizes(vec![SizeSpec::new(32, ".png")]);

    group.sample_size(20);
    group.bench_function("pipeline_base_size", |b| {
        b.iter(|| pipeline.run(&rasterizer).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_templating, bench_references, bench_rendering);
criterion_main!(benches);
