//! Benchmark suite for theme decoding and rebuilding
//!
//! This benchmark measures indexed sheet decoding, full tile table
//! synthesis and display tile preparation for both surface backends.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use cavegfx_benches::{color_schemes, generate_indexed_sheet, sizes};
use cavegfx_theme::{
	cache::Effect,
	rules::RuleTable,
	settings::RenderSettings,
	synth::build_tile_table,
	theme::GraphicsTheme,
};
use cavegfx_types::{
	color::ColorTable,
	geometry::Interpolation,
	surface::{ImageSurface, PackedSurface, Surface},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark decoding indexed sheets of several cell sizes
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("indexed_decode");
	let colors = ColorTable::default();

	for cell_size in [sizes::RETRO, sizes::BUILTIN, sizes::LARGE] {
		let sheet = generate_indexed_sheet(cell_size).expect("generated sheet is valid");
		group.throughput(Throughput::Elements(u64::from(sheet.width()) * u64::from(sheet.height())));

		group.bench_with_input(BenchmarkId::new("image", cell_size), &sheet, |b, sheet| {
			b.iter(|| black_box(sheet.decode::<ImageSurface>(black_box(&colors))));
		});
		group.bench_with_input(BenchmarkId::new("packed", cell_size), &sheet, |b, sheet| {
			b.iter(|| black_box(sheet.decode::<PackedSurface>(black_box(&colors))));
		});
	}

	group.finish();
}

fn bench_synthesis_for<S: Surface>(c: &mut Criterion, backend: &str) {
	let mut group = c.benchmark_group("tile_synthesis");
	let rules = RuleTable::builtin().expect("built-in rules are valid");

	for cell_size in [sizes::RETRO, sizes::BUILTIN, sizes::LARGE] {
		let sheet: S = generate_indexed_sheet(cell_size)
			.and_then(|source| source.decode(&ColorTable::default()))
			.expect("generated sheet decodes");
		group.bench_with_input(BenchmarkId::new(backend, cell_size), &sheet, |b, sheet| {
			b.iter(|| black_box(build_tile_table(black_box(sheet), &rules)));
		});
	}

	group.finish();
}

/// Benchmark base slicing plus derived sprite synthesis
fn bench_synthesis(c: &mut Criterion) {
	bench_synthesis_for::<ImageSurface>(c, "image");
	bench_synthesis_for::<PackedSurface>(c, "packed");
}

/// Benchmark full re-coloring through the theme
fn bench_select_colors(c: &mut Criterion) {
	let mut group = c.benchmark_group("select_colors");
	let schemes = color_schemes();

	let mut theme: GraphicsTheme<PackedSurface> =
		GraphicsTheme::new(RenderSettings::default()).expect("theme");
	let mut next = 0;
	group.bench_function("rebuild", |b| {
		b.iter(|| {
			next = (next + 1) % schemes.len();
			black_box(theme.select_colors(schemes[next]))
		});
	});

	group.bench_function("memoized", |b| {
		let current = *theme.colors();
		b.iter(|| black_box(theme.select_colors(black_box(current))));
	});

	group.finish();
}

/// Benchmark display tile preparation
fn bench_display_tiles(c: &mut Criterion) {
	let mut group = c.benchmark_group("display_tiles");

	for (name, interpolation, effect) in [
		("nearest", Interpolation::Nearest, None),
		("bilinear", Interpolation::Bilinear, None),
		("nearest_tv", Interpolation::Nearest, Some(Effect::Scanlines)),
	] {
		let mut theme: GraphicsTheme = GraphicsTheme::new(RenderSettings::default()).expect("theme");
		group.bench_function(name, |b| {
			b.iter(|| {
				theme.invalidate_display_tiles();
				black_box(theme.build_display_tiles(32, interpolation, effect))
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_decode, bench_synthesis, bench_select_colors, bench_display_tiles);
criterion_main!(benches);
