//! Criterion benchmarks for the settings text format.
//!
//! Run with:
//! ```bash
//! cargo bench --package emu-settings-core --bench format_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use settings_core::{parse, render, SettingValue, SettingsFile};

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// Builds a file with `sections` sections of `keys` settings each, cycling
/// through every value kind.
fn make_file(sections: usize, keys: usize) -> SettingsFile {
    let mut file = SettingsFile::new();
    for s in 0..sections {
        let name = format!("Section{s:03}");
        for k in 0..keys {
            let value = match k % 4 {
                0 => SettingValue::Int(k as i64),
                1 => SettingValue::Float(k as f32 * 0.5),
                2 => SettingValue::Bool(k % 8 == 2),
                _ => SettingValue::Str(format!("value_{k}")),
            };
            file.put(&name, format!("key_{k:03}"), value);
        }
    }
    file
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &(sections, keys) in &[(6, 5), (20, 50)] {
        let text = render(&make_file(sections, keys));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{sections}x{keys}")),
            &text,
            |b, text| b.iter(|| parse(black_box(text))),
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &(sections, keys) in &[(6, 5), (20, 50)] {
        let file = make_file(sections, keys);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{sections}x{keys}")),
            &file,
            |b, file| b.iter(|| render(black_box(file))),
        );
    }
    group.finish();
}

fn bench_infer(c: &mut Criterion) {
    c.bench_function("infer_each_kind", |b| {
        b.iter(|| {
            for raw in ["42", "0.75", "True", "OpenGL"] {
                black_box(SettingValue::infer(black_box(raw)));
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_render, bench_infer);
criterion_main!(benches);
