use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use taqti::{
    build_catalog, resolve_dominant, scan_line, scan_line_fuzzy, Line, MeterSelection, ScanOptions,
    Word,
};

fn hazaj_musamman_salim_line() -> Line {
    Line::new(
        "perfect hazaj",
        vec![
            Word::new("w1", vec!["-===".to_string()]),
            Word::new("w2", vec!["-===".to_string()]),
            Word::new("w3", vec!["-===".to_string()]),
            Word::new("w4", vec!["-===".to_string()]),
        ],
    )
}

fn near_miss_line() -> Line {
    Line::new(
        "near hazaj",
        vec![
            Word::new("w1", vec!["-===".to_string(), "x===".to_string()]),
            Word::new("w2", vec!["-===".to_string(), "-=x=".to_string()]),
            Word::new("w3", vec!["-===".to_string()]),
            Word::new("w4", vec!["-==-".to_string()]),
        ],
    )
}

fn criterion_benchmark(c: &mut Criterion) {
    let catalog = build_catalog();

    let exact_options = ScanOptions { meters: MeterSelection::All, ..ScanOptions::default() };
    let hazaj = hazaj_musamman_salim_line();
    c.bench_function("scan_line/exact/perfect_hazaj", |b| {
        b.iter(|| black_box(scan_line(&catalog, black_box(&hazaj), &exact_options).unwrap()))
    });

    let special_options = ScanOptions { meters: MeterSelection::WithSpecial, ..ScanOptions::default() };
    c.bench_function("scan_line/exact/with_special_meters", |b| {
        b.iter(|| black_box(scan_line(&catalog, black_box(&hazaj), &special_options).unwrap()))
    });

    let fuzzy_options = ScanOptions { meters: MeterSelection::All, error_param: 6, free_verse: false };
    let near_miss = near_miss_line();
    c.bench_function("scan_line_fuzzy/branching_alternatives", |b| {
        b.iter(|| black_box(scan_line_fuzzy(&catalog, black_box(&near_miss), &fuzzy_options).unwrap()))
    });

    let poem_results = scan_line(&catalog, &hazaj, &exact_options).unwrap();
    c.bench_function("dominance/resolve_dominant", |b| {
        b.iter(|| black_box(resolve_dominant(&catalog, black_box(&poem_results))))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
