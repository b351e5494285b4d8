//! FDF rendering benchmarks
//!
//! Measures document assembly and text encoding for growing field counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fdf_oxide::fdf::{encode_text, FdfDocument, FieldValue, FormData};

fn build_document(fields: usize) -> FdfDocument {
    let data: FormData = (0..fields)
        .map(|i| {
            let value = match i % 3 {
                0 => FieldValue::Text(format!("Value (row {i}) with ünïcödé")),
                1 => FieldValue::Boolean(i % 2 == 0),
                _ => FieldValue::name(&format!("Option {i}")),
            };
            (format!("field_{i}"), value)
        })
        .collect();
    let hidden: Vec<String> = (0..fields).step_by(5).map(|i| format!("field_{i}")).collect();
    let read_only: Vec<String> = (0..fields).step_by(7).map(|i| format!("field_{i}")).collect();

    FdfDocument::new(data)
        .with_hidden(hidden)
        .with_read_only(read_only)
        .with_url("https://example.com/forms/application.pdf")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for fields in [10usize, 100, 1000] {
        let doc = build_document(fields);
        group.bench_with_input(BenchmarkId::from_parameter(fields), &doc, |b, doc| {
            b.iter(|| doc.render().unwrap())
        });
    }
    group.finish();
}

fn bench_encode_text(c: &mut Criterion) {
    let text = "Name (as printed on card) – Überweisungsträger ".repeat(32);
    c.bench_function("encode_text", |b| b.iter(|| encode_text(black_box(&text))));
}

criterion_group!(benches, bench_render, bench_encode_text);
criterion_main!(benches);
