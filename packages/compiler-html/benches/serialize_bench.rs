use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_compiler_html::{compile_to_html, CompileOptions};
use folio_parser::parse_template;

fn serialize_template(c: &mut Criterion) {
    let source = include_str!("../../../templates/template-prestige.html");
    let document = parse_template(source).expect("template parses");

    c.bench_function("serialize_template", |b| {
        b.iter(|| compile_to_html(black_box(&document), CompileOptions::default()))
    });

    c.bench_function("serialize_template_pretty", |b| {
        b.iter(|| compile_to_html(black_box(&document), CompileOptions::pretty()))
    });
}

criterion_group!(benches, serialize_template);
criterion_main!(benches);
