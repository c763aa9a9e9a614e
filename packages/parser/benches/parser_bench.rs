use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_parser::parse_template;

fn parse_small_page(c: &mut Criterion) {
    let source = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Portfolio</title><meta name="description" content=""></head>
<body>
    <header><a class="logo-prestige" href="#"><img src="" alt="Logo"><span>Name</span></a></header>
    <main><section id="about"><div class="about-text"><h3>About</h3><p>Text</p></div></section></main>
</body>
</html>"#;

    c.bench_function("parse_small_page", |b| {
        b.iter(|| parse_template(black_box(source)))
    });
}

fn parse_repeated_cards(c: &mut Criterion) {
    let card = r#"<article class="project-card"><div class="project-img"><img src="https://example.com/p.png" alt="P"></div><div class="project-info"><h3>Project</h3><p>Description &amp; results</p></div></article>"#;
    let source = format!(
        "<html><body><div class=\"projects-grid\">{}</div></body></html>",
        card.repeat(200)
    );

    c.bench_function("parse_repeated_cards", |b| {
        b.iter(|| parse_template(black_box(&source)))
    });
}

criterion_group!(benches, parse_small_page, parse_repeated_cards);
criterion_main!(benches);
