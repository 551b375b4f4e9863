//! Performance benchmarks for fuel-digest.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Phrase translation of a short heading and a longer mixed paragraph
//! - Full extraction of a synthetic market page, both directions
//! - Extraction of generated pages with a growing number of table rows

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fuel_digest::{extract, extract_with_options, Direction, Options, Translator};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="uk">
<head>
    <meta charset="UTF-8">
    <title>Ціни на пальне</title>
    <script>googletag.cmd.push(function() { googletag.display('ad'); });</script>
    <script>window.BidmaticLoader = {};</script>
</head>
<body>
    <nav><a href="/">Головна</a></nav>
    <h1>Середні ціни на пальне по Україні</h1>
    <h2>Ціна на Бензин A-95 преміум</h2>
    <table>
        <tr><th>Вид палива</th><th>Ціна, грн.</th><th>Зміна</th></tr>
        <tr><td>Бензин A-95 преміум</td><td>58,40</td><td>-0.35</td></tr>
        <tr><td>Бензин A-95</td><td>55,10</td><td>0.20</td></tr>
        <tr><td>Бензин A-92</td><td>52,80</td><td>-1.5%</td></tr>
        <tr><td>Дизельне паливо</td><td>53,95</td><td>0.00</td></tr>
        <tr><td>Газ автомобільний</td><td>29,70</td><td>-0.10</td></tr>
    </table>
    <div class="index-chart"><svg width="600" height="300"></svg></div>
    <h3>Регіони</h3>
    <footer><p>minfin</p></footer>
</body>
</html>
"#;

fn generated_page(rows: usize) -> String {
    let mut html = String::from("<html><body><h1>Ціна по Україні</h1><table>");
    html.push_str("<tr><th>Область</th><th>Марка</th><th>Ціна, грн.</th></tr>");
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td>Область {i}</td><td>Бензин A-95</td><td>-{}.{:02}</td></tr>",
            i % 3,
            i % 100
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_translate(c: &mut Criterion) {
    let translator = Translator::builtin();
    let paragraph = "Середня ціна на Бензин A-95 преміум та Дизельне паливо по Україні, грн. \
                     Зміна за тиждень: Газ автомобільний дешевшає.";

    c.bench_function("translate_heading", |b| {
        b.iter(|| translator.translate(black_box("Ціна на газ"), Direction::ToTarget));
    });
    c.bench_function("translate_paragraph", |b| {
        b.iter(|| translator.translate(black_box(paragraph), Direction::ToTarget));
    });
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_to_source(c: &mut Criterion) {
    let english = extract(SAMPLE_HTML).html;
    let options = Options {
        direction: Direction::ToSource,
        mark_negative_changes: false,
        ..Options::default()
    };

    c.bench_function("extract_to_source", |b| {
        b.iter(|| extract_with_options(black_box(&english), black_box(&options)));
    });
}

/// Extraction cost as tables grow
fn bench_table_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_rows");

    for rows in [10, 100, 1000] {
        let html = generated_page(rows);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", rows), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_translate,
    bench_extract_default,
    bench_extract_to_source,
    bench_table_rows
);
criterion_main!(benches);
