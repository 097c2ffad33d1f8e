// benches/scoreboard.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use scoreboard_scrape::{core::html::parse_document, csv, specs::scoreboard};

/// Ten-player page shaped like the saved scoreboard.
fn sample_page() -> String {
    let mut body = String::new();
    for p in 0..10 {
        body.push_str(r#"<div class="st-content__item"><div class="trn-ign">"#);
        body.push_str(&format!(
            r#"<span class="trn-ign__username">Player{p}</span><span class="trn-ign__discriminator">#{p:04}</span></div>"#
        ));
        body.push_str(r#"<div class="rank"><img alt=""><span>Diamond 2</span></div>"#);
        for v in 0..14 {
            body.push_str(&format!(r#"<div class="st-content__category"><div class="value">{}</div></div>"#, p * 14 + v));
        }
        body.push_str("</div>");
    }
    format!("<!DOCTYPE html><html><body><div class=\"st-content\">{body}</div></body></html>")
}

fn bench_scoreboard(c: &mut Criterion) {
    let page = sample_page();
    let doc = parse_document(&page);

    c.bench_function("scoreboard_parse_and_extract", |b| {
        b.iter(|| {
            let recs = scoreboard::extract_str(black_box(&page));
            black_box(recs.len())
        })
    });

    c.bench_function("scoreboard_extract_parsed", |b| {
        b.iter(|| {
            let recs = scoreboard::extract(black_box(&doc));
            black_box(recs.len())
        })
    });

    let headers = scoreboard::headers();
    let rows: Vec<Vec<String>> = scoreboard::extract(&doc).into_iter().map(|r| r.into_row()).collect();
    c.bench_function("scoreboard_to_csv", |b| {
        b.iter(|| {
            let out = csv::to_export_string(black_box(&headers), black_box(&rows), b',').unwrap();
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_scoreboard);
criterion_main!(benches);
