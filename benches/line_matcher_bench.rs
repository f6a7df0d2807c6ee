use criterion::{Criterion, black_box, criterion_group, criterion_main};
use access_log_analyzer::LineMatcher;

const MATCHING: &str = r#"1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] "GET /api/v2/banner/25019354 HTTP/1.1" 200 927 "-" "Lynx/2.8.8dev.9 libwww-FM/2.14 SSL-MM/1.4.1 GNUTLS/2.10.5" "-" "1498697422-2190034393-4708-9752759" "dc7161be3" 0.390"#;
const NO_QUOTES: &str = "2017-06-29 03:50:22 upstream timed out while reading response header";
const ALMOST: &str = r#"1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] "GET /api/v2/banner/25019354 HTTP/1.1" 200 927 "-" "Lynx/2.8.8dev.9" "-" "1498697422" "dc7161be3""#;

fn bench_match_line(c: &mut Criterion) {
    let matcher = LineMatcher::new();
    let mut group = c.benchmark_group("match_line");

    group.bench_function("matching", |b| {
        b.iter(|| black_box(matcher.match_line(black_box(MATCHING))))
    });
    group.bench_function("no_quotes_fast_path", |b| {
        b.iter(|| black_box(matcher.match_line(black_box(NO_QUOTES))))
    });
    group.bench_function("missing_duration", |b| {
        b.iter(|| black_box(matcher.match_line(black_box(ALMOST))))
    });

    group.finish();
}

criterion_group!(benches, bench_match_line);
criterion_main!(benches);
