//! 分步驱动引擎：逐批喂入日志行，查看中间状态，再做质量检查和汇总

use access_log_analyzer::{AggregationEngine, AnalyzeError, AnalyzerConfig, LineMatcher};

fn line(url: &str, request_time: &str) -> String {
    format!(
        r#"10.0.0.1 -  - [29/Jun/2017:03:50:22 +0300] "GET {url} HTTP/1.1" 200 512 "-" "curl/8.0" "-" "-" "-" {request_time}"#
    )
}

fn main() -> Result<(), AnalyzeError> {
    let matcher = LineMatcher::new();
    let sample = line("/api/v2/banner/1", "0.390");
    if let Some(entry) = matcher.match_line(&sample)? {
        println!("{} {} -> {}s", entry.method, entry.url, entry.request_time);
    }

    let mut engine = AggregationEngine::with_config(AnalyzerConfig::default().with_error_threshold(25.0))?;
    println!("state: {}", engine.state());

    // 两批输入汇入同一次运行
    engine.ingest_lines([
        line("/api/v2/banner/1", "0.390"),
        line("/api/v2/banner/2", "0.120"),
        "not an access log line".to_string(),
    ])?;
    engine.ingest_lines([
        line("/api/v2/banner/1", "0.410"),
        line("/api/v2/banner/1", "0.200"),
        line("/api/v2/banner/2", "0.080"),
    ])?;

    let counters = engine.counters();
    println!(
        "state: {}, matched: {}, unmatched: {}, urls: {}",
        engine.state(),
        counters.matched,
        counters.unmatched,
        engine.url_count()
    );
    if let Some(samples) = engine.samples("/api/v2/banner/1") {
        println!("/api/v2/banner/1 samples: {samples:?}");
    }

    engine.check_quality()?;
    println!("state: {}", engine.state());

    let table = engine.summarize()?;
    for row in table.rows() {
        println!(
            "{} count={} avg={:.3} max={:.3} med={:.3}",
            row.url, row.count, row.time_avg, row.time_max, row.time_med
        );
    }
    println!("state: {}", engine.state());
    Ok(())
}
