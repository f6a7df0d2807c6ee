//! 分析一个 access log 文件（支持 `.gz`），运行过程通过 tracing 输出
//!
//! ```text
//! RUST_LOG=info cargo run --example analyze_file -- access.log.gz [error_threshold]
//! ```

use std::{env, process::ExitCode};

use access_log_analyzer::{
    AggregationEngine, AnalyzeError, AnalyzerConfig, Compression, TracingObserver, open_log,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: analyze_file <access.log[.gz]> [error_threshold]");
        return ExitCode::from(2);
    };

    match analyze(&path, args.next()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn analyze(path: &str, threshold: Option<String>) -> Result<(), AnalyzeError> {
    let mut config = AnalyzerConfig::default();
    if let Some(raw) = threshold {
        let value = raw
            .parse::<f64>()
            .map_err(|_| AnalyzeError::InvalidConfig(format!("error_threshold 不是数字: {raw}")))?;
        config = config.with_error_threshold(value);
    }

    let reader = open_log(path, Compression::Auto)?;
    let mut engine = AggregationEngine::with_observer(config, TracingObserver)?;
    engine.ingest_reader(reader)?;
    engine.check_quality()?;
    let table = engine.summarize()?;

    println!(
        "{:<48} {:>8} {:>8} {:>10} {:>8} {:>8} {:>8} {:>8}",
        "url", "count", "count%", "time_sum", "time%", "avg", "max", "med"
    );
    for row in &table {
        println!(
            "{:<48} {:>8} {:>8.3} {:>10.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
            row.url,
            row.count,
            row.count_perc,
            row.time_sum,
            row.time_perc,
            row.time_avg,
            row.time_max,
            row.time_med
        );
    }
    Ok(())
}
