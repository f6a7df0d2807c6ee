//! # Access Log Analyzer
//!
//! 一个 nginx access log 分析库：逐行解析日志，按 URL 统计请求耗时。
//!
//! ## 功能特性
//!
//! - **固定文法**: 预编译、大小写不敏感的行文法，匹配全有或全无
//! - **流式累计**: 单次线性读取，按 URL 累计耗时样本
//! - **质量检查**: 未匹配行比例超过阈值时中止，不产出任何统计
//! - **统计归约**: 次数、占比、总和、均值、最大值、中位数
//! - **gzip 支持**: 可直接读取 `.gz` 日志
//!
//! ## 快速开始
//!
//! ### 分析文件
//!
//! ```rust,no_run
//! use access_log_analyzer::{AnalyzerConfig, Compression, analyze_file};
//!
//! let table = analyze_file("nginx-access-ui.log-20170630.gz", Compression::Auto, &AnalyzerConfig::default())?;
//!
//! for row in &table {
//!     println!("{}: count={} time_sum={:.3} time_med={:.3}", row.url, row.count, row.time_sum, row.time_med);
//! }
//! # Ok::<(), access_log_analyzer::AnalyzeError>(())
//! ```
//!
//! ### 分步运行并记录日志
//!
//! ```rust
//! use access_log_analyzer::{AggregationEngine, AnalyzerConfig, TracingObserver};
//! use std::io::Cursor;
//!
//! let log = r#"1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] "GET /api/v2/banner/25019354 HTTP/1.1" 200 927 "-" "Lynx/2.8.8dev.9" "-" "1498697422-2190034393-4708-9752759" "dc7161be3" 0.390"#;
//!
//! let mut engine = AggregationEngine::with_observer(AnalyzerConfig::default(), TracingObserver)?;
//! engine.ingest_reader(Cursor::new(log))?;
//! engine.check_quality()?;
//! let table = engine.summarize()?;
//!
//! assert_eq!(table.rows()[0].url, "/api/v2/banner/25019354");
//! # Ok::<(), access_log_analyzer::AnalyzeError>(())
//! ```
//!
//! ## 日志格式
//!
//! ```text
//! 1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] "GET /api/v2/banner/25019354 HTTP/1.1" 200 927 "-" "Lynx/2.8.8dev.9 libwww-FM/2.14" "-" "1498697422-2190034393-4708-9752759" "dc7161be3" 0.390
//! ```
//!
//! 最后一个字段是请求耗时（秒）。

pub mod access_log;
pub mod analyzer_config;
pub mod engine;
pub mod error;
pub mod parser;
pub mod tools;

pub use access_log::AccessLogEntry;
pub use analyzer_config::AnalyzerConfig;
pub use engine::{
    AggregationEngine,
    EngineState,
    GateOutcome,
    NoopObserver,
    ReportTable,
    RunCounters,
    RunObserver,
    SummaryRow,
    TracingObserver,
};
pub use error::AnalyzeError;
pub use parser::{
    Compression,
    LineMatcher,
    LineReader,
    analyze_file,
    analyze_reader,
    open_log,
};
