//! AggregationEngine - 读取日志行、累计样本、质量检查、归约
//!
//! 一次运行的状态转换：
//!
//! ```text
//! Created → Ingesting → Ingested → Gated → Summarized
//!     \__________\__________\________\____→ Failed
//! ```
//!
//! 任何致命错误都会进入 `Failed`，之后不会再产出统计表。

use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use std::time::Instant;

use crate::analyzer_config::AnalyzerConfig;
use crate::engine::observer::{GateOutcome, NoopObserver, RunObserver};
use crate::engine::report::{ReportTable, RunCounters};
use crate::engine::stats::summarize_all;
use crate::error::AnalyzeError;
use crate::parser::{LineMatcher, LineReader};

/// 引擎所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Created,
    Ingesting,
    Ingested,
    Gated,
    Summarized,
    Failed,
}

impl EngineState {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineState::Created => "Created",
            EngineState::Ingesting => "Ingesting",
            EngineState::Ingested => "Ingested",
            EngineState::Gated => "Gated",
            EngineState::Summarized => "Summarized",
            EngineState::Failed => "Failed",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 聚合引擎
///
/// 每个实例对应一次运行，独占所有累加器和计数器。
///
/// # 示例
///
/// ```
/// use access_log_analyzer::AggregationEngine;
///
/// let lines = [
///     r#"1.1.1.1 -  - [29/Jun/2017:03:50:22 +0300] "GET /a HTTP/1.1" 200 1 "-" "ua" "-" "x" "y" 0.1"#,
///     r#"1.1.1.1 -  - [29/Jun/2017:03:50:22 +0300] "GET /b HTTP/1.1" 200 1 "-" "ua" "-" "x" "y" 0.2"#,
///     "not an access log line",
/// ];
///
/// let mut engine = AggregationEngine::new();
/// engine.ingest_lines(lines)?;
/// engine.check_quality()?;
/// let table = engine.summarize()?;
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.counters().unmatched, 1);
/// # Ok::<(), access_log_analyzer::AnalyzeError>(())
/// ```
pub struct AggregationEngine<O: RunObserver = NoopObserver> {
    config: AnalyzerConfig,
    matcher: LineMatcher,
    observer: O,
    state: EngineState,
    counters: RunCounters,
    /// URL -> `accumulators` 中的下标
    index: HashMap<String, usize>,
    /// 按首次出现顺序排列的 (URL, 耗时样本)
    accumulators: Vec<(String, Vec<f64>)>,
    started_at: Option<Instant>,
}

impl AggregationEngine<NoopObserver> {
    /// 使用默认配置创建引擎
    pub fn new() -> Self {
        Self::build(AnalyzerConfig::default(), NoopObserver)
    }

    /// 使用指定配置创建引擎
    ///
    /// 配置非法时返回 `AnalyzeError::InvalidConfig`。
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AnalyzeError> {
        config.validate()?;
        Ok(Self::build(config, NoopObserver))
    }
}

impl Default for AggregationEngine<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: RunObserver> AggregationEngine<O> {
    /// 使用指定配置和观察者创建引擎
    pub fn with_observer(config: AnalyzerConfig, observer: O) -> Result<Self, AnalyzeError> {
        config.validate()?;
        Ok(Self::build(config, observer))
    }

    fn build(config: AnalyzerConfig, observer: O) -> Self {
        Self {
            config,
            matcher: LineMatcher::new(),
            observer,
            state: EngineState::Created,
            counters: RunCounters::default(),
            index: HashMap::new(),
            accumulators: Vec::new(),
            started_at: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// 当前的计数器快照
    pub fn counters(&self) -> &RunCounters {
        &self.counters
    }

    /// 已出现的不同 URL 数量
    pub fn url_count(&self) -> usize {
        self.accumulators.len()
    }

    /// 某个 URL 当前累计的耗时样本（按读取顺序）
    pub fn samples(&self, url: &str) -> Option<&[f64]> {
        self.index
            .get(url)
            .map(|&i| self.accumulators[i].1.as_slice())
    }

    /// 取回观察者
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// 从 `BufRead` 读取直到流结束
    ///
    /// 可以多次调用以依次读取多个源，结束后引擎处于 `Ingested`。
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> Result<(), AnalyzeError> {
        self.begin_ingest("ingest_reader")?;
        for line in LineReader::new(reader) {
            let step = line
                .map_err(AnalyzeError::from)
                .and_then(|line| self.ingest_line(&line));
            self.abort_on_error(step)?;
        }
        self.state = EngineState::Ingested;
        Ok(())
    }

    /// 从任意行序列读取直到耗尽
    pub fn ingest_lines<I, S>(&mut self, lines: I) -> Result<(), AnalyzeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.begin_ingest("ingest_lines")?;
        for line in lines {
            let step = self.ingest_line(line.as_ref());
            self.abort_on_error(step)?;
        }
        self.state = EngineState::Ingested;
        Ok(())
    }

    /// 质量检查，只能在读取完成后调用一次
    pub fn check_quality(&mut self) -> Result<(), AnalyzeError> {
        if self.state != EngineState::Ingested {
            return Err(self.misuse("check_quality"));
        }

        let threshold = self.config.error_threshold;
        let error_percent = self.counters.error_percent();
        let passed = error_percent.is_some_and(|p| p <= threshold);
        self.observer.on_gate(
            &self.counters,
            &GateOutcome {
                error_percent,
                threshold,
                passed,
            },
        );

        let Some(error_percent) = error_percent else {
            self.state = EngineState::Failed;
            return Err(AnalyzeError::EmptyInput);
        };

        if !passed {
            self.state = EngineState::Failed;
            return Err(AnalyzeError::QualityGateExceeded {
                error_percent,
                threshold,
                matched: self.counters.matched,
                unmatched: self.counters.unmatched,
            });
        }

        self.state = EngineState::Gated;
        Ok(())
    }

    /// 生成统计表，只能在质量检查通过后调用一次
    pub fn summarize(&mut self) -> Result<ReportTable, AnalyzeError> {
        if self.state != EngineState::Gated {
            return Err(self.misuse("summarize"));
        }

        let rows = summarize_all(&self.accumulators, &self.counters);
        self.state = EngineState::Summarized;

        let elapsed = self.started_at.map(|t| t.elapsed()).unwrap_or_default();
        self.observer.on_run_end(elapsed, rows.len());

        Ok(ReportTable::new(rows, self.counters))
    }

    /// 完整运行：读取、质量检查、归约
    pub fn run<R: BufRead>(mut self, reader: R) -> Result<ReportTable, AnalyzeError> {
        self.ingest_reader(reader)?;
        self.check_quality()?;
        self.summarize()
    }

    fn begin_ingest(&mut self, operation: &'static str) -> Result<(), AnalyzeError> {
        match self.state {
            EngineState::Created => {
                self.started_at = Some(Instant::now());
                self.observer.on_run_start();
            }
            EngineState::Ingested => {}
            _ => return Err(self.misuse(operation)),
        }
        self.state = EngineState::Ingesting;
        Ok(())
    }

    fn ingest_line(&mut self, line: &str) -> Result<(), AnalyzeError> {
        match self.matcher.match_line(line)? {
            Some(entry) => {
                self.counters.matched += 1;
                self.counters.total_request_time += entry.request_time;
                match self.index.get(entry.url) {
                    Some(&i) => self.accumulators[i].1.push(entry.request_time),
                    None => {
                        self.index
                            .insert(entry.url.to_string(), self.accumulators.len());
                        self.accumulators
                            .push((entry.url.to_string(), vec![entry.request_time]));
                    }
                }
            }
            None => self.counters.unmatched += 1,
        }
        Ok(())
    }

    fn abort_on_error(&mut self, step: Result<(), AnalyzeError>) -> Result<(), AnalyzeError> {
        if step.is_err() {
            self.state = EngineState::Failed;
            self.observer.on_ingest_aborted(&self.counters);
        }
        step
    }

    fn misuse(&self, operation: &'static str) -> AnalyzeError {
        AnalyzeError::Misuse {
            operation,
            state: self.state.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn line(url: &str, request_time: &str) -> String {
        format!(
            r#"10.0.0.1 -  - [29/Jun/2017:03:50:22 +0300] "GET {url} HTTP/1.1" 200 927 "-" "curl/8.0" "-" "1498697422-2190034393-4708-9752759" "dc7161be3" {request_time}"#
        )
    }

    #[test]
    fn test_ingest_updates_counters_and_accumulators() {
        let mut engine = AggregationEngine::new();
        engine
            .ingest_lines([line("/a", "0.1"), "junk".to_string(), line("/a", "0.3"), line("/b", "0.2")])
            .unwrap();

        assert_eq!(engine.state(), EngineState::Ingested);
        assert_eq!(engine.counters().matched, 3);
        assert_eq!(engine.counters().unmatched, 1);
        assert!((engine.counters().total_request_time - 0.6).abs() < 1e-12);
        assert_eq!(engine.samples("/a"), Some(&[0.1, 0.3][..]));
        assert_eq!(engine.samples("/b"), Some(&[0.2][..]));
        assert_eq!(engine.samples("/c"), None);
        assert_eq!(engine.url_count(), 2);
    }

    #[test]
    fn test_url_keys_are_case_sensitive() {
        let mut engine = AggregationEngine::new();
        engine.ingest_lines([line("/A", "1"), line("/a", "1")]).unwrap();
        assert_eq!(engine.url_count(), 2);
    }

    #[test]
    fn test_multiple_ingest_calls_accumulate() {
        let mut engine = AggregationEngine::new();
        engine.ingest_lines([line("/a", "1")]).unwrap();
        engine.ingest_reader(Cursor::new(line("/a", "2"))).unwrap();
        assert_eq!(engine.samples("/a"), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn test_check_quality_before_ingest_is_misuse() {
        let mut engine = AggregationEngine::new();
        let err = engine.check_quality().unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::Misuse {
                operation: "check_quality",
                state: "Created"
            }
        );
    }

    #[test]
    fn test_summarize_before_gate_is_misuse() {
        let mut engine = AggregationEngine::new();
        engine.ingest_lines([line("/a", "1")]).unwrap();
        let err = engine.summarize().unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::Misuse {
                operation: "summarize",
                state: "Ingested"
            }
        );
    }

    #[test]
    fn test_summarize_twice_is_misuse() {
        let mut engine = AggregationEngine::new();
        engine.ingest_lines([line("/a", "1")]).unwrap();
        engine.check_quality().unwrap();
        engine.summarize().unwrap();
        assert_eq!(engine.state(), EngineState::Summarized);
        assert!(matches!(
            engine.summarize(),
            Err(AnalyzeError::Misuse { state: "Summarized", .. })
        ));
    }

    #[test]
    fn test_ingest_after_gate_is_misuse() {
        let mut engine = AggregationEngine::new();
        engine.ingest_lines([line("/a", "1")]).unwrap();
        engine.check_quality().unwrap();
        assert!(matches!(
            engine.ingest_lines([line("/a", "1")]),
            Err(AnalyzeError::Misuse { operation: "ingest_lines", state: "Gated" })
        ));
    }

    #[test]
    fn test_malformed_duration_fails_the_run() {
        let mut engine = AggregationEngine::new();
        let err = engine
            .ingest_lines([line("/a", "0.1"), line("/a", "1.2.3"), line("/b", "0.2")])
            .unwrap_err();

        assert!(matches!(err, AnalyzeError::MalformedNumericField { ref value, .. } if value == "1.2.3"));
        assert_eq!(engine.state(), EngineState::Failed);
        // 出错行之后的行不会被读取
        assert_eq!(engine.counters().matched, 1);
        assert!(matches!(engine.check_quality(), Err(AnalyzeError::Misuse { .. })));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut engine = AggregationEngine::new();
        engine.ingest_lines(Vec::<String>::new()).unwrap();
        assert_eq!(engine.check_quality(), Err(AnalyzeError::EmptyInput));
        assert_eq!(engine.state(), EngineState::Failed);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnalyzerConfig::default().with_error_threshold(150.0);
        assert!(matches!(
            AggregationEngine::with_config(config),
            Err(AnalyzeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_threshold_requires_every_line_to_match() {
        let config = AnalyzerConfig::default().with_error_threshold(0.0);
        let mut engine = AggregationEngine::with_config(config).unwrap();
        engine.ingest_lines([line("/a", "1"), "junk".to_string()]).unwrap();
        assert!(matches!(
            engine.check_quality(),
            Err(AnalyzeError::QualityGateExceeded { error_percent, .. }) if error_percent == 50.0
        ));
    }
}
