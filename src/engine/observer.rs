//! 运行观察者
//!
//! 引擎在固定时刻通知观察者：运行开始、质量检查结果、运行结束（含耗时）。
//! 引擎本身不直接写日志，默认使用不做任何事情的 [`NoopObserver`]。

use std::time::Duration;

use tracing::{info, warn};

use crate::engine::report::RunCounters;

/// 质量检查的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateOutcome {
    /// 未匹配行百分比，没有读取任何行时为 `None`
    pub error_percent: Option<f64>,
    pub threshold: f64,
    pub passed: bool,
}

/// 运行观察者
///
/// 所有方法都有空的默认实现，只需覆盖关心的事件。
pub trait RunObserver {
    /// 第一次开始读取时调用
    fn on_run_start(&mut self) {}

    /// 读取中止时调用（格式错误的数值字段或 I/O 错误）
    fn on_ingest_aborted(&mut self, _counters: &RunCounters) {}

    /// 质量检查完成后调用，无论通过与否
    fn on_gate(&mut self, _counters: &RunCounters, _outcome: &GateOutcome) {}

    /// 统计表生成后调用
    fn on_run_end(&mut self, _elapsed: Duration, _rows: usize) {}
}

/// 不做任何事情的观察者
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// 通过 `tracing` 输出事件的观察者
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn on_run_start(&mut self) {
        info!("log parsing started");
    }

    fn on_ingest_aborted(&mut self, counters: &RunCounters) {
        warn!(
            matched = counters.matched,
            unmatched = counters.unmatched,
            "log parsing aborted"
        );
    }

    fn on_gate(&mut self, counters: &RunCounters, outcome: &GateOutcome) {
        if outcome.passed {
            info!(
                matched = counters.matched,
                unmatched = counters.unmatched,
                error_percent = outcome.error_percent,
                threshold = outcome.threshold,
                "quality gate passed"
            );
        } else {
            warn!(
                matched = counters.matched,
                unmatched = counters.unmatched,
                error_percent = outcome.error_percent,
                threshold = outcome.threshold,
                "quality gate failed"
            );
        }
    }

    fn on_run_end(&mut self, elapsed: Duration, rows: usize) {
        info!(
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            rows,
            "log file parsed in {:?}",
            elapsed
        );
    }
}

impl<O: RunObserver + ?Sized> RunObserver for &mut O {
    fn on_run_start(&mut self) {
        (**self).on_run_start();
    }

    fn on_ingest_aborted(&mut self, counters: &RunCounters) {
        (**self).on_ingest_aborted(counters);
    }

    fn on_gate(&mut self, counters: &RunCounters, outcome: &GateOutcome) {
        (**self).on_gate(counters, outcome);
    }

    fn on_run_end(&mut self, elapsed: Duration, rows: usize) {
        (**self).on_run_end(elapsed, rows);
    }
}
