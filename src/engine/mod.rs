//! Engine 模块 - 聚合与统计
//!
//! - AggregationEngine：逐行读取并按 URL 累计耗时样本
//! - 质量检查：未匹配行比例超过阈值时中止
//! - 归约：生成每个 URL 的统计行

pub mod aggregation;
pub mod observer;
pub mod report;
pub mod stats;

pub use aggregation::{AggregationEngine, EngineState};
pub use observer::{GateOutcome, NoopObserver, RunObserver, TracingObserver};
pub use report::{ReportTable, RunCounters, SummaryRow};
