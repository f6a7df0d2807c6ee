//! 归约：把每个 URL 的耗时样本转换为统计行

use rayon::prelude::*;

use crate::engine::report::{RunCounters, SummaryRow};

/// 计算中位数
///
/// 奇数个样本取排序后的中间值，偶数个取中间两个值的平均。
/// 样本为空时返回 `None`。
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// 按样本顺序求和
#[inline]
pub fn sum(samples: &[f64]) -> f64 {
    samples.iter().sum()
}

/// 最大值，样本为空时返回 `None`
pub fn max(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::max)
}

/// 计算单个 URL 的统计行
///
/// 调用方保证 `samples` 非空且 `counters.matched > 0`。
pub fn summarize_url(url: &str, samples: &[f64], counters: &RunCounters) -> SummaryRow {
    let count = samples.len() as u64;
    let time_sum = sum(samples);

    // 所有耗时都为 0 时占比没有意义，记为 0 而不是 NaN
    let time_perc = if counters.total_request_time == 0.0 {
        0.0
    } else {
        time_sum * 100.0 / counters.total_request_time
    };

    SummaryRow {
        url: url.to_string(),
        count,
        count_perc: count as f64 * 100.0 / counters.matched as f64,
        time_sum,
        time_perc,
        time_avg: time_sum / count as f64,
        time_max: max(samples).unwrap_or_default(),
        time_med: median(samples).unwrap_or_default(),
    }
}

/// 并行计算所有 URL 的统计行
///
/// 每行只依赖自身样本和冻结后的计数器，`collect` 保持输入顺序，
/// 结果与顺序计算逐位一致。
pub fn summarize_all(accumulators: &[(String, Vec<f64>)], counters: &RunCounters) -> Vec<SummaryRow> {
    accumulators
        .par_iter()
        .map(|(url, samples)| summarize_url(url, samples, counters))
        .collect()
}
