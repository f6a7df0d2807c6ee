//! 统计结果的数据结构

#[cfg(feature = "serde")]
use serde::Serialize;

/// 运行期间的全局计数器
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RunCounters {
    /// 匹配成功的行数
    pub matched: u64,

    /// 未匹配的行数
    pub unmatched: u64,

    /// 所有匹配行的耗时总和（秒），按读取顺序累加
    pub total_request_time: f64,
}

impl RunCounters {
    /// 已读取的总行数
    pub fn total_lines(&self) -> u64 {
        self.matched + self.unmatched
    }

    /// 未匹配行占比（百分比），没有读取任何行时返回 `None`
    pub fn error_percent(&self) -> Option<f64> {
        let total = self.total_lines();
        if total == 0 {
            None
        } else {
            Some(self.unmatched as f64 * 100.0 / total as f64)
        }
    }
}

/// 单个 URL 的统计结果
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SummaryRow {
    pub url: String,

    /// 请求次数
    pub count: u64,

    /// 请求次数占全部匹配行的百分比
    pub count_perc: f64,

    /// 耗时总和
    pub time_sum: f64,

    /// 耗时总和占全部耗时的百分比
    ///
    /// 全部耗时之和恰好为 0 时记为 `0.0`。正负耗时相互抵消也会出现这种情况，
    /// 此时各行的 `time_sum` 可能不为 0，占比只能参考 `time_sum` 自行判断。
    pub time_perc: f64,

    pub time_avg: f64,

    pub time_max: f64,

    /// 耗时中位数
    pub time_med: f64,
}

/// 最终的统计表
///
/// 行顺序与 URL 首次出现的顺序一致，生成后不可修改。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ReportTable {
    rows: Vec<SummaryRow>,
    counters: RunCounters,
}

impl ReportTable {
    pub(crate) fn new(rows: Vec<SummaryRow>, counters: RunCounters) -> Self {
        Self { rows, counters }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// 生成此表的运行计数器
    pub fn counters(&self) -> &RunCounters {
        &self.counters
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SummaryRow> {
        self.rows.iter()
    }

    /// 按 URL 查找统计行
    pub fn get(&self, url: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.url == url)
    }

    pub fn into_rows(self) -> Vec<SummaryRow> {
        self.rows
    }
}

impl IntoIterator for ReportTable {
    type Item = SummaryRow;
    type IntoIter = std::vec::IntoIter<SummaryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReportTable {
    type Item = &'a SummaryRow;
    type IntoIter = std::slice::Iter<'a, SummaryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
