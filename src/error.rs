//! 错误类型定义
//!
//! 定义了分析过程中可能出现的所有错误类型。
//!
//! 行级别的语法不匹配不是错误：它只会被计入 `unmatched`，不会出现在这里。

use thiserror::Error;

/// 分析错误类型
///
/// 除了文法不匹配之外，任何一种情况都会中止整个运行。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzeError {
    /// 文法匹配成功，但数值字段无法解析
    #[error("failed to parse {field} as number: '{value}' in line: {line}")]
    MalformedNumericField {
        /// 字段名
        field: String,
        /// 字段原始值
        value: String,
        /// 出错的原始行
        line: String,
    },

    /// 未匹配行的比例超过阈值
    #[error(
        "error percentage ({error_percent}) exceeds the threshold ({threshold}): matched={matched}, unmatched={unmatched}"
    )]
    QualityGateExceeded {
        /// 实际的错误百分比
        error_percent: f64,
        /// 配置的阈值（百分比）
        threshold: f64,
        /// 匹配成功的行数
        matched: u64,
        /// 未匹配的行数
        unmatched: u64,
    },

    /// 输入中没有任何行
    #[error("empty input: no lines were read, error percentage is undefined")]
    EmptyInput,

    /// 调用顺序错误
    #[error("{operation} called in state {state}")]
    Misuse {
        /// 被调用的操作
        operation: &'static str,
        /// 调用时引擎所处的状态
        state: &'static str,
    },

    /// 文件未找到或无法访问
    #[error("file not found or inaccessible: {path}: {reason}")]
    FileNotFound {
        /// 文件路径
        path: String,
        /// 底层错误信息
        reason: String,
    },

    /// 读取过程中的 I/O 错误
    #[error("I/O error: {0}")]
    Io(String),

    /// 配置非法
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for AnalyzeError {
    fn from(err: std::io::Error) -> Self {
        AnalyzeError::Io(err.to_string())
    }
}
