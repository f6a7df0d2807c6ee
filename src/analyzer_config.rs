//! 分析器配置模块
//!
//! 目前只有一个参数：质量闸门的错误阈值。

use crate::error::AnalyzeError;
use crate::parser::constants::DEFAULT_ERROR_THRESHOLD;

/// 分析器配置
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// 允许的未匹配行百分比，超过则整个运行失败（`0..=100`）
    pub error_threshold: f64,
}

impl AnalyzerConfig {
    /// 使用指定阈值创建配置
    pub fn with_error_threshold(mut self, error_threshold: f64) -> Self {
        self.error_threshold = error_threshold;
        self
    }

    /// 校验配置
    ///
    /// 阈值必须是有限数并位于 `0..=100` 之间。
    pub fn validate(&self) -> Result<(), AnalyzeError> {
        let t = self.error_threshold;
        if !t.is_finite() || !(0.0..=100.0).contains(&t) {
            return Err(AnalyzeError::InvalidConfig(format!(
                "error_threshold must be within 0..=100, got {t}"
            )));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            error_threshold: DEFAULT_ERROR_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.error_threshold, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_error_threshold() {
        let config = AnalyzerConfig::default().with_error_threshold(10.0);
        assert_eq!(config.error_threshold, 10.0);
    }

    #[test]
    fn test_validate_bounds() {
        for ok in [0.0, 100.0, 33.3] {
            assert!(AnalyzerConfig::default().with_error_threshold(ok).validate().is_ok());
        }
        for bad in [-0.1, 100.5, f64::NAN, f64::INFINITY] {
            let err = AnalyzerConfig::default()
                .with_error_threshold(bad)
                .validate()
                .unwrap_err();
            assert!(matches!(err, AnalyzeError::InvalidConfig(_)));
        }
    }
}
