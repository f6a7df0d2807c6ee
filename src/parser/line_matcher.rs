//! LineMatcher - 按固定文法匹配单行 access log
//!
//! 匹配是全有或全无的：要么得到全部字段，要么得到 `None`，不存在部分字段。

use regex::{Captures, Regex};

use crate::access_log::AccessLogEntry;
use crate::error::AnalyzeError;
use crate::parser::constants::*;
use crate::tools::{may_be_access_line, parse_request_time};

/// 单行文法匹配器
///
/// 除了预编译的文法外不持有任何状态，可以在多次运行之间复用。
///
/// # 示例
///
/// ```
/// use access_log_analyzer::LineMatcher;
///
/// let matcher = LineMatcher::new();
/// let line = r#"1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] "GET /api/v2/banner/25019354 HTTP/1.1" 200 927 "-" "Lynx/2.8.8dev.9" "-" "1498697422-2190034393-4708-9752759" "dc7161be3" 0.390"#;
///
/// let entry = matcher.match_line(line).unwrap().unwrap();
/// assert_eq!(entry.url, "/api/v2/banner/25019354");
/// assert_eq!(entry.request_time, 0.390);
///
/// assert!(matcher.match_line("garbage").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LineMatcher {
    grammar: &'static Regex,
}

impl LineMatcher {
    /// 创建匹配器（文法在首次使用时编译，之后共享）
    pub fn new() -> Self {
        Self {
            grammar: &*LINE_REGEX,
        }
    }

    /// 匹配一行日志
    ///
    /// # 返回
    ///
    /// * `Ok(Some(entry))` - 匹配成功
    /// * `Ok(None)` - 行不符合文法
    /// * `Err(AnalyzeError::MalformedNumericField)` - 文法匹配成功但耗时字段不是合法数字
    pub fn match_line<'a>(&self, line: &'a str) -> Result<Option<AccessLogEntry<'a>>, AnalyzeError> {
        if !may_be_access_line(line) {
            return Ok(None);
        }

        let Some(caps) = self.grammar.captures(line) else {
            return Ok(None);
        };

        let raw_time = field(&caps, FIELD_REQUEST_TIME);
        let request_time =
            parse_request_time(raw_time).ok_or_else(|| AnalyzeError::MalformedNumericField {
                field: FIELD_REQUEST_TIME.to_string(),
                value: raw_time.to_string(),
                line: line.to_string(),
            })?;

        Ok(Some(AccessLogEntry {
            ipaddress: field(&caps, FIELD_IPADDRESS),
            remoteuser: field(&caps, FIELD_REMOTEUSER),
            dateandtime: field(&caps, FIELD_DATEANDTIME),
            method: field(&caps, FIELD_METHOD),
            url: field(&caps, FIELD_URL),
            statuscode: field(&caps, FIELD_STATUSCODE),
            bytessent: field(&caps, FIELD_BYTESSENT),
            refferer: field(&caps, FIELD_REFFERER),
            http_user_agent: field(&caps, FIELD_HTTP_USER_AGENT),
            x_forwaded_for: field(&caps, FIELD_X_FORWADED_FOR),
            http_xb_user: field(&caps, FIELD_HTTP_XB_USER),
            request_time,
        }))
    }

    /// 判断一行是否符合文法（不校验耗时字段）
    pub fn is_match(&self, line: &str) -> bool {
        may_be_access_line(line) && self.grammar.is_match(line)
    }
}

impl Default for LineMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// 文法中所有命名组都不在可选分支里，匹配成功时必然存在
#[inline]
fn field<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}
